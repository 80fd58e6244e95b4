//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! - **`normalize`**: turns a parse into a stable, line-oriented `Snap` summary
//!   for `insta` snapshots
//! - **`invariants`**: runtime checks for splitter correctness (spans in
//!   bounds, bodies inside spans, spans partitioning the input)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
