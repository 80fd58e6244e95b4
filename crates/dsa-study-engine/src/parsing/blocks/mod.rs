//! # Block Parsing
//!
//! Two-phase block parsing over a topic's theory text.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`splitter`): lines are classified into `LineClass`
//!    facts (blank, fence) and a `BlockSplitter` lazily cuts the text at
//!    blank lines outside fenced code, yielding span-based `RawBlock`s
//!
//! 2. **Classification** (`classify`): `classify_block` maps each raw block
//!    to one closed `Block` variant by trying shapes in a fixed priority order
//!
//! ## Modules
//!
//! - **`types`**: `RawBlock` and the `Block` variants
//! - **`kinds`**: delimiter owners (`CodeFence`, `OrderedItem`, `Bullet`,
//!   `TableRow`, `HeadingMarker`)
//! - **`classify`**: line facts and the block classifier
//! - **`splitter`**: the lazy `BlockSplitter` iterator
//!
//! ## Key Invariants
//!
//! - Raw block spans partition the input (lossless round-trip)
//! - Classification is total; `Paragraph` is the fallback
//! - Fenced code is a raw zone: blank lines inside do not split

pub mod classify;
pub mod kinds;
pub mod splitter;
pub mod types;

pub use classify::{LineClass, TheoryLineClassifier, classify_block};
pub use splitter::BlockSplitter;
pub use types::{Block, RawBlock};
