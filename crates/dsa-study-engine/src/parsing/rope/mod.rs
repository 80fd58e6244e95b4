//! Span helpers over the `xi_rope::Rope` holding a topic's theory text.

pub mod lines;
pub mod slice;
pub mod span;

pub use lines::{LineRef, lines_with_spans};
pub use slice::{preview, slice_to_string};
pub use span::Span;
