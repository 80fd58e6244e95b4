//! # Block Kinds
//!
//! Each block shape owns its delimiters and the helpers that strip them.
//! The classifier and splitter call these; they never hardcode ```` ``` ````,
//! `|`, `- ` or `**` themselves.

pub mod code_fence;
pub mod heading;
pub mod list;
pub mod table_row;

pub use code_fence::CodeFence;
pub use heading::HeadingMarker;
pub use list::{Bullet, OrderedItem};
pub use table_row::TableRow;
