//! # Inline Formatting
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing runs over the text of a single paragraph, list item, table
//! cell or heading. At each position the parser tries, in order: code span,
//! existing HTML, `**strong**`, `*emphasis*`, `O(...)`. The first hit wins
//! and the cursor jumps past it; strong and emphasis recurse into their
//! content.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum
//! - **`kinds`**: delimiter owners (`CodeSpan`, `Strong`, `Emphasis`, `BigO`, `RawHtml`)
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers
//! - **`html`**: `format_inline()` HTML fragments
//! - **`segments`**: style-tagged runs for terminal rendering
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `O(n)` `` is a code span, never Big-O.

pub mod cursor;
pub mod html;
pub mod kinds;
pub mod parser;
pub mod segments;
pub mod types;

pub use html::format_inline;
pub use parser::parse_inline;
pub use segments::{Segment, SegmentStyle, plain_text, styled};
pub use types::InlineNode;
