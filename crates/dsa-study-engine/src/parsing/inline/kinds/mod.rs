//! # Inline Kinds
//!
//! Inline constructs own their delimiters; the parser and the HTML renderer
//! both read them from here.
//!
//! - **`CodeSpan`**: `` ` `` raw zone that suppresses other parsing
//! - **`Strong`** / **`Emphasis`**: `**` and `*`, single-line, non-empty
//! - **`BigO`**: bare `O(...)` with balanced parentheses
//! - **`RawHtml`**: emitted tags and entities, passed through untouched

pub mod big_o;
pub mod code_span;
pub mod emphasis;
pub mod raw_html;

pub use big_o::BigO;
pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong, find_closer};
pub use raw_html::RawHtml;
