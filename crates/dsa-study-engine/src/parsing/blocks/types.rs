use xi_rope::Rope;

use crate::parsing::rope::{slice::slice_to_string, span::Span};

/// One blank-line-separated segment of theory text, before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock {
    /// The source range this block owns.
    ///
    /// Adjacent blocks' spans touch, the first starts at 0 and the last ends
    /// at the end of the text, so concatenating them reproduces the source.
    pub span: Span,
    /// The block's own lines, excluding the final line terminator.
    pub body: Span,
}

impl RawBlock {
    /// The text handed to the classifier.
    pub fn text(&self, rope: &Rope) -> String {
        slice_to_string(rope, self.body)
    }
}

/// One semantic unit of theory text.
///
/// The set is closed: every raw block classifies as exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Anything no other shape claimed.
    Paragraph { text: String },
    OrderedList { items: Vec<String> },
    UnorderedList { items: Vec<String> },
    /// Raw pipe-table text; see [`crate::parsing::table::parse_table`].
    Table { text: String },
    Code { lang: Option<String>, code: String },
    HeadingList {
        /// The heading line, delimiters included.
        heading: String,
        items: Vec<String>,
        ordered: bool,
    },
    HeadingTable { heading: String, table: String },
    HeadingCode {
        heading: String,
        lang: Option<String>,
        code: String,
    },
}

impl Block {
    /// Stable variant name, used in logs and parse summaries.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "Paragraph",
            Block::OrderedList { .. } => "OrderedList",
            Block::UnorderedList { .. } => "UnorderedList",
            Block::Table { .. } => "Table",
            Block::Code { .. } => "Code",
            Block::HeadingList { .. } => "HeadingList",
            Block::HeadingTable { .. } => "HeadingTable",
            Block::HeadingCode { .. } => "HeadingCode",
        }
    }
}
