use crate::parsing::rope::span::Span;

/// A parsed inline node with byte spans into the source text.
///
/// Spans are absolute: they include the `base` offset handed to
/// [`parse_inline`](super::parse_inline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// Backtick-delimited code. A raw zone: nothing is parsed inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Content between the backticks.
        inner: Span,
    },
    /// `**strong**`, with its content parsed recursively.
    Strong { full: Span, children: Vec<InlineNode> },
    /// `*emphasis*`, with its content parsed recursively.
    Emphasis { full: Span, children: Vec<InlineNode> },
    /// A bare `O(...)` expression.
    BigO {
        full: Span,
        /// Text between the parentheses.
        arg: Span,
    },
    /// An HTML tag, zone or entity already present in the text.
    RawHtml(Span),
}

impl InlineNode {
    /// The full span of any variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) | InlineNode::RawHtml(sp) => *sp,
            InlineNode::CodeSpan { full, .. }
            | InlineNode::Strong { full, .. }
            | InlineNode::Emphasis { full, .. }
            | InlineNode::BigO { full, .. } => *full,
        }
    }
}
