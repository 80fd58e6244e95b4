//! HTML rendering of inline nodes.
//!
//! Text and code are escaped with `html-escape`. Tags and entities already in
//! the input are emitted verbatim, which keeps [`format_inline`] stable when
//! applied to its own output as long as every `*`, `**` and backtick in the
//! original text was paired. There is no escape syntax for a literal star or
//! backtick.

use crate::parsing::rope::span::Span;

use super::{kinds::RawHtml, parser::parse_inline, types::InlineNode};

/// Formats inline markup in `text` as an HTML fragment.
///
/// ```text
/// `x`      -> <code>x</code>
/// **b**    -> <strong>b</strong>
/// *i*      -> <em>i</em>
/// O(n)     -> <span class="big-o">O(n)</span>
/// ```
pub fn format_inline(text: &str) -> String {
    let nodes = parse_inline(0, text);
    let mut out = String::with_capacity(text.len() + 16);
    write_nodes(&mut out, text, 0, &nodes);
    out
}

/// Appends HTML for `nodes`, whose spans are offset by `base` within `src`.
pub fn write_nodes(out: &mut String, src: &str, base: usize, nodes: &[InlineNode]) {
    let slice = |sp: Span| &src[sp.start - base..sp.end - base];

    for node in nodes {
        match node {
            InlineNode::Text(sp) => out.push_str(&html_escape::encode_text(slice(*sp))),
            InlineNode::RawHtml(sp) => out.push_str(slice(*sp)),
            InlineNode::CodeSpan { inner, .. } => {
                out.push_str(RawHtml::CODE_OPEN);
                out.push_str(&html_escape::encode_text(slice(*inner)));
                out.push_str(RawHtml::CODE_CLOSE);
            }
            InlineNode::Strong { children, .. } => {
                out.push_str(RawHtml::STRONG_OPEN);
                write_nodes(out, src, base, children);
                out.push_str(RawHtml::STRONG_CLOSE);
            }
            InlineNode::Emphasis { children, .. } => {
                out.push_str(RawHtml::EM_OPEN);
                write_nodes(out, src, base, children);
                out.push_str(RawHtml::EM_CLOSE);
            }
            InlineNode::BigO { full, .. } => {
                out.push_str(RawHtml::BIG_O_OPEN);
                out.push_str(&html_escape::encode_text(slice(*full)));
                out.push_str(RawHtml::SPAN_CLOSE);
            }
        }
    }
}
