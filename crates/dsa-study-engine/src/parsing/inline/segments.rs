//! Flattened, style-tagged inline text for terminal front ends.

use crate::parsing::rope::span::Span;

use super::{parser::parse_inline, types::InlineNode};

/// Styles active on a run of text. Nested constructs combine their flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SegmentStyle {
    pub code: bool,
    pub strong: bool,
    pub emphasis: bool,
    pub big_o: bool,
}

/// A run of text sharing one style, delimiters removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: SegmentStyle,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SegmentStyle::default(),
        }
    }
}

/// Parses `text` and flattens it into segments.
pub fn styled(text: &str) -> Vec<Segment> {
    segments(text, 0, &parse_inline(0, text))
}

/// Flattens parsed nodes into segments, merging neighbours of equal style.
pub fn segments(src: &str, base: usize, nodes: &[InlineNode]) -> Vec<Segment> {
    let mut out = Vec::new();
    flatten(&mut out, src, base, nodes, SegmentStyle::default());
    out
}

/// Concatenated text of all segments.
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

fn flatten(
    out: &mut Vec<Segment>,
    src: &str,
    base: usize,
    nodes: &[InlineNode],
    style: SegmentStyle,
) {
    let slice = |sp: Span| &src[sp.start - base..sp.end - base];

    for node in nodes {
        match node {
            InlineNode::Text(sp) | InlineNode::RawHtml(sp) => push(out, slice(*sp), style),
            InlineNode::CodeSpan { inner, .. } => push(
                out,
                slice(*inner),
                SegmentStyle {
                    code: true,
                    ..style
                },
            ),
            InlineNode::BigO { full, .. } => push(
                out,
                slice(*full),
                SegmentStyle {
                    big_o: true,
                    ..style
                },
            ),
            InlineNode::Strong { children, .. } => flatten(
                out,
                src,
                base,
                children,
                SegmentStyle {
                    strong: true,
                    ..style
                },
            ),
            InlineNode::Emphasis { children, .. } => flatten(
                out,
                src,
                base,
                children,
                SegmentStyle {
                    emphasis: true,
                    ..style
                },
            ),
        }
    }
}

fn push(out: &mut Vec<Segment>, text: &str, style: SegmentStyle) {
    if text.is_empty() {
        return;
    }
    match out.last_mut() {
        Some(last) if last.style == style => last.text.push_str(text),
        _ => out.push(Segment {
            text: text.to_string(),
            style,
        }),
    }
}
