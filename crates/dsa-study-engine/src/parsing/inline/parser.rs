use crate::parsing::rope::span::Span;

use super::{
    cursor::Cursor,
    kinds::{BigO, CodeSpan, Emphasis, RawHtml, Strong, find_closer},
    types::InlineNode,
};

type InlineParser = fn(&mut Cursor<'_>) -> Option<InlineNode>;

/// Constructs in precedence order. Code spans come first so that nothing
/// inside backticks is ever emphasised or read as Big-O.
const PARSERS: [InlineParser; 5] = [
    try_parse_code_span,
    try_parse_raw_html,
    try_parse_strong,
    try_parse_emphasis,
    try_parse_big_o,
];

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the source where `s` begins (for absolute spans)
/// - `s`: The text to parse
///
/// # Returns
/// Nodes covering the entire input. Text between constructs, and any
/// delimiter that fails to close, is emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        match PARSERS.iter().find_map(|parse| parse(&mut cur)) {
            Some(node) => {
                let sp = node.span();
                flush_text(&mut out, text_start, sp.start);
                text_start = sp.end;
                out.push(node);
            }
            None => {
                cur.bump();
            }
        }
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

fn local_span(cur: &Cursor<'_>, start: usize, end: usize) -> Span {
    Span::new(start, end).offset(cur.base)
}

fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let start = cur.i;
    let end = CodeSpan::end(cur.s.as_bytes(), start)?;
    cur.bump_n(end - start);
    Some(InlineNode::CodeSpan {
        full: local_span(cur, start, end),
        inner: local_span(cur, start + 1, end - 1),
    })
}

fn try_parse_raw_html(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let start = cur.i;
    let len = RawHtml::tag_len(cur.rest()).or_else(|| RawHtml::entity_len(cur.rest()))?;
    cur.bump_n(len);
    Some(InlineNode::RawHtml(local_span(cur, start, start + len)))
}

fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Strong::DELIM) {
        return None;
    }
    let start = cur.i;
    let inner_start = start + Strong::DELIM.len();
    let close = find_closer(cur.s.as_bytes(), inner_start, true)?;
    let end = close + Strong::DELIM.len();
    let children = parse_inline(cur.base + inner_start, &cur.s[inner_start..close]);
    cur.bump_n(end - start);
    Some(InlineNode::Strong {
        full: local_span(cur, start, end),
        children,
    })
}

fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let start = cur.i;
    if !Emphasis::opens(cur.s.as_bytes(), start) {
        return None;
    }
    let inner_start = start + 1;
    let close = find_closer(cur.s.as_bytes(), inner_start, false)?;
    let end = close + 1;
    let children = parse_inline(cur.base + inner_start, &cur.s[inner_start..close]);
    cur.bump_n(end - start);
    Some(InlineNode::Emphasis {
        full: local_span(cur, start, end),
        children,
    })
}

fn try_parse_big_o(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(BigO::OPEN) || cur.prev().is_some_and(BigO::excluded_after) {
        return None;
    }
    let start = cur.i;
    let close = BigO::matching_paren(cur.s.as_bytes(), start + 1)?;
    if close == start + BigO::OPEN.len() {
        return None;
    }
    let end = close + 1;
    cur.bump_n(end - start);
    Some(InlineNode::BigO {
        full: local_span(cur, start, end),
        arg: local_span(cur, start + BigO::OPEN.len(), close),
    })
}
