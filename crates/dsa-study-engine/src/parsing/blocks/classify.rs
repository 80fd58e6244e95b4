use crate::parsing::rope::{lines::LineRef, span::Span};

use super::{
    kinds::{Bullet, CodeFence, HeadingMarker, OrderedItem, TableRow},
    types::Block,
};

/// Classification of a single line containing only local facts.
///
/// The splitter needs nothing more than this to find block boundaries.
#[derive(Debug, Clone, Copy)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Where the line's content ends, before its terminator.
    pub content_end: usize,
    /// Whitespace only.
    pub is_blank: bool,
    /// Opens or closes a fenced code region.
    pub is_fence: bool,
}

/// Classifies individual lines for the splitting phase.
pub struct TheoryLineClassifier;

impl TheoryLineClassifier {
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        LineClass {
            line: lr.span,
            content_end: lr.content_end(),
            is_blank: lr.is_blank(),
            is_fence: CodeFence::is_fence(lr.content()),
        }
    }
}

type Matcher = fn(&str) -> Option<Block>;

/// Block shapes in priority order. First match wins, so reordering changes
/// results: a `**Heading**` block holding a table must reach `heading`
/// rather than fall through to paragraph.
const MATCHERS: [Matcher; 5] = [table, code, ordered_list, unordered_list, heading];

/// Maps one raw block to exactly one [`Block`] variant.
///
/// Total and pure: the input is trimmed, tried against each shape in turn,
/// and anything left over becomes a paragraph.
pub fn classify_block(raw: &str) -> Block {
    let text = raw.trim();
    let block = MATCHERS
        .iter()
        .find_map(|matcher| matcher(text))
        .unwrap_or_else(|| Block::Paragraph {
            text: text.to_string(),
        });
    log::trace!("classified block as {}", block.kind_name());
    block
}

fn table(text: &str) -> Option<Block> {
    TableRow::matches(text).then(|| Block::Table {
        text: text.to_string(),
    })
}

fn code(text: &str) -> Option<Block> {
    if !text.starts_with(CodeFence::MARKER) {
        return None;
    }
    let (lang, code) = CodeFence::strip_outer(text);
    Some(Block::Code { lang, code })
}

fn ordered_list(text: &str) -> Option<Block> {
    OrderedItem::matches(text).then(|| Block::OrderedList {
        items: OrderedItem::split(text.lines()),
    })
}

fn unordered_list(text: &str) -> Option<Block> {
    Bullet::matches(text).then(|| Block::UnorderedList {
        items: Bullet::split(text.lines()),
    })
}

/// A `**Heading**` line followed by code, a table, or a list.
///
/// Returns `None` when the rest matches none of those; the caller then
/// falls back to a paragraph and the renderer decides whether it is a
/// standalone heading.
fn heading(text: &str) -> Option<Block> {
    if !HeadingMarker::opens(text) {
        return None;
    }
    let mut lines = text.lines();
    let heading = lines.next()?.to_string();
    let rest: Vec<&str> = lines.collect();

    if rest.iter().any(|l| CodeFence::is_fence(l)) {
        let (lang, code) = CodeFence::strip_all(rest.iter().copied());
        return Some(Block::HeadingCode {
            heading,
            lang,
            code,
        });
    }
    if rest.iter().any(|l| TableRow::matches(l)) {
        return Some(Block::HeadingTable {
            heading,
            table: rest.join("\n"),
        });
    }
    if rest.iter().any(|l| OrderedItem::matches(l)) {
        return Some(Block::HeadingList {
            heading,
            items: OrderedItem::split(rest.iter().copied()),
            ordered: true,
        });
    }
    if rest.iter().any(|l| Bullet::matches(l)) {
        return Some(Block::HeadingList {
            heading,
            items: Bullet::split(rest.iter().copied()),
            ordered: false,
        });
    }
    None
}
