use std::fmt;

use xi_rope::Rope;

use crate::parsing::{
    ParsedTheory,
    blocks::Block,
    inline::InlineNode,
    parse_inline_for_block,
    rope::{slice::preview, span::Span},
};

/// Line-oriented summary of a parse, for `insta` snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSnap {
    /// Variant name plus a short detail (item count, language, ...).
    pub kind: String,
    pub span: (usize, usize),
    pub body: (usize, usize),
    /// Preview of the body text.
    pub text: String,
    /// Top-level inline nodes of paragraphs.
    pub inline: Vec<InlineSnap>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSnap {
    pub kind: String,
    pub span: (usize, usize),
    pub text: String,
}

pub fn normalize(rope: &Rope, parsed: &ParsedTheory) -> Snap {
    let blocks = parsed
        .blocks
        .iter()
        .map(|pb| BlockSnap {
            kind: describe(&pb.block),
            span: (pb.raw.span.start, pb.raw.span.end),
            body: (pb.raw.body.start, pb.raw.body.end),
            text: preview(rope, pb.raw.body, 40),
            inline: parse_inline_for_block(rope, pb)
                .iter()
                .map(|n| inline_snap(rope, n))
                .collect(),
        })
        .collect();
    Snap { blocks }
}

fn describe(block: &Block) -> String {
    match block {
        Block::Paragraph { .. } | Block::Table { .. } | Block::HeadingTable { .. } => {
            block.kind_name().to_string()
        }
        Block::OrderedList { items } | Block::UnorderedList { items } => {
            format!("{}[{}]", block.kind_name(), items.len())
        }
        Block::HeadingList { items, ordered, .. } => {
            let order = if *ordered { "ordered" } else { "unordered" };
            format!("{}[{}, {order}]", block.kind_name(), items.len())
        }
        Block::Code { lang, .. } | Block::HeadingCode { lang, .. } => {
            format!("{}({})", block.kind_name(), lang.as_deref().unwrap_or("-"))
        }
    }
}

fn inline_snap(rope: &Rope, node: &InlineNode) -> InlineSnap {
    let kind = match node {
        InlineNode::Text(_) => "Text",
        InlineNode::CodeSpan { .. } => "CodeSpan",
        InlineNode::Strong { .. } => "Strong",
        InlineNode::Emphasis { .. } => "Emphasis",
        InlineNode::BigO { .. } => "BigO",
        InlineNode::RawHtml(_) => "RawHtml",
    };
    let sp: Span = node.span();
    InlineSnap {
        kind: kind.to_string(),
        span: (sp.start, sp.end),
        text: preview(rope, sp, 30),
    }
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.blocks {
            writeln!(
                f,
                "{} {}..{} body {}..{} {:?}",
                b.kind, b.span.0, b.span.1, b.body.0, b.body.1, b.text
            )?;
            for i in &b.inline {
                writeln!(f, "  {} {}..{} {:?}", i.kind, i.span.0, i.span.1, i.text)?;
            }
        }
        Ok(())
    }
}
