//! # Theory Parsing
//!
//! Raw topic text → lazy block splitter → block classifier. Inline
//! formatting and table parsing happen later, at render time.

pub mod blocks;
pub mod inline;
pub mod rope;
pub mod snapshot;
pub mod table;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use blocks::{Block, BlockSplitter, RawBlock, classify_block};
use rope::lines_with_spans;

/// A raw block together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBlock {
    pub raw: RawBlock,
    pub block: Block,
}

#[derive(Debug, Default)]
pub struct ParsedTheory {
    pub blocks: Vec<ParsedBlock>,
}

impl ParsedTheory {
    /// Just the classified blocks, in source order.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks.into_iter().map(|pb| pb.block).collect()
    }
}

/// Lazily splits theory text into raw blocks.
pub fn split_blocks(rope: &Rope) -> impl Iterator<Item = RawBlock> + '_ {
    BlockSplitter::new(lines_with_spans(rope), rope.len())
}

pub fn parse_theory(rope: &Rope) -> ParsedTheory {
    let blocks: Vec<ParsedBlock> = split_blocks(rope)
        .map(|raw| ParsedBlock {
            raw,
            block: classify_block(&raw.text(rope)),
        })
        .collect();
    log::debug!("parsed theory into {} blocks", blocks.len());
    ParsedTheory { blocks }
}

/// Convenience for callers holding a plain string.
pub fn parse_theory_str(text: &str) -> Vec<Block> {
    parse_theory(&Rope::from(text)).into_blocks()
}

/// Inline parse of a paragraph block, with spans absolute into the rope.
///
/// Other block kinds hold several independently formatted strings and
/// return no nodes here.
pub fn parse_inline_for_block(rope: &Rope, pb: &ParsedBlock) -> Vec<inline::InlineNode> {
    if !matches!(pb.block, Block::Paragraph { .. }) {
        return vec![];
    }
    let text = pb.raw.text(rope);
    let lead = text.len() - text.trim_start().len();
    inline::parse_inline(pb.raw.body.start + lead, text.trim())
}
