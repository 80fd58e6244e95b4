use crate::parsing::rope::{lines::LineRef, span::Span};

use super::{classify::TheoryLineClassifier, types::RawBlock};

/// Lazily segments theory text into [`RawBlock`]s at blank lines.
///
/// Blank lines inside a fenced code region are content, not separators; the
/// fence flag toggles on every fence line. An unclosed fence simply runs to
/// the end of input.
///
/// A finished block is held back until the next one starts (or input ends)
/// so the trailing separator can be assigned: separators belong to the
/// following block's span, except after the last block, which owns the tail.
pub struct BlockSplitter<I> {
    lines: I,
    classifier: TheoryLineClassifier,
    in_fence: bool,
    /// Body of the block currently accumulating lines.
    open: Option<Span>,
    /// Body of a block ended by a blank line, waiting for ownership of its span.
    closed: Option<Span>,
    /// Start of the next emitted span.
    owned_from: usize,
    /// Total input length; the last block's span ends here.
    len: usize,
}

impl<I> BlockSplitter<I>
where
    I: Iterator<Item = LineRef>,
{
    pub fn new(lines: I, len: usize) -> Self {
        Self {
            lines,
            classifier: TheoryLineClassifier,
            in_fence: false,
            open: None,
            closed: None,
            owned_from: 0,
            len,
        }
    }
}

fn emit(owned_from: &mut usize, body: Span, end: usize) -> RawBlock {
    let span = Span::new(*owned_from, end);
    *owned_from = end;
    log::trace!("split block body {body:?} owning {span:?}");
    RawBlock { span, body }
}

impl<I> Iterator for BlockSplitter<I>
where
    I: Iterator<Item = LineRef>,
{
    type Item = RawBlock;

    fn next(&mut self) -> Option<RawBlock> {
        for lr in self.lines.by_ref() {
            let c = self.classifier.classify(&lr);

            if c.is_blank && !self.in_fence {
                if let Some(body) = self.open.take() {
                    self.closed = Some(body);
                }
                continue;
            }

            if c.is_fence {
                self.in_fence = !self.in_fence;
            }

            match self.open.as_mut() {
                Some(body) => body.end = c.content_end,
                None => {
                    self.open = Some(Span::new(c.line.start, c.content_end));
                    if let Some(done) = self.closed.take() {
                        return Some(emit(&mut self.owned_from, done, done.end));
                    }
                }
            }
        }

        // EOF flush: whichever block is pending is the last one.
        let last = self.closed.take().or_else(|| self.open.take())?;
        Some(emit(&mut self.owned_from, last, self.len))
    }
}
