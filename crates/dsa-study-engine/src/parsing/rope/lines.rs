use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes the line terminator if present).
    pub span: Span,
    /// The line text, terminator included.
    pub text: String,
}

impl LineRef {
    /// The line text with any `\n` or `\r\n` terminator removed.
    pub fn content(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }

    /// Byte offset where the line's content ends (before the terminator).
    pub fn content_end(&self) -> usize {
        self.span.start + self.content().len()
    }

    /// True when the line holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.content().trim().is_empty()
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` so terminators stay attached to their line; the splitter
/// relies on this to keep block spans lossless.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}
