/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';

    /// Index just past the closing tick of a span opening at `open`.
    ///
    /// The span needs at least one byte of content; `None` when unclosed.
    pub fn end(bytes: &[u8], open: usize) -> Option<usize> {
        if bytes.get(open) != Some(&Self::TICK) {
            return None;
        }
        let close = bytes[open + 1..].iter().position(|&b| b == Self::TICK)? + open + 1;
        (close > open + 1).then_some(close + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_closed_span() {
        assert_eq!(CodeSpan::end(b"`ab` c", 0), Some(4));
    }

    #[test]
    fn empty_or_unclosed_span() {
        assert_eq!(CodeSpan::end(b"``", 0), None);
        assert_eq!(CodeSpan::end(b"`open", 0), None);
    }
}
