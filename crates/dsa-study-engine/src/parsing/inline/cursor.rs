/// A byte cursor over inline text with absolute position tracking.
///
/// All inline delimiters are ASCII, so every position the parser stops at is
/// a char boundary even when the text holds multi-byte characters.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The text being parsed.
    pub s: &'a str,
    /// Offset of `s` within the source (added to local indexes for spans).
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Current absolute position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Byte `n` positions ahead of the cursor.
    pub fn peek_nth(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// The byte just before the cursor, `None` at the start of the text.
    pub fn prev(&self) -> Option<u8> {
        self.i
            .checked_sub(1)
            .and_then(|p| self.s.as_bytes().get(p).copied())
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat)
    }

    /// Unparsed remainder as bytes.
    pub fn rest(&self) -> &'a [u8] {
        &self.s.as_bytes()[self.i..]
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes, clamped to the end of the text.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("O(n)", 10);
        assert_eq!(cur.pos(), 10);
        assert_eq!(cur.prev(), None);
        assert_eq!(cur.bump(), Some(b'O'));
        assert_eq!(cur.prev(), Some(b'O'));
        assert_eq!(cur.peek(), Some(b'('));
        assert_eq!(cur.peek_nth(2), Some(b')'));
        assert_eq!(cur.pos(), 11);
    }

    #[test]
    fn starts_with_and_rest() {
        let mut cur = Cursor::new("**bold**", 0);
        assert!(cur.starts_with(b"**"));
        cur.bump_n(2);
        assert_eq!(cur.rest(), b"bold**");
    }

    #[test]
    fn bump_n_clamps_at_end() {
        let mut cur = Cursor::new("hi", 0);
        cur.bump_n(10);
        assert!(cur.eof());
        assert_eq!(cur.pos(), 2);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn empty_input() {
        let cur = Cursor::new("", 0);
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert!(cur.starts_with(b""));
    }
}
