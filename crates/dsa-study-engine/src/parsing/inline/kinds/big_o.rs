/// Bare Big-O expressions such as `O(n log n)`.
pub struct BigO;

impl BigO {
    pub const OPEN: &'static [u8; 2] = b"O(";
    pub const CLOSE: u8 = b')';

    /// Word characters and quotes before the `O` rule out a match, so
    /// identifiers like `fooO(x)` and attribute values are left alone.
    pub fn excluded_after(prev: u8) -> bool {
        prev.is_ascii_alphanumeric() || prev == b'_' || prev == b'"'
    }

    /// Index of the `)` balancing the `(` at `open`, on the same line.
    pub fn matching_paren(bytes: &[u8], open: usize) -> Option<usize> {
        let mut depth = 0usize;
        for (j, &b) in bytes.iter().enumerate().skip(open + 1) {
            match b {
                b'\n' => return None,
                b'(' => depth += 1,
                Self::CLOSE if depth == 0 => return Some(j),
                Self::CLOSE => depth -= 1,
                _ => {}
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_parens() {
        assert_eq!(BigO::matching_paren(b"O(max(a, b))", 1), Some(11));
        assert_eq!(BigO::matching_paren(b"O(n", 1), None);
    }

    #[test]
    fn exclusions() {
        assert!(BigO::excluded_after(b'x'));
        assert!(BigO::excluded_after(b'"'));
        assert!(!BigO::excluded_after(b' '));
        assert!(!BigO::excluded_after(b'>'));
    }
}
