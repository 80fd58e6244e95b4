/// Quiz-level key, independent of any terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizKey {
    /// Zero-based choice index.
    Choice(usize),
    Next,
}

impl QuizKey {
    /// `1`..`9` pick a choice, space advances.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='9' => c.to_digit(10).map(|d| QuizKey::Choice(d as usize - 1)),
            ' ' | '\n' | '\r' => Some(QuizKey::Next),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('1', Some(QuizKey::Choice(0)))]
    #[case('9', Some(QuizKey::Choice(8)))]
    #[case('0', None)]
    #[case(' ', Some(QuizKey::Next))]
    #[case('x', None)]
    fn maps_chars(#[case] c: char, #[case] expected: Option<QuizKey>) {
        assert_eq!(QuizKey::from_char(c), expected);
    }
}
