use super::CodeSpan;

/// `**strong**` delimiter.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [u8; 2] = b"**";
}

/// `*emphasis*` delimiter.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';

    /// A single star with no star on either side can open emphasis.
    pub fn opens(bytes: &[u8], at: usize) -> bool {
        bytes.get(at) == Some(&Self::STAR)
            && bytes.get(at + 1) != Some(&Self::STAR)
            && (at == 0 || bytes[at - 1] != Self::STAR)
    }
}

/// Finds the closing delimiter for a run starting at `from`.
///
/// The search stays on the current line, needs at least one byte of content,
/// and hops over code spans. For emphasis it also hops over `**` runs: a
/// paired `**…**` is skipped whole, an unpaired `**` is literal.
pub fn find_closer(bytes: &[u8], from: usize, strong: bool) -> Option<usize> {
    let mut j = from;
    while j < bytes.len() {
        match bytes[j] {
            b'\n' => return None,
            CodeSpan::TICK => {
                if let Some(end) = CodeSpan::end(bytes, j) {
                    j = end;
                    continue;
                }
            }
            Emphasis::STAR if bytes[j..].starts_with(Strong::DELIM) => {
                if strong {
                    if j > from {
                        return Some(j);
                    }
                } else {
                    j = find_closer(bytes, j + 2, true).map_or(j + 2, |close| close + 2);
                    continue;
                }
            }
            Emphasis::STAR if !strong && j > from => return Some(j),
            _ => {}
        }
        j += 1;
    }
    None
}
