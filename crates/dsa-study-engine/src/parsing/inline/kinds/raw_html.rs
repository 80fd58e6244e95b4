/// Markup the HTML renderer emits, and the passthrough rules that let the
/// formatter run over its own output without wrapping anything twice.
pub struct RawHtml;

impl RawHtml {
    pub const CODE_OPEN: &'static str = "<code>";
    pub const CODE_CLOSE: &'static str = "</code>";
    pub const BIG_O_OPEN: &'static str = "<span class=\"big-o\">";
    pub const SPAN_CLOSE: &'static str = "</span>";
    pub const STRONG_OPEN: &'static str = "<strong>";
    pub const STRONG_CLOSE: &'static str = "</strong>";
    pub const EM_OPEN: &'static str = "<em>";
    pub const EM_CLOSE: &'static str = "</em>";

    const MAX_ENTITY: usize = 32;

    /// Length of a tag starting at `bytes[0]` (`<` + letter or `/` … `>`).
    ///
    /// `<code>` and the Big-O span swallow everything up to their closing tag:
    /// they are raw zones.
    pub fn tag_len(bytes: &[u8]) -> Option<usize> {
        if bytes.first() != Some(&b'<') {
            return None;
        }
        let second = *bytes.get(1)?;
        if !(second.is_ascii_alphabetic() || second == b'/') {
            return None;
        }
        let gt = bytes[1..]
            .iter()
            .position(|&b| matches!(b, b'>' | b'<' | b'\n'))
            .map(|p| p + 1)
            .filter(|&p| bytes[p] == b'>')?;
        let tag = &bytes[..=gt];

        let zone_close = if tag == Self::CODE_OPEN.as_bytes() {
            Some(Self::CODE_CLOSE)
        } else if tag == Self::BIG_O_OPEN.as_bytes() {
            Some(Self::SPAN_CLOSE)
        } else {
            None
        };
        let len = gt + 1;
        match zone_close.and_then(|close| find(&bytes[len..], close.as_bytes())) {
            Some(at) => Some(len + at + zone_close.map_or(0, str::len)),
            None => Some(len),
        }
    }

    /// Length of a character reference such as `&amp;` or `&#60;`.
    pub fn entity_len(bytes: &[u8]) -> Option<usize> {
        if bytes.first() != Some(&b'&') {
            return None;
        }
        let semi = bytes
            .iter()
            .take(Self::MAX_ENTITY)
            .position(|&b| b == b';')?;
        let name = &bytes[1..semi];
        let valid = match name {
            [b'#', b'x' | b'X', hex @ ..] => {
                !hex.is_empty() && hex.iter().all(u8::is_ascii_hexdigit)
            }
            [b'#', dec @ ..] => !dec.is_empty() && dec.iter().all(u8::is_ascii_digit),
            [first, rest @ ..] => {
                first.is_ascii_alphabetic() && rest.iter().all(u8::is_ascii_alphanumeric)
            }
            [] => false,
        };
        valid.then_some(semi + 1)
    }
}

fn find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    hay.windows(needle.len()).position(|w| w == needle)
}
