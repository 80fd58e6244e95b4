use xi_rope::Rope;

use super::span::Span;

/// Extracts the text for a span from the rope as an owned String.
pub fn slice_to_string(rope: &Rope, sp: Span) -> String {
    rope.slice_to_cow(sp.range()).into_owned()
}

/// Extracts text for a span, cut to at most `max` bytes with a "..." suffix.
///
/// The cut backs off to the previous char boundary. Used by parse summaries.
pub fn preview(rope: &Rope, sp: Span, max: usize) -> String {
    let mut s = slice_to_string(rope, sp);
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}
