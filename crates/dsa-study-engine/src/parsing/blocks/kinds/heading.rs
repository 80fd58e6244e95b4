/// Bold-delimited heading marker (`**Heading**`).
pub struct HeadingMarker;

impl HeadingMarker {
    pub const DELIM: &'static str = "**";

    pub fn opens(text: &str) -> bool {
        text.starts_with(Self::DELIM)
    }

    /// The inner text when all of `text` (trimmed) is one `**…**` pair.
    ///
    /// `**a** and **b**` is not a heading: the inner text may not contain
    /// another delimiter.
    pub fn standalone(text: &str) -> Option<&str> {
        let inner = text
            .trim()
            .strip_prefix(Self::DELIM)?
            .strip_suffix(Self::DELIM)?;
        if inner.trim().is_empty() || inner.contains(Self::DELIM) {
            return None;
        }
        Some(inner)
    }
}
