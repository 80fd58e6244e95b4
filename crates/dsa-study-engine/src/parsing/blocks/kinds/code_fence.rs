/// Fenced code delimiter and the helpers that strip it.
///
/// Fences are raw zones: the splitter keeps blank lines inside them and the
/// classifier never looks for other shapes within.
pub struct CodeFence;

impl CodeFence {
    pub const MARKER: &'static str = "```";

    /// True for any line whose first non-whitespace text is the fence marker.
    pub fn is_fence(line: &str) -> bool {
        line.trim_start().starts_with(Self::MARKER)
    }

    /// The language tag after an opening fence, if any.
    pub fn lang(line: &str) -> Option<String> {
        let tag = line.trim_start().strip_prefix(Self::MARKER)?.trim();
        (!tag.is_empty()).then(|| tag.to_string())
    }

    /// Splits a block that opens with a fence into `(lang, code)`.
    ///
    /// The opening line is dropped and so is the last line when it is a
    /// closing fence. An unclosed fence keeps everything after the opener.
    pub fn strip_outer(text: &str) -> (Option<String>, String) {
        let mut lines = text.lines();
        let lang = lines.next().and_then(Self::lang);
        let mut body: Vec<&str> = lines.collect();
        if body.last().is_some_and(|l| Self::is_fence(l)) {
            body.pop();
        }
        (lang, body.join("\n"))
    }

    /// Removes every fence line from `lines`, taking the language from the first.
    ///
    /// Used for heading-prefixed code blocks where the fence starts mid-block.
    pub fn strip_all<'a>(lines: impl IntoIterator<Item = &'a str>) -> (Option<String>, String) {
        let mut lang = None;
        let mut seen_fence = false;
        let mut body = Vec::new();
        for line in lines {
            if Self::is_fence(line) {
                if !seen_fence {
                    lang = Self::lang(line);
                    seen_fence = true;
                }
                continue;
            }
            body.push(line);
        }
        (lang, body.join("\n"))
    }
}
