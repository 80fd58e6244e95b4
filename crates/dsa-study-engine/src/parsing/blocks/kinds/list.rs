use std::sync::LazyLock;

use regex::Regex;

static ORDERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)^\d+\.\s").expect("ordered list pattern is valid"));

/// `1. ` style list items.
pub struct OrderedItem;

impl OrderedItem {
    /// True when the line starts with ASCII digits, a period and ASCII whitespace.
    pub fn matches(line: &str) -> bool {
        ORDERED_PREFIX.is_match(line)
    }

    /// The line with its numeric prefix removed (unchanged when there is none).
    pub fn strip(line: &str) -> &str {
        match ORDERED_PREFIX.find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        }
    }

    /// Groups lines into items, starting a new item at every numbered line.
    ///
    /// Continuation lines stay in the item above them, joined with `\n`.
    /// Lines before the first numbered line form an item of their own.
    pub fn split<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut items: Vec<String> = Vec::new();
        for line in lines {
            if Self::matches(line) {
                items.push(Self::strip(line).to_string());
            } else if let Some(last) = items.last_mut() {
                last.push('\n');
                last.push_str(line);
            } else {
                items.push(line.to_string());
            }
        }
        items
    }
}

/// `- ` style list items.
pub struct Bullet;

impl Bullet {
    pub const MARKER: &'static str = "- ";

    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// One item per line, with a leading marker stripped where present.
    pub fn split<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        lines
            .into_iter()
            .map(|line| line.strip_prefix(Self::MARKER).unwrap_or(line).to_string())
            .collect()
    }
}
