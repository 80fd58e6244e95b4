use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s|:\-]+$").expect("table separator pattern is valid"));

/// Pipe-delimited table rows.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::PIPE)
    }

    /// `|---|:--:|` style divider rows: only pipes, hyphens, colons and spaces.
    pub fn is_separator(line: &str) -> bool {
        line.contains('-') && SEPARATOR.is_match(line)
    }

    /// Splits a row into trimmed cells.
    ///
    /// The empty cells produced by a leading or trailing pipe are dropped;
    /// empty cells in the middle of the row are kept.
    pub fn cells(line: &str) -> Vec<String> {
        let mut row = line.trim();
        row = row.strip_prefix(Self::PIPE).unwrap_or(row);
        row = row.strip_suffix(Self::PIPE).unwrap_or(row);
        row.split(Self::PIPE)
            .map(|cell| cell.trim().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("|---|---|", true)]
    #[case("| :--- | ---: |", true)]
    #[case("---", true)]
    #[case("| a | b |", false)]
    #[case("| | |", false)]
    fn separator_rows(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(TableRow::is_separator(line), expected);
    }

    #[test]
    fn cells_drop_edge_pipes() {
        assert_eq!(TableRow::cells("| a | b |"), vec!["a", "b"]);
        assert_eq!(TableRow::cells("a | b"), vec!["a", "b"]);
    }

    #[test]
    fn cells_keep_inner_empty() {
        assert_eq!(TableRow::cells("| a |  | c |"), vec!["a", "", "c"]);
    }
}
