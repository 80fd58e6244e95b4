//! Pipe-table parsing.
//!
//! Lenient: nothing here fails. Ragged rows
//! are padded with empty cells to the widest row, header included, so every
//! row of a [`TableModel`] has the same width.

use crate::parsing::blocks::kinds::TableRow;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableModel {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableModel {
    /// Number of cells in every row.
    pub fn width(&self) -> usize {
        self.header.len()
    }
}

/// Parses pipe-delimited text into a header and body.
///
/// Blank and separator lines are dropped first; the first remaining line is
/// the header. Text with no rows at all gives an empty model.
pub fn parse_table(text: &str) -> TableModel {
    let mut lines = text
        .lines()
        .filter(|l| !l.trim().is_empty() && !TableRow::is_separator(l))
        .map(TableRow::cells);

    let Some(mut header) = lines.next() else {
        return TableModel::default();
    };
    let mut rows: Vec<Vec<String>> = lines.collect();

    let width = rows.iter().map(Vec::len).fold(header.len(), usize::max);
    for row in std::iter::once(&mut header).chain(rows.iter_mut()) {
        row.resize(width, String::new());
    }

    TableModel { header, rows }
}
