//! Parsed tabular data.
//!
//! This module provides the rectangular-ish text array produced by a file
//! parser. Row 0 is the header row by convention; rows may be ragged.

use serde::{Deserialize, Serialize};

/// A table of decoded text cells, as handed over by a parser.
///
/// Rows may have fewer or more cells than the header row. Missing cells are
/// read back as empty strings by [`ParsedTable::cell`].
///
/// # Example
///
/// ```rust
/// use screen_core::ParsedTable;
///
/// let table = ParsedTable::from_rows(vec![
///     vec!["Name", "Email"],
///     vec!["Alice", "alice@example.com"],
///     vec!["Bob"],
/// ]);
///
/// assert_eq!(table.header().map(|h| h.len()), Some(2));
/// assert_eq!(table.cell(2, 1), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedTable {
    rows: Vec<Vec<String>>,
}

impl ParsedTable {
    /// Creates a table from already-owned rows.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Creates a table with no rows at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a table from anything that iterates rows of text-like cells.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Returns true if the table has no rows (not even a header).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows, header included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns the header row, if any data exists.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Returns the data rows paired with their 1-based line number.
    ///
    /// The header occupies line 1, so the first data row is line 2.
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(idx, row)| (idx + 1, row.as_slice()))
    }

    /// Returns the cell at `row`/`col`, or `""` when it is absent.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl From<Vec<Vec<String>>> for ParsedTable {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows)
    }
}

/// Returns true if every cell of `row` is empty after trimming.
///
/// A row with no cells counts as blank.
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ParsedTable {
        ParsedTable::from_rows(vec![
            vec!["id", "name"],
            vec!["1", "Alice"],
            vec!["2"],
            vec!["3", "Carol", "extra"],
        ])
    }

    #[test]
    fn test_header_and_len() {
        let table = sample();
        assert_eq!(table.len(), 4);
        assert_eq!(table.header(), Some(&["id".to_string(), "name".to_string()][..]));
    }

    #[test]
    fn test_empty_table_has_no_header() {
        let table = ParsedTable::empty();
        assert!(table.is_empty());
        assert!(table.header().is_none());
        assert_eq!(table.data_rows().count(), 0);
    }

    #[test]
    fn test_data_rows_are_numbered_from_two() {
        let table = sample();
        let lines: Vec<usize> = table.data_rows().map(|(line, _)| line).collect();
        assert_eq!(lines, vec![2, 3, 4]);
    }

    #[test]
    fn test_missing_cells_read_as_empty() {
        let table = sample();
        assert_eq!(table.cell(2, 1), "");
        assert_eq!(table.cell(10, 0), "");
        assert_eq!(table.cell(3, 2), "extra");
    }

    #[test]
    fn test_blank_rows() {
        assert!(is_blank_row(&[]));
        assert!(is_blank_row(&["".to_string(), "   ".to_string()]));
        assert!(!is_blank_row(&["".to_string(), "x".to_string()]));
    }

    #[test]
    fn test_serializes_as_nested_arrays() {
        let table = ParsedTable::from_rows(vec![vec!["a"], vec!["b"]]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"[["a"],["b"]]"#);
    }
}
