//! Content pattern validation.
//!
//! Screens every non-empty cell against the SQL pattern catalog and reports
//! at most one failure per cell: the first catalog entry that matches.

use crate::ValidationError;
use crate::patterns::find_sql_pattern;
use crate::preview::{column_label, value_preview};
use screen_core::{Failure, ParsedTable, is_blank_row};

/// Flags cells that look like SQL injection payloads.
pub struct ContentValidator;

impl ContentValidator {
    /// Creates a new content validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates every data row of `table`.
    ///
    /// Returns nothing when `enabled` is false.
    pub fn validate(
        &self,
        table: &ParsedTable,
        header_row: &[String],
        enabled: bool,
    ) -> Vec<Failure> {
        let mut errors = Vec::new();

        if !enabled {
            return errors;
        }

        for (line, row) in table.data_rows() {
            if is_blank_row(row) {
                continue;
            }

            for (col_idx, cell) in row.iter().enumerate() {
                if cell.trim().is_empty() {
                    continue;
                }

                if let Some(pattern) = find_sql_pattern(cell) {
                    let err =
                        ValidationError::sql_pattern(pattern.description, value_preview(cell));
                    errors.push(Failure::new(
                        column_label(header_row, col_idx),
                        line,
                        err.to_string(),
                    ));
                }
            }
        }

        errors
    }
}

impl Default for ContentValidator {
    fn default() -> Self {
        Self::new()
    }
}
