//! Character encoding validation.
//!
//! Each allowed encoding contributes an inclusive code-point range; a
//! character passes if it falls inside any of them. The first offending
//! character of a cell is reported and the rest of that cell is skipped.

use crate::ValidationError;
use crate::preview::column_label;
use screen_core::{Encoding, Failure, ParsedTable, is_blank_row};

/// Returns the first character of `text` outside every allowed encoding.
pub fn first_invalid_char(text: &str, allowed: &[Encoding]) -> Option<char> {
    text.chars()
        .find(|&ch| !allowed.iter().any(|encoding| encoding.accepts(ch)))
}

/// Validates cell characters against allowed encodings.
pub struct EncodingValidator;

impl EncodingValidator {
    /// Creates a new encoding validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates every data row of `table`.
    ///
    /// An empty `allowed` list means no restriction.
    pub fn validate(
        &self,
        table: &ParsedTable,
        header_row: &[String],
        allowed: &[Encoding],
    ) -> Vec<Failure> {
        let mut errors = Vec::new();

        if allowed.is_empty() {
            return errors;
        }

        let allowed_names = allowed
            .iter()
            .map(|e| e.name())
            .collect::<Vec<_>>()
            .join(", ");

        for (line, row) in table.data_rows() {
            if is_blank_row(row) {
                continue;
            }

            for (col_idx, cell) in row.iter().enumerate() {
                if cell.trim().is_empty() {
                    continue;
                }

                if let Some(ch) = first_invalid_char(cell, allowed) {
                    errors.push(Failure::new(
                        column_label(header_row, col_idx),
                        line,
                        ValidationError::invalid_character(ch, allowed_names.as_str()).to_string(),
                    ));
                }
            }
        }

        errors
    }
}

impl Default for EncodingValidator {
    fn default() -> Self {
        Self::new()
    }
}
