//! Column schema validation.
//!
//! This module checks data cells against the per-column type and nullability
//! rules declared in the header policy:
//! - Nullability: empty cells are rejected when `allowNull` is false
//! - Number: optional minus, digits with an optional fraction, or `.digits`
//! - Boolean: `t`, `f`, `true`, `false` in any case
//!
//! Quoted literals such as `"42"` are unwrapped once before type checks.

use crate::ValidationError;
use crate::header::normalize_header;
use crate::preview::value_preview;
use regex::Regex;
use screen_core::{ColumnConstraint, ColumnType, Failure, HeaderPolicy, ParsedTable};
use std::collections::HashMap;
use std::sync::LazyLock;

static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("valid number pattern")
});

/// Removes one layer of matching single or double quotes around `value`.
///
/// Values shorter than two characters or with unmatched quotes are returned
/// unchanged.
pub fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Returns true if `value` is a plain decimal number.
pub fn is_number(value: &str) -> bool {
    NUMBER_PATTERN.is_match(value)
}

/// Returns true if `value` is one of `t`, `f`, `true`, `false` (any case).
pub fn is_boolean(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "t" | "f" | "true" | "false")
}

/// A constraint resolved to the canonical header name it applies to.
#[derive(Debug, Clone, Copy)]
struct ResolvedColumn<'a> {
    name: &'a str,
    constraint: &'a ColumnConstraint,
}

/// Validates data cells against declared column constraints.
pub struct ColumnSchemaValidator;

impl ColumnSchemaValidator {
    /// Creates a new column schema validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates every data row of `table`.
    ///
    /// Returns all violations, one per failing cell. An empty list indicates
    /// success.
    pub fn validate(
        &self,
        table: &ParsedTable,
        header_row: &[String],
        policy: &HeaderPolicy,
    ) -> Vec<Failure> {
        let mut errors = Vec::new();

        let canonical = self.canonical_constraints(policy);
        if canonical.is_empty() {
            return errors;
        }

        // Constraint for each observed column, by position
        let columns: Vec<Option<ResolvedColumn<'_>>> = header_row
            .iter()
            .map(|h| {
                canonical
                    .get(&normalize_header(h, policy.case_insensitive))
                    .copied()
            })
            .collect();

        for (line, row) in table.data_rows() {
            for (col_idx, column) in columns.iter().enumerate() {
                let Some(column) = column else {
                    continue;
                };
                let cell = row.get(col_idx).map(String::as_str).unwrap_or("");

                if let Some(err) = self.validate_cell(column.name, column.constraint, cell) {
                    errors.push(Failure::new(column.name, line, err.to_string()));
                }
            }
        }

        errors
    }

    /// Maps normalized header names to their constraint.
    ///
    /// Schema keys that match no expected header are dropped. The canonical
    /// name is the expected header's original spelling.
    fn canonical_constraints<'a>(
        &self,
        policy: &'a HeaderPolicy,
    ) -> HashMap<String, ResolvedColumn<'a>> {
        let mut canonical = HashMap::new();

        for (key, constraint) in &policy.column_schemas {
            let normalized_key = normalize_header(key, policy.case_insensitive);
            let expected = policy
                .expected_headers
                .iter()
                .find(|h| normalize_header(h, policy.case_insensitive) == normalized_key);

            if let Some(expected) = expected {
                canonical
                    .entry(normalized_key)
                    .or_insert(ResolvedColumn {
                        name: expected.as_str(),
                        constraint,
                    });
            }
        }

        canonical
    }

    /// Validates a single cell value.
    fn validate_cell(
        &self,
        column: &str,
        constraint: &ColumnConstraint,
        cell: &str,
    ) -> Option<ValidationError> {
        let trimmed = cell.trim();

        if trimmed.is_empty() {
            return (!constraint.allow_null).then(|| ValidationError::null_not_allowed(column));
        }

        let value = strip_quotes(trimmed);
        match constraint.column_type {
            ColumnType::String => None,
            ColumnType::Number if is_number(value) => None,
            ColumnType::Number => Some(ValidationError::not_a_number(
                column,
                value_preview(trimmed),
            )),
            ColumnType::Boolean if is_boolean(value) => None,
            ColumnType::Boolean => Some(ValidationError::not_a_boolean(
                column,
                value_preview(trimmed),
            )),
        }
    }
}

impl Default for ColumnSchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}
