//! Header row validation.
//!
//! The header check gates everything else: a table whose header row does not
//! satisfy the policy is rejected with a single failure and no cell is looked
//! at.

use crate::ValidationError;
use screen_core::{Failure, HEADERS_COLUMN, HeaderPolicy};
use tracing::debug;

/// Line number of the header row.
const HEADER_LINE: usize = 1;

/// Normalizes a header name for comparison.
///
/// Surrounding whitespace is trimmed; case is folded when `case_insensitive`.
pub fn normalize_header(name: &str, case_insensitive: bool) -> String {
    let trimmed = name.trim();
    if case_insensitive {
        trimmed.to_lowercase()
    } else {
        trimmed.to_string()
    }
}

/// Validates the header row of a table.
pub struct HeaderValidator;

impl HeaderValidator {
    /// Creates a new header validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates `header_row` against the policy.
    ///
    /// Returns `None` when the header is acceptable, otherwise the single
    /// failure explaining why it is not.
    pub fn validate(&self, header_row: &[String], policy: &HeaderPolicy) -> Option<Failure> {
        let case_insensitive = policy.case_insensitive;
        let observed: Vec<String> = header_row
            .iter()
            .map(|h| normalize_header(h, case_insensitive))
            .collect();
        let expected: Vec<String> = policy
            .expected_headers
            .iter()
            .map(|h| normalize_header(h, case_insensitive))
            .collect();

        // Presence is checked regardless of ordering rules
        let missing: Vec<&str> = policy
            .expected_headers
            .iter()
            .zip(&expected)
            .filter(|(_, normalized)| !observed.contains(normalized))
            .map(|(original, _)| original.as_str())
            .collect();

        if !missing.is_empty() {
            debug!("Header row is missing {} expected header(s)", missing.len());
            return Some(Failure::new(
                HEADERS_COLUMN,
                HEADER_LINE,
                ValidationError::missing_headers(missing).to_string(),
            ));
        }

        if !policy.strict_order {
            return None;
        }

        if observed.len() != expected.len() {
            return Some(Failure::new(
                HEADERS_COLUMN,
                HEADER_LINE,
                ValidationError::HeaderCount {
                    expected: expected.len(),
                    found: observed.len(),
                }
                .to_string(),
            ));
        }

        let (idx, _) = expected
            .iter()
            .zip(&observed)
            .enumerate()
            .find(|(_, (exp, obs))| exp != obs)?;

        let name = &policy.expected_headers[idx];
        let column = if name.trim().is_empty() {
            format!("column {}", idx + 1)
        } else {
            name.clone()
        };

        Some(Failure::new(
            column,
            HEADER_LINE,
            ValidationError::header_mismatch(idx + 1, name.trim(), header_row[idx].trim())
                .to_string(),
        ))
    }
}

impl Default for HeaderValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn policy(expected: &[&str]) -> HeaderPolicy {
        HeaderPolicy::new(expected.iter().copied())
    }

    #[test]
    fn test_exact_match_passes() {
        let validator = HeaderValidator::new();
        let result = validator.validate(&row(&["Name", "Email"]), &policy(&["Name", "Email"]));
        assert_eq!(result, None);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let validator = HeaderValidator::new();
        let result = validator.validate(
            &row(&["  Name ", "Email\t"]),
            &policy(&["Name", " Email"]),
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_missing_headers_listed_in_expected_order() {
        let validator = HeaderValidator::new();
        let failure = validator
            .validate(&row(&["Email"]), &policy(&["Name", "Email", "Phone"]))
            .expect("missing headers should fail");

        assert_eq!(failure.column, HEADERS_COLUMN);
        assert_eq!(failure.line, 1);
        assert_eq!(failure.reason, "Missing required headers: Name, Phone");
        assert!(!failure.reason.contains("Email"));
    }

    #[test]
    fn test_missing_check_runs_without_strict_order() {
        let validator = HeaderValidator::new();
        let mut p = policy(&["Name", "Email"]);
        p.strict_order = false;

        let failure = validator.validate(&row(&["Name", "Other"]), &p).unwrap();
        assert_eq!(failure.reason, "Missing required headers: Email");
    }

    #[test]
    fn test_reordered_headers_depend_on_strict_order() {
        let validator = HeaderValidator::new();
        let header = row(&["Email", "Name"]);

        let mut relaxed = policy(&["Name", "Email"]);
        relaxed.strict_order = false;
        assert_eq!(validator.validate(&header, &relaxed), None);

        let strict = policy(&["Name", "Email"]);
        let failure = validator.validate(&header, &strict).unwrap();
        assert_eq!(failure.column, "Name");
        assert_eq!(failure.reason, "Expected header 'Name' at position 1 but found 'Email'");
    }

    #[test]
    fn test_extra_columns() {
        let validator = HeaderValidator::new();
        let header = row(&["Name", "Email", "Notes"]);

        let strict = policy(&["Name", "Email"]);
        let failure = validator.validate(&header, &strict).unwrap();
        assert_eq!(failure.column, HEADERS_COLUMN);
        assert_eq!(failure.reason, "Expected 2 columns but found 3");

        let mut relaxed = policy(&["Name", "Email"]);
        relaxed.strict_order = false;
        assert_eq!(validator.validate(&header, &relaxed), None);
    }

    #[test]
    fn test_first_mismatch_is_reported() {
        let validator = HeaderValidator::new();
        let failure = validator
            .validate(&row(&["a", "c", "b"]), &policy(&["a", "b", "c"]))
            .unwrap();
        assert_eq!(failure.column, "b");
        assert!(failure.reason.contains("position 2"));
    }

    #[test]
    fn test_case_sensitivity() {
        let validator = HeaderValidator::new();
        let header = row(&["NAME", "email"]);

        let sensitive = policy(&["Name", "Email"]);
        let failure = validator.validate(&header, &sensitive).unwrap();
        assert_eq!(failure.reason, "Missing required headers: Name, Email");

        let mut insensitive = policy(&["Name", "Email"]);
        insensitive.case_insensitive = true;
        assert_eq!(validator.validate(&header, &insensitive), None);
    }

    #[test]
    fn test_blank_expected_header_gets_synthetic_label() {
        let validator = HeaderValidator::new();
        let failure = validator
            .validate(&row(&["id", ""]), &policy(&["", "id"]))
            .unwrap();
        assert_eq!(failure.column, "column 1");
    }
}
