//! Main validation engine.
//!
//! This module provides the `TableValidator` that orchestrates all checks:
//! the header gate first, then content patterns, column schemas, and
//! encodings, whose failures are concatenated in that order.

use crate::header::normalize_header;
use crate::{
    ColumnSchemaValidator, ContentValidator, EncodingValidator, HeaderValidator, ValidationError,
};
use screen_core::{Failure, ParsedTable, TableSource, ValidationOutcome, ValidationPolicy};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Summary message for a table that passed every check.
pub const PASSED_MESSAGE: &str = "File validation passed successfully";

/// Summary message when the header gate rejects a table.
pub const HEADER_FAILED_MESSAGE: &str = "Header validation failed";

/// Summary message for a table without rows.
pub const EMPTY_FILE_MESSAGE: &str = "File is empty";

/// Summary message when the parser could not produce a table.
pub const PARSE_FAILED_MESSAGE: &str = "File could not be parsed";

/// Main validation engine for tabular uploads.
///
/// The engine holds no per-call state: concurrent calls on one instance do
/// not interfere.
///
/// # Example
///
/// ```rust
/// use screen_core::{ParsedTable, PolicyBuilder};
/// use screen_validator::TableValidator;
///
/// let table = ParsedTable::from_rows(vec![
///     vec!["Name", "Email"],
///     vec!["Alice", "alice@example.com"],
/// ]);
/// let policy = PolicyBuilder::new(["Name", "Email"]).build().unwrap();
///
/// let outcome = TableValidator::new().validate_table(&table, &policy);
///
/// if outcome.valid {
///     println!("{}", outcome.message);
/// } else {
///     for failure in &outcome.errors {
///         println!("Error: {}", failure);
///     }
/// }
/// ```
pub struct TableValidator {
    header_validator: HeaderValidator,
    content_validator: ContentValidator,
    column_validator: ColumnSchemaValidator,
    encoding_validator: EncodingValidator,
}

impl TableValidator {
    /// Creates a new table validator.
    pub fn new() -> Self {
        Self {
            header_validator: HeaderValidator::new(),
            content_validator: ContentValidator::new(),
            column_validator: ColumnSchemaValidator::new(),
            encoding_validator: EncodingValidator::new(),
        }
    }

    /// Loads a table from `source` and validates it.
    ///
    /// The source is awaited exactly once. A load error becomes a failed
    /// outcome with a single file-level failure carrying the error message.
    pub async fn validate_source<S: TableSource>(
        &self,
        source: &S,
        policy: &ValidationPolicy,
    ) -> ValidationOutcome {
        match source.load().await {
            Ok(table) => self.validate_table(&table, policy),
            Err(err) => {
                warn!("Failed to load table: {:#}", err);
                let reason = ValidationError::parse_failure(error_chain_message(&err)).to_string();
                let failure = Failure::file(reason);
                ValidationOutcome::failure(PARSE_FAILED_MESSAGE, vec![failure])
            }
        }
    }

    /// Validates a parsed table against a policy.
    ///
    /// This is the main validation entry point. It never panics on user
    /// data and always returns a well-formed outcome.
    ///
    /// # Arguments
    ///
    /// * `table` - Decoded rows, header first
    /// * `policy` - Header, schema, encoding, and content rules
    pub fn validate_table(
        &self,
        table: &ParsedTable,
        policy: &ValidationPolicy,
    ) -> ValidationOutcome {
        let start = Instant::now();

        // 0. Structural check
        let Some(header_row) = table.header() else {
            warn!("Rejecting table without rows");
            return ValidationOutcome::failure(
                EMPTY_FILE_MESSAGE,
                vec![Failure::file(ValidationError::EmptyTable.to_string())],
            );
        };

        // 1. Header gate
        if let Some(failure) = self.header_validator.validate(header_row, &policy.headers) {
            info!("Header validation failed: {}", failure.reason);
            return ValidationOutcome::failure(HEADER_FAILED_MESSAGE, vec![failure]);
        }

        let mut errors = Vec::new();

        // 2. Content patterns
        let pattern_errors =
            self.content_validator.validate(table, header_row, policy.check_content);
        debug!("Content pattern check found {} issue(s)", pattern_errors.len());
        errors.extend(pattern_errors);

        // 3. Column schemas
        if policy.has_column_schemas() {
            let schema_errors = self.column_validator.validate(table, header_row, &policy.headers);
            debug!("Column schema check found {} issue(s)", schema_errors.len());
            errors.extend(schema_errors);
        }

        // 4. Encodings
        if let Some(allowed) = policy.active_encodings() {
            let encoding_errors = self.encoding_validator.validate(table, header_row, allowed);
            debug!("Encoding check found {} issue(s)", encoding_errors.len());
            errors.extend(encoding_errors);
        }

        self.build_outcome(errors, table, start)
    }

    /// Builds an outcome from collected failures.
    fn build_outcome(
        &self,
        errors: Vec<Failure>,
        table: &ParsedTable,
        start: Instant,
    ) -> ValidationOutcome {
        info!(
            "Validated {} data row(s) in {} ms: {} issue(s)",
            table.len().saturating_sub(1),
            start.elapsed().as_millis(),
            errors.len()
        );

        if errors.is_empty() {
            ValidationOutcome::success(PASSED_MESSAGE)
        } else {
            let message = format!("Validation failed: {} issue(s) found", errors.len());
            ValidationOutcome::failure(message, errors)
        }
    }

    /// Validates only the policy itself (no data).
    ///
    /// Useful for checking that a policy is well-formed before any file is
    /// received. Reports an empty header list, blank expected headers, and
    /// column schemas that would be silently ignored.
    pub fn validate_definition(&self, policy: &ValidationPolicy) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let headers = &policy.headers;

        if headers.expected_headers.is_empty() {
            errors.push(ValidationError::NoExpectedHeaders);
        }

        for (idx, name) in headers.expected_headers.iter().enumerate() {
            if name.trim().is_empty() {
                errors.push(ValidationError::BlankExpectedHeader(idx + 1));
            }
        }

        let expected: Vec<String> = headers
            .expected_headers
            .iter()
            .map(|h| normalize_header(h, headers.case_insensitive))
            .collect();
        for key in headers.column_schemas.keys() {
            if !expected.contains(&normalize_header(key, headers.case_insensitive)) {
                errors.push(ValidationError::UnknownSchemaColumn(key.clone()));
            }
        }

        errors
    }
}

/// Renders `err` with every cause in its chain, joined by `": "`.
///
/// A cause whose text already appears in the message so far is skipped, so
/// wrappers that embed their source (`"Failed to parse JSON: {0}"`) do not
/// repeat it.
fn error_chain_message(err: &anyhow::Error) -> String {
    let mut message = String::new();
    for cause in err.chain() {
        let text = cause.to_string();
        if text.is_empty() || message.contains(&text) {
            continue;
        }
        if !message.is_empty() {
            message.push_str(": ");
        }
        message.push_str(&text);
    }
    message
}

impl Default for TableValidator {
    fn default() -> Self {
        Self::new()
    }
}
