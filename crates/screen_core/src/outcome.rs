//! Failure and outcome types returned to callers.
//!
//! These are the wire-visible results of a validation call: a pass/fail flag,
//! a summary message, and the ordered list of individual failures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column sentinel for failures that concern the file as a whole.
pub const FILE_COLUMN: &str = "file";

/// Column label for header-row failures that are not tied to one column.
pub const HEADERS_COLUMN: &str = "headers";

/// A single validation failure.
///
/// `line` is 1-based with the header row at line 1. File-level failures use
/// [`FILE_COLUMN`] and line 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Header name, synthetic column label, or a sentinel
    pub column: String,

    /// Row number, header = 1
    pub line: usize,

    /// Human-readable explanation
    pub reason: String,
}

impl Failure {
    /// Creates a failure for a given column and line.
    pub fn new(column: impl Into<String>, line: usize, reason: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Creates a file-level failure.
    pub fn file(reason: impl Into<String>) -> Self {
        Self::new(FILE_COLUMN, 0, reason)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, {}: {}", self.line, self.column, self.reason)
    }
}

/// Result of validating one table against one policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Whether the table passed every configured check
    pub valid: bool,

    /// Summary message
    pub message: String,

    /// Failures in validator order, then row order, then column order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Failure>,
}

impl ValidationOutcome {
    /// Creates a successful outcome.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Creates a failed outcome carrying its failures.
    pub fn failure(message: impl Into<String>, errors: Vec<Failure>) -> Self {
        Self {
            valid: false,
            message: message.into(),
            errors,
        }
    }

    /// Returns true if validation passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the number of failures.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Returns the failures reported for a given line.
    pub fn errors_at_line(&self, line: usize) -> impl Iterator<Item = &Failure> {
        self.errors.iter().filter(move |f| f.line == line)
    }
}
