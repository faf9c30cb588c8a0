//! Error types for validation operations.
//!
//! Each variant renders to the `reason` text of a [`screen_core::Failure`].

use thiserror::Error;

/// Problems found while validating a table or a policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Table has no rows at all
    #[error("no data")]
    EmptyTable,

    /// The parser could not produce a table
    #[error("{0}")]
    ParseFailure(String),

    /// Expected headers absent from the header row
    #[error("Missing required headers: {}", .0.join(", "))]
    MissingHeaders(Vec<String>),

    /// Header row has the wrong number of columns
    #[error("Expected {expected} columns but found {found}")]
    HeaderCount { expected: usize, found: usize },

    /// Header at a position differs from the expected one
    #[error("Expected header '{expected}' at position {position} but found '{found}'")]
    HeaderMismatch {
        position: usize,
        expected: String,
        found: String,
    },

    /// Empty cell in a column that requires a value
    #[error("{column} does not allow null or empty values")]
    NullNotAllowed { column: String },

    /// Cell is not a number
    #[error("{column} must be a number, found '{preview}'")]
    NotANumber { column: String, preview: String },

    /// Cell is not a boolean
    #[error("{column} must be a boolean (t, f, true, false), found '{preview}'")]
    NotABoolean { column: String, preview: String },

    /// Cell matched an entry of the SQL pattern catalog
    #[error("Contains potentially dangerous SQL pattern ({description}): {preview}")]
    SqlPattern {
        description: &'static str,
        preview: String,
    },

    /// Cell contains a character outside every allowed encoding
    #[error(
        "Contains character '{character}' (0x{code:04X}) outside allowed encodings: {allowed}"
    )]
    InvalidCharacter {
        character: char,
        code: u32,
        allowed: String,
    },

    /// Policy lists no expected headers
    #[error("Policy must list at least one expected header")]
    NoExpectedHeaders,

    /// Policy lists a blank expected header
    #[error("Expected header at position {0} is blank")]
    BlankExpectedHeader(usize),

    /// Column schema key matches no expected header and will be ignored
    #[error("Column schema '{0}' does not match any expected header")]
    UnknownSchemaColumn(String),
}

impl ValidationError {
    /// Creates a new parse failure, falling back to a generic message.
    pub fn parse_failure(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::ParseFailure("Unknown error occurred".to_string())
        } else {
            Self::ParseFailure(message)
        }
    }

    /// Creates a new missing headers error.
    pub fn missing_headers<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingHeaders(names.into_iter().map(Into::into).collect())
    }

    /// Creates a new header mismatch error.
    pub fn header_mismatch(
        position: usize,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::HeaderMismatch {
            position,
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates a new null violation error.
    pub fn null_not_allowed(column: impl Into<String>) -> Self {
        Self::NullNotAllowed {
            column: column.into(),
        }
    }

    /// Creates a new number type error.
    pub fn not_a_number(column: impl Into<String>, preview: impl Into<String>) -> Self {
        Self::NotANumber {
            column: column.into(),
            preview: preview.into(),
        }
    }

    /// Creates a new boolean type error.
    pub fn not_a_boolean(column: impl Into<String>, preview: impl Into<String>) -> Self {
        Self::NotABoolean {
            column: column.into(),
            preview: preview.into(),
        }
    }

    /// Creates a new SQL pattern error.
    pub fn sql_pattern(description: &'static str, preview: impl Into<String>) -> Self {
        Self::SqlPattern {
            description,
            preview: preview.into(),
        }
    }

    /// Creates a new invalid character error.
    pub fn invalid_character(character: char, allowed: impl Into<String>) -> Self {
        Self::InvalidCharacter {
            character,
            code: u32::from(character),
            allowed: allowed.into(),
        }
    }
}
