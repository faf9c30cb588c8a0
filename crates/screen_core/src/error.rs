//! Error types for the upload screen data model.

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Main error type for core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Encoding name not recognized
    #[error("Unknown encoding '{0}' (expected one of ASCII, LATIN1, UTF8, UTF16, WINDOWS1252)")]
    UnknownEncoding(String),

    /// Policy is structurally unusable
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),
}

impl CoreError {
    /// Creates a new invalid policy error.
    pub fn invalid_policy(message: impl Into<String>) -> Self {
        Self::InvalidPolicy(message.into())
    }
}
