//! Parser for upload screen policies (YAML/TOML/JSON formats).
//!
//! This crate loads `ValidationPolicy` documents from YAML, TOML and JSON,
//! and decodes JSON row arrays into `ParsedTable`s for the engine.
//!
//! # Example
//!
//! ```rust
//! use screen_parser::parse_yaml;
//!
//! let yaml = r#"
//! headers:
//!   expectedHeaders: [Name, Email, Age]
//!   caseInsensitive: true
//!   columnSchemas:
//!     Age:
//!       type: number
//!       allowNull: false
//! encoding:
//!   allowedEncodings: [LATIN1]
//! "#;
//!
//! let policy = parse_yaml(yaml).expect("Failed to parse policy");
//! assert_eq!(policy.headers.expected_headers.len(), 3);
//! assert!(policy.check_content);
//! ```

mod table;

pub use table::*;

use screen_core::ValidationPolicy;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during policy or table parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// JSON document is not an array of rows of scalar cells
    #[error("Invalid table: {0}")]
    InvalidTable(String),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported policy file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Parse a policy from a YAML string.
pub fn parse_yaml(content: &str) -> Result<ValidationPolicy> {
    let policy: ValidationPolicy = serde_yaml_ng::from_str(content)?;
    Ok(policy)
}

/// Parse a policy from a TOML string.
///
/// # Example
///
/// ```rust
/// use screen_parser::parse_toml;
///
/// let toml = r#"
/// checkContent = false
///
/// [headers]
/// expectedHeaders = ["id", "active"]
/// strictOrder = false
///
/// [headers.columnSchemas.active]
/// type = "boolean"
/// "#;
///
/// let policy = parse_toml(toml).unwrap();
/// assert!(!policy.check_content);
/// assert!(!policy.headers.strict_order);
/// ```
pub fn parse_toml(content: &str) -> Result<ValidationPolicy> {
    let policy: ValidationPolicy =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(policy)
}

/// Parse a policy from a JSON string.
///
/// This is the shape web clients send alongside an upload.
pub fn parse_json(content: &str) -> Result<ValidationPolicy> {
    let policy: ValidationPolicy = serde_json::from_str(content)?;
    Ok(policy)
}

/// Detect the policy format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `PolicyFormat::Yaml`
/// * `.toml` → `PolicyFormat::Toml`
/// * `.json` → `PolicyFormat::Json`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<PolicyFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(PolicyFormat::Yaml),
        "toml" => Ok(PolicyFormat::Toml),
        "json" => Ok(PolicyFormat::Json),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a policy from a file with automatic format detection.
///
/// ```no_run
/// use screen_parser::parse_file;
/// use std::path::Path;
///
/// let policy = parse_file(Path::new("policies/customers.yml")).unwrap();
/// println!("Expecting {} columns", policy.headers.expected_headers.len());
/// ```
pub fn parse_file(path: &Path) -> Result<ValidationPolicy> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    debug!("Parsing {:?} policy from {}", format, path.display());

    match format {
        PolicyFormat::Yaml => parse_yaml(&content),
        PolicyFormat::Toml => parse_toml(&content),
        PolicyFormat::Json => parse_json(&content),
    }
}
