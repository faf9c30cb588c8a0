//! Validation policy types.
//!
//! This module contains the declarative policy a table is checked against:
//! the expected header row, per-column type rules, the allowed character
//! encodings, and the content-screening toggle.

use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Complete policy for one validation call.
///
/// # Example
///
/// ```rust
/// use screen_core::{HeaderPolicy, ValidationPolicy};
///
/// let policy = ValidationPolicy {
///     headers: HeaderPolicy::new(["Name", "Email"]),
///     encoding: None,
///     check_content: true,
/// };
/// assert!(policy.headers.strict_order);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationPolicy {
    /// Header row expectations and per-column constraints
    pub headers: HeaderPolicy,

    /// Allowed character encodings; `None` disables the encoding check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<EncodingPolicy>,

    /// Whether cells are screened for SQL-like patterns
    #[serde(default = "default_true")]
    pub check_content: bool,
}

impl ValidationPolicy {
    /// Creates a policy with only header expectations and default toggles.
    pub fn new(headers: HeaderPolicy) -> Self {
        Self {
            headers,
            encoding: None,
            check_content: true,
        }
    }

    /// Returns true if any column constraint is configured.
    pub fn has_column_schemas(&self) -> bool {
        !self.headers.column_schemas.is_empty()
    }

    /// Returns the allowed encodings when the encoding check is active.
    pub fn active_encodings(&self) -> Option<&[Encoding]> {
        self.encoding
            .as_ref()
            .filter(|e| !e.is_unrestricted())
            .map(|e| e.allowed_encodings.as_slice())
    }
}

/// Expectations for the header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderPolicy {
    /// Header names in their expected order
    pub expected_headers: Vec<String>,

    /// Require exact column count and position
    #[serde(default = "default_true")]
    pub strict_order: bool,

    /// Compare header names ignoring case
    #[serde(default)]
    pub case_insensitive: bool,

    /// Type and nullability rules keyed by header name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub column_schemas: BTreeMap<String, ColumnConstraint>,
}

impl HeaderPolicy {
    /// Creates a header policy with default matching rules.
    pub fn new<I, S>(expected_headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expected_headers: expected_headers.into_iter().map(Into::into).collect(),
            strict_order: true,
            case_insensitive: false,
            column_schemas: BTreeMap::new(),
        }
    }
}

/// Declared value type of a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Any text
    #[default]
    String,
    /// Decimal number, optionally negative
    Number,
    /// One of `t`, `f`, `true`, `false` (any case)
    Boolean,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::String => "string",
            ColumnType::Number => "number",
            ColumnType::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// Type and nullability rule for a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnConstraint {
    /// Expected value type
    #[serde(rename = "type", default)]
    pub column_type: ColumnType,

    /// Whether empty cells are accepted
    #[serde(default = "default_true")]
    pub allow_null: bool,
}

impl Default for ColumnConstraint {
    fn default() -> Self {
        Self {
            column_type: ColumnType::String,
            allow_null: true,
        }
    }
}

impl ColumnConstraint {
    /// Creates a nullable constraint of the given type.
    pub fn of(column_type: ColumnType) -> Self {
        Self {
            column_type,
            allow_null: true,
        }
    }
}

/// Allowed character encodings for cell content.
///
/// An empty list disables the check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodingPolicy {
    /// Encodings a character may belong to (any one suffices)
    #[serde(default = "default_encodings")]
    pub allowed_encodings: Vec<Encoding>,
}

impl Default for EncodingPolicy {
    fn default() -> Self {
        Self {
            allowed_encodings: default_encodings(),
        }
    }
}

impl EncodingPolicy {
    /// Creates a policy allowing the given encodings.
    pub fn new(allowed_encodings: impl IntoIterator<Item = Encoding>) -> Self {
        Self {
            allowed_encodings: allowed_encodings.into_iter().collect(),
        }
    }

    /// Returns true when no encodings are listed, i.e. nothing is restricted.
    pub fn is_unrestricted(&self) -> bool {
        self.allowed_encodings.is_empty()
    }
}

/// Named legacy encodings, each mapped to an inclusive code-point range.
///
/// `Utf8` and `Utf16` deliberately map to the ASCII range: they stand for the
/// plain-text subset accepted by constrained database character sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Encoding {
    /// 7-bit ASCII
    Ascii,
    /// ISO-8859-1
    Latin1,
    /// Plain-text subset, ASCII range
    Utf8,
    /// Plain-text subset, ASCII range
    Utf16,
    /// Windows code page 1252
    Windows1252,
}

/// Code points of 7-bit character sets.
static SEVEN_BIT: RangeInclusive<u32> = 0x00..=0x7F;

/// Code points of 8-bit single-byte character sets.
static EIGHT_BIT: RangeInclusive<u32> = 0x00..=0xFF;

impl Encoding {
    /// All known encodings, in table order.
    pub const ALL: [Encoding; 5] = [
        Encoding::Ascii,
        Encoding::Latin1,
        Encoding::Utf8,
        Encoding::Utf16,
        Encoding::Windows1252,
    ];

    /// Returns the wire name of the encoding.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Ascii => "ASCII",
            Encoding::Latin1 => "LATIN1",
            Encoding::Utf8 => "UTF8",
            Encoding::Utf16 => "UTF16",
            Encoding::Windows1252 => "WINDOWS1252",
        }
    }

    /// Returns the inclusive code-point range accepted by this encoding.
    pub fn range(self) -> &'static RangeInclusive<u32> {
        match self {
            Encoding::Ascii | Encoding::Utf8 | Encoding::Utf16 => &SEVEN_BIT,
            Encoding::Latin1 | Encoding::Windows1252 => &EIGHT_BIT,
        }
    }

    /// Returns true if `ch` falls inside this encoding's range.
    pub fn accepts(self, ch: char) -> bool {
        self.range().contains(&u32::from(ch))
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_uppercase();

        Encoding::ALL
            .into_iter()
            .find(|e| e.name() == normalized)
            .ok_or_else(|| CoreError::UnknownEncoding(s.to_string()))
    }
}

impl TryFrom<String> for Encoding {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Encoding> for String {
    fn from(value: Encoding) -> Self {
        value.name().to_string()
    }
}

fn default_true() -> bool {
    true
}

fn default_encodings() -> Vec<Encoding> {
    vec![Encoding::Utf8]
}
