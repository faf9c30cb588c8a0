//! Builder pattern for creating validation policies.
//!
//! This module provides ergonomic builders for constructing policies and
//! their column constraints with a fluent API.

use crate::{
    ColumnConstraint, ColumnType, CoreError, Encoding, EncodingPolicy, HeaderPolicy, Result,
    ValidationPolicy,
};
use std::collections::BTreeMap;

/// Builder for creating a `ValidationPolicy`.
///
/// # Example
///
/// ```rust
/// use screen_core::{ColumnBuilder, ColumnType, Encoding, PolicyBuilder};
///
/// let policy = PolicyBuilder::new(["Name", "Age"])
///     .case_insensitive(true)
///     .column("Age", ColumnBuilder::new(ColumnType::Number).nullable(false).build())
///     .encodings([Encoding::Latin1])
///     .build()
///     .unwrap();
///
/// assert!(policy.headers.case_insensitive);
/// assert_eq!(policy.headers.column_schemas.len(), 1);
/// ```
#[derive(Debug)]
pub struct PolicyBuilder {
    expected_headers: Vec<String>,
    strict_order: bool,
    case_insensitive: bool,
    column_schemas: BTreeMap<String, ColumnConstraint>,
    encodings: Option<Vec<Encoding>>,
    check_content: bool,
}

impl PolicyBuilder {
    /// Creates a new policy builder with the expected header row.
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
            encodings: None,
            check_content: true,
        }
    }

    /// Sets whether headers must match position by position.
    pub fn strict_order(mut self, strict: bool) -> Self {
        self.strict_order = strict;
        self
    }

    /// Sets whether header names are compared ignoring case.
    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Adds a constraint for a column.
    pub fn column(mut self, name: impl Into<String>, constraint: ColumnConstraint) -> Self {
        self.column_schemas.insert(name.into(), constraint);
        self
    }

    /// Restricts cell characters to the given encodings.
    ///
    /// An empty list leaves content unrestricted.
    pub fn encodings(mut self, encodings: impl IntoIterator<Item = Encoding>) -> Self {
        self.encodings = Some(encodings.into_iter().collect());
        self
    }

    /// Enables or disables SQL-pattern content screening.
    pub fn check_content(mut self, enabled: bool) -> Self {
        self.check_content = enabled;
        self
    }

    /// Builds the policy.
    ///
    /// Fails if no expected headers were given.
    pub fn build(self) -> Result<ValidationPolicy> {
        if self.expected_headers.is_empty() {
            return Err(CoreError::invalid_policy("at least one expected header is required"));
        }

        Ok(ValidationPolicy {
            headers: HeaderPolicy {
                expected_headers: self.expected_headers,
                strict_order: self.strict_order,
                case_insensitive: self.case_insensitive,
                column_schemas: self.column_schemas,
            },
            encoding: self.encodings.map(EncodingPolicy::new),
            check_content: self.check_content,
        })
    }
}

/// Builder for creating a `ColumnConstraint`.
///
/// # Example
///
/// ```rust
/// use screen_core::{ColumnBuilder, ColumnType};
///
/// let constraint = ColumnBuilder::new(ColumnType::Boolean)
///     .nullable(false)
///     .build();
/// assert!(!constraint.allow_null);
/// ```
#[derive(Debug, Default)]
pub struct ColumnBuilder {
    column_type: ColumnType,
    allow_null: Option<bool>,
}

impl ColumnBuilder {
    /// Creates a new column builder for the given type.
    pub fn new(column_type: ColumnType) -> Self {
        Self {
            column_type,
            allow_null: None,
        }
    }

    /// Sets whether empty cells are accepted (default: true).
    pub fn nullable(mut self, allow_null: bool) -> Self {
        self.allow_null = Some(allow_null);
        self
    }

    /// Builds the constraint.
    pub fn build(self) -> ColumnConstraint {
        ColumnConstraint {
            column_type: self.column_type,
            allow_null: self.allow_null.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_policy_builder_defaults() {
        let policy = PolicyBuilder::new(["a", "b"]).build().unwrap();

        assert_eq!(policy.headers.expected_headers, vec!["a", "b"]);
        assert!(policy.headers.strict_order);
        assert!(!policy.headers.case_insensitive);
        assert!(policy.encoding.is_none());
        assert!(policy.check_content);
    }

    #[test]
    fn test_policy_builder_full() {
        let policy = PolicyBuilder::new(["id", "active"])
            .strict_order(false)
            .case_insensitive(true)
            .column("active", ColumnBuilder::new(ColumnType::Boolean).build())
            .encodings([Encoding::Ascii, Encoding::Latin1])
            .check_content(false)
            .build()
            .unwrap();

        assert!(!policy.headers.strict_order);
        assert!(policy.headers.case_insensitive);
        assert_eq!(
            policy.headers.column_schemas.get("active"),
            Some(&ColumnConstraint::of(ColumnType::Boolean))
        );
        assert_eq!(policy.active_encodings(), Some(&[Encoding::Ascii, Encoding::Latin1][..]));
        assert!(!policy.check_content);
    }

    #[test]
    fn test_policy_builder_requires_headers() {
        let result = PolicyBuilder::new(Vec::<String>::new()).build();
        assert!(matches!(result, Err(CoreError::InvalidPolicy(_))));
    }

    #[test]
    fn test_column_builder() {
        let constraint = ColumnBuilder::new(ColumnType::Number).build();
        assert!(constraint.allow_null);
        assert_eq!(constraint.column_type, ColumnType::Number);

        let constraint = ColumnBuilder::default().nullable(false).build();
        assert_eq!(constraint.column_type, ColumnType::String);
        assert!(!constraint.allow_null);
    }
}
