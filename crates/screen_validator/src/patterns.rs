//! SQL-like content pattern catalog.
//!
//! An ordered list of heuristic matchers used to flag cells that look like
//! SQL injection payloads. Order is significant: when several entries match
//! the same text, the first one is reported.
//!
//! This is a pre-upload screen, not an injection defense. False positives
//! and negatives are expected.

use regex::Regex;
use std::sync::LazyLock;

/// A compiled catalog entry.
#[derive(Debug)]
pub struct SqlPattern {
    /// Human-readable label used in failure reasons
    pub description: &'static str,
    regex: Regex,
}

impl SqlPattern {
    /// Returns true if `text` contains this pattern.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Returns the source of the underlying regular expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Catalog source: (regex, description), highest priority first.
const CATALOG: &[(&str, &str)] = &[
    (r";", "Statement terminator"),
    (r"--", "SQL comment"),
    (r"/\*", "Block comment start"),
    (r"\*/", "Block comment end"),
    (r"';", "Quote followed by statement terminator"),
    (r"(?i)';\s*(drop|delete|update|insert|select)\b", "Quote termination followed by SQL command"),
    (r"(?i)';\s*exec", "Quote termination followed by EXEC"),
    (r"(?i)';\s*union", "Quote termination followed by UNION"),
    (r"\x00", "Null byte"),
    (r"\x1A", "Substitute control character"),
    (r"\x08", "Backspace control character"),
    (r"(?i)\bxp_", "Extended stored procedure prefix"),
    (r"(?i)\bsp_", "Stored procedure prefix"),
    (r"(?i)\bexec\s*\(", "EXEC call"),
    (r"(?i)\bexecute\s*\(", "EXECUTE call"),
    (r"(?is)\bselect\b.*\bfrom\b", "SELECT ... FROM statement"),
    (r"(?i)\binsert\s+into\b", "INSERT INTO statement"),
    (r"(?is)\bupdate\b.*\bset\b", "UPDATE ... SET statement"),
    (r"(?i)\bdelete\s+from\b", "DELETE FROM statement"),
    (r"(?i)\bdrop\s+(table|database|schema)\b", "DROP statement"),
    (r"(?i)\bunion\s+select\b", "UNION SELECT statement"),
    (r"(?i)\bor\s+1\s*=\s*1\b", "OR 1=1 tautology"),
    (r"(?i)'\s*or\s*'", "Quote OR quote pattern"),
];

/// The compiled catalog, in priority order.
pub static SQL_PATTERNS: LazyLock<Vec<SqlPattern>> = LazyLock::new(|| {
    CATALOG
        .iter()
        .map(|(pattern, description)| SqlPattern {
            description,
            regex: Regex::new(pattern).expect("valid SQL pattern"),
        })
        .collect()
});

/// Returns the highest-priority catalog entry matching `text`, if any.
pub fn find_sql_pattern(text: &str) -> Option<&'static SqlPattern> {
    SQL_PATTERNS.iter().find(|pattern| pattern.is_match(text))
}
