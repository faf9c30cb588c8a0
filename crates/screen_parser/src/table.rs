//! JSON table decoding.
//!
//! Decodes a JSON array of row arrays into a `ParsedTable`. Scalars become
//! text: `null` is an empty cell, numbers and booleans keep their JSON
//! spelling. Nested arrays or objects are rejected.

use crate::{ParserError, Result};
use anyhow::Context;
use screen_core::{ParsedTable, TableSource};
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

/// Decode a table from a JSON array of arrays.
///
/// # Example
///
/// ```rust
/// use screen_parser::parse_table_json;
///
/// let table = parse_table_json(r#"[["id", "score"], [1, 9.5], [2, null]]"#).unwrap();
/// assert_eq!(table.cell(1, 1), "9.5");
/// assert_eq!(table.cell(2, 1), "");
/// ```
pub fn parse_table_json(content: &str) -> Result<ParsedTable> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Array(rows) = value else {
        return Err(ParserError::InvalidTable("expected an array of rows".to_string()));
    };

    let mut table = Vec::with_capacity(rows.len());
    for (row_idx, row) in rows.into_iter().enumerate() {
        let Value::Array(cells) = row else {
            return Err(ParserError::InvalidTable(format!("row {} is not an array", row_idx + 1)));
        };

        let cells = cells
            .into_iter()
            .enumerate()
            .map(|(col_idx, cell)| {
                cell_text(cell).ok_or_else(|| {
                    ParserError::InvalidTable(format!(
                        "row {}, column {}: nested values are not supported",
                        row_idx + 1,
                        col_idx + 1
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        table.push(cells);
    }

    debug!("Decoded JSON table with {} row(s)", table.len());
    Ok(ParsedTable::new(table))
}

/// Renders a scalar JSON value as cell text.
fn cell_text(value: Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

#[derive(Debug, Clone)]
enum JsonInput {
    Text(String),
    File(PathBuf),
}

/// A `TableSource` decoding JSON rows from memory or from a file.
#[derive(Debug, Clone)]
pub struct JsonTableSource {
    input: JsonInput,
}

impl JsonTableSource {
    /// Creates a source over an in-memory JSON document.
    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            input: JsonInput::Text(content.into()),
        }
    }

    /// Creates a source reading a JSON document from `path` when loaded.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            input: JsonInput::File(path.into()),
        }
    }
}

impl TableSource for JsonTableSource {
    async fn load(&self) -> anyhow::Result<ParsedTable> {
        let table = match &self.input {
            JsonInput::Text(content) => parse_table_json(content)?,
            JsonInput::File(path) => {
                let content = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                parse_table_json(&content)?
            }
        };
        Ok(table)
    }
}
