//! The parser seam.
//!
//! Decoding a CSV or spreadsheet byte stream into text cells is done by an
//! external parser. The engine only sees it through [`TableSource`].

use crate::ParsedTable;
use std::future::Future;

/// A source of decoded tabular data.
///
/// Implementations wrap whatever decoder turns a file into rows of text.
/// The engine awaits [`TableSource::load`] exactly once per validation call;
/// an error is reported to the caller as a file-level failure.
///
/// # Example
///
/// ```rust
/// use screen_core::{ParsedTable, TableSource};
///
/// struct Fixed;
///
/// impl TableSource for Fixed {
///     async fn load(&self) -> anyhow::Result<ParsedTable> {
///         Ok(ParsedTable::from_rows(vec![vec!["id"], vec!["1"]]))
///     }
/// }
/// ```
pub trait TableSource: Send + Sync {
    /// Decodes the underlying data into a table.
    fn load(&self) -> impl Future<Output = anyhow::Result<ParsedTable>> + Send;
}

/// A source backed by an already decoded table.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    table: ParsedTable,
}

impl MemorySource {
    /// Wraps a decoded table.
    pub fn new(table: ParsedTable) -> Self {
        Self { table }
    }
}

impl From<ParsedTable> for MemorySource {
    fn from(table: ParsedTable) -> Self {
        Self::new(table)
    }
}

impl TableSource for MemorySource {
    async fn load(&self) -> anyhow::Result<ParsedTable> {
        Ok(self.table.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_source_returns_table() {
        let table = ParsedTable::from_rows(vec![vec!["a", "b"], vec!["1", "2"]]);
        let source = MemorySource::from(table.clone());

        let loaded = source.load().await.unwrap();
        assert_eq!(loaded, table);
    }
}
