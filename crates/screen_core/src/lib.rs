//! # Upload Screen Core
//!
//! Core data structures and types for screening tabular uploads.
//!
//! This crate provides the shared vocabulary between a file parser, the
//! validation engine, and the callers reading its results.
//!
//! ## Key Concepts
//!
//! - **ParsedTable**: rows of decoded text cells, header first, possibly ragged
//! - **ValidationPolicy**: expected headers, per-column type rules, allowed
//!   encodings, and the content-screening toggle
//! - **Failure**: one problem at one column and line
//! - **ValidationOutcome**: pass/fail, summary message, and all failures
//! - **TableSource**: the seam through which a parser hands over a table
//!
//! ## Example
//!
//! ```rust
//! use screen_core::{ColumnBuilder, ColumnType, ParsedTable, PolicyBuilder};
//!
//! let table = ParsedTable::from_rows(vec![
//!     vec!["Name", "Age"],
//!     vec!["Alice", "34"],
//! ]);
//!
//! let policy = PolicyBuilder::new(["Name", "Age"])
//!     .column("Age", ColumnBuilder::new(ColumnType::Number).build())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(table.header().map(|h| h.len()), Some(policy.headers.expected_headers.len()));
//! ```

pub mod builder;
pub mod error;
pub mod outcome;
pub mod policy;
pub mod source;
pub mod table;

pub use builder::*;
pub use error::*;
pub use outcome::*;
pub use policy::*;
pub use source::*;
pub use table::*;
