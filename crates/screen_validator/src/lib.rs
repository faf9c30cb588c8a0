//! # Upload Screen Validator
//!
//! Validation engine for tabular uploads. This crate checks a parsed table
//! against a policy before it is handed to a downstream consumer:
//!
//! - Header validation (presence, order, count, case rules) gating all else
//! - Column schema validation (number/boolean types, nullability)
//! - Content screening against an ordered catalog of SQL-like patterns
//! - Character encoding validation against allowed code-point ranges
//!
//! ## Example
//!
//! ```rust
//! use screen_core::{ParsedTable, PolicyBuilder};
//! use screen_validator::TableValidator;
//!
//! let table = ParsedTable::from_rows(vec![
//!     vec!["Name", "Email"],
//!     vec!["Alice; DROP TABLE users", "a@b.com"],
//! ]);
//! let policy = PolicyBuilder::new(["Name", "Email"]).build().unwrap();
//!
//! let outcome = TableValidator::new().validate_table(&table, &policy);
//!
//! assert!(!outcome.valid);
//! assert_eq!(outcome.errors[0].line, 2);
//! assert!(outcome.errors[0].reason.contains("Statement terminator"));
//! ```

mod column;
mod content;
mod encoding;
mod engine;
mod error;
mod header;
mod patterns;
mod preview;

pub use column::*;
pub use content::*;
pub use encoding::*;
pub use engine::*;
pub use error::*;
pub use header::*;
pub use patterns::*;
pub use preview::*;
