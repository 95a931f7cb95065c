//! Delimited-text rendering of flattened forum rows.
//!
//! Rows may carry different keys, so the table is built in two passes: the
//! header is the union of every row's keys in first-seen order, then each row
//! is written against that header with empty cells for keys it lacks.
//!
//! # Quick start
//!
//! ```
//! use forumflat_core::FlatRecord;
//! use forumflat_table::{TableOptions, to_string};
//! use serde_json::json;
//!
//! let mut a = FlatRecord::new();
//! a.insert("author", json!("A"));
//! let mut b = FlatRecord::new();
//! b.insert("body", json!("hi, there"));
//!
//! let csv = to_string(&[a, b], &TableOptions::default()).unwrap();
//! assert_eq!(csv, "author,body\nA,\n,\"hi, there\"\n");
//! ```

pub mod error;
mod serialize;

pub use error::{Error, Result};
pub use serialize::{columns, render_cell, to_string, write_table};

/// Output formatting knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
  /// Field separator byte.
  pub delimiter: u8,
}

impl Default for TableOptions {
  fn default() -> Self { Self { delimiter: b',' } }
}

impl TableOptions {
  #[must_use]
  pub fn with_delimiter(mut self, delimiter: u8) -> Self {
    self.delimiter = delimiter;
    self
  }
}
