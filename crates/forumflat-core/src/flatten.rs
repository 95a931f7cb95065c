//! Thread → row flattening.
//!
//! Each row is built by overlaying, in order:
//!   thread metadata
//!     └─ `post_type` tag
//!          └─ the post's own fields
//!
//! A post field that shares a name with a metadata column or with
//! `post_type` therefore wins.

use serde_json::Value;
use tracing::debug;

use crate::{
  error::Result,
  record::{FlatRecord, POST_TYPE_FIELD, PostType},
  thread::{Post, Thread, parse_threads},
};

impl Thread {
  /// Rows for this thread: the original post (if any) followed by each reply
  /// in input order.
  pub fn flatten(&self) -> Vec<FlatRecord> {
    let mut rows = Vec::with_capacity(self.replies.len() + 1);

    if let Some(op) = &self.original_post {
      rows.push(self.record(PostType::OriginalPost, op));
    }
    for reply in &self.replies {
      rows.push(self.record(PostType::Reply, reply));
    }

    rows
  }

  fn record(&self, post_type: PostType, post: &Post) -> FlatRecord {
    let mut row = FlatRecord::new();
    for (key, value) in self.metadata() {
      row.insert(key, value.clone());
    }
    row.insert(POST_TYPE_FIELD, Value::String(post_type.as_str().to_string()));
    row.overlay(post);
    row
  }
}

/// Concatenate the rows of every thread, preserving thread order.
pub fn flatten_threads(threads: &[Thread]) -> Vec<FlatRecord> {
  threads.iter().flat_map(Thread::flatten).collect()
}

/// Decode and flatten a whole document.
///
/// Fails on the first thread that is missing a required field or has the
/// wrong shape; no rows are returned in that case.
pub fn flatten(document: &Value) -> Result<Vec<FlatRecord>> {
  let threads = parse_threads(document)?;
  let records = flatten_threads(&threads);
  debug!(
    threads = threads.len(),
    records = records.len(),
    "flattened document"
  );
  Ok(records)
}
