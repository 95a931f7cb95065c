//! Error types for `forumflat-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A thread lacks one of its identifying fields.
  #[error("thread {index}: missing required field `{field}`")]
  MissingRequiredField { index: usize, field: &'static str },

  /// A thread, or one of its fields, has the wrong JSON shape.
  #[error("thread {index}: field `{field}` must be {expected}")]
  MalformedInput {
    index:    usize,
    field:    String,
    expected: &'static str,
  },

  #[error("document root must be an array of threads")]
  NotAThreadList,

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
