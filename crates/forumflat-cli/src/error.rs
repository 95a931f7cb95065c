//! Error type for the conversion shell.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("file {} not found", .0.display())]
  SourceNotFound(PathBuf),

  #[error("failed to read {}: {source}", path.display())]
  Read {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error(transparent)]
  Flatten(#[from] forumflat_core::Error),

  #[error(transparent)]
  Table(#[from] forumflat_table::Error),

  #[error("failed to write {}: {source}", path.display())]
  Persist {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("configuration error: {0}")]
  Config(#[from] ::config::ConfigError),

  #[error("delimiter must be a single ASCII character, got {0:?}")]
  InvalidDelimiter(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
