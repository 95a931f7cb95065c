//! Runtime settings.
//!
//! Layered from an optional config file, then `FORUMFLAT_*` environment
//! variables (e.g. `FORUMFLAT_DELIMITER=";"`).

use std::path::Path;

use forumflat_table::TableOptions;
use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Field separator; a single ASCII character.
  pub delimiter: String,
  /// Appended to the input's stem when no output path is given.
  pub suffix:    String,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      delimiter: ",".to_string(),
      suffix:    "_flattened".to_string(),
    }
  }
}

impl Settings {
  /// Load settings, reading `path` first when given.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    let mut builder = ::config::Config::builder();
    if let Some(path) = path {
      builder = builder.add_source(::config::File::from(path).required(true));
    }
    let settings = builder
      .add_source(::config::Environment::with_prefix("FORUMFLAT"))
      .build()?;
    Ok(settings.try_deserialize()?)
  }

  pub fn table_options(&self) -> Result<TableOptions> {
    let mut chars = self.delimiter.chars();
    match (chars.next(), chars.next()) {
      (Some(c), None) if c.is_ascii() => {
        Ok(TableOptions::default().with_delimiter(c as u8))
      }
      _ => Err(Error::InvalidDelimiter(self.delimiter.clone())),
    }
  }
}
