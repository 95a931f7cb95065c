//! Read → flatten → write, for one document on disk.

use std::{
  ffi::OsString,
  fs,
  io::{self, Write},
  path::{Path, PathBuf},
};

use forumflat_core::{FlatRecord, Thread, flatten_threads, parse_document};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{
  config::Settings,
  error::{Error, Result},
};

/// Outcome of a successful [`convert`].
#[derive(Debug)]
pub struct Conversion {
  /// Where the table was written.
  pub output:  PathBuf,
  /// The rows that were written, in order.
  pub records: Vec<FlatRecord>,
}

// ─── Paths ───────────────────────────────────────────────────────────────────

/// Output path used when the caller gives none: `dir/name.json` becomes
/// `dir/name<suffix>.csv`.
///
/// An input without a `.json` extension keeps its whole file name, so the
/// result never collides with the input.
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
  let mut name: OsString = match (input.file_stem(), input.extension()) {
    (Some(stem), Some(ext)) if ext.eq_ignore_ascii_case("json") => stem.into(),
    _ => input.file_name().unwrap_or_default().into(),
  };
  name.push(suffix);
  name.push(".csv");
  input.with_file_name(name)
}

// ─── Input ───────────────────────────────────────────────────────────────────

/// Load and decode the document at `input`.
pub fn read_threads(input: &Path) -> Result<Vec<Thread>> {
  if !input.exists() {
    return Err(Error::SourceNotFound(input.to_path_buf()));
  }

  let text = fs::read_to_string(input).map_err(|source| Error::Read {
    path: input.to_path_buf(),
    source,
  })?;

  let threads = parse_document(&text)?;
  debug!(path = %input.display(), threads = threads.len(), "read document");
  Ok(threads)
}

// ─── Pipeline ────────────────────────────────────────────────────────────────

/// Flatten the document at `input` into a table at `output`, or at
/// [`default_output_path`] when `output` is `None`.
///
/// The whole table is rendered before anything touches the destination, and
/// the destination is replaced in one rename. On error no file is left
/// behind.
pub fn convert(
  input: &Path,
  output: Option<&Path>,
  settings: &Settings,
) -> Result<Conversion> {
  let options = settings.table_options()?;

  let threads = read_threads(input)?;
  let records = flatten_threads(&threads);

  let output = match output {
    Some(path) => path.to_path_buf(),
    None => default_output_path(input, &settings.suffix),
  };

  let mut table = Vec::new();
  forumflat_table::write_table(&records, &mut table, &options)?;
  persist(&output, &table)?;

  info!(
    input = %input.display(),
    output = %output.display(),
    records = records.len(),
    "wrote flattened table"
  );

  Ok(Conversion { output, records })
}

/// Replace `path` with `bytes` via a sibling temp file.
fn persist(path: &Path, bytes: &[u8]) -> Result<()> {
  let err = |source: io::Error| Error::Persist {
    path: path.to_path_buf(),
    source,
  };

  let dir = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };

  let mut tmp = NamedTempFile::new_in(dir).map_err(err)?;
  tmp.write_all(bytes).map_err(err)?;
  tmp.flush().map_err(err)?;

  // Temp files are created owner-only; give the output normal file modes.
  if let Some(perms) = output_permissions(path) {
    tmp.as_file().set_permissions(perms).map_err(err)?;
  }

  tmp.persist(path).map_err(|e| err(e.error))?;
  Ok(())
}

/// Mode for the finished table: whatever the destination already has,
/// otherwise the platform default for a new file.
fn output_permissions(path: &Path) -> Option<fs::Permissions> {
  match fs::metadata(path) {
    Ok(meta) => Some(meta.permissions()),
    Err(_) => default_permissions(),
  }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
  use std::os::unix::fs::PermissionsExt;
  Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> { None }
