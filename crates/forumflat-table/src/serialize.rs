//! Column union and row writer.

use std::{borrow::Cow, collections::HashSet, io::Write};

use forumflat_core::FlatRecord;
use serde_json::Value;

use crate::{TableOptions, error::Result};

// ─── Header ──────────────────────────────────────────────────────────────────

/// Union of the keys of `records`, in the order they are first seen.
pub fn columns(records: &[FlatRecord]) -> Vec<String> {
  let mut seen = HashSet::new();
  let mut out = Vec::new();
  for key in records.iter().flat_map(FlatRecord::keys) {
    if seen.insert(key) {
      out.push(key.to_string());
    }
  }
  out
}

// ─── Cells ───────────────────────────────────────────────────────────────────

/// Text for one cell. `null` is empty, strings are verbatim, everything else
/// is compact JSON.
pub fn render_cell(value: &Value) -> Cow<'_, str> {
  match value {
    Value::Null => Cow::Borrowed(""),
    Value::String(s) => Cow::Borrowed(s),
    Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
    Value::Number(n) => Cow::Owned(n.to_string()),
    Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
  }
}

// ─── Writer ──────────────────────────────────────────────────────────────────

/// Write `records` as a header row followed by one row per record.
///
/// Nothing is written for an empty slice.
pub fn write_table<W: Write>(
  records: &[FlatRecord],
  writer: W,
  options: &TableOptions,
) -> Result<()> {
  if records.is_empty() {
    return Ok(());
  }

  let header = columns(records);
  let mut out = csv::WriterBuilder::new()
    .delimiter(options.delimiter)
    .from_writer(writer);

  out.write_record(&header)?;
  for record in records {
    let row: Vec<Cow<'_, str>> = header
      .iter()
      .map(|key| record.get(key).map(render_cell).unwrap_or_default())
      .collect();
    out.write_record(row.iter().map(|cell| cell.as_bytes()))?;
  }
  out.flush()?;

  Ok(())
}

/// Render `records` into an in-memory string.
pub fn to_string(
  records: &[FlatRecord],
  options: &TableOptions,
) -> Result<String> {
  let mut buf = Vec::new();
  write_table(records, &mut buf, options)?;
  Ok(String::from_utf8(buf)?)
}
