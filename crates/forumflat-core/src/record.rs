//! Output rows.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Column carrying the [`PostType`] tag of each row.
pub const POST_TYPE_FIELD: &str = "post_type";

// ─── Post type ───────────────────────────────────────────────────────────────

/// Which kind of post a row was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
  /// The post that opens a thread.
  OriginalPost,
  /// Any later post in the thread.
  Reply,
}

impl PostType {
  pub fn as_str(self) -> &'static str {
    match self {
      PostType::OriginalPost => "original_post",
      PostType::Reply => "reply",
    }
  }
}

impl fmt::Display for PostType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Flat record ─────────────────────────────────────────────────────────────

/// One denormalised row: thread metadata, the post-type tag and every field
/// of one post.
///
/// Keys keep the position of their first insertion. Writing an existing key
/// again replaces its value in place, so later overlays win collisions
/// without reordering the row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FlatRecord {
  fields: Map<String, Value>,
}

impl FlatRecord {
  pub fn new() -> Self { Self::default() }

  pub fn insert(&mut self, key: impl Into<String>, value: Value) {
    self.fields.insert(key.into(), value);
  }

  /// Copy every pair of `fields` onto the record, last write wins.
  pub fn overlay<'a, I>(&mut self, fields: I)
  where
    I: IntoIterator<Item = (&'a String, &'a Value)>,
  {
    for (key, value) in fields {
      self.fields.insert(key.clone(), value.clone());
    }
  }

  pub fn get(&self, key: &str) -> Option<&Value> { self.fields.get(key) }

  /// Field names in row order.
  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.fields.keys().map(String::as_str)
  }

  pub fn len(&self) -> usize { self.fields.len() }

  pub fn is_empty(&self) -> bool { self.fields.is_empty() }
}

impl From<Map<String, Value>> for FlatRecord {
  fn from(fields: Map<String, Value>) -> Self { Self { fields } }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn overlay_replaces_value_in_place() {
    let mut record = FlatRecord::new();
    record.insert("a", json!(1));
    record.insert("b", json!(2));

    let post = json!({ "a": "post", "c": 3 });
    record.overlay(post.as_object().unwrap());

    assert_eq!(record.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
    assert_eq!(record.get("a"), Some(&json!("post")));
  }

  #[test]
  fn post_type_serializes_as_snake_case() {
    assert_eq!(
      serde_json::to_value(PostType::OriginalPost).unwrap(),
      json!("original_post")
    );
    assert_eq!(PostType::Reply.to_string(), "reply");
  }
}
