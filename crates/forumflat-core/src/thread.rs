//! Thread decoding.
//!
//! Threads arrive as loosely-typed JSON. Decoding checks only the shape the
//! flattener relies on: the four identifying fields must be present, the
//! original post must be an object when it is set, and replies must be an
//! array of objects. Field values themselves are carried through untouched.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A single post: an open-ended, ordered mapping of field name to value.
pub type Post = Map<String, Value>;

pub const THREAD_ID: &str = "thread_id";
pub const THREAD_TITLE: &str = "thread_title";
pub const THREAD_URL: &str = "thread_url";
pub const FORUM_CATEGORY: &str = "forum_category";
pub const THREAD_VIEWS: &str = "thread_views";
pub const THREAD_REPLIES: &str = "thread_replies";
pub const ORIGINAL_POST: &str = "original_post";
pub const REPLIES: &str = "replies";

/// Fields every thread must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 4] =
  [THREAD_ID, THREAD_TITLE, THREAD_URL, FORUM_CATEGORY];

// ─── Thread ──────────────────────────────────────────────────────────────────

/// One forum discussion.
#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
  pub thread_id:      Value,
  pub thread_title:   Value,
  pub thread_url:     Value,
  pub forum_category: Value,
  /// `Value::Null` when absent.
  pub thread_views:   Value,
  /// `Value::Null` when absent.
  pub thread_replies: Value,
  pub original_post:  Option<Post>,
  pub replies:        Vec<Post>,
}

impl Thread {
  /// Decode the thread at position `index` of a document.
  pub fn from_value(index: usize, value: &Value) -> Result<Self> {
    let Some(obj) = value.as_object() else {
      return Err(malformed(index, "thread", "an object"));
    };

    if let Some(field) = REQUIRED_FIELDS
      .into_iter()
      .find(|field| !obj.contains_key(*field))
    {
      return Err(Error::MissingRequiredField { index, field });
    }

    Ok(Self {
      thread_id: field_or_null(obj, THREAD_ID),
      thread_title: field_or_null(obj, THREAD_TITLE),
      thread_url: field_or_null(obj, THREAD_URL),
      forum_category: field_or_null(obj, FORUM_CATEGORY),
      thread_views: field_or_null(obj, THREAD_VIEWS),
      thread_replies: field_or_null(obj, THREAD_REPLIES),
      original_post: original_post(obj, index)?,
      replies: replies(obj, index)?,
    })
  }

  /// Thread-level columns, in output order.
  pub fn metadata(&self) -> [(&'static str, &Value); 6] {
    [
      (THREAD_ID, &self.thread_id),
      (THREAD_TITLE, &self.thread_title),
      (THREAD_URL, &self.thread_url),
      (FORUM_CATEGORY, &self.forum_category),
      (THREAD_VIEWS, &self.thread_views),
      (THREAD_REPLIES, &self.thread_replies),
    ]
  }
}

// ─── Documents ───────────────────────────────────────────────────────────────

/// Decode every thread of a document. The root must be an array; the first
/// bad thread aborts the whole decode.
pub fn parse_threads(document: &Value) -> Result<Vec<Thread>> {
  let items = document.as_array().ok_or(Error::NotAThreadList)?;
  items
    .iter()
    .enumerate()
    .map(|(index, item)| Thread::from_value(index, item))
    .collect()
}

/// Decode a document from JSON text.
pub fn parse_document(input: &str) -> Result<Vec<Thread>> {
  let document: Value = serde_json::from_str(input)?;
  parse_threads(&document)
}

// ─── Field helpers ───────────────────────────────────────────────────────────

fn malformed(
  index: usize,
  field: impl Into<String>,
  expected: &'static str,
) -> Error {
  Error::MalformedInput {
    index,
    field: field.into(),
    expected,
  }
}

fn field_or_null(obj: &Map<String, Value>, field: &str) -> Value {
  obj.get(field).cloned().unwrap_or(Value::Null)
}

/// An unset original post may be spelled as anything falsy: `null`, `false`,
/// `0`, `""`, `[]` or `{}`.
fn original_post(
  obj: &Map<String, Value>,
  index: usize,
) -> Result<Option<Post>> {
  match obj.get(ORIGINAL_POST) {
    None => Ok(None),
    Some(v) if is_falsy(v) => Ok(None),
    Some(Value::Object(post)) => Ok(Some(post.clone())),
    Some(_) => Err(malformed(index, ORIGINAL_POST, "an object")),
  }
}

fn replies(obj: &Map<String, Value>, index: usize) -> Result<Vec<Post>> {
  let items = match obj.get(REPLIES) {
    None => return Ok(Vec::new()),
    Some(Value::Array(items)) => items,
    Some(_) => return Err(malformed(index, REPLIES, "an array")),
  };

  items
    .iter()
    .enumerate()
    .map(|(i, item)| match item {
      Value::Object(post) => Ok(post.clone()),
      _ => Err(malformed(index, format!("{REPLIES}[{i}]"), "an object")),
    })
    .collect()
}

fn is_falsy(v: &Value) -> bool {
  match v {
    Value::Null => true,
    Value::Bool(b) => !b,
    Value::Number(n) => n.as_f64() == Some(0.0),
    Value::String(s) => s.is_empty(),
    Value::Array(a) => a.is_empty(),
    Value::Object(o) => o.is_empty(),
  }
}
