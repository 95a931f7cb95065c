//! Flattening behaviour over whole documents.

use serde_json::{Value, json};

use crate::{Error, FlatRecord, flatten, parse_document};

fn thread(id: &str, op: Value, replies: Value) -> Value {
  json!({
    "thread_id": id,
    "thread_title": format!("Title {id}"),
    "thread_url": format!("https://forum.example/{id}"),
    "forum_category": "General",
    "thread_views": 10,
    "thread_replies": 1,
    "original_post": op,
    "replies": replies,
  })
}

static NULL: Value = Value::Null;

fn column<'a>(records: &'a [FlatRecord], key: &str) -> Vec<&'a Value> {
  records.iter().map(|r| r.get(key).unwrap_or(&NULL)).collect()
}

// ─── Worked example ──────────────────────────────────────────────────────────

#[test]
fn single_thread_example() {
  let doc = json!([{
    "thread_id": "t1",
    "thread_title": "Hi",
    "thread_url": "u",
    "forum_category": "General",
    "thread_views": 10,
    "thread_replies": 1,
    "original_post": { "author": "A", "body": "hello" },
    "replies": [{ "author": "B", "body": "reply1" }],
  }]);

  let records = flatten(&doc).unwrap();
  assert_eq!(records.len(), 2);

  let expected_op = json!({
    "thread_id": "t1",
    "thread_title": "Hi",
    "thread_url": "u",
    "forum_category": "General",
    "thread_views": 10,
    "thread_replies": 1,
    "post_type": "original_post",
    "author": "A",
    "body": "hello",
  });
  assert_eq!(serde_json::to_value(&records[0]).unwrap(), expected_op);
  assert_eq!(
    records[0].keys().collect::<Vec<_>>(),
    [
      "thread_id",
      "thread_title",
      "thread_url",
      "forum_category",
      "thread_views",
      "thread_replies",
      "post_type",
      "author",
      "body",
    ]
  );

  assert_eq!(records[1].get("post_type"), Some(&json!("reply")));
  assert_eq!(records[1].get("author"), Some(&json!("B")));
  assert_eq!(records[1].get("body"), Some(&json!("reply1")));
  assert_eq!(records[1].get("thread_id"), Some(&json!("t1")));
}

// ─── Row count ───────────────────────────────────────────────────────────────

#[test]
fn row_count_with_and_without_original_post() {
  let replies = json!([{ "n": 1 }, { "n": 2 }, { "n": 3 }]);
  let doc = json!([
    thread("a", json!({ "n": 0 }), replies.clone()),
    thread("b", json!(null), replies),
    thread("c", json!({}), json!([])),
  ]);

  let records = flatten(&doc).unwrap();
  assert_eq!(records.len(), (1 + 3) + 3);
}

#[test]
fn missing_replies_field_is_empty() {
  let doc = json!([{
    "thread_id": "t",
    "thread_title": "x",
    "thread_url": "u",
    "forum_category": "c",
    "original_post": { "body": "only" },
  }]);

  let records = flatten(&doc).unwrap();
  assert_eq!(records.len(), 1);
  assert_eq!(records[0].get("thread_views"), Some(&Value::Null));
  assert_eq!(records[0].get("thread_replies"), Some(&Value::Null));
}

#[test]
fn empty_document_yields_no_rows() {
  assert!(flatten(&json!([])).unwrap().is_empty());
}

// ─── Order ───────────────────────────────────────────────────────────────────

#[test]
fn preserves_thread_and_post_order() {
  let doc = json!([
    thread("a", json!({ "seq": "a0" }), json!([{ "seq": "a1" }, { "seq": "a2" }])),
    thread("b", json!(null), json!([{ "seq": "b1" }])),
    thread("c", json!({ "seq": "c0" }), json!([])),
  ]);

  let records = flatten(&doc).unwrap();
  let seq: Vec<_> = column(&records, "seq")
    .into_iter()
    .map(|v| v.as_str().unwrap())
    .collect();
  assert_eq!(seq, ["a0", "a1", "a2", "b1", "c0"]);

  let types: Vec<_> = column(&records, "post_type")
    .into_iter()
    .map(|v| v.as_str().unwrap())
    .collect();
  assert_eq!(types, ["original_post", "reply", "reply", "reply", "original_post"]);
}

// ─── Collisions ──────────────────────────────────────────────────────────────

#[test]
fn post_fields_win_collisions() {
  let doc = json!([thread(
    "t1",
    json!({ "thread_id": "from-post", "post_type": "sticky", "body": "x" }),
    json!([{ "forum_category": "Overridden", "thread_views": null }]),
  )]);

  let records = flatten(&doc).unwrap();

  assert_eq!(records[0].get("thread_id"), Some(&json!("from-post")));
  assert_eq!(records[0].get("post_type"), Some(&json!("sticky")));
  assert_eq!(records[1].get("forum_category"), Some(&json!("Overridden")));
  assert_eq!(records[1].get("thread_views"), Some(&Value::Null));
  assert_eq!(records[1].get("post_type"), Some(&json!("reply")));
}

#[test]
fn collisions_keep_metadata_column_position() {
  let doc = json!([thread("t1", json!({ "body": "x", "thread_id": "p" }), json!([]))]);
  let records = flatten(&doc).unwrap();

  let keys: Vec<_> = records[0].keys().collect();
  assert_eq!(keys[0], "thread_id");
  assert_eq!(keys.last(), Some(&"body"));
  assert_eq!(keys.len(), 8);
}

// ─── Fail-fast ───────────────────────────────────────────────────────────────

#[test]
fn missing_required_field_aborts_everything() {
  let mut broken = thread("b", json!({ "body": "x" }), json!([]));
  broken.as_object_mut().unwrap().remove("forum_category");
  let doc = json!([thread("a", json!({ "body": "ok" }), json!([])), broken]);

  let err = flatten(&doc).unwrap_err();
  let Error::MissingRequiredField { index, field } = err else {
    panic!("expected MissingRequiredField, got {err:?}")
  };
  assert_eq!(index, 1);
  assert_eq!(field, "forum_category");
}

#[test]
fn malformed_reply_aborts_everything() {
  let doc = json!([
    thread("a", json!({ "body": "ok" }), json!([])),
    thread("b", json!(null), json!({ "not": "a list" })),
  ]);

  let err = flatten(&doc).unwrap_err();
  assert_eq!(err.to_string(), "thread 1: field `replies` must be an array");
}

// ─── Determinism ─────────────────────────────────────────────────────────────

#[test]
fn flattening_is_deterministic() {
  let text = r#"[
    {"thread_id": 7, "thread_title": "T", "thread_url": "u", "forum_category": "c",
     "original_post": {"z": 1, "a": 2}, "replies": [{"m": true}, {"b": [1, 2]}]}
  ]"#;

  let first = crate::flatten_threads(&parse_document(text).unwrap());
  let second = crate::flatten_threads(&parse_document(text).unwrap());
  assert_eq!(first, second);
  assert_eq!(first[0].keys().last(), Some("a"));
}
