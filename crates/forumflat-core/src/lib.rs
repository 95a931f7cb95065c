//! Core types and the flattening transform for forum-scrape documents.
//!
//! A scrape document is a JSON array of threads, each carrying an optional
//! original post and a list of replies. [`flatten`] turns it into one
//! [`FlatRecord`] per post, with the owning thread's metadata copied onto
//! every row.
//!
//! This crate does no I/O; reading files and writing tables live elsewhere.
//!
//! # Quick start
//!
//! ```
//! use serde_json::json;
//!
//! let doc = json!([{
//!   "thread_id": "t1",
//!   "thread_title": "Hi",
//!   "thread_url": "u",
//!   "forum_category": "General",
//!   "original_post": { "author": "A", "body": "hello" },
//!   "replies": [{ "author": "B", "body": "reply1" }],
//! }]);
//!
//! let records = forumflat_core::flatten(&doc).unwrap();
//! assert_eq!(records.len(), 2);
//! ```

pub mod error;
pub mod flatten;
pub mod record;
pub mod thread;

pub use error::{Error, Result};
pub use flatten::{flatten, flatten_threads};
pub use record::{FlatRecord, PostType};
pub use thread::{Post, Thread, parse_document, parse_threads};

#[cfg(test)]
mod tests;
