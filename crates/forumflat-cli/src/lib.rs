//! File-level shell around the forum flattener.
//!
//! [`convert::convert`] reads a scrape document from disk, flattens it and
//! writes the resulting table next to it (or wherever the caller asks).

pub mod config;
pub mod convert;
pub mod error;

pub use config::Settings;
pub use convert::{Conversion, convert, default_output_path, read_threads};
pub use error::{Error, Result};
