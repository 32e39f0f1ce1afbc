//! Storage is a single JSON document.
//!  - The document is an object keyed by entry name.
//!  - Every entry keeps the dates of its updates as `YYYY-MM-DD` strings.
//!  - The document is always read whole and written whole.

pub mod dataset_storage;
pub mod entities;
