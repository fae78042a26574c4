//! Sortiment — product catalog core
//!
//! A spreadsheet export is decoded by an external collaborator into raw
//! rows; this crate maps them onto the canonical product schema with a
//! column-mismatch report, then serves per-keystroke search and
//! related-items ranking over the in-memory record list. There is no
//! persistence: every upload rebuilds the catalog from scratch, and the
//! caller swaps the fresh catalog in atomically.

pub mod catalog;
pub mod error;
pub mod export;
pub mod import;
pub mod product;
pub mod recommend;
pub mod schema;
pub mod search;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use import::{import_rows, Import, ImportReport, RawRow, RowSource};
pub use product::Product;
pub use recommend::{related, DEFAULT_RELATED_LIMIT};
pub use schema::Field;
pub use search::{classify_query, normalize, search, QueryMode, SearchHit, SearchOptions};
