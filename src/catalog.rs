//! Caller-owned catalog handle.
//!
//! A browsing session owns exactly one `Catalog` at a time. Every upload
//! builds a fresh one; the caller swaps it in only on success, so the
//! previous record list stays valid and renderable while a slow decode is
//! still running. Nothing here is global — two sessions can hold two
//! catalogs without cross-talk.

use crate::error::Result;
use crate::import::{self, ImportReport, RawRow, RowSource};
use crate::product::Product;
use crate::recommend;
use crate::search::{self, SearchHit, SearchOptions};
use serde::Serialize;

/// The active product list of one browsing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from pre-decoded rows.
    ///
    /// On error the caller keeps its current catalog; nothing partial
    /// comes back.
    pub fn import(rows: &[RawRow]) -> Result<(Self, ImportReport)> {
        let import = import::import_rows(rows)?;
        Ok((
            Self {
                products: import.products,
            },
            import.report,
        ))
    }

    /// Build a catalog straight from a decoding collaborator.
    pub fn import_from<S: RowSource>(source: &mut S) -> Result<(Self, ImportReport)> {
        let import = import::import_from(source)?;
        Ok((
            Self {
                products: import.products,
            },
            import.report,
        ))
    }

    /// Wrap an already-built record list.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All records in ingestion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Search the catalog. Cheap enough to run per keystroke; never
    /// mutates the stored records.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchHit<'_>> {
        search::search(&self.products, query, options)
    }

    /// Records related to the one at `focal_index`.
    pub fn related(&self, focal_index: usize, limit: usize) -> Vec<&Product> {
        recommend::related(&self.products, focal_index, limit)
    }
}
