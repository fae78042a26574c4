//! Import pipeline: raw spreadsheet rows to canonical product records.
//!
//! ## Flow
//! 1. Headers come from the first row (the decoder guarantees uniform rows)
//! 2. Alias lookup maps each header to a canonical field
//! 3. Column diagnostics: missing fields and ignored extra headers
//! 4. Every row becomes one full record, empty string where nothing maps
//!
//! The result is atomic: either the whole upload imports, or a hard error
//! comes back and the caller keeps its previous catalog.

use crate::error::{Error, Result};
use crate::product::Product;
use crate::schema::{self, Field};
use serde::Serialize;
use std::collections::HashMap;

/// One raw row as produced by the decoding collaborator.
pub type RawRow = HashMap<String, String>;

/// Seam to the spreadsheet decoder (CSV or workbook). The core never
/// touches file bytes itself.
pub trait RowSource {
    type Error: std::fmt::Display;

    /// Produce every row of the upload, or fail as a whole.
    fn read_rows(&mut self) -> std::result::Result<Vec<RawRow>, Self::Error>;
}

/// Column diagnostics for one import.
///
/// Informational only — an import with missing or extra columns still
/// succeeds; the rendering layer shows the report as a warning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Canonical fields with no source column, in schema order.
    pub missing: Vec<String>,
    /// Raw headers that matched no canonical field, sorted.
    pub extra: Vec<String>,
}

impl ImportReport {
    /// True when every canonical field had a column and no header was
    /// ignored.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Atomic import result.
#[derive(Debug, Clone)]
pub struct Import {
    pub products: Vec<Product>,
    pub report: ImportReport,
}

/// Import pre-decoded rows.
///
/// # Errors
/// [`Error::EmptyFile`] when `rows` is empty. Column mismatches are not
/// errors; they land in the report.
pub fn import_rows(rows: &[RawRow]) -> Result<Import> {
    if rows.is_empty() {
        return Err(Error::EmptyFile);
    }

    // Sorted header order keeps the field mapping and the report
    // deterministic regardless of HashMap iteration order.
    let mut headers: Vec<&str> = rows[0].keys().map(String::as_str).collect();
    headers.sort_unstable();

    let mut header_for: HashMap<Field, &str> = HashMap::new();
    let mut extra = Vec::new();
    for header in headers {
        match schema::lookup(header) {
            // The first header mapped to a field feeds it.
            Some(field) => {
                header_for.entry(field).or_insert(header);
            }
            None => extra.push(header.to_string()),
        }
    }

    let missing: Vec<String> = Field::ALL
        .iter()
        .filter(|field| !header_for.contains_key(field))
        .map(|field| field.label().to_string())
        .collect();

    let products = rows
        .iter()
        .map(|row| {
            let mut product = Product::default();
            for field in Field::ALL {
                if let Some(header) = header_for.get(&field) {
                    if let Some(value) = row.get(*header) {
                        product.set(field, value.clone());
                    }
                }
            }
            product
        })
        .collect();

    Ok(Import {
        products,
        report: ImportReport { missing, extra },
    })
}

/// Import straight from a decoding collaborator.
///
/// A decoder failure aborts the whole import as [`Error::Decode`]; nothing
/// partial is ever emitted.
pub fn import_from<S: RowSource>(source: &mut S) -> Result<Import> {
    let rows = source
        .read_rows()
        .map_err(|e| Error::Decode(e.to_string()))?;
    import_rows(&rows)
}
