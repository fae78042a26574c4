//! Canonical-order export of the record list.
//!
//! The outer application writes the actual CSV/XLSX bytes; this module
//! only hands it rows in the fixed canonical column order, plus JSON for
//! the rendering layer. Feeding [`to_raw_rows`] back into the import
//! pipeline reproduces the same records.

use crate::error::Result;
use crate::import::RawRow;
use crate::product::Product;
use crate::schema::Field;

/// Column labels in canonical export order.
pub fn header_row() -> Vec<&'static str> {
    Field::ALL.iter().map(|field| field.label()).collect()
}

/// One value row per record, canonical column order.
pub fn to_rows(products: &[Product]) -> Vec<Vec<String>> {
    products
        .iter()
        .map(|product| {
            Field::ALL
                .iter()
                .map(|field| product.get(*field).to_string())
                .collect()
        })
        .collect()
}

/// Rows keyed by canonical labels, ready to feed back into the import
/// pipeline.
pub fn to_raw_rows(products: &[Product]) -> Vec<RawRow> {
    products
        .iter()
        .map(|product| {
            Field::ALL
                .iter()
                .map(|field| (field.label().to_string(), product.get(*field).to_string()))
                .collect()
        })
        .collect()
}

/// Pretty JSON of the record list for the rendering layer.
pub fn to_json(products: &[Product]) -> Result<String> {
    Ok(serde_json::to_string_pretty(products)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_row_order() {
        let header = header_row();
        assert_eq!(header.len(), Field::ALL.len());
        assert_eq!(header[0], "Namn");
        assert_eq!(header[1], "Artikelnummer");
        assert_eq!(header[header.len() - 1], "Extra data");
    }

    #[test]
    fn test_to_rows_aligns_with_header() {
        let product = Product {
            name: "Stol".to_string(),
            identifier: "1001".to_string(),
            ..Default::default()
        };

        let rows = to_rows(&[product]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), Field::ALL.len());
        assert_eq!(rows[0][0], "Stol");
        assert_eq!(rows[0][1], "1001");
    }

    #[test]
    fn test_to_json_contains_records() {
        let product = Product {
            name: "Lampa Mässing".to_string(),
            ..Default::default()
        };
        let json = to_json(&[product]).unwrap();
        assert!(json.contains("Lampa Mässing"));
    }
}
