//! Import pipeline tests against the public API
//!
//! Covers the hard failure modes and the column diagnostics contract.

use sortiment::{import_rows, Error, Field, RawRow};

fn row(pairs: &[(&str, &str)]) -> RawRow {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Zero rows is a hard failure, not an empty catalog.
#[test]
fn test_empty_upload_is_rejected() {
    let rows: Vec<RawRow> = Vec::new();
    assert!(matches!(import_rows(&rows), Err(Error::EmptyFile)));
}

/// Record count always equals row count for valid input.
#[test]
fn test_record_count_matches_row_count() {
    let rows: Vec<RawRow> = (0..25)
        .map(|i| {
            let name = format!("Produkt {}", i);
            let identifier = format!("{}", 1000 + i);
            row(&[("Namn", name.as_str()), ("Artikelnummer", identifier.as_str())])
        })
        .collect();

    let import = import_rows(&rows).unwrap();
    assert_eq!(import.products.len(), 25);
}

/// Every record exposes the full canonical field set no matter how sparse
/// the source columns were.
#[test]
fn test_records_are_always_complete() {
    let rows = vec![row(&[("Namn", "Pall")])];
    let import = import_rows(&rows).unwrap();

    let product = &import.products[0];
    assert_eq!(product.name, "Pall");
    for field in Field::ALL {
        if field != Field::Name {
            assert_eq!(product.get(field), "", "field {}", field.label());
        }
    }
}

/// Headers {Namn, Artikelnummer} leave everything else
/// missing and nothing extra.
#[test]
fn test_missing_set_is_schema_minus_mapped() {
    let rows = vec![row(&[("Namn", "Stol"), ("Artikelnummer", "1")])];
    let import = import_rows(&rows).unwrap();

    let expected: Vec<String> = Field::ALL
        .iter()
        .filter(|f| !matches!(f, Field::Name | Field::Identifier))
        .map(|f| f.label().to_string())
        .collect();
    assert_eq!(import.report.missing, expected);
    assert!(import.report.extra.is_empty());
}

/// Differently-cased and padded headers land in the same canonical field.
#[test]
fn test_header_variants_map_alike() {
    for header in ["Färg", "FÄRG", "färg", "Färg "] {
        let rows = vec![row(&[(header, "Blå")])];
        let import = import_rows(&rows).unwrap();
        assert_eq!(import.products[0].color, "Blå", "header {:?}", header);
    }
}

/// A report never blocks the import; warnings ride along with the records.
#[test]
fn test_mismatched_columns_still_import() {
    let rows = vec![row(&[("Namn", "Stol"), ("Lagerstatus", "4")])];
    let import = import_rows(&rows).unwrap();

    assert_eq!(import.products.len(), 1);
    assert_eq!(import.report.extra, vec!["Lagerstatus"]);
    assert!(!import.report.is_clean());
}
