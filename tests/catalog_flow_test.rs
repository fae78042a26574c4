//! End-to-end session flow
//!
//! Upload → report → browse/search → related items → canonical export
//! round-trip, the way the surrounding application drives the core.

use sortiment::{export, Catalog, Field, RawRow, SearchOptions, DEFAULT_RELATED_LIMIT};

fn row(pairs: &[(&str, &str)]) -> RawRow {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn upload() -> Vec<RawRow> {
    vec![
        row(&[
            ("Namn", "Stol Blå Ek"),
            ("Artikelnummer", "1001"),
            ("Färg", "Blå"),
            ("Huvudkategori", "Möbler"),
            ("Underkategori", "Stolar"),
        ]),
        row(&[
            ("Namn", "Stol Röd Björk"),
            ("Artikelnummer", "1002"),
            ("Färg", "Röd"),
            ("Huvudkategori", "Möbler"),
            ("Underkategori", "Stolar"),
        ]),
        row(&[
            ("Namn", "Bord Valnöt"),
            ("Artikelnummer", "1050"),
            ("Färg", "Brun"),
            ("Huvudkategori", "Möbler"),
            ("Underkategori", "Bord"),
        ]),
        row(&[
            ("Namn", "Kudde Blå"),
            ("Artikelnummer", "2001"),
            ("Färg", "Blå"),
            ("Huvudkategori", "Textil"),
            ("Underkategori", "Kuddar"),
        ]),
    ]
}

#[test]
fn test_full_session_flow() {
    let (catalog, report) = Catalog::import(&upload()).unwrap();

    // Five mapped columns; the rest is reported missing, nothing extra.
    assert_eq!(catalog.len(), 4);
    assert_eq!(report.missing.len(), Field::ALL.len() - 5);
    assert!(report.extra.is_empty());

    // Browse view: empty query keeps ingestion order.
    let browse = catalog.search("", &SearchOptions::default());
    assert_eq!(browse.len(), 4);
    assert_eq!(browse[0].product.identifier, "1001");

    // Free-text search with AND semantics.
    let hits = catalog.search("blå stol", &SearchOptions::default());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].product.name, "Stol Blå Ek");

    // Related items for the blue chair: its sibling chair first, then the
    // table (parent category only), then the cushion last.
    let related = catalog.related(0, DEFAULT_RELATED_LIMIT);
    let ids: Vec<&str> = related.iter().map(|p| p.identifier.as_str()).collect();
    assert_eq!(ids, vec!["1002", "1050", "2001"]);
}

/// Re-importing a canonical export reproduces the same records and a
/// clean report.
#[test]
fn test_canonical_export_round_trip() {
    let (catalog, _) = Catalog::import(&upload()).unwrap();

    let raw_rows = export::to_raw_rows(catalog.products());
    let (reimported, report) = Catalog::import(&raw_rows).unwrap();

    assert!(report.is_clean());
    assert_eq!(reimported, catalog);
}

/// Header row and value rows stay aligned for the outer CSV writer.
#[test]
fn test_export_rows_align() {
    let (catalog, _) = Catalog::import(&upload()).unwrap();

    let header = export::header_row();
    let rows = export::to_rows(catalog.products());
    assert!(rows.iter().all(|r| r.len() == header.len()));

    let name_column = header.iter().position(|h| *h == "Namn").unwrap();
    assert_eq!(rows[2][name_column], "Bord Valnöt");
}

/// Replacing the catalog is a whole-value swap; the old snapshot is
/// untouched and still serves queries.
#[test]
fn test_upload_replaces_catalog_atomically() {
    let (old_catalog, _) = Catalog::import(&upload()).unwrap();

    let next = vec![row(&[("Namn", "Matta Ull"), ("Artikelnummer", "9001")])];
    let (new_catalog, _) = Catalog::import(&next).unwrap();

    assert_eq!(new_catalog.len(), 1);
    assert_eq!(old_catalog.len(), 4);
    let hits = old_catalog.search("stol", &SearchOptions::default());
    assert_eq!(hits.len(), 2);
}
