//! Canonical product schema and header alias table.
//!
//! Spreadsheet exports name their columns freely (`Färg`, `FÄRG `,
//! `pris exkl moms`, `PrisExklMoms`...). Every canonical field registers
//! two alias keys: its label lower-cased, and that key with whitespace,
//! hyphens and parentheses stripped. Lookup normalizes the raw header the
//! same way and tries the exact form before the stripped form.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One canonical product field.
///
/// The set is closed: no field is added or removed at runtime. Variant
/// order is the export column order; lookup does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Identifier,
    Color,
    Material,
    Series,
    PriceExclTax,
    PriceExclTaxUnit,
    PriceInclTax,
    PriceInclTaxUnit,
    Length,
    LengthUnit,
    Width,
    WidthUnit,
    Height,
    HeightUnit,
    Depth,
    DepthUnit,
    Diameter,
    DiameterUnit,
    Capacity,
    CapacityUnit,
    Volume,
    VolumeUnit,
    Weight,
    WeightUnit,
    FreeText,
    MainCategory,
    SubCategory,
    ImageUrl,
    ProductUrl,
    Description,
    ExtraData,
}

impl Field {
    /// All canonical fields in export column order.
    pub const ALL: [Field; 32] = [
        Field::Name,
        Field::Identifier,
        Field::Color,
        Field::Material,
        Field::Series,
        Field::PriceExclTax,
        Field::PriceExclTaxUnit,
        Field::PriceInclTax,
        Field::PriceInclTaxUnit,
        Field::Length,
        Field::LengthUnit,
        Field::Width,
        Field::WidthUnit,
        Field::Height,
        Field::HeightUnit,
        Field::Depth,
        Field::DepthUnit,
        Field::Diameter,
        Field::DiameterUnit,
        Field::Capacity,
        Field::CapacityUnit,
        Field::Volume,
        Field::VolumeUnit,
        Field::Weight,
        Field::WeightUnit,
        Field::FreeText,
        Field::MainCategory,
        Field::SubCategory,
        Field::ImageUrl,
        Field::ProductUrl,
        Field::Description,
        Field::ExtraData,
    ];

    /// Column label as written in a well-formed export.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Namn",
            Field::Identifier => "Artikelnummer",
            Field::Color => "Färg",
            Field::Material => "Material",
            Field::Series => "Serie",
            Field::PriceExclTax => "Pris exkl moms",
            Field::PriceExclTaxUnit => "Pris exkl moms (enhet)",
            Field::PriceInclTax => "Pris inkl moms",
            Field::PriceInclTaxUnit => "Pris inkl moms (enhet)",
            Field::Length => "Längd",
            Field::LengthUnit => "Längd (enhet)",
            Field::Width => "Bredd",
            Field::WidthUnit => "Bredd (enhet)",
            Field::Height => "Höjd",
            Field::HeightUnit => "Höjd (enhet)",
            Field::Depth => "Djup",
            Field::DepthUnit => "Djup (enhet)",
            Field::Diameter => "Diameter",
            Field::DiameterUnit => "Diameter (enhet)",
            Field::Capacity => "Kapacitet",
            Field::CapacityUnit => "Kapacitet (enhet)",
            Field::Volume => "Volym",
            Field::VolumeUnit => "Volym (enhet)",
            Field::Weight => "Vikt",
            Field::WeightUnit => "Vikt (enhet)",
            Field::FreeText => "Fritextdata",
            Field::MainCategory => "Huvudkategori",
            Field::SubCategory => "Underkategori",
            Field::ImageUrl => "Bild-URL",
            Field::ProductUrl => "Produkt-URL",
            Field::Description => "Beskrivning",
            Field::ExtraData => "Extra data",
        }
    }
}

/// Strip whitespace, hyphens and parentheses from an already lower-cased key.
fn stripped_key(key: &str) -> String {
    key.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

lazy_static! {
    static ref ALIASES: HashMap<String, Field> = {
        let mut map = HashMap::new();
        for field in Field::ALL {
            let exact = field.label().to_lowercase();
            let stripped = stripped_key(&exact);
            // First registration wins, in declared schema order.
            map.entry(exact).or_insert(field);
            map.entry(stripped).or_insert(field);
        }
        map
    };
}

/// Map a raw column header to its canonical field.
///
/// Pure function of the header and the static schema; it never fails. An
/// unrecognized header returns `None` and is carried as an extra column.
pub fn lookup(header: &str) -> Option<Field> {
    let key = header.trim().to_lowercase();
    ALIASES
        .get(&key)
        .or_else(|| ALIASES.get(&stripped_key(&key)))
        .copied()
}
