//! Canonical product record.

use crate::schema::Field;
use serde::{Deserialize, Serialize};

/// One imported product.
///
/// Every canonical field is present as a string slot; a column missing
/// from the source leaves its slot empty. The article number is the
/// nominal key but is deliberately not required to be unique — blank and
/// duplicate identifiers are legal and only degrade disambiguation, they
/// never fail an import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub name: String,
    pub identifier: String,
    pub color: String,
    pub material: String,
    pub series: String,
    pub price_excl_tax: String,
    pub price_excl_tax_unit: String,
    pub price_incl_tax: String,
    pub price_incl_tax_unit: String,
    pub length: String,
    pub length_unit: String,
    pub width: String,
    pub width_unit: String,
    pub height: String,
    pub height_unit: String,
    pub depth: String,
    pub depth_unit: String,
    pub diameter: String,
    pub diameter_unit: String,
    pub capacity: String,
    pub capacity_unit: String,
    pub volume: String,
    pub volume_unit: String,
    pub weight: String,
    pub weight_unit: String,
    pub free_text: String,
    pub main_category: String,
    pub sub_category: String,
    pub image_url: String,
    pub product_url: String,
    pub description: String,
    pub extra_data: String,
}

impl Product {
    /// Value of one canonical field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Identifier => &self.identifier,
            Field::Color => &self.color,
            Field::Material => &self.material,
            Field::Series => &self.series,
            Field::PriceExclTax => &self.price_excl_tax,
            Field::PriceExclTaxUnit => &self.price_excl_tax_unit,
            Field::PriceInclTax => &self.price_incl_tax,
            Field::PriceInclTaxUnit => &self.price_incl_tax_unit,
            Field::Length => &self.length,
            Field::LengthUnit => &self.length_unit,
            Field::Width => &self.width,
            Field::WidthUnit => &self.width_unit,
            Field::Height => &self.height,
            Field::HeightUnit => &self.height_unit,
            Field::Depth => &self.depth,
            Field::DepthUnit => &self.depth_unit,
            Field::Diameter => &self.diameter,
            Field::DiameterUnit => &self.diameter_unit,
            Field::Capacity => &self.capacity,
            Field::CapacityUnit => &self.capacity_unit,
            Field::Volume => &self.volume,
            Field::VolumeUnit => &self.volume_unit,
            Field::Weight => &self.weight,
            Field::WeightUnit => &self.weight_unit,
            Field::FreeText => &self.free_text,
            Field::MainCategory => &self.main_category,
            Field::SubCategory => &self.sub_category,
            Field::ImageUrl => &self.image_url,
            Field::ProductUrl => &self.product_url,
            Field::Description => &self.description,
            Field::ExtraData => &self.extra_data,
        }
    }

    /// Set one canonical field.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Identifier => self.identifier = value,
            Field::Color => self.color = value,
            Field::Material => self.material = value,
            Field::Series => self.series = value,
            Field::PriceExclTax => self.price_excl_tax = value,
            Field::PriceExclTaxUnit => self.price_excl_tax_unit = value,
            Field::PriceInclTax => self.price_incl_tax = value,
            Field::PriceInclTaxUnit => self.price_incl_tax_unit = value,
            Field::Length => self.length = value,
            Field::LengthUnit => self.length_unit = value,
            Field::Width => self.width = value,
            Field::WidthUnit => self.width_unit = value,
            Field::Height => self.height = value,
            Field::HeightUnit => self.height_unit = value,
            Field::Depth => self.depth = value,
            Field::DepthUnit => self.depth_unit = value,
            Field::Diameter => self.diameter = value,
            Field::DiameterUnit => self.diameter_unit = value,
            Field::Capacity => self.capacity = value,
            Field::CapacityUnit => self.capacity_unit = value,
            Field::Volume => self.volume = value,
            Field::VolumeUnit => self.volume_unit = value,
            Field::Weight => self.weight = value,
            Field::WeightUnit => self.weight_unit = value,
            Field::FreeText => self.free_text = value,
            Field::MainCategory => self.main_category = value,
            Field::SubCategory => self.sub_category = value,
            Field::ImageUrl => self.image_url = value,
            Field::ProductUrl => self.product_url = value,
            Field::Description => self.description = value,
            Field::ExtraData => self.extra_data = value,
        }
    }

    /// Values in canonical export order, paired with their column labels.
    pub fn to_row(&self) -> Vec<(&'static str, String)> {
        Field::ALL
            .iter()
            .map(|field| (field.label(), self.get(*field).to_string()))
            .collect()
    }
}
