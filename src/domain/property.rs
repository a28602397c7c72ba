// src/domain/property.rs

use chrono::NaiveDate;
use serde::Deserialize;

/// The closed set of property types we list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "Single Family")]
    SingleFamily,
    #[serde(rename = "Multi Family")]
    MultiFamily,
    #[serde(rename = "Townhouse")]
    Townhouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [
        PropertyType::SingleFamily,
        PropertyType::MultiFamily,
        PropertyType::Townhouse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::SingleFamily => "Single Family",
            PropertyType::MultiFamily => "Multi Family",
            PropertyType::Townhouse => "Townhouse",
        }
    }
}

/// A listed property as it appears in the seed data.
///
/// Records are read-only once the catalog is loaded. `after_repair_value` is
/// expected to be at least `price` but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub price: u64,
    pub after_repair_value: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,
    pub address: String,
    #[serde(rename = "estimatedROI")]
    pub estimated_roi: f64,
    pub image: String,
    pub status: String,
    pub date_added: NaiveDate,
}

/// Neighborhood facts shown on the detail page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    pub school_rating: String,
    pub crime_rate: String,
    pub walk_score: u8,
    pub median_home_value: u64,
    pub market_trend: String,
}

/// Extra information for the detail view of a single property.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetail {
    pub property_id: u32,
    pub description: String,
    pub lot_size: String,
    pub year_built: u16,
    pub estimated_repair_cost: u64,
    pub renovation_plan: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub neighborhood: Neighborhood,
}

impl PropertyDetail {
    /// Profit left after buying at list price and paying for the repairs.
    /// Negative when the numbers don't work out.
    pub fn potential_profit(&self, property: &Property) -> i64 {
        property.after_repair_value as i64
            - property.price as i64
            - self.estimated_repair_cost as i64
    }
}
