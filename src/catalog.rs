// src/catalog.rs

use crate::domain::property::{Property, PropertyDetail};
use crate::errors::CatalogError;
use std::collections::{HashMap, HashSet};

const SEED_PROPERTIES: &str = include_str!("../data/properties.json");
const SEED_DETAILS: &str = include_str!("../data/property_details.json");

/// The read-only set of listed properties, loaded once at startup and shared
/// by every request.
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<Property>,
    details: HashMap<u32, PropertyDetail>,
}

impl Catalog {
    /// Loads the seed data compiled into the binary.
    pub fn seed() -> Result<Self, CatalogError> {
        Self::from_json(SEED_PROPERTIES, SEED_DETAILS)
    }

    pub fn from_json(properties_json: &str, details_json: &str) -> Result<Self, CatalogError> {
        let properties: Vec<Property> = serde_json::from_str(properties_json)?;
        let details: Vec<PropertyDetail> = serde_json::from_str(details_json)?;
        Self::new(properties, details)
    }

    pub fn new(properties: Vec<Property>, details: Vec<PropertyDetail>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(properties.len());

        for p in &properties {
            if p.id == 0 {
                return Err(CatalogError::InvalidId);
            }
            if !ids.insert(p.id) {
                return Err(CatalogError::DuplicateId(p.id));
            }
            if p.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(p.id));
            }
            if p.after_repair_value < p.price {
                tracing::warn!(
                    id = p.id,
                    price = p.price,
                    after_repair_value = p.after_repair_value,
                    "after-repair value is below the asking price"
                );
            }
        }

        let mut by_id = HashMap::with_capacity(details.len());
        for d in details {
            if !ids.contains(&d.property_id) {
                return Err(CatalogError::OrphanDetail(d.property_id));
            }
            by_id.insert(d.property_id, d);
        }

        tracing::debug!(
            properties = properties.len(),
            details = by_id.len(),
            "catalog loaded"
        );

        Ok(Self {
            properties,
            details: by_id,
        })
    }

    /// All properties in seed order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Looks up a property and, if we have one, its detail record.
    pub fn find(&self, id: u32) -> Option<(&Property, Option<&PropertyDetail>)> {
        self.properties
            .iter()
            .find(|p| p.id == id)
            .map(|p| (p, self.details.get(&id)))
    }
}
