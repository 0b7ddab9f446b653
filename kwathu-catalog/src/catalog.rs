use crate::unit::{ClassFilter, Unit, UnitClass};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Immutable table of bookable units.
///
/// Cloning is cheap; all clones share the same table.
#[derive(Debug, Clone)]
pub struct Catalog {
    units: Arc<Vec<Unit>>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and zero prices.
    pub fn new(units: Vec<Unit>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for unit in &units {
            if !seen.insert(unit.id.as_str()) {
                return Err(CatalogError::DuplicateId(unit.id.clone()));
            }
            if unit.price == 0 {
                return Err(CatalogError::InvalidPrice(unit.id.clone()));
            }
        }

        Ok(Self {
            units: Arc::new(units),
        })
    }

    /// Load a JSON array of units from disk
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Load(format!("{}: {}", path.display(), e)))?;
        let units: Vec<Unit> = serde_json::from_str(&raw)
            .map_err(|e| CatalogError::Load(format!("{}: {}", path.display(), e)))?;

        tracing::info!("Loaded {} units from {}", units.len(), path.display());
        Self::new(units)
    }

    /// The six Kwathu apartments.
    pub fn kwathu() -> Self {
        let basic = ["WiFi", "Air Conditioning", "Private Bathroom"];
        let premium = [
            "WiFi",
            "Air Conditioning",
            "Private Bathroom",
            "TV",
            "Refrigerator",
            "Kitchenette",
        ];
        let luxury = [
            "WiFi",
            "Air Conditioning",
            "Private Bathroom",
            "Smart TV",
            "Refrigerator",
            "Full Kitchen",
            "Balcony",
            "Washing Machine",
            "Living Room",
        ];

        let units = vec![
            Unit::new("1", UnitClass::Standard, "A101", 50000, &basic, "/standard.jpg", true),
            Unit::new("2", UnitClass::Standard, "A102", 50000, &[&basic[..], &["TV"][..]].concat(), "/standard.jpg", true),
            Unit::new("3", UnitClass::Premium, "B201", 75000, &premium, "/premium.jpg", true),
            Unit::new("4", UnitClass::Premium, "B202", 75000, &[&premium[..], &["Balcony"][..]].concat(), "/premium.jpg", false),
            Unit::new("5", UnitClass::Luxury, "C301", 120000, &luxury, "/luxury.jpg", true),
            Unit::new("6", UnitClass::Luxury, "C302", 120000, &[&luxury[..], &["Jacuzzi"][..]].concat(), "/luxury.jpg", true),
        ];

        Self {
            units: Arc::new(units),
        }
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id == id)
    }

    /// Units shown for a class filter, in catalog order. Unavailable units
    /// are included; callers decide whether they can be picked.
    pub fn filter(&self, filter: ClassFilter) -> Vec<&Unit> {
        self.units
            .iter()
            .filter(|unit| filter.matches(unit.class))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::kwathu()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate unit id: {0}")]
    DuplicateId(String),

    #[error("Unit {0} must have a positive nightly price")]
    InvalidPrice(String),

    #[error("Failed to load catalog: {0}")]
    Load(String),
}
