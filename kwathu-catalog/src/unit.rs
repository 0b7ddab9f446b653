use serde::{Deserialize, Serialize};
use std::fmt;

/// Apartment classes offered by Kwathu
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UnitClass {
    Standard,
    Premium,
    Luxury,
}

impl UnitClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitClass::Standard => "Standard",
            UnitClass::Premium => "Premium",
            UnitClass::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for UnitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Class dropdown on the booking page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ClassFilter {
    #[default]
    All,
    Standard,
    Premium,
    Luxury,
}

impl ClassFilter {
    pub fn matches(&self, class: UnitClass) -> bool {
        match self {
            ClassFilter::All => true,
            ClassFilter::Standard => class == UnitClass::Standard,
            ClassFilter::Premium => class == UnitClass::Premium,
            ClassFilter::Luxury => class == UnitClass::Luxury,
        }
    }
}

impl From<UnitClass> for ClassFilter {
    fn from(class: UnitClass) -> Self {
        match class {
            UnitClass::Standard => ClassFilter::Standard,
            UnitClass::Premium => ClassFilter::Premium,
            UnitClass::Luxury => ClassFilter::Luxury,
        }
    }
}

/// A bookable apartment.
///
/// Field names follow the storage payload. `image` and `available` may be
/// left out of a catalog file and default on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub class: UnitClass,
    pub room_number: String,
    /// Nightly rate in MWK
    pub price: u64,
    pub facilities: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Unit {
    pub fn new(
        id: impl Into<String>,
        class: UnitClass,
        room_number: impl Into<String>,
        price: u64,
        facilities: &[&str],
        image: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            id: id.into(),
            class,
            room_number: room_number.into(),
            price,
            facilities: facilities.iter().map(|f| f.to_string()).collect(),
            image: image.into(),
            available,
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.available
    }
}
