pub mod unit;
pub mod catalog;
pub mod pricing;

pub use unit::{Unit, UnitClass, ClassFilter};
pub use catalog::{Catalog, CatalogError};
pub use pricing::{night_count, stay_total, parse_date_field, DateBounds, PricingError, StayQuote};
