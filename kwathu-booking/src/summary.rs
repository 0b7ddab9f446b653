use chrono::NaiveDate;
use kwathu_catalog::{night_count, StayQuote, Unit};
use serde::{Deserialize, Serialize};

use crate::BookingError;

/// Guests per booking, 1 to 4. Has no effect on price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub struct Guests(u8);

impl Guests {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Guests {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for Guests {
    type Error = BookingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(BookingError::InvalidGuests(value))
        }
    }
}

impl From<Guests> for u8 {
    fn from(guests: Guests) -> Self {
        guests.0
    }
}

/// The `apartment` object inside a stored summary.
///
/// Other writers share the primary storage key and book facilities that are
/// not apartments, so `class` is free text here. `image` and `available` may
/// be missing and default on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookedUnit {
    #[serde(default)]
    pub id: String,
    pub class: String,
    pub room_number: String,
    pub price: u64,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl From<Unit> for BookedUnit {
    fn from(unit: Unit) -> Self {
        Self {
            id: unit.id,
            class: unit.class.to_string(),
            room_number: unit.room_number,
            price: unit.price,
            facilities: unit.facilities,
            image: unit.image,
            available: unit.available,
        }
    }
}

/// The record handed from the booking step to the payment step.
///
/// The unit is embedded in full. `nights` and `total` are derived when the
/// summary is built and stored as-is; readers take them on trust.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub apartment: BookedUnit,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Plain integer on the wire so stored values are shown verbatim
    pub guests: u8,
    pub nights: u32,
    pub total: u64,
}

impl BookingSummary {
    pub fn new(apartment: Unit, check_in: NaiveDate, check_out: NaiveDate, guests: Guests) -> Self {
        let quote = StayQuote::compute(Some(&apartment), Some(check_in), Some(check_out));
        Self {
            apartment: apartment.into(),
            check_in,
            check_out,
            guests: guests.get(),
            nights: quote.nights,
            total: quote.total,
        }
    }

    /// Derive nights/total again from the stored dates and unit
    pub fn recompute(&self) -> StayQuote {
        let nights = night_count(Some(self.check_in), Some(self.check_out));
        StayQuote {
            nights,
            total: self.apartment.price.saturating_mul(u64::from(nights)),
        }
    }

    pub fn is_consistent(&self) -> bool {
        let quote = self.recompute();
        quote.nights == self.nights && quote.total == self.total
    }
}
