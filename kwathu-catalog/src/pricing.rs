use crate::unit::Unit;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Nights between two calendar dates.
///
/// Either date unset gives 0. The difference is taken in absolute value, so
/// an inverted range prices the same as the ordered one. Calendar dates are
/// whole days apart, which makes the round-up a no-op.
pub fn night_count(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> u32 {
    match (check_in, check_out) {
        (Some(start), Some(end)) => {
            let days = (end - start).num_days().unsigned_abs();
            u32::try_from(days).unwrap_or(u32::MAX)
        }
        _ => 0,
    }
}

/// Stay total in MWK; 0 when nothing is selected.
pub fn stay_total(unit: Option<&Unit>, nights: u32) -> u64 {
    unit.map(|u| u.price.saturating_mul(u64::from(nights)))
        .unwrap_or(0)
}

/// Parse a date input value. The empty string means "not picked yet".
pub fn parse_date_field(value: &str) -> Result<Option<NaiveDate>, PricingError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| PricingError::InvalidDate(value.to_string()))
}

/// Derived price preview for the current selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StayQuote {
    pub nights: u32,
    pub total: u64,
}

impl StayQuote {
    pub fn compute(unit: Option<&Unit>, check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> Self {
        let nights = night_count(check_in, check_out);
        Self {
            nights,
            total: stay_total(unit, nights),
        }
    }
}

/// Minimum values offered by the date pickers.
///
/// These only constrain the picker; nothing downstream enforces them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DateBounds {
    pub check_in_min: NaiveDate,
    pub check_out_min: NaiveDate,
}

impl DateBounds {
    pub fn for_day(today: NaiveDate, check_in: Option<NaiveDate>) -> Self {
        Self {
            check_in_min: today,
            check_out_min: check_in.unwrap_or(today),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
