//! Booking-to-payment handoff through client storage.
//!
//! The booking step writes under [`BOOKING_DATA_KEY`]. The payment step reads
//! [`FACILITY_BOOKING_DATA_KEY`] first and falls back to [`BOOKING_DATA_KEY`].
//! Nothing ever writes the primary key, so a normal flow always takes the
//! fallback; both keys are kept so stores written by other clients still
//! resolve the same way.

use kwathu_core::{KeyValueStore, StoreError};
use tracing::{debug, error};

use crate::summary::BookingSummary;
use crate::BookingError;

pub const BOOKING_DATA_KEY: &str = "bookingData";
pub const FACILITY_BOOKING_DATA_KEY: &str = "facilityBookingData";

/// Serialize and store a summary, replacing whatever was there.
pub async fn write_summary(store: &dyn KeyValueStore, summary: &BookingSummary) -> Result<(), BookingError> {
    let payload = serde_json::to_string(summary)?;
    store.set(BOOKING_DATA_KEY, &payload).await?;
    Ok(())
}

/// Read the stored summary.
///
/// An absent or empty primary value falls through to the fallback key. A
/// payload that fails to parse is logged and reported as `None`, the same as
/// no payload at all; the fallback is not consulted in that case.
pub async fn read_summary(store: &dyn KeyValueStore) -> Result<Option<BookingSummary>, StoreError> {
    let raw = match non_empty(store.get(FACILITY_BOOKING_DATA_KEY).await?) {
        Some(raw) => {
            debug!("Booking data found under {}", FACILITY_BOOKING_DATA_KEY);
            raw
        }
        None => match non_empty(store.get(BOOKING_DATA_KEY).await?) {
            Some(raw) => raw,
            None => return Ok(None),
        },
    };

    match serde_json::from_str::<BookingSummary>(&raw) {
        Ok(summary) => Ok(Some(summary)),
        Err(e) => {
            error!("Error parsing booking data: {}", e);
            Ok(None)
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
