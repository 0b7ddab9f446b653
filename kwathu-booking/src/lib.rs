pub mod navigation;
pub mod summary;
pub mod handoff;
pub mod selector;
pub mod presenter;
pub mod checkout;

pub use navigation::Route;
pub use summary::{BookedUnit, BookingSummary, Guests};
pub use handoff::{read_summary, write_summary, BOOKING_DATA_KEY, FACILITY_BOOKING_DATA_KEY};
pub use selector::{BookingRequest, BookingSelector};
pub use presenter::{PaymentPresenter, PaymentView, SummaryView};
pub use checkout::{PaymentDesk, PaymentSelection};

use kwathu_catalog::PricingError;
use kwathu_core::StoreError;

/// Shown when confirmation is attempted without a unit or dates.
pub const MISSING_SELECTION_NOTICE: &str = "Please select dates and an apartment";

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("{}", MISSING_SELECTION_NOTICE)]
    MissingSelection,

    #[error(transparent)]
    InvalidDate(#[from] PricingError),

    #[error("Guest count must be between 1 and 4, got {0}")]
    InvalidGuests(u8),

    #[error("Unit not found: {0}")]
    UnitNotFound(String),

    #[error("Unit {0} is not available")]
    UnitUnavailable(String),

    #[error("No booking found")]
    NoBooking,

    #[error("Choose a payment method")]
    NoPaymentMethod,

    #[error("Failed to encode booking summary: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Core(#[from] kwathu_core::CoreError),
}
