use kwathu_core::payment::PaymentMethod;
use kwathu_core::KeyValueStore;
use kwathu_shared::{format_display_date, format_mwk};
use serde::Serialize;
use tracing::warn;

use crate::handoff::read_summary;
use crate::navigation::Route;
use crate::summary::BookingSummary;
use crate::BookingError;

/// What the payment page shows
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PaymentView {
    Empty {
        message: &'static str,
        back: Route,
    },
    Summary(SummaryView),
}

impl PaymentView {
    pub fn empty() -> Self {
        PaymentView::Empty {
            message: "No Booking Data Found",
            back: Route::Booking,
        }
    }

    pub fn summary(&self) -> Option<&SummaryView> {
        match self {
            PaymentView::Summary(view) => Some(view),
            PaymentView::Empty { .. } => None,
        }
    }
}

/// Read-only booking summary, rendered from the stored values.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub room_number: String,
    pub class: String,
    pub check_in: String,
    pub check_out: String,
    pub nights: u32,
    pub guests: u8,
    pub nightly_rate: String,
    pub facilities: Vec<String>,
    pub total: String,
    pub pay_label: String,
    pub methods: Vec<MethodOption>,
    pub booking: BookingSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodOption {
    pub method: PaymentMethod,
    pub label: &'static str,
}

impl SummaryView {
    pub fn from_summary(summary: BookingSummary) -> Self {
        let total = format_mwk(summary.total);
        Self {
            room_number: summary.apartment.room_number.clone(),
            class: summary.apartment.class.clone(),
            check_in: format_display_date(summary.check_in),
            check_out: format_display_date(summary.check_out),
            nights: summary.nights,
            guests: summary.guests,
            nightly_rate: format_mwk(summary.apartment.price),
            facilities: summary.apartment.facilities.clone(),
            pay_label: format!("Pay {}", total),
            total,
            methods: [PaymentMethod::Mpamba, PaymentMethod::Airtel, PaymentMethod::Bank]
                .into_iter()
                .map(|method| MethodOption {
                    method,
                    label: method.label(),
                })
                .collect(),
            booking: summary,
        }
    }
}

/// Loads the handed-off booking for the payment page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentPresenter {
    verify_on_read: bool,
}

impl PaymentPresenter {
    pub fn new(verify_on_read: bool) -> Self {
        Self { verify_on_read }
    }

    pub async fn load_summary(&self, store: &dyn KeyValueStore) -> Result<Option<BookingSummary>, BookingError> {
        let summary = read_summary(store).await?;

        if self.verify_on_read {
            if let Some(summary) = &summary {
                if !summary.is_consistent() {
                    let expected = summary.recompute();
                    warn!(
                        "Stored booking for {} says {} night(s) / {} but dates give {} / {}",
                        summary.apartment.room_number,
                        summary.nights,
                        summary.total,
                        expected.nights,
                        expected.total
                    );
                }
            }
        }

        Ok(summary)
    }

    /// Build the page: the stored summary as-is, or the empty state.
    pub async fn load(&self, store: &dyn KeyValueStore) -> Result<PaymentView, BookingError> {
        Ok(match self.load_summary(store).await? {
            Some(summary) => PaymentView::Summary(SummaryView::from_summary(summary)),
            None => PaymentView::empty(),
        })
    }
}
