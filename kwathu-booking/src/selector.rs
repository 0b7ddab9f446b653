use chrono::NaiveDate;
use kwathu_catalog::{parse_date_field, Catalog, ClassFilter, DateBounds, StayQuote, Unit};
use kwathu_core::KeyValueStore;
use serde::Deserialize;
use tracing::{info, warn};

use crate::handoff::write_summary;
use crate::navigation::Route;
use crate::summary::{BookingSummary, Guests};
use crate::BookingError;

/// Form state submitted from the booking page
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default)]
    pub unit_id: Option<String>,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default)]
    pub guests: Option<u8>,
    #[serde(default)]
    pub class: ClassFilter,
}

/// State behind the booking page: class filter, dates, guests and the
/// chosen unit.
#[derive(Debug, Clone)]
pub struct BookingSelector {
    catalog: Catalog,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    guests: Guests,
    class_filter: ClassFilter,
    selected: Option<Unit>,
}

impl BookingSelector {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            check_in: None,
            check_out: None,
            guests: Guests::default(),
            class_filter: ClassFilter::All,
            selected: None,
        }
    }

    /// Replay a submitted form onto a fresh selector
    pub fn from_request(catalog: Catalog, req: &BookingRequest) -> Result<Self, BookingError> {
        let mut selector = Self::new(catalog);
        selector.set_class_filter(req.class);
        selector.set_check_in(&req.check_in)?;
        selector.set_check_out(&req.check_out)?;
        if let Some(guests) = req.guests {
            selector.set_guests(guests)?;
        }
        if let Some(unit_id) = req.unit_id.as_deref().filter(|id| !id.is_empty()) {
            selector.select_unit(unit_id)?;
        }
        Ok(selector)
    }

    pub fn set_check_in(&mut self, value: &str) -> Result<(), BookingError> {
        self.check_in = parse_date_field(value)?;
        Ok(())
    }

    pub fn set_check_out(&mut self, value: &str) -> Result<(), BookingError> {
        self.check_out = parse_date_field(value)?;
        Ok(())
    }

    pub fn set_guests(&mut self, guests: u8) -> Result<(), BookingError> {
        self.guests = Guests::try_from(guests)?;
        Ok(())
    }

    pub fn set_class_filter(&mut self, filter: ClassFilter) {
        self.class_filter = filter;
    }

    pub fn check_in(&self) -> Option<NaiveDate> {
        self.check_in
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        self.check_out
    }

    pub fn guests(&self) -> Guests {
        self.guests
    }

    pub fn class_filter(&self) -> ClassFilter {
        self.class_filter
    }

    pub fn selected_unit(&self) -> Option<&Unit> {
        self.selected.as_ref()
    }

    /// Units listed under the current filter, unavailable ones included
    pub fn visible_units(&self) -> Vec<&Unit> {
        self.catalog.filter(self.class_filter)
    }

    /// Pick a unit. Unavailable units are listed but cannot be picked.
    pub fn select_unit(&mut self, unit_id: &str) -> Result<&Unit, BookingError> {
        let unit = self
            .catalog
            .get(unit_id)
            .ok_or_else(|| BookingError::UnitNotFound(unit_id.to_string()))?;

        if !unit.is_selectable() {
            warn!("Rejected selection of unavailable unit {}", unit.room_number);
            return Err(BookingError::UnitUnavailable(unit_id.to_string()));
        }

        Ok(&*self.selected.insert(unit.clone()))
    }

    pub fn nights(&self) -> u32 {
        self.quote().nights
    }

    pub fn total(&self) -> u64 {
        self.quote().total
    }

    pub fn quote(&self) -> StayQuote {
        StayQuote::compute(self.selected.as_ref(), self.check_in, self.check_out)
    }

    pub fn date_bounds(&self, today: NaiveDate) -> DateBounds {
        DateBounds::for_day(today, self.check_in)
    }

    /// Build the summary from the current state, or fail with the
    /// missing-selection notice.
    pub fn summary(&self) -> Result<BookingSummary, BookingError> {
        match (&self.selected, self.check_in, self.check_out) {
            (Some(unit), Some(check_in), Some(check_out)) => {
                Ok(BookingSummary::new(unit.clone(), check_in, check_out, self.guests))
            }
            _ => Err(BookingError::MissingSelection),
        }
    }

    /// Store the booking summary and move on to payment.
    ///
    /// Nothing is written when the selection is incomplete.
    pub async fn confirm(&self, store: &dyn KeyValueStore) -> Result<Route, BookingError> {
        let summary = self.summary()?;
        write_summary(store, &summary).await?;

        info!(
            "Booking confirmed: {} for {} night(s), total {}",
            summary.apartment.room_number, summary.nights, summary.total
        );
        Ok(Route::Payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handoff::{read_summary, BOOKING_DATA_KEY};
    use kwathu_catalog::UnitClass;
    use kwathu_store::MemoryStore;

    fn ready_selector() -> BookingSelector {
        let mut selector = BookingSelector::new(Catalog::kwathu());
        selector.set_check_in("2025-03-01").unwrap();
        selector.set_check_out("2025-03-04").unwrap();
        selector.select_unit("3").unwrap();
        selector
    }

    #[test]
    fn test_live_quote() {
        let mut selector = BookingSelector::new(Catalog::kwathu());
        assert_eq!(selector.total(), 0);

        selector.set_check_in("2025-03-01").unwrap();
        selector.set_check_out("2025-03-04").unwrap();
        assert_eq!(selector.nights(), 3);
        assert_eq!(selector.total(), 0);

        selector.select_unit("3").unwrap();
        assert_eq!(selector.total(), 225000);
    }

    #[test]
    fn test_guests_do_not_change_price() {
        let mut selector = ready_selector();
        let before = selector.total();
        selector.set_guests(4).unwrap();
        assert_eq!(selector.total(), before);
        assert!(selector.set_guests(5).is_err());
        assert_eq!(selector.guests().get(), 4);
    }

    #[test]
    fn test_visible_units_follow_filter() {
        let mut selector = BookingSelector::new(Catalog::kwathu());
        assert_eq!(selector.visible_units().len(), 6);

        selector.set_class_filter(ClassFilter::Luxury);
        let visible = selector.visible_units();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|u| u.class == UnitClass::Luxury));
    }

    #[test]
    fn test_unavailable_unit_cannot_be_selected() {
        let mut selector = BookingSelector::new(Catalog::kwathu());
        let result = selector.select_unit("4");

        assert!(matches!(result, Err(BookingError::UnitUnavailable(_))));
        assert!(selector.selected_unit().is_none());
    }

    #[test]
    fn test_unknown_unit() {
        let mut selector = BookingSelector::new(Catalog::kwathu());
        assert!(matches!(selector.select_unit("99"), Err(BookingError::UnitNotFound(_))));
    }

    #[test]
    fn test_clearing_a_date_resets_nights() {
        let mut selector = ready_selector();
        selector.set_check_out("").unwrap();
        assert_eq!(selector.nights(), 0);
        assert_eq!(selector.total(), 0);
    }

    #[test]
    fn test_bad_date_keeps_previous_value() {
        let mut selector = ready_selector();
        assert!(selector.set_check_in("tomorrow").is_err());
        assert_eq!(selector.check_in(), NaiveDate::from_ymd_opt(2025, 3, 1));
    }

    #[tokio::test]
    async fn test_confirm_without_unit_writes_nothing() {
        let store = MemoryStore::new();
        let mut selector = BookingSelector::new(Catalog::kwathu());
        selector.set_check_in("2025-03-01").unwrap();
        selector.set_check_out("2025-03-04").unwrap();

        let result = selector.confirm(&store).await;
        assert!(matches!(result, Err(BookingError::MissingSelection)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_confirm_without_check_out_writes_nothing() {
        let store = MemoryStore::new();
        let mut selector = BookingSelector::new(Catalog::kwathu());
        selector.set_check_in("2025-03-01").unwrap();
        selector.select_unit("1").unwrap();

        let err = selector.confirm(&store).await.unwrap_err();
        assert_eq!(err.to_string(), "Please select dates and an apartment");
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_confirm_without_check_in_writes_nothing() {
        let store = MemoryStore::new();
        let mut selector = BookingSelector::new(Catalog::kwathu());
        selector.set_check_in("").unwrap();
        selector.set_check_out("2025-03-04").unwrap();
        selector.select_unit("3").unwrap();

        let result = selector.confirm(&store).await;
        assert!(matches!(result, Err(BookingError::MissingSelection)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_confirm_writes_one_consistent_record() {
        let store = MemoryStore::new();
        let mut selector = ready_selector();
        selector.set_guests(3).unwrap();

        let next = selector.confirm(&store).await.unwrap();
        assert_eq!(next, Route::Payment);
        assert_eq!(store.len().await, 1);

        let raw = store.get(BOOKING_DATA_KEY).await.unwrap().unwrap();
        let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored["nights"], 3);
        assert_eq!(stored["total"], 225000);
        assert_eq!(stored["guests"], 3);

        let loaded = read_summary(&store).await.unwrap().unwrap();
        assert!(loaded.is_consistent());
    }

    #[tokio::test]
    async fn test_confirm_accepts_inverted_dates() {
        let store = MemoryStore::new();
        let mut selector = BookingSelector::new(Catalog::kwathu());
        selector.set_check_in("2025-03-04").unwrap();
        selector.set_check_out("2025-03-01").unwrap();
        selector.select_unit("3").unwrap();

        selector.confirm(&store).await.unwrap();
        let loaded = read_summary(&store).await.unwrap().unwrap();
        assert_eq!(loaded.nights, 3);
        assert_eq!(loaded.total, 225000);
    }

    #[tokio::test]
    async fn test_second_confirm_overwrites() {
        let store = MemoryStore::new();
        ready_selector().confirm(&store).await.unwrap();

        let mut other = ready_selector();
        other.select_unit("6").unwrap();
        other.confirm(&store).await.unwrap();

        assert_eq!(store.len().await, 1);
        let loaded = read_summary(&store).await.unwrap().unwrap();
        assert_eq!(loaded.apartment.room_number, "C302");
    }

    #[test]
    fn test_from_request() {
        let req = BookingRequest {
            unit_id: Some("5".to_string()),
            check_in: "2025-03-01".to_string(),
            check_out: "2025-03-03".to_string(),
            guests: Some(2),
            class: ClassFilter::Luxury,
        };

        let selector = BookingSelector::from_request(Catalog::kwathu(), &req).unwrap();
        assert_eq!(selector.quote(), StayQuote { nights: 2, total: 240000 });
        assert_eq!(selector.class_filter(), ClassFilter::Luxury);
    }

    #[test]
    fn test_from_empty_request_is_blank() {
        let selector = BookingSelector::from_request(Catalog::kwathu(), &BookingRequest::default()).unwrap();
        assert!(selector.selected_unit().is_none());
        assert_eq!(selector.quote(), StayQuote::default());
    }
}
