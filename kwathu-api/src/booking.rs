use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use kwathu_booking::{BookingRequest, BookingSelector, Route};
use kwathu_catalog::{parse_date_field, ClassFilter, DateBounds, Unit};
use kwathu_shared::format_mwk;
use serde::{Deserialize, Serialize};

use crate::{client::ClientId, error::AppError, state::AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct UnitsQuery {
    #[serde(default)]
    pub class: ClassFilter,
}

#[derive(Debug, Serialize)]
pub struct UnitsResponse {
    pub class: ClassFilter,
    pub units: Vec<Unit>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundsQuery {
    #[serde(default)]
    pub check_in: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub unit: Option<Unit>,
    pub guests: u8,
    pub nights: u32,
    pub total: u64,
    pub total_label: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmResponse {
    pub next: Route,
    pub nights: u32,
    pub total: u64,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/booking/units", get(list_units))
        .route("/booking/bounds", get(date_bounds))
        .route("/booking/quote", post(quote))
        .route("/booking/confirm", post(confirm))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /booking/units?class=Premium
/// Units for the class dropdown, unavailable ones included
async fn list_units(
    State(state): State<AppState>,
    Query(query): Query<UnitsQuery>,
) -> Json<UnitsResponse> {
    let units = state.catalog.filter(query.class).into_iter().cloned().collect();
    Json(UnitsResponse {
        class: query.class,
        units,
    })
}

/// GET /booking/bounds
/// Date-picker minimums as of today (UTC)
async fn date_bounds(Query(query): Query<BoundsQuery>) -> Result<Json<DateBounds>, AppError> {
    let check_in = parse_date_field(&query.check_in).map_err(|e| AppError::ValidationError(e.to_string()))?;
    Ok(Json(DateBounds::for_day(Utc::now().date_naive(), check_in)))
}

/// POST /booking/quote
/// Nights and total for the current selection
async fn quote(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let selector = BookingSelector::from_request(state.catalog.clone(), &req)?;
    let quote = selector.quote();

    Ok(Json(QuoteResponse {
        unit: selector.selected_unit().cloned(),
        guests: selector.guests().get(),
        nights: quote.nights,
        total: quote.total,
        total_label: format_mwk(quote.total),
    }))
}

/// POST /booking/confirm
/// Hand the booking to the payment step through client storage
async fn confirm(
    State(state): State<AppState>,
    client: ClientId,
    Json(req): Json<BookingRequest>,
) -> Result<Json<ConfirmResponse>, AppError> {
    let selector = BookingSelector::from_request(state.catalog.clone(), &req)?;
    let storage = client.storage(&state);
    let next = selector.confirm(&storage).await?;

    let quote = selector.quote();
    Ok(Json(ConfirmResponse {
        next,
        nights: quote.nights,
        total: quote.total,
    }))
}
