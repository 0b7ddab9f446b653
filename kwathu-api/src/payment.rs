use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use kwathu_booking::{PaymentSelection, PaymentView};
use kwathu_core::payment::{PaymentMethod, PaymentOutcome};
use kwathu_shared::Masked;
use serde::Deserialize;

use crate::{client::ClientId, error::AppError, state::AppState};

/// Payment form as submitted. Every field is optional and unchecked.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayRequest {
    pub method: Option<PaymentMethod>,
    pub phone_number: Masked<String>,
    pub account_name: String,
    pub account_number: Masked<String>,
    pub bank_name: String,
}

impl From<PayRequest> for PaymentSelection {
    fn from(req: PayRequest) -> Self {
        let mut selection = PaymentSelection::new();
        if let Some(method) = req.method {
            selection.choose(method);
        }
        selection.phone_number = req.phone_number;
        selection.account_name = req.account_name;
        selection.account_number = req.account_number;
        selection.bank_name = req.bank_name;
        selection
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payment", get(payment_page))
        .route("/payment/pay", post(pay))
}

/// GET /payment
/// Stored booking summary, or the empty state
async fn payment_page(
    State(state): State<AppState>,
    client: ClientId,
) -> Result<Json<PaymentView>, AppError> {
    let storage = client.storage(&state);
    let view = state.presenter.load(&storage).await?;
    Ok(Json(view))
}

/// POST /payment/pay
/// Accepted and acknowledged; no money moves
async fn pay(
    State(state): State<AppState>,
    client: ClientId,
    Json(req): Json<PayRequest>,
) -> Result<Json<PaymentOutcome>, AppError> {
    let storage = client.storage(&state);
    let selection = PaymentSelection::from(req);
    let outcome = state.payments.pay(&storage, &selection).await?;
    Ok(Json(outcome))
}
