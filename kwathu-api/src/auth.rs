use axum::{
    extract::State,
    Json,
    routing::post,
    Router,
};
use chrono::{Utc, Duration};
use jsonwebtoken::{encode, Header, EncodingKey};
use kwathu_booking::Route;
use kwathu_core::identity::Credentials;
use serde::{Deserialize, Serialize};
use crate::{state::AppState, error::AppError};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    pub sub: String,
    pub email: Option<String>,
    pub role: String,
    pub exp: usize,
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    token: String,
    next: Route,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

fn expires_at(expiration_seconds: u64) -> Result<usize, AppError> {
    let overflow = || AppError::InternalServerError(format!("Token lifetime of {}s is out of range", expiration_seconds));

    let lifetime = i64::try_from(expiration_seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .ok_or_else(overflow)?;
    let exp = Utc::now().checked_add_signed(lifetime).ok_or_else(overflow)?;
    usize::try_from(exp.timestamp()).map_err(|_| overflow())
}

/// Sign in through the configured identity provider and move on to booking.
async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<LoginResponse>, AppError> {
    let identity = state.identity.sign_in(&credentials).await?;

    let claims = SessionClaims {
        sub: identity.subject,
        email: identity.email,
        role: identity.role,
        exp: expires_at(state.auth.expiration)?,
    };

    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(state.auth.secret.as_bytes()))
        .map_err(|e| AppError::InternalServerError(format!("Token encoding failed: {}", e)))?;

    Ok(Json(LoginResponse {
        token,
        next: Route::Booking,
    }))
}
