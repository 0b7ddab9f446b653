use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod booking;
pub mod client;
pub mod error;
pub mod pages;
pub mod payment;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
            axum::http::HeaderName::from_static(client::CLIENT_ID_HEADER),
        ]);

    Router::new()
        .merge(pages::routes())
        .merge(auth::routes())
        .merge(booking::routes())
        .merge(payment::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
