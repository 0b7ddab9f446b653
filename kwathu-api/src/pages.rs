use axum::{routing::get, Json, Router};
use kwathu_booking::Route;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct Amenity {
    name: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct HomeResponse {
    brand: &'static str,
    tagline: &'static str,
    amenities: Vec<Amenity>,
    login: Route,
    booking: Route,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
}

async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        brand: "Kwathu Apartments",
        tagline: "Premium Facilities Booking System",
        amenities: vec![
            Amenity {
                name: "Meeting Rooms",
                description: "Professional meeting spaces equipped with modern technology for your business needs.",
            },
            Amenity {
                name: "Recreation",
                description: "Swimming pool, gym, and recreational areas for your relaxation and fitness.",
            },
            Amenity {
                name: "Event Spaces",
                description: "Elegant venues for special occasions, parties, and community gatherings.",
            },
        ],
        login: Route::Login,
        booking: Route::Booking,
    })
}

async fn health() -> &'static str {
    "OK"
}
