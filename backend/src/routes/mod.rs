//! Route definitions for the AgriSmart advisory API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Crop recommendations
        .route("/recommendations", post(handlers::create_recommendation))
        .route(
            "/recommendations/:location",
            get(handlers::get_recommendations_by_location),
        )
        // Weather, with and without an explicit location
        .route("/weather", get(handlers::get_default_weather))
        .route("/weather/:location", get(handlers::get_weather))
        // Market prices
        .route("/market-prices", get(handlers::get_market_prices))
}
