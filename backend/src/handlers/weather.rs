//! HTTP handlers for weather endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::WeatherData;
use crate::services::WeatherService;
use crate::AppState;

/// Weather for the catch-all location
pub async fn get_default_weather(State(state): State<AppState>) -> AppResult<Json<WeatherData>> {
    let service = WeatherService::new(state.storage.clone());
    let weather = service.get_for_location(None).await?;
    Ok(Json(weather))
}

/// Weather for a specific location, falling back to the catch-all
pub async fn get_weather(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> AppResult<Json<WeatherData>> {
    let service = WeatherService::new(state.storage.clone());
    let weather = service.get_for_location(Some(location)).await?;
    Ok(Json(weather))
}
