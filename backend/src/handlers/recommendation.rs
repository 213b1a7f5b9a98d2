//! HTTP handlers for crop recommendation endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::error::AppResult;
use crate::models::CropRecommendation;
use crate::services::RecommendationService;
use crate::AppState;

/// Create a recommendation request from submitted farm parameters
///
/// The body arrives as loose JSON so validation can report every bad
/// field in one response instead of failing on the first.
pub async fn create_recommendation(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<CropRecommendation>> {
    let service = RecommendationService::new(state.storage.clone());
    let record = service.create(body).await?;
    Ok(Json(record))
}

/// List stored requests whose location contains the given text
pub async fn get_recommendations_by_location(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> AppResult<Json<Vec<CropRecommendation>>> {
    let service = RecommendationService::new(state.storage.clone());
    let records = service.find_by_location(&location).await?;
    Ok(Json(records))
}
