//! Crop recommendation service

use std::sync::Arc;

use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::{CropRecommendation, NewCropRecommendation};
use crate::storage::Storage;
use shared::validation::required_string;

/// Service for creating and querying crop recommendation requests
#[derive(Clone)]
pub struct RecommendationService {
    storage: Arc<dyn Storage>,
}

impl RecommendationService {
    /// Create a new RecommendationService instance
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Validate a request body and store the recommendation request
    ///
    /// Suggestions come from the static soil/season table at creation
    /// time and are never recomputed afterwards.
    pub async fn create(&self, body: Value) -> AppResult<CropRecommendation> {
        let input = parse_recommendation_input(&body)?;
        let record = self.storage.create_crop_recommendation(input).await?;
        tracing::debug!(
            "Stored recommendation request {} for {}",
            record.id,
            record.location
        );
        Ok(record)
    }

    /// All stored requests whose location contains the given substring
    pub async fn find_by_location(&self, location: &str) -> AppResult<Vec<CropRecommendation>> {
        self.storage
            .get_crop_recommendations_by_location(location)
            .await
    }
}

/// Check the six required fields and assemble the storage input
///
/// Field names in diagnostics use the wire spelling so clients can map
/// them straight onto form inputs.
fn parse_recommendation_input(body: &Value) -> AppResult<NewCropRecommendation> {
    let mut errors = Vec::new();

    let location = required_string(&mut errors, body, "location", "Location is required");
    let soil_type = required_string(&mut errors, body, "soilType", "Soil type is required");
    let season = required_string(&mut errors, body, "season", "Season is required");
    let farm_size = required_string(&mut errors, body, "farmSize", "Farm size is required");
    let water_availability = required_string(
        &mut errors,
        body,
        "waterAvailability",
        "Water availability is required",
    );
    let budget = required_string(&mut errors, body, "budget", "Budget range is required");

    if !errors.is_empty() {
        return Err(AppError::Validation { errors });
    }

    Ok(NewCropRecommendation {
        location,
        soil_type,
        season,
        farm_size,
        water_availability,
        budget,
    })
}
