//! Weather lookup service

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{WeatherData, DEFAULT_LOCATION};
use crate::storage::Storage;

/// Service for reading mock weather snapshots
#[derive(Clone)]
pub struct WeatherService {
    storage: Arc<dyn Storage>,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Weather for a location
    ///
    /// A missing location means the catch-all snapshot, and locations
    /// without data of their own resolve to it as well. Not found can
    /// therefore only happen when the catch-all itself was never
    /// stored.
    pub async fn get_for_location(&self, location: Option<String>) -> AppResult<WeatherData> {
        let location = location.unwrap_or_else(|| DEFAULT_LOCATION.to_string());
        self.storage
            .get_weather_data(&location)
            .await?
            .ok_or_else(|| AppError::NotFound("Weather data".to_string()))
    }
}
