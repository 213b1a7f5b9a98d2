//! Weather data models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Location key for the catch-all weather snapshot
///
/// Lookups for locations with no snapshot of their own resolve to this
/// record, so a fresh store always has something to serve.
pub const DEFAULT_LOCATION: &str = "Default";

/// A mock weather snapshot for one location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherData {
    pub id: Uuid,
    pub location: String,
    pub temperature: i32,
    pub condition: String,
    pub forecast: Vec<ForecastDay>,
}

/// One day in the short-range forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub temperature: i32,
    pub condition: String,
}

/// Input for storing a weather snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct NewWeatherData {
    pub location: String,
    pub temperature: i32,
    pub condition: String,
    pub forecast: Vec<ForecastDay>,
}
