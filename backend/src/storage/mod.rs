//! Storage layer for the AgriSmart advisory backend
//!
//! Every record lives in process memory for the lifetime of the server.
//! Nothing survives a restart, which is exactly what a demo deployment
//! wants.

mod memory;

pub use memory::MemStorage;

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{
    CropRecommendation, MarketPrice, NewCropRecommendation, NewMarketPrice, NewUser,
    NewWeatherData, User, WeatherData,
};

/// Record storage operations
///
/// Handlers only ever see this trait, so a durable implementation could
/// replace [`MemStorage`] without touching them.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Create a user account. Username uniqueness is not enforced.
    async fn create_user(&self, user: NewUser) -> AppResult<User>;

    /// Look up a user by id.
    async fn get_user(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Look up a user by exact username.
    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Store a recommendation request, computing its crop suggestions
    /// from the soil type and season at creation time.
    async fn create_crop_recommendation(
        &self,
        data: NewCropRecommendation,
    ) -> AppResult<CropRecommendation>;

    /// All stored requests whose location contains the given substring,
    /// case-insensitively. The result carries no defined order.
    async fn get_crop_recommendations_by_location(
        &self,
        location: &str,
    ) -> AppResult<Vec<CropRecommendation>>;

    /// Weather for a location, falling back to the catch-all snapshot
    /// when the location has no data of its own.
    async fn get_weather_data(&self, location: &str) -> AppResult<Option<WeatherData>>;

    /// Store a weather snapshot, replacing any existing one for the
    /// same location.
    async fn create_weather_data(&self, data: NewWeatherData) -> AppResult<WeatherData>;

    /// All market prices.
    async fn get_market_prices(&self) -> AppResult<Vec<MarketPrice>>;

    /// Append a market price record.
    async fn create_market_price(&self, data: NewMarketPrice) -> AppResult<MarketPrice>;

    /// Overwrite price and change on the first record matching the crop
    /// name. Returns `None` without inserting when no record matches.
    async fn update_market_price(
        &self,
        crop: &str,
        price: Decimal,
        change: Decimal,
    ) -> AppResult<Option<MarketPrice>>;
}
