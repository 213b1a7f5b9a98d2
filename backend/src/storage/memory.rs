//! In-memory storage backed by RwLock-protected collections

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{
    recommend_crops, CropRecommendation, ForecastDay, MarketPrice, NewCropRecommendation,
    NewMarketPrice, NewUser, NewWeatherData, User, WeatherData, DEFAULT_LOCATION,
};

use super::Storage;

/// A stored request keeps at most this many suggestions
const MAX_SUGGESTIONS: usize = 3;

/// In-memory implementation of [`Storage`]
///
/// [`MemStorage::new`] seeds the demo data; [`MemStorage::empty`] starts
/// with nothing stored at all.
pub struct MemStorage {
    users: RwLock<HashMap<Uuid, User>>,
    crop_recommendations: RwLock<HashMap<Uuid, CropRecommendation>>,
    weather_data: RwLock<HashMap<String, WeatherData>>,
    market_prices: RwLock<Vec<MarketPrice>>,
}

impl MemStorage {
    /// Create a store seeded with the sample weather and market data
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            crop_recommendations: RwLock::new(HashMap::new()),
            weather_data: RwLock::new(sample_weather_data()),
            market_prices: RwLock::new(sample_market_prices()),
        }
    }

    /// Create a store with no records at all, not even the catch-all
    /// weather snapshot
    pub fn empty() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            crop_recommendations: RwLock::new(HashMap::new()),
            weather_data: RwLock::new(HashMap::new()),
            market_prices: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Catch-all weather snapshot served for any location without its own
fn sample_weather_data() -> HashMap<String, WeatherData> {
    let default_weather = WeatherData {
        id: Uuid::new_v4(),
        location: DEFAULT_LOCATION.to_string(),
        temperature: 28,
        condition: "Sunny".to_string(),
        forecast: vec![
            ForecastDay {
                day: "Today".to_string(),
                temperature: 28,
                condition: "Sunny".to_string(),
            },
            ForecastDay {
                day: "Tomorrow".to_string(),
                temperature: 26,
                condition: "Cloudy".to_string(),
            },
            ForecastDay {
                day: "Day 3".to_string(),
                temperature: 24,
                condition: "Rain".to_string(),
            },
        ],
    };

    let mut weather = HashMap::new();
    weather.insert(default_weather.location.clone(), default_weather);
    weather
}

/// Mandi quotes for the demo, prices in rupees per unit
fn sample_market_prices() -> Vec<MarketPrice> {
    [
        ("Wheat", Decimal::from(2150), "qtl", Decimal::new(25, 1)),
        ("Rice", Decimal::from(1980), "qtl", Decimal::new(-12, 1)),
        ("Cotton", Decimal::from(6800), "qtl", Decimal::new(41, 1)),
        ("Barley", Decimal::from(1850), "qtl", Decimal::new(8, 1)),
        ("Mustard", Decimal::from(5200), "qtl", Decimal::new(15, 1)),
    ]
    .into_iter()
    .map(|(crop, price, unit, change)| MarketPrice {
        id: Uuid::new_v4(),
        crop: crop.to_string(),
        price,
        unit: unit.to_string(),
        change,
    })
    .collect()
}

#[async_trait]
impl Storage for MemStorage {
    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        let user = User {
            id: Uuid::new_v4(),
            username: user.username,
            password: user.password,
        };
        self.users.write().await.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn create_crop_recommendation(
        &self,
        data: NewCropRecommendation,
    ) -> AppResult<CropRecommendation> {
        let mut recommendations = recommend_crops(&data.soil_type, &data.season);
        recommendations.truncate(MAX_SUGGESTIONS);

        let record = CropRecommendation {
            id: Uuid::new_v4(),
            location: data.location,
            soil_type: data.soil_type,
            season: data.season,
            farm_size: data.farm_size,
            water_availability: data.water_availability,
            budget: data.budget,
            recommendations,
        };
        self.crop_recommendations
            .write()
            .await
            .insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_crop_recommendations_by_location(
        &self,
        location: &str,
    ) -> AppResult<Vec<CropRecommendation>> {
        let needle = location.to_lowercase();
        let records = self.crop_recommendations.read().await;
        Ok(records
            .values()
            .filter(|r| r.location.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn get_weather_data(&self, location: &str) -> AppResult<Option<WeatherData>> {
        let weather = self.weather_data.read().await;
        Ok(weather
            .get(location)
            .or_else(|| weather.get(DEFAULT_LOCATION))
            .cloned())
    }

    async fn create_weather_data(&self, data: NewWeatherData) -> AppResult<WeatherData> {
        let record = WeatherData {
            id: Uuid::new_v4(),
            location: data.location,
            temperature: data.temperature,
            condition: data.condition,
            forecast: data.forecast,
        };
        self.weather_data
            .write()
            .await
            .insert(record.location.clone(), record.clone());
        Ok(record)
    }

    async fn get_market_prices(&self) -> AppResult<Vec<MarketPrice>> {
        Ok(self.market_prices.read().await.clone())
    }

    async fn create_market_price(&self, data: NewMarketPrice) -> AppResult<MarketPrice> {
        let record = MarketPrice {
            id: Uuid::new_v4(),
            crop: data.crop,
            price: data.price,
            unit: data.unit,
            change: data.change,
        };
        self.market_prices.write().await.push(record.clone());
        Ok(record)
    }

    async fn update_market_price(
        &self,
        crop: &str,
        price: Decimal,
        change: Decimal,
    ) -> AppResult<Option<MarketPrice>> {
        let mut prices = self.market_prices.write().await;
        match prices.iter_mut().find(|p| p.crop == crop) {
            Some(record) => {
                record.price = price;
                record.change = change;
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }
}
