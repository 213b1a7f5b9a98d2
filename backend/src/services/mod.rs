//! Business logic services for the AgriSmart advisory platform

pub mod market;
pub mod recommendation;
pub mod weather;

pub use market::MarketService;
pub use recommendation::RecommendationService;
pub use weather::WeatherService;
