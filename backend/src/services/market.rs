//! Market price service

use std::sync::Arc;

use crate::error::AppResult;
use crate::models::MarketPrice;
use crate::storage::Storage;

/// Service for reading mock market prices
#[derive(Clone)]
pub struct MarketService {
    storage: Arc<dyn Storage>,
}

impl MarketService {
    /// Create a new MarketService instance
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// All known market prices
    pub async fn list_prices(&self) -> AppResult<Vec<MarketPrice>> {
        self.storage.get_market_prices().await
    }
}
