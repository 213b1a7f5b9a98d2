//! HTTP handlers for market price endpoints

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::MarketPrice;
use crate::services::MarketService;
use crate::AppState;

/// List current market prices for all tracked crops
pub async fn get_market_prices(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MarketPrice>>> {
    let service = MarketService::new(state.storage.clone());
    let prices = service.list_prices().await?;
    Ok(Json(prices))
}
