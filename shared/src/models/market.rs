//! Market price models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current market price for a crop
///
/// Decimal fields travel as strings on the wire so clients never see
/// float rounding on money values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketPrice {
    pub id: Uuid,
    pub crop: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Pricing unit, e.g. "qtl" for quintal
    pub unit: String,
    /// Percent change against the previous quote, negative when falling
    #[serde(with = "rust_decimal::serde::str")]
    pub change: Decimal,
}

/// Input for creating a market price record
#[derive(Debug, Clone, Deserialize)]
pub struct NewMarketPrice {
    pub crop: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub unit: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub change: Decimal,
}
