use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-currency quote container. The API keys quotes by the reference
/// currency; only USD is requested here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "USD", default)]
    pub usd: Option<UsdQuote>,
}

/// A USD price/volume/market-cap snapshot.
///
/// Every numeric field is nullable: the API returns explicit nulls for
/// low-liquidity or newly-listed coins, so each consumer guards each
/// field independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsdQuote {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub volume_24h: Option<f64>,
    #[serde(default)]
    pub percent_change_1h: Option<f64>,
    #[serde(default)]
    pub percent_change_24h: Option<f64>,
    #[serde(default)]
    pub percent_change_7d: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}
