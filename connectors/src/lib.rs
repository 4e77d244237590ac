pub mod cmc;

use async_trait::async_trait;
use common::{
    models::{CoinRecord, MapEntry},
    Result,
};

pub use cmc::CmcConnector;

/// Trait defining the interface for market-data API clients
#[async_trait]
pub trait MarketDataConnector: Send + Sync {
    /// Fetch up to `limit` coins in the server's market-cap ranking order
    async fn fetch_all(&self, limit: u32) -> Result<Vec<CoinRecord>>;

    /// Fetch quotes for exactly the given ids, sorted by ascending rank
    async fn fetch_selected(&self, ids: &[u64]) -> Result<Vec<CoinRecord>>;

    /// Fetch the full identifier catalog
    async fn fetch_map(&self) -> Result<Vec<MapEntry>>;
}
