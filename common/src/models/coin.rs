use crate::models::Quote;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ranked coin as returned by the listings/quotes endpoints.
///
/// `cmc_rank` is server-assigned and only used for display ordering;
/// it is never recomputed locally. `quote` may be missing entirely for
/// a broken record, in which case it defaults to an empty quote and
/// the record is skipped at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinRecord {
    pub id: u64,
    /// Human-readable name (e.g., "Bitcoin")
    pub name: String,
    /// Ticker symbol (e.g., "BTC")
    pub symbol: String,
    /// URL-friendly identifier (e.g., "bitcoin")
    pub slug: String,
    #[serde(default)]
    pub cmc_rank: Option<u32>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub quote: Quote,
}

/// One line of the identifier map catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MapEntry {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    pub slug: String,
}
