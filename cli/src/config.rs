use common::{Error, Result};

const DEFAULT_LIMIT: u32 = 5000;
const DEFAULT_CACHE_PATH: &str = "map-cache.txt";
const DEFAULT_SELECTED: &str = "BTC,ETH,XRP,ADA";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// CoinMarketCap API key
    pub api_key: String,
    /// How many coins to fetch in all/html mode
    pub limit: u32,
    /// Path of the identifier cache file
    pub cache_path: String,
    /// Symbols or slugs to show when no mode flag is given, in display order
    pub selected_coins: Vec<String>,
}

impl AppConfig {
    /// Create the configuration from environment variables. Only the
    /// API key is required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("CMC_API_KEY")
            .map_err(|_| Error::Config("CMC_API_KEY environment variable not set".to_string()))?;
        let limit = std::env::var("CMC_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_LIMIT);
        let cache_path =
            std::env::var("CMC_MAP_CACHE").unwrap_or_else(|_| DEFAULT_CACHE_PATH.to_string());
        let selected_coins = parse_selected(
            &std::env::var("CMC_SELECTED_COINS").unwrap_or_else(|_| DEFAULT_SELECTED.to_string()),
        );

        Ok(Self {
            api_key,
            limit,
            cache_path,
            selected_coins,
        })
    }
}

fn parse_selected(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}
