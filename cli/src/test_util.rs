use common::models::{CoinRecord, Quote, UsdQuote};

/// Build a fetched-looking record with a fully populated USD quote.
pub fn record(
    id: u64,
    symbol: &str,
    slug: &str,
    rank: Option<u32>,
    price: Option<f64>,
) -> CoinRecord {
    CoinRecord {
        id,
        name: symbol.to_string(),
        symbol: symbol.to_string(),
        slug: slug.to_string(),
        cmc_rank: rank,
        last_updated: None,
        quote: Quote {
            usd: Some(UsdQuote {
                price,
                market_cap: Some(1.0e9),
                volume_24h: Some(1.0e7),
                percent_change_1h: Some(0.11),
                percent_change_24h: Some(4.93),
                percent_change_7d: Some(-1.92),
                last_updated: None,
            }),
        },
    }
}
