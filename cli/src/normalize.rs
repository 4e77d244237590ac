use common::models::CoinRecord;

/// Display width of the console usd price column, including the
/// decimal point region.
pub const CONSOLE_USD_WIDTH: usize = 10;
pub const CONSOLE_BTC_WIDTH: usize = 10;
pub const CONSOLE_ETH_WIDTH: usize = 12;
pub const CONSOLE_SLUG_WIDTH: usize = 17;
pub const HTML_NAME_WIDTH: usize = 18;

/// Cut a formatted value down to a fixed display width.
pub fn truncate(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

/// Reference prices for the btc/eth ratio columns: the USD price of
/// the first BTC and first ETH record in list order, 0.0 when absent
/// from the fetched set.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefPrices {
    pub btc: f64,
    pub eth: f64,
}

impl RefPrices {
    pub fn from_records(records: &[CoinRecord]) -> Self {
        let mut refs = Self::default();
        for record in records {
            let Some(usd) = &record.quote.usd else {
                continue;
            };
            if refs.btc == 0.0 && record.symbol == "BTC" {
                refs.btc = usd.price.unwrap_or(0.0);
            }
            if refs.eth == 0.0 && record.symbol == "ETH" {
                refs.eth = usd.price.unwrap_or(0.0);
            }
            if refs.btc > 0.0 && refs.eth > 0.0 {
                break;
            }
        }
        refs
    }
}

/// Price divided by a reference price. A missing price or a zero
/// reference (BTC/ETH not in the fetched set) yields no value, which
/// renders as a blank field.
fn ratio(price: Option<f64>, reference: f64) -> Option<f64> {
    match price {
        Some(p) if reference > 0.0 => Some(p / reference),
        _ => None,
    }
}

/// One console line, every field already formatted. Any null source
/// value becomes an empty string, console rows never fail on thin
/// records.
#[derive(Debug)]
pub struct ConsoleRow {
    pub slug: String,
    pub symbol: String,
    pub price_usd: String,
    pub price_btc: String,
    pub price_eth: String,
    pub change_24h: String,
    pub change_7d: String,
}

impl ConsoleRow {
    /// `None` iff the record has no USD quote sub-record at all; the
    /// caller warns and skips it.
    pub fn from_record(record: &CoinRecord, refs: &RefPrices) -> Option<Self> {
        let usd = record.quote.usd.as_ref()?;
        Some(Self {
            slug: truncate(&record.slug, CONSOLE_SLUG_WIDTH),
            symbol: record.symbol.clone(),
            price_usd: usd
                .price
                .map(|p| truncate(&format!("{:.8}", p), CONSOLE_USD_WIDTH))
                .unwrap_or_default(),
            price_btc: ratio(usd.price, refs.btc)
                .map(|r| truncate(&format!("{:.8}", r), CONSOLE_BTC_WIDTH))
                .unwrap_or_default(),
            price_eth: ratio(usd.price, refs.eth)
                .map(|r| truncate(&format!("{:.10}", r), CONSOLE_ETH_WIDTH))
                .unwrap_or_default(),
            change_24h: usd
                .percent_change_24h
                .map(|v| format!("{:.2}", v))
                .unwrap_or_default(),
            change_7d: usd
                .percent_change_7d
                .map(|v| format!("{:.2}", v))
                .unwrap_or_default(),
        })
    }
}

/// One HTML table row. Same null policy as the console rows: every
/// field guards its own source value and renders blank when null.
#[derive(Debug)]
pub struct HtmlRow {
    pub rank: String,
    pub name: String,
    pub name_full: String,
    pub symbol: String,
    pub market_cap_usd: String,
    pub relative_btc: String,
    pub price_usd: String,
    pub price_btc: String,
    pub price_eth: String,
    pub volume_24h_usd: String,
    pub percent_change_1h: String,
    pub percent_change_24h: String,
    pub percent_change_7d: String,
}

impl HtmlRow {
    /// `btc_market_cap` is the first record's market cap, the base of
    /// the permille column.
    pub fn from_record(
        record: &CoinRecord,
        refs: &RefPrices,
        btc_market_cap: Option<f64>,
    ) -> Option<Self> {
        let usd = record.quote.usd.as_ref()?;
        Some(Self {
            rank: record
                .cmc_rank
                .map(|r| r.to_string())
                .unwrap_or_default(),
            name: truncate(&record.slug, HTML_NAME_WIDTH),
            name_full: record.slug.clone(),
            symbol: record.symbol.clone(),
            market_cap_usd: usd
                .market_cap
                .map(|mc| format!("{:.3}", mc / 1e6))
                .unwrap_or_default(),
            relative_btc: match (usd.market_cap, btc_market_cap) {
                (Some(mc), Some(base)) if base > 0.0 => format!("{:.2}", mc / base * 1000.0),
                _ => String::new(),
            },
            price_usd: usd
                .price
                .map(|p| {
                    if p >= 2.0 {
                        format!("{:.2}", p)
                    } else {
                        format!("{}", p)
                    }
                })
                .unwrap_or_default(),
            price_btc: ratio(usd.price, refs.btc)
                .map(|r| format!("{:.8}", r))
                .unwrap_or_default(),
            price_eth: ratio(usd.price, refs.eth)
                .map(|r| format!("{:.10}", r))
                .unwrap_or_default(),
            volume_24h_usd: usd
                .volume_24h
                .map(|v| format!("{:.0}", v))
                .unwrap_or_default(),
            percent_change_1h: usd
                .percent_change_1h
                .map(|v| format!("{:.2}%", v))
                .unwrap_or_default(),
            percent_change_24h: usd
                .percent_change_24h
                .map(|v| format!("{:.2}%", v))
                .unwrap_or_default(),
            percent_change_7d: usd
                .percent_change_7d
                .map(|v| format!("{:.2}%", v))
                .unwrap_or_default(),
        })
    }

    /// Cells in table column order, paired with their field names
    /// (which double as the CSS classes).
    pub fn cells(&self) -> [(&'static str, &str); 12] {
        [
            ("rank", self.rank.as_str()),
            ("name", self.name.as_str()),
            ("symbol", self.symbol.as_str()),
            ("market_cap_usd", self.market_cap_usd.as_str()),
            ("relative_btc", self.relative_btc.as_str()),
            ("price_usd", self.price_usd.as_str()),
            ("price_btc", self.price_btc.as_str()),
            ("price_eth", self.price_eth.as_str()),
            ("24h_volume_usd", self.volume_24h_usd.as_str()),
            ("percent_change_1h", self.percent_change_1h.as_str()),
            ("percent_change_24h", self.percent_change_24h.as_str()),
            ("percent_change_7d", self.percent_change_7d.as_str()),
        ]
    }
}
