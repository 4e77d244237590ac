use crate::MarketDataConnector;
use async_trait::async_trait;
use common::{
    models::{CoinRecord, MapEntry},
    Error, Result,
};
use serde_json::Value;
use tracing::{debug, warn};

const CMC_API_URL: &str = "https://pro-api.coinmarketcap.com/v1/cryptocurrency";

/// CoinMarketCap API client. One GET per operation, no retry and no
/// explicit timeout; the API key travels as a query parameter.
pub struct CmcConnector {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl CmcConnector {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, CMC_API_URL)
    }

    /// Construct against an alternative endpoint, used by tests to point
    /// the connector at a fixture server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Issue a GET and unwrap the response envelope: the `data` field
    /// signals success, anything else is surfaced verbatim as an API
    /// error.
    async fn get_data(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path);

        debug!("Fetching {} from CoinMarketCap", path);

        let body = self
            .client
            .get(&url)
            .query(params)
            .query(&[("CMC_PRO_API_KEY", self.api_key.as_str())])
            .send()
            .await
            .map_err(Error::Http)?
            .text()
            .await?;

        extract_data(&body)
    }
}

#[async_trait]
impl MarketDataConnector for CmcConnector {
    async fn fetch_all(&self, limit: u32) -> Result<Vec<CoinRecord>> {
        let data = self
            .get_data("listings/latest", &[("limit", limit.to_string())])
            .await?;
        records_from_list(data)
    }

    async fn fetch_selected(&self, ids: &[u64]) -> Result<Vec<CoinRecord>> {
        let id_list = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let data = self.get_data("quotes/latest", &[("id", id_list)]).await?;
        records_from_keyed(data)
    }

    async fn fetch_map(&self) -> Result<Vec<MapEntry>> {
        let data = self.get_data("map", &[]).await?;
        map_entries_from_list(data)
    }
}

/// Unwrap the CoinMarketCap response envelope. Success is signaled by
/// the presence of a top-level `data` field; any other body is an error
/// envelope and is carried verbatim for diagnosis.
fn extract_data(body: &str) -> Result<Value> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(mut envelope)) => match envelope.remove("data") {
            Some(data) => Ok(data),
            None => Err(Error::Api(
                serde_json::to_string_pretty(&Value::Object(envelope))
                    .unwrap_or_else(|_| body.to_string()),
            )),
        },
        _ => Err(Error::Api(body.to_string())),
    }
}

/// Decode a listings payload: an ordered array of coin records. The
/// server's ranking order is preserved. Records with an unexpected
/// shape are skipped rather than failing the whole batch.
fn records_from_list(data: Value) -> Result<Vec<CoinRecord>> {
    let items = match data {
        Value::Array(items) => items,
        other => {
            return Err(Error::Parse(format!(
                "expected a coin list, got: {}",
                other
            )))
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<CoinRecord>(item) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping malformed coin record: {}", e),
        }
    }
    Ok(records)
}

/// Decode a quotes payload: an id-keyed object of coin records. The
/// server does not guarantee order for multi-id lookups, so the values
/// are sorted by ascending rank before returning; unranked records go
/// last.
fn records_from_keyed(data: Value) -> Result<Vec<CoinRecord>> {
    let entries = match data {
        Value::Object(entries) => entries,
        other => {
            return Err(Error::Parse(format!(
                "expected an id-keyed coin map, got: {}",
                other
            )))
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for (id, item) in entries {
        match serde_json::from_value::<CoinRecord>(item) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping malformed coin record for id {}: {}", id, e),
        }
    }
    records.sort_by_key(|record| record.cmc_rank.unwrap_or(u32::MAX));
    Ok(records)
}

fn map_entries_from_list(data: Value) -> Result<Vec<MapEntry>> {
    let items = match data {
        Value::Array(items) => items,
        other => {
            return Err(Error::Parse(format!(
                "expected a map catalog list, got: {}",
                other
            )))
        }
    };

    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<MapEntry>(item) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("Skipping malformed map entry: {}", e),
        }
    }
    Ok(entries)
}
