use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response envelope had no `data` field. Carries the raw
    /// response body for diagnosis.
    #[error("API error response:\n{0}")]
    Api(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    /// One or more configured coins could not be mapped to an id.
    /// Carries the full per-token resolution list, unresolved tokens
    /// shown as `None`.
    #[error("could not resolve all coins to an id: {0:?}")]
    Resolution(Vec<(String, Option<u64>)>),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
