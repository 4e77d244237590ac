use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("cache file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// One or more tokens had no id in the cache. Carries the full
    /// per-token resolution list so a stale cache or a typo is visible
    /// at a glance.
    #[error("could not resolve all coins to an id: {0:?}")]
    Resolution(Vec<(String, Option<u64>)>),
}

impl From<CacheError> for common::Error {
    fn from(err: CacheError) -> Self {
        match err {
            CacheError::Resolution(partial) => common::Error::Resolution(partial),
            other => common::Error::Cache(other.to_string()),
        }
    }
}
