pub mod error;
pub mod map_cache;

pub use error::CacheError;
pub use map_cache::{CoinIndex, MapCache};
