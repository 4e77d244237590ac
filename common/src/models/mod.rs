pub mod coin;
pub mod price;

pub use coin::{CoinRecord, MapEntry};
pub use price::{Quote, UsdQuote};
