pub mod market_data;
pub mod sentiment;
pub mod yahoo;

pub use market_data::{validate_period, MarketDataProvider, VALID_PERIODS};
pub use yahoo::YahooFinanceProvider;
