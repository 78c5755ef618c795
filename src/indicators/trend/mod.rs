pub mod ema;
pub mod macd;
pub mod sma;

pub use ema::calculate_ema;
pub use macd::{calculate_macd, calculate_macd_default, MacdSeries};
pub use sma::calculate_sma;
