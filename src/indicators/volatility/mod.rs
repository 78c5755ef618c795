pub mod bollinger;

pub use bollinger::{calculate_bollinger, calculate_bollinger_default, BollingerSeries};
