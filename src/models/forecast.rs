//! Multi-day price forecast output.

use serde::{Deserialize, Serialize};

/// Three-way action derived from a forecast's percent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastAction {
    Buy,
    Sell,
    Hold,
}

/// A fixed-horizon price forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    pub current_price: f64,
    /// Exactly `horizon` future closes, in chronological order.
    pub predicted_prices: Vec<f64>,
    pub average_prediction: f64,
    /// Percent change between `average_prediction` and `current_price`.
    pub percent_change: f64,
    pub recommendation: ForecastAction,
    /// Confidence in [0, 100].
    pub confidence: f64,
}
