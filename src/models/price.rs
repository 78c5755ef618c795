//! OHLCV price bars and quote data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily OHLCV bar.
///
/// Series of these are ordered ascending by date with no duplicate dates.
/// Gaps are allowed (non-trading days are simply absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Snapshot quote information for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteInfo {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub previous_close: f64,
    pub open: f64,
    pub day_high: f64,
    pub day_low: f64,
    pub volume: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifty_two_week_high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifty_two_week_low: Option<f64>,
}
