//! Environment helpers and tunable analysis thresholds.

use crate::models::Recommendation;
use std::env;

/// Current runtime environment, from `ENVIRONMENT` (default "development").
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}

/// HTTP port, from `PORT` (default 8080).
pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080)
}

/// Score-aggregation thresholds. All scoring behavior is data here, not
/// control flow, so the bands can be tuned without touching the
/// aggregator.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Neutral starting score.
    pub base_score: i32,
    /// Points added per buy event / subtracted per sell event.
    pub signal_points: i32,
    /// Points added/subtracted when the forecast clears its threshold.
    pub forecast_points: i32,
    /// Points added/subtracted for positive/negative sentiment.
    pub sentiment_points: i32,
    /// Percent-change magnitude a forecast must clear to contribute.
    pub forecast_threshold_pct: f64,
    /// Recommendation bands: (inclusive lower bound, label), sorted
    /// descending; the first band at or below the score wins.
    pub recommendation_bands: [(u8, Recommendation); 5],
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 50,
            signal_points: 5,
            forecast_points: 10,
            sentiment_points: 10,
            forecast_threshold_pct: 2.0,
            recommendation_bands: [
                (70, Recommendation::StrongBuy),
                (60, Recommendation::Buy),
                (40, Recommendation::Neutral),
                (30, Recommendation::Sell),
                (0, Recommendation::StrongSell),
            ],
        }
    }
}

/// Forecast-adapter thresholds.
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    /// Minimum historical points required to forecast.
    pub min_points: usize,
    /// Percent-change magnitude separating buy/sell from hold.
    pub threshold_pct: f64,
    /// Confidence per percent of predicted change.
    pub confidence_per_pct: f64,
    /// Confidence ceiling for directional calls.
    pub confidence_cap: f64,
    /// Confidence reported for hold calls.
    pub neutral_confidence: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            min_points: 30,
            threshold_pct: 2.0,
            confidence_per_pct: 10.0,
            confidence_cap: 80.0,
            neutral_confidence: 50.0,
        }
    }
}
