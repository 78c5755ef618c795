//! Unit tests for the forecast adapter contract

use chrono::NaiveDate;
use stockpulse::config::ForecastConfig;
use stockpulse::error::AnalysisError;
use stockpulse::forecast::{run_forecast, PricePredictor};
use stockpulse::models::{ForecastAction, PricePoint};

/// Predictor returning a fixed price for every future day.
struct FixedPredictor {
    price: f64,
}

impl PricePredictor for FixedPredictor {
    fn predict(&self, _points: &[PricePoint], horizon: usize) -> Result<Vec<f64>, AnalysisError> {
        Ok(vec![self.price; horizon])
    }
}

fn make_series(count: usize) -> Vec<PricePoint> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            PricePoint::new(
                start + chrono::Duration::days(i as i64),
                99.5,
                101.0,
                99.0,
                100.0,
                1_000_000,
            )
        })
        .collect()
}

#[test]
fn forecast_returns_exactly_horizon_values() {
    let points = make_series(40);
    let predictor = FixedPredictor { price: 101.0 };
    let forecast = run_forecast(&points, 5, &predictor, &ForecastConfig::default()).unwrap();
    assert_eq!(forecast.predicted_prices.len(), 5);
}

#[test]
fn forecast_on_short_series_is_insufficient_data() {
    let points = make_series(10);
    let predictor = FixedPredictor { price: 101.0 };
    let result = run_forecast(&points, 5, &predictor, &ForecastConfig::default());
    assert!(matches!(
        result,
        Err(AnalysisError::InsufficientData {
            required: 30,
            actual: 10
        })
    ));
}

#[test]
fn zero_horizon_is_invalid() {
    let points = make_series(40);
    let predictor = FixedPredictor { price: 101.0 };
    let result = run_forecast(&points, 0, &predictor, &ForecastConfig::default());
    assert!(matches!(result, Err(AnalysisError::InvalidParameter(_))));
}

#[test]
fn upward_move_beyond_threshold_is_a_buy() {
    let points = make_series(40);
    // 103 vs 100: +3% -> buy, confidence 3 * 10 = 30
    let predictor = FixedPredictor { price: 103.0 };
    let forecast = run_forecast(&points, 5, &predictor, &ForecastConfig::default()).unwrap();

    assert_eq!(forecast.recommendation, ForecastAction::Buy);
    assert!((forecast.percent_change - 3.0).abs() < 1e-9);
    assert!((forecast.confidence - 30.0).abs() < 1e-9);
}

#[test]
fn downward_move_confidence_is_capped() {
    let points = make_series(40);
    // 50 vs 100: -50% -> sell, confidence capped at 80
    let predictor = FixedPredictor { price: 50.0 };
    let forecast = run_forecast(&points, 5, &predictor, &ForecastConfig::default()).unwrap();

    assert_eq!(forecast.recommendation, ForecastAction::Sell);
    assert_eq!(forecast.confidence, 80.0);
}

#[test]
fn small_move_is_a_hold_with_neutral_confidence() {
    let points = make_series(40);
    let predictor = FixedPredictor { price: 100.5 };
    let forecast = run_forecast(&points, 5, &predictor, &ForecastConfig::default()).unwrap();

    assert_eq!(forecast.recommendation, ForecastAction::Hold);
    assert_eq!(forecast.confidence, 50.0);
}

#[test]
fn current_price_and_average_are_reported() {
    let points = make_series(40);
    let predictor = FixedPredictor { price: 104.0 };
    let forecast = run_forecast(&points, 3, &predictor, &ForecastConfig::default()).unwrap();

    assert_eq!(forecast.current_price, 100.0);
    assert_eq!(forecast.average_prediction, 104.0);
}
