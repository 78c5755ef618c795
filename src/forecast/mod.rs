//! Price forecasting: a pluggable point predictor behind a fixed
//! adapter contract.

pub mod linear;
pub mod sequence;

pub use linear::LinearPredictor;
pub use sequence::{SequenceConfig, SequenceModel};

use crate::common::math;
use crate::config::ForecastConfig;
use crate::error::AnalysisError;
use crate::models::{Forecast, ForecastAction, PricePoint};

/// A point forecaster: historical series in, exactly `horizon` future
/// closes out, in chronological order.
///
/// The contract does not mandate single-step-recursive or direct
/// prediction; only the output length and time ordering.
pub trait PricePredictor: Send + Sync {
    fn predict(&self, points: &[PricePoint], horizon: usize) -> Result<Vec<f64>, AnalysisError>;
}

/// Run a forecast through a predictor and derive the recommendation.
///
/// Requires `config.min_points` of history. The recommendation compares
/// the mean predicted price against the current close at the
/// `threshold_pct` boundary; confidence scales with the predicted move
/// up to `confidence_cap`, or sits at `neutral_confidence` for holds.
pub fn run_forecast(
    points: &[PricePoint],
    horizon: usize,
    predictor: &dyn PricePredictor,
    config: &ForecastConfig,
) -> Result<Forecast, AnalysisError> {
    if horizon == 0 {
        return Err(AnalysisError::InvalidParameter(
            "forecast horizon must be at least 1 day".to_string(),
        ));
    }
    if points.len() < config.min_points {
        return Err(AnalysisError::insufficient_data(
            config.min_points,
            points.len(),
        ));
    }

    let current_price = points
        .last()
        .map(|p| p.close)
        .ok_or_else(|| AnalysisError::insufficient_data(1, 0))?;

    let predicted_prices = predictor.predict(points, horizon)?;
    debug_assert_eq!(predicted_prices.len(), horizon);
    let average_prediction = math::mean(&predicted_prices).unwrap_or(current_price);
    let percent_change =
        math::percent_change(current_price, average_prediction).unwrap_or(0.0);

    let (recommendation, confidence) = if percent_change > config.threshold_pct {
        (
            ForecastAction::Buy,
            (percent_change.abs() * config.confidence_per_pct).min(config.confidence_cap),
        )
    } else if percent_change < -config.threshold_pct {
        (
            ForecastAction::Sell,
            (percent_change.abs() * config.confidence_per_pct).min(config.confidence_cap),
        )
    } else {
        (ForecastAction::Hold, config.neutral_confidence)
    };

    Ok(Forecast {
        current_price,
        predicted_prices,
        average_prediction,
        percent_change,
        recommendation,
        confidence,
    })
}
