//! Stochastic Oscillator indicator

use crate::models::PricePoint;

/// Aligned %K and %D series.
#[derive(Debug, Clone)]
pub struct StochasticSeries {
    pub k: Vec<Option<f64>>,
    pub d: Vec<Option<f64>>,
}

/// Calculate the stochastic oscillator.
///
/// %K = 100 * (close - lowest_low(k_period)) / (highest_high(k_period) - lowest_low(k_period))
/// %D = SMA(d_period) of %K
///
/// A flat range (highest high equals lowest low) makes %K undefined at
/// that index. %D requires `d_period` consecutive defined %K values.
pub fn calculate_stochastic(
    points: &[PricePoint],
    k_period: usize,
    d_period: usize,
) -> StochasticSeries {
    if k_period == 0 || d_period == 0 {
        return StochasticSeries {
            k: vec![None; points.len()],
            d: vec![None; points.len()],
        };
    }

    let k: Vec<Option<f64>> = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            if i + 1 < k_period {
                return None;
            }
            let window = &points[i + 1 - k_period..=i];
            let lowest_low = window.iter().map(|p| p.low).fold(f64::INFINITY, f64::min);
            let highest_high = window
                .iter()
                .map(|p| p.high)
                .fold(f64::NEG_INFINITY, f64::max);

            let range = highest_high - lowest_low;
            if range == 0.0 {
                None
            } else {
                Some(100.0 * (point.close - lowest_low) / range)
            }
        })
        .collect();

    let d: Vec<Option<f64>> = k
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if i + 1 < d_period {
                return None;
            }
            let window = &k[i + 1 - d_period..=i];
            let mut sum = 0.0;
            for value in window {
                sum += (*value)?;
            }
            Some(sum / d_period as f64)
        })
        .collect();

    StochasticSeries { k, d }
}
