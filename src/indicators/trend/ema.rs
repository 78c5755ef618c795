//! EMA (Exponential Moving Average) indicator

use crate::common::math;

/// Calculate an EMA series aligned with the input closes.
///
/// Standard exponential weighting with `alpha = 2 / (span + 1)`, seeded
/// with the first close. Every index is defined; early values are biased
/// toward the seed, which is acceptable for a smoothing aid.
pub fn calculate_ema(closes: &[f64], span: usize) -> Vec<Option<f64>> {
    math::ema_series(closes, span)
        .into_iter()
        .map(Some)
        .collect()
}
