//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Calculate an SMA series aligned with the input closes.
///
/// Mean of the last `window` closes; `None` for indices < window - 1.
/// A zero window yields an all-`None` series.
pub fn calculate_sma(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; closes.len()];
    }

    closes
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if i + 1 < window {
                None
            } else {
                math::mean(&closes[i + 1 - window..=i])
            }
        })
        .collect()
}
