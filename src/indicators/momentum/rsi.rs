//! RSI (Relative Strength Index) indicator

use crate::common::math;

/// Calculate an RSI series aligned with the input closes.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Averages are simple rolling means of the positive/negative close
/// deltas over `period` bars. A value needs `period` deltas, so indices
/// < period are `None`.
///
/// Flat-price policy: when both averages are zero the RSI is 50
/// (neutral); when only the average loss is zero it is 100.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; closes.len()];
    }

    let mut gains = Vec::with_capacity(closes.len().saturating_sub(1));
    let mut losses = Vec::with_capacity(closes.len().saturating_sub(1));
    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    closes
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if i < period {
                return None;
            }
            // Deltas at positions i-period..i cover the last `period` bars.
            let avg_gain = math::mean(&gains[i - period..i])?;
            let avg_loss = math::mean(&losses[i - period..i])?;

            if avg_gain == 0.0 && avg_loss == 0.0 {
                Some(50.0)
            } else if avg_loss == 0.0 {
                Some(100.0)
            } else {
                let rs = avg_gain / avg_loss;
                Some(100.0 - 100.0 / (1.0 + rs))
            }
        })
        .collect()
}

/// Calculate RSI with the default period (14).
pub fn calculate_rsi_default(closes: &[f64]) -> Vec<Option<f64>> {
    calculate_rsi(closes, 14)
}
