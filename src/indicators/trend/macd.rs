//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;

/// Aligned MACD line, signal line, and histogram series.
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_span) of MACD
/// Histogram = MACD - Signal
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// Calculate MACD series aligned with the input closes.
///
/// Built from seeded EMAs, so every index is defined; like the EMAs
/// themselves, early values are biased estimates.
pub fn calculate_macd(
    closes: &[f64],
    fast_span: usize,
    slow_span: usize,
    signal_span: usize,
) -> MacdSeries {
    let fast = math::ema_series(closes, fast_span);
    let slow = math::ema_series(closes, slow_span);

    let macd_line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal_line = math::ema_series(&macd_line, signal_span);

    let histogram: Vec<Option<f64>> = macd_line
        .iter()
        .zip(&signal_line)
        .map(|(m, s)| Some(m - s))
        .collect();

    MacdSeries {
        macd: macd_line.into_iter().map(Some).collect(),
        signal: signal_line.into_iter().map(Some).collect(),
        histogram,
    }
}

/// Calculate MACD with default spans (12, 26, 9).
pub fn calculate_macd_default(closes: &[f64]) -> MacdSeries {
    calculate_macd(closes, 12, 26, 9)
}
