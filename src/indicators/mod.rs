//! Technical indicator library.
//!
//! Every calculation is a pure function from a price series to a sequence
//! aligned with the input: one entry per bar, `None` through the warm-up
//! window (and for undefined values such as a flat stochastic range).

pub mod momentum;
pub mod trend;
pub mod volatility;

use crate::models::{IndicatorSet, PricePoint};

pub use momentum::{calculate_rsi, calculate_rsi_default, calculate_stochastic};
pub use trend::{calculate_ema, calculate_macd, calculate_macd_default, calculate_sma};
pub use volatility::{calculate_bollinger, calculate_bollinger_default};

/// Compute the full indicator set served by the analysis endpoints.
pub fn compute_indicator_set(points: &[PricePoint]) -> IndicatorSet {
    let closes: Vec<f64> = points.iter().map(|p| p.close).collect();

    let macd = calculate_macd_default(&closes);
    let bollinger = calculate_bollinger_default(&closes);
    let stochastic = calculate_stochastic(points, 14, 3);

    IndicatorSet {
        close: closes.clone(),
        sma_20: calculate_sma(&closes, 20),
        sma_50: calculate_sma(&closes, 50),
        ema_12: calculate_ema(&closes, 12),
        ema_26: calculate_ema(&closes, 26),
        rsi: calculate_rsi_default(&closes),
        macd: macd.macd,
        macd_signal: macd.signal,
        macd_histogram: macd.histogram,
        bb_upper: bollinger.upper,
        bb_middle: bollinger.middle,
        bb_lower: bollinger.lower,
        stoch_k: stochastic.k,
        stoch_d: stochastic.d,
    }
}
