//! Aligned indicator series and the latest-value snapshot served by the API.

use serde::{Deserialize, Serialize};

/// All indicator series computed from one price series.
///
/// Every vector has one entry per input bar. `None` marks the warm-up
/// window where an indicator lacks enough history (or an undefined value
/// such as a flat stochastic range); consumers treat `None` as "no signal
/// contribution", never as zero.
#[derive(Debug, Clone, Default)]
pub struct IndicatorSet {
    pub close: Vec<f64>,
    pub sma_20: Vec<Option<f64>>,
    pub sma_50: Vec<Option<f64>>,
    pub ema_12: Vec<Option<f64>>,
    pub ema_26: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub macd: Vec<Option<f64>>,
    pub macd_signal: Vec<Option<f64>>,
    pub macd_histogram: Vec<Option<f64>>,
    pub bb_upper: Vec<Option<f64>>,
    pub bb_middle: Vec<Option<f64>>,
    pub bb_lower: Vec<Option<f64>>,
    pub stoch_k: Vec<Option<f64>>,
    pub stoch_d: Vec<Option<f64>>,
}

impl IndicatorSet {
    /// Number of bars the set was computed over.
    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Index of the latest complete bar, if any.
    pub fn latest_index(&self) -> Option<usize> {
        self.close.len().checked_sub(1)
    }

    /// Latest value of each indicator, for API responses.
    pub fn snapshot(&self, index: usize) -> IndicatorSnapshot {
        let at = |series: &[Option<f64>]| series.get(index).copied().flatten();
        IndicatorSnapshot {
            sma_20: at(&self.sma_20),
            sma_50: at(&self.sma_50),
            ema_12: at(&self.ema_12),
            ema_26: at(&self.ema_26),
            rsi: at(&self.rsi),
            macd: at(&self.macd),
            macd_signal: at(&self.macd_signal),
            macd_histogram: at(&self.macd_histogram),
            bb_upper: at(&self.bb_upper),
            bb_middle: at(&self.bb_middle),
            bb_lower: at(&self.bb_lower),
            stoch_k: at(&self.stoch_k),
            stoch_d: at(&self.stoch_d),
        }
    }
}

/// Latest indicator values. `null` in JSON where the value is undefined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    #[serde(rename = "SMA_20")]
    pub sma_20: Option<f64>,
    #[serde(rename = "SMA_50")]
    pub sma_50: Option<f64>,
    #[serde(rename = "EMA_12")]
    pub ema_12: Option<f64>,
    #[serde(rename = "EMA_26")]
    pub ema_26: Option<f64>,
    #[serde(rename = "RSI")]
    pub rsi: Option<f64>,
    #[serde(rename = "MACD")]
    pub macd: Option<f64>,
    #[serde(rename = "MACD_signal")]
    pub macd_signal: Option<f64>,
    #[serde(rename = "MACD_histogram")]
    pub macd_histogram: Option<f64>,
    #[serde(rename = "BB_upper")]
    pub bb_upper: Option<f64>,
    #[serde(rename = "BB_middle")]
    pub bb_middle: Option<f64>,
    #[serde(rename = "BB_lower")]
    pub bb_lower: Option<f64>,
    #[serde(rename = "Stoch_K")]
    pub stoch_k: Option<f64>,
    #[serde(rename = "Stoch_D")]
    pub stoch_d: Option<f64>,
}
