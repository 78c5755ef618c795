//! Analysis facade composing indicators, trend, and signal detection.

use crate::error::AnalysisError;
use crate::indicators::compute_indicator_set;
use crate::models::{IndicatorSet, IndicatorSnapshot, PricePoint, SignalEvent, TrendLabel};
use crate::signals::detector;
use serde::{Deserialize, Serialize};

/// Result of a technical-analysis pass over one price series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalAnalysis {
    pub trend: TrendLabel,
    pub indicators: IndicatorSnapshot,
    pub signals: Vec<SignalEvent>,
    pub current_price: f64,
}

pub struct AnalysisEngine;

impl AnalysisEngine {
    /// Compute all indicator series for a price series.
    pub fn compute_indicators(points: &[PricePoint]) -> IndicatorSet {
        compute_indicator_set(points)
    }

    /// Detect signal events at the latest complete bar.
    pub fn detect_latest_signals(set: &IndicatorSet) -> Vec<SignalEvent> {
        match set.latest_index() {
            Some(index) => detector::detect_signals(set, index),
            None => Vec::new(),
        }
    }

    /// Full technical analysis: indicator snapshot, trend label, and
    /// signal events at the latest bar.
    pub fn technical_analysis(points: &[PricePoint]) -> Result<TechnicalAnalysis, AnalysisError> {
        let set = Self::compute_indicators(points);
        let index = set
            .latest_index()
            .ok_or_else(|| AnalysisError::insufficient_data(1, 0))?;

        Ok(TechnicalAnalysis {
            trend: detector::trend_label(&set, index),
            indicators: set.snapshot(index),
            signals: detector::detect_signals(&set, index),
            current_price: set.close[index],
        })
    }
}
