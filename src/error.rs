//! Error taxonomy shared by the analysis core and the API layer.

use thiserror::Error;

/// Errors surfaced to callers of the analysis core.
///
/// None of these are retried internally; retry policy belongs to the
/// caller. Divide-by-zero conditions inside indicators never reach this
/// type (they produce undefined values instead).
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Empty or unknown symbol series.
    #[error("no data found for symbol '{symbol}'")]
    NotFound { symbol: String },

    /// Fewer points than the required warm-up/training window.
    #[error("insufficient data: {actual} points available, {required} required")]
    InsufficientData { required: usize, actual: usize },

    /// Upstream provider fetch failure.
    #[error("market data provider unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Bad period/window/horizon supplied by the caller.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl AnalysisError {
    pub fn not_found(symbol: impl Into<String>) -> Self {
        Self::NotFound {
            symbol: symbol.into(),
        }
    }

    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}
