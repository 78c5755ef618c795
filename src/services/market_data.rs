//! Market data provider interface.

use crate::error::AnalysisError;
use crate::models::{NewsItem, PricePoint, QuoteInfo};
use async_trait::async_trait;

/// History periods accepted by the API.
pub const VALID_PERIODS: [&str; 8] = ["1d", "5d", "1mo", "3mo", "6mo", "1y", "2y", "5y"];

/// Reject unknown history periods before they reach the provider.
pub fn validate_period(period: &str) -> Result<(), AnalysisError> {
    if VALID_PERIODS.contains(&period) {
        Ok(())
    } else {
        Err(AnalysisError::InvalidParameter(format!(
            "unknown period '{}', expected one of {}",
            period,
            VALID_PERIODS.join(", ")
        )))
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Get daily OHLCV history for a symbol over a period.
    ///
    /// An unknown symbol surfaces as `NotFound`; transport failures as
    /// `UpstreamUnavailable`. Never retried here.
    async fn get_history(
        &self,
        symbol: &str,
        period: &str,
    ) -> Result<Vec<PricePoint>, AnalysisError>;

    /// Get snapshot quote information for a symbol.
    async fn get_quote(&self, symbol: &str) -> Result<QuoteInfo, AnalysisError>;

    /// Get recent news articles for a symbol.
    async fn get_news(&self, symbol: &str) -> Result<Vec<NewsItem>, AnalysisError>;
}
