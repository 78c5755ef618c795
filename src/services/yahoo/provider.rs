//! HTTP implementation of the market data provider.

use crate::error::AnalysisError;
use crate::models::{NewsItem, PricePoint, QuoteInfo};
use crate::services::market_data::{validate_period, MarketDataProvider};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;
use url::Url;

use super::messages::{ChartResponse, ChartResult, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const NEWS_COUNT: usize = 10;

pub struct YahooFinanceProvider {
    client: reqwest::Client,
    base_url: Url,
}

impl YahooFinanceProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.parse().expect("default base url"))
    }

    /// Point the provider at a different host (tests use a mock server).
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Base URL from `MARKET_DATA_BASE_URL` when set.
    pub fn from_env() -> Self {
        match std::env::var("MARKET_DATA_BASE_URL")
            .ok()
            .and_then(|raw| raw.parse().ok())
        {
            Some(url) => Self::with_base_url(url),
            None => Self::new(),
        }
    }

    async fn fetch_chart(&self, symbol: &str, range: &str) -> Result<ChartResult, AnalysisError> {
        let mut url = self
            .base_url
            .join(&format!("v8/finance/chart/{}", symbol))
            .map_err(|e| AnalysisError::InvalidParameter(format!("bad symbol: {}", e)))?;
        url.query_pairs_mut()
            .append_pair("range", range)
            .append_pair("interval", "1d");

        debug!(symbol = %symbol, range = %range, "fetching chart data");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AnalysisError::UpstreamUnavailable(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AnalysisError::not_found(symbol));
        }
        if !response.status().is_success() {
            return Err(AnalysisError::UpstreamUnavailable(format!(
                "chart endpoint returned {}",
                response.status()
            )));
        }

        let body: ChartResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::UpstreamUnavailable(e.to_string()))?;

        if let Some(error) = body.chart.error {
            debug!(symbol = %symbol, code = %error.code, "chart endpoint error");
            return Err(AnalysisError::not_found(symbol));
        }

        body.chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| AnalysisError::not_found(symbol))
    }

    fn bars_from_chart(result: &ChartResult) -> Vec<PricePoint> {
        let timestamps = match &result.timestamp {
            Some(ts) => ts,
            None => return Vec::new(),
        };
        let quote = match result.indicators.quote.first() {
            Some(q) => q,
            None => return Vec::new(),
        };

        let mut points = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let bar = (
                quote.open.get(i).copied().flatten(),
                quote.high.get(i).copied().flatten(),
                quote.low.get(i).copied().flatten(),
                quote.close.get(i).copied().flatten(),
                quote.volume.get(i).copied().flatten(),
            );
            if let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = bar {
                if let Some(date) = DateTime::from_timestamp(ts, 0) {
                    points.push(PricePoint::new(
                        date.date_naive(),
                        open,
                        high,
                        low,
                        close,
                        volume,
                    ));
                }
            }
        }
        points
    }
}

impl Default for YahooFinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    async fn get_history(
        &self,
        symbol: &str,
        period: &str,
    ) -> Result<Vec<PricePoint>, AnalysisError> {
        validate_period(period)?;
        let chart = self.fetch_chart(symbol, period).await?;
        let points = Self::bars_from_chart(&chart);
        if points.is_empty() {
            return Err(AnalysisError::not_found(symbol));
        }
        Ok(points)
    }

    async fn get_quote(&self, symbol: &str) -> Result<QuoteInfo, AnalysisError> {
        let chart = self.fetch_chart(symbol, "5d").await?;
        let points = Self::bars_from_chart(&chart);
        let latest = points.last().ok_or_else(|| AnalysisError::not_found(symbol))?;

        let meta = &chart.meta;
        let name = meta
            .long_name
            .clone()
            .or_else(|| meta.short_name.clone())
            .unwrap_or_else(|| meta.symbol.clone());

        Ok(QuoteInfo {
            symbol: meta.symbol.clone(),
            name,
            current_price: meta.regular_market_price.unwrap_or(latest.close),
            previous_close: meta.chart_previous_close.unwrap_or(latest.close),
            open: latest.open,
            day_high: latest.high,
            day_low: latest.low,
            volume: latest.volume,
            fifty_two_week_high: meta.fifty_two_week_high,
            fifty_two_week_low: meta.fifty_two_week_low,
        })
    }

    async fn get_news(&self, symbol: &str) -> Result<Vec<NewsItem>, AnalysisError> {
        let mut url = self
            .base_url
            .join("v1/finance/search")
            .map_err(|e| AnalysisError::UpstreamUnavailable(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("q", symbol)
            .append_pair("newsCount", &NEWS_COUNT.to_string());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AnalysisError::UpstreamUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AnalysisError::UpstreamUnavailable(format!(
                "search endpoint returned {}",
                response.status()
            )));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::UpstreamUnavailable(e.to_string()))?;

        let items = body
            .news
            .into_iter()
            .take(NEWS_COUNT)
            .map(|item| NewsItem {
                title: item.title,
                publisher: item.publisher.unwrap_or_else(|| "Unknown".to_string()),
                link: item.link.unwrap_or_default(),
                published_at: item
                    .provider_publish_time
                    .and_then(|ts| DateTime::from_timestamp(ts, 0))
                    .unwrap_or_else(Utc::now),
            })
            .collect();

        Ok(items)
    }
}
