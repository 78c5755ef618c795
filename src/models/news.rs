//! News articles and sentiment labels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article as returned by the market-data provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub publisher: String,
    pub link: String,
    pub published_at: DateTime<Utc>,
}

/// Polarity label mapped from a numeric sentiment score at ±0.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// A news article annotated with its title sentiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredNewsItem {
    #[serde(flatten)]
    pub item: NewsItem,
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
}
