//! Signal events, trend labels, and the blended score/recommendation.

use serde::{Deserialize, Serialize};

/// Direction of a discrete signal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Buy,
    Sell,
}

/// A discrete buy/sell event emitted by one indicator at detection time.
///
/// Produced transiently per analysis call; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalEvent {
    pub kind: SignalKind,
    pub indicator: String,
    pub value: f64,
    pub reason: String,
}

impl SignalEvent {
    pub fn buy(indicator: &str, value: f64, reason: &str) -> Self {
        Self {
            kind: SignalKind::Buy,
            indicator: indicator.to_string(),
            value,
            reason: reason.to_string(),
        }
    }

    pub fn sell(indicator: &str, value: f64, reason: &str) -> Self {
        Self {
            kind: SignalKind::Sell,
            indicator: indicator.to_string(),
            value,
            reason: reason.to_string(),
        }
    }
}

/// Moving-average trend label. Informational, not a buy/sell event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendLabel {
    Uptrend,
    Downtrend,
    Neutral,
}

/// Categorical recommendation derived from the blended score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Neutral,
    Sell,
    StrongSell,
}

impl Recommendation {
    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "strong buy",
            Recommendation::Buy => "buy",
            Recommendation::Neutral => "neutral",
            Recommendation::Sell => "sell",
            Recommendation::StrongSell => "strong sell",
        }
    }
}

/// Blended score in [0, 100] with its recommendation band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub value: u8,
    pub recommendation: Recommendation,
}
