//! Score aggregation and recommendation banding.

use crate::config::ScoringConfig;
use crate::models::{Recommendation, Score, Sentiment, SignalEvent, SignalKind};

/// Blend signal events, an optional forecast percent change, and an
/// optional sentiment label into a bounded score.
///
/// Starts from the base score, adds/subtracts a flat weight per event
/// (unbounded before the final clamp), applies the forecast and
/// sentiment contributions, clamps to [0, 100], and looks up the
/// recommendation band. Never fails: an empty event list with no
/// forecast or sentiment yields the neutral base score.
pub fn aggregate_score(
    signals: &[SignalEvent],
    forecast_pct_change: Option<f64>,
    sentiment: Option<Sentiment>,
    config: &ScoringConfig,
) -> Score {
    let mut score = config.base_score;

    for event in signals {
        match event.kind {
            SignalKind::Buy => score += config.signal_points,
            SignalKind::Sell => score -= config.signal_points,
        }
    }

    if let Some(pct) = forecast_pct_change {
        if pct > config.forecast_threshold_pct {
            score += config.forecast_points;
        } else if pct < -config.forecast_threshold_pct {
            score -= config.forecast_points;
        }
    }

    match sentiment {
        Some(Sentiment::Positive) => score += config.sentiment_points,
        Some(Sentiment::Negative) => score -= config.sentiment_points,
        Some(Sentiment::Neutral) | None => {}
    }

    let value = score.clamp(0, 100) as u8;
    Score {
        value,
        recommendation: recommendation_for(value, config),
    }
}

/// Band lookup: first band whose lower bound is at or below the score.
///
/// The bands are sorted descending and end at 0, so every score in
/// [0, 100] lands in exactly one band.
pub fn recommendation_for(score: u8, config: &ScoringConfig) -> Recommendation {
    config
        .recommendation_bands
        .iter()
        .find(|(lower, _)| score >= *lower)
        .map(|(_, label)| *label)
        .unwrap_or(Recommendation::StrongSell)
}
