//! Lexicon-based headline sentiment scoring.

use crate::models::{NewsItem, ScoredNewsItem, Sentiment};

/// Labels switch from neutral at this polarity magnitude.
pub const SENTIMENT_THRESHOLD: f64 = 0.1;

const POSITIVE_WORDS: &[&str] = &[
    "gain", "gains", "growth", "profit", "profits", "beat", "beats", "strong", "record", "surge",
    "surges", "soar", "soars", "rally", "rallies", "upgrade", "upgraded", "bullish", "outperform",
    "win", "wins", "success", "successful", "positive", "boost", "boosts", "jump", "jumps", "rise",
    "rises", "improved", "improvement", "expand", "expansion", "optimistic", "momentum",
    "breakthrough", "dividend", "buyback",
];

const NEGATIVE_WORDS: &[&str] = &[
    "loss", "losses", "fall", "falls", "drop", "drops", "decline", "declines", "weak", "miss",
    "misses", "cut", "cuts", "downgrade", "downgraded", "bearish", "underperform", "fail",
    "failure", "negative", "plunge", "plunges", "crash", "slump", "fear", "fears", "concern",
    "concerns", "lawsuit", "probe", "recall", "risk", "risks", "warning", "layoff", "layoffs",
    "bankruptcy", "fraud", "selloff",
];

/// Polarity of a piece of text in [-1, 1].
///
/// Counts positive and negative lexicon hits over lowercased word
/// tokens; zero when nothing matches.
pub fn score(text: &str) -> f64 {
    let mut positive = 0usize;
    let mut negative = 0usize;

    for token in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        let word = token.to_lowercase();
        if POSITIVE_WORDS.contains(&word.as_str()) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&word.as_str()) {
            negative += 1;
        }
    }

    let matched = positive + negative;
    if matched == 0 {
        0.0
    } else {
        (positive as f64 - negative as f64) / matched as f64
    }
}

/// Map a polarity score to a label at the ±0.1 thresholds.
pub fn label(polarity: f64) -> Sentiment {
    if polarity > SENTIMENT_THRESHOLD {
        Sentiment::Positive
    } else if polarity < -SENTIMENT_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Score each article title and derive the averaged overall label.
pub fn score_news(items: Vec<NewsItem>) -> (Vec<ScoredNewsItem>, Sentiment, f64) {
    let scored: Vec<ScoredNewsItem> = items
        .into_iter()
        .map(|item| {
            let polarity = score(&item.title);
            ScoredNewsItem {
                sentiment: label(polarity),
                sentiment_score: polarity,
                item,
            }
        })
        .collect();

    let average = if scored.is_empty() {
        0.0
    } else {
        scored.iter().map(|s| s.sentiment_score).sum::<f64>() / scored.len() as f64
    };

    (scored, label(average), average)
}
