//! Unit tests for the sentiment scorer

use chrono::DateTime;
use stockpulse::models::{NewsItem, Sentiment};
use stockpulse::services::sentiment::{label, score, score_news};

fn make_item(title: &str) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        publisher: "Wire".to_string(),
        link: "https://example.com/a".to_string(),
        published_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
    }
}

#[test]
fn positive_headline_scores_positive() {
    let polarity = score("Shares surge after record profit beat");
    assert!(polarity > 0.1);
    assert_eq!(label(polarity), Sentiment::Positive);
}

#[test]
fn negative_headline_scores_negative() {
    let polarity = score("Stock plunges on lawsuit fears and weak outlook");
    assert!(polarity < -0.1);
    assert_eq!(label(polarity), Sentiment::Negative);
}

#[test]
fn headline_without_lexicon_words_is_neutral() {
    let polarity = score("Company schedules annual shareholder meeting");
    assert_eq!(polarity, 0.0);
    assert_eq!(label(polarity), Sentiment::Neutral);
}

#[test]
fn mixed_headline_balances_out() {
    // One positive word, one negative word.
    let polarity = score("Profit reported despite lawsuit");
    assert_eq!(polarity, 0.0);
    assert_eq!(label(polarity), Sentiment::Neutral);
}

#[test]
fn polarity_is_bounded() {
    let all_positive = score("surge rally gain profit strong");
    let all_negative = score("crash slump loss weak plunge");
    assert_eq!(all_positive, 1.0);
    assert_eq!(all_negative, -1.0);
}

#[test]
fn scoring_is_case_insensitive() {
    assert_eq!(score("PROFIT Surge"), score("profit surge"));
}

#[test]
fn score_news_averages_across_articles() {
    let items = vec![
        make_item("Record profit and strong growth"),
        make_item("Shares fall on weak guidance"),
        make_item("Quarterly report published"),
    ];
    let (scored, overall, average) = score_news(items);

    assert_eq!(scored.len(), 3);
    assert_eq!(scored[0].sentiment, Sentiment::Positive);
    assert_eq!(scored[1].sentiment, Sentiment::Negative);
    assert_eq!(scored[2].sentiment, Sentiment::Neutral);
    assert_eq!(label(average), overall);
}

#[test]
fn empty_news_is_neutral() {
    let (scored, overall, average) = score_news(Vec::new());
    assert!(scored.is_empty());
    assert_eq!(overall, Sentiment::Neutral);
    assert_eq!(average, 0.0);
}
