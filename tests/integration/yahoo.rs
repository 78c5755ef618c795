//! Integration tests for the HTTP market-data provider
//!
//! Runs the provider against a wiremock upstream serving canned chart
//! and search responses.

use serde_json::json;
use stockpulse::error::AnalysisError;
use stockpulse::services::{MarketDataProvider, YahooFinanceProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chart_body() -> serde_json::Value {
    // Three trading days; the second has a null close and is skipped.
    json!({
        "chart": {
            "result": [{
                "meta": {
                    "symbol": "AAPL",
                    "longName": "Apple Inc.",
                    "regularMarketPrice": 228.5,
                    "chartPreviousClose": 225.0,
                    "fiftyTwoWeekHigh": 260.1,
                    "fiftyTwoWeekLow": 164.1
                },
                "timestamp": [1714521600, 1714608000, 1714694400],
                "indicators": {
                    "quote": [{
                        "open":   [225.0, 226.0, 227.0],
                        "high":   [229.0, 228.0, 230.0],
                        "low":    [224.0, 225.0, 226.0],
                        "close":  [226.5, null, 228.5],
                        "volume": [51000000, 48000000, 53000000]
                    }]
                }
            }],
            "error": null
        }
    })
}

async fn mock_provider(server: &MockServer) -> YahooFinanceProvider {
    YahooFinanceProvider::with_base_url(server.uri().parse().unwrap())
}

#[tokio::test]
async fn history_parses_chart_bars() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/AAPL"))
        .and(query_param("range", "1mo"))
        .and(query_param("interval", "1d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body()))
        .mount(&server)
        .await;

    let provider = mock_provider(&server).await;
    let points = provider.get_history("AAPL", "1mo").await.unwrap();

    // The null-close bar is dropped.
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].close, 226.5);
    assert_eq!(points[1].close, 228.5);
    assert!(points[0].date < points[1].date);
    assert_eq!(points[0].volume, 51_000_000);
}

#[tokio::test]
async fn invalid_period_never_reaches_the_upstream() {
    let server = MockServer::start().await;
    let provider = mock_provider(&server).await;

    let result = provider.get_history("AAPL", "fortnight").await;
    assert!(matches!(result, Err(AnalysisError::InvalidParameter(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn chart_error_body_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/NOPE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found" }
            }
        })))
        .mount(&server)
        .await;

    let provider = mock_provider(&server).await;
    let result = provider.get_history("NOPE", "1mo").await;
    assert!(matches!(result, Err(AnalysisError::NotFound { .. })));
}

#[tokio::test]
async fn upstream_500_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/AAPL"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = mock_provider(&server).await;
    let result = provider.get_history("AAPL", "1mo").await;
    assert!(matches!(result, Err(AnalysisError::UpstreamUnavailable(_))));
}

#[tokio::test]
async fn empty_bar_arrays_are_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/HALT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": {
                "result": [{
                    "meta": { "symbol": "HALT" },
                    "timestamp": [],
                    "indicators": { "quote": [{}] }
                }],
                "error": null
            }
        })))
        .mount(&server)
        .await;

    let provider = mock_provider(&server).await;
    let result = provider.get_history("HALT", "1mo").await;
    assert!(matches!(result, Err(AnalysisError::NotFound { .. })));
}

#[tokio::test]
async fn quote_combines_meta_and_latest_bar() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/AAPL"))
        .and(query_param("range", "5d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body()))
        .mount(&server)
        .await;

    let provider = mock_provider(&server).await;
    let quote = provider.get_quote("AAPL").await.unwrap();

    assert_eq!(quote.symbol, "AAPL");
    assert_eq!(quote.name, "Apple Inc.");
    assert_eq!(quote.current_price, 228.5);
    assert_eq!(quote.previous_close, 225.0);
    assert_eq!(quote.day_high, 230.0);
    assert_eq!(quote.fifty_two_week_high, Some(260.1));
}

#[tokio::test]
async fn news_parses_search_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/finance/search"))
        .and(query_param("q", "AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "news": [
                {
                    "title": "Apple beats on earnings",
                    "publisher": "Newswire",
                    "link": "https://example.com/apple",
                    "providerPublishTime": 1714521600
                },
                {
                    "title": "Supply chain update"
                }
            ]
        })))
        .mount(&server)
        .await;

    let provider = mock_provider(&server).await;
    let news = provider.get_news("AAPL").await.unwrap();

    assert_eq!(news.len(), 2);
    assert_eq!(news[0].title, "Apple beats on earnings");
    assert_eq!(news[0].publisher, "Newswire");
    assert_eq!(news[1].publisher, "Unknown");
}
