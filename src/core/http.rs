//! HTTP endpoint server using Axum

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::{get_port, ForecastConfig, ScoringConfig};
use crate::error::AnalysisError;
use crate::forecast::{run_forecast, LinearPredictor, SequenceConfig, SequenceModel};
use crate::metrics::Metrics;
use crate::services::{sentiment, MarketDataProvider, YahooFinanceProvider};
use crate::signals::{aggregate_score, AnalysisEngine};

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub provider: Arc<dyn MarketDataProvider>,
    /// Trained sequence models, keyed by symbol. The registry is the
    /// caller-owned home for model handles; the models themselves are
    /// immutable once trained.
    pub models: Arc<RwLock<HashMap<String, SequenceModel>>>,
    pub scoring: Arc<ScoringConfig>,
    pub forecast: Arc<ForecastConfig>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Error wrapper mapping the analysis taxonomy onto HTTP statuses.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        let status = match &err {
            AnalysisError::NotFound { .. } => StatusCode::NOT_FOUND,
            AnalysisError::InsufficientData { .. } | AnalysisError::InvalidParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            AnalysisError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl ApiError {
    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "stockpulse-api"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

fn default_period() -> String {
    "1mo".to_string()
}

fn default_training_period() -> String {
    "2y".to_string()
}

fn default_model_period() -> String {
    "1y".to_string()
}

fn default_horizon() -> usize {
    5
}

#[derive(Debug, Deserialize)]
struct StockRequest {
    symbol: String,
}

#[derive(Debug, Deserialize)]
struct AnalysisRequest {
    symbol: String,
    #[serde(default = "default_period")]
    period: String,
}

#[derive(Debug, Deserialize)]
struct ForecastRequest {
    symbol: String,
    #[serde(default = "default_period")]
    period: String,
    #[serde(default = "default_horizon")]
    horizon_days: usize,
}

#[derive(Debug, Deserialize)]
struct TrainRequest {
    symbol: String,
    #[serde(default = "default_training_period")]
    period: String,
    #[serde(default)]
    config: Option<SequenceConfig>,
}

#[derive(Debug, Deserialize)]
struct ModelForecastRequest {
    symbol: String,
    #[serde(default = "default_model_period")]
    period: String,
    #[serde(default = "default_horizon")]
    horizon_days: usize,
}

/// Basic quote information for a symbol.
async fn stock_info(
    State(state): State<AppState>,
    Json(request): Json<StockRequest>,
) -> Result<Json<Value>, ApiError> {
    let quote = state.provider.get_quote(&request.symbol).await?;
    Ok(Json(json!(quote)))
}

/// Daily OHLCV history for a symbol over a period.
async fn stock_history(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<Value>, ApiError> {
    let points = state
        .provider
        .get_history(&request.symbol, &request.period)
        .await?;

    Ok(Json(json!({
        "symbol": request.symbol,
        "period": request.period,
        "data": points,
    })))
}

/// Technical analysis: indicators, trend label, and signal events.
async fn stock_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<Value>, ApiError> {
    let points = state
        .provider
        .get_history(&request.symbol, &request.period)
        .await?;

    let analysis = AnalysisEngine::technical_analysis(&points)?;
    state.metrics.analyses_total.inc();

    info!(
        symbol = %request.symbol,
        signals = analysis.signals.len(),
        trend = ?analysis.trend,
        "technical analysis computed"
    );

    Ok(Json(json!({
        "symbol": request.symbol,
        "trend": analysis.trend,
        "indicators": analysis.indicators,
        "signals": analysis.signals,
        "current_price": analysis.current_price,
        "updated_at": Utc::now(),
    })))
}

/// Multi-day price forecast from the linear predictor.
async fn stock_forecast(
    State(state): State<AppState>,
    Json(request): Json<ForecastRequest>,
) -> Result<Json<Value>, ApiError> {
    let points = state
        .provider
        .get_history(&request.symbol, &request.period)
        .await?;

    let predictor = LinearPredictor::new();
    let forecast = run_forecast(&points, request.horizon_days, &predictor, &state.forecast)?;
    state.metrics.forecasts_total.inc();

    Ok(Json(json!({
        "symbol": request.symbol,
        "forecast": forecast,
        "updated_at": Utc::now(),
    })))
}

/// Recent news with per-article and overall sentiment.
async fn stock_news(
    State(state): State<AppState>,
    Json(request): Json<StockRequest>,
) -> Result<Json<Value>, ApiError> {
    let items = state.provider.get_news(&request.symbol).await?;
    let (scored, overall, average) = sentiment::score_news(items);

    Ok(Json(json!({
        "symbol": request.symbol,
        "news": scored,
        "overall_sentiment": overall,
        "average_sentiment_score": average,
    })))
}

/// Comprehensive analysis: technical signals blended with the forecast
/// and news sentiment into one score and recommendation.
///
/// The forecast and sentiment inputs are optional enrichments; when one
/// cannot be produced the aggregation proceeds without it.
async fn comprehensive_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<Value>, ApiError> {
    let symbol = &request.symbol;
    let points = state.provider.get_history(symbol, &request.period).await?;

    let analysis = AnalysisEngine::technical_analysis(&points)?;
    state.metrics.analyses_total.inc();

    let predictor = LinearPredictor::new();
    let forecast = match run_forecast(&points, 5, &predictor, &state.forecast) {
        Ok(f) => {
            state.metrics.forecasts_total.inc();
            Some(f)
        }
        Err(e) => {
            warn!(symbol = %symbol, error = %e, "forecast skipped in comprehensive analysis");
            None
        }
    };

    let news = match state.provider.get_news(symbol).await {
        Ok(items) => Some(sentiment::score_news(items)),
        Err(e) => {
            warn!(symbol = %symbol, error = %e, "news skipped in comprehensive analysis");
            None
        }
    };

    let quote = state.provider.get_quote(symbol).await.ok();

    let score = aggregate_score(
        &analysis.signals,
        forecast.as_ref().map(|f| f.percent_change),
        news.as_ref().map(|(_, overall, _)| *overall),
        &state.scoring,
    );

    let display_name = quote
        .as_ref()
        .map(|q| q.name.clone())
        .unwrap_or_else(|| symbol.clone());
    let summary = format!(
        "Overall score for {} is {} out of 100: {}.",
        display_name,
        score.value,
        score.recommendation.as_str()
    );

    info!(
        symbol = %symbol,
        score = score.value,
        recommendation = ?score.recommendation,
        "comprehensive analysis computed"
    );

    Ok(Json(json!({
        "symbol": symbol,
        "overall_score": score.value,
        "overall_recommendation": score.recommendation,
        "technical_analysis": {
            "trend": analysis.trend,
            "indicators": analysis.indicators,
            "signals": analysis.signals,
            "current_price": analysis.current_price,
        },
        "price_forecast": forecast,
        "stock_info": quote,
        "news_sentiment": news.as_ref().map(|(scored, overall, average)| json!({
            "news": scored,
            "overall_sentiment": overall,
            "average_sentiment_score": average,
        })),
        "summary": summary,
        "updated_at": Utc::now(),
    })))
}

/// Train a sequence model for a symbol and store its handle.
async fn train_model(
    State(state): State<AppState>,
    Json(request): Json<TrainRequest>,
) -> Result<Json<Value>, ApiError> {
    let points = state
        .provider
        .get_history(&request.symbol, &request.period)
        .await?;

    let config = request.config.unwrap_or_default();
    let training_points = points.len();

    // Training is CPU-bound; keep it off the request path.
    let model = tokio::task::spawn_blocking(move || SequenceModel::train(&points, config))
        .await
        .map_err(|e| ApiError::internal(format!("training task failed: {}", e)))??;

    let sequence_length = model.sequence_length();
    state
        .models
        .write()
        .await
        .insert(request.symbol.clone(), model);
    state.metrics.models_trained_total.inc();

    info!(
        symbol = %request.symbol,
        points = training_points,
        "sequence model trained"
    );

    Ok(Json(json!({
        "symbol": request.symbol,
        "sequence_length": sequence_length,
        "training_points": training_points,
        "status": "trained",
    })))
}

/// Forecast using a previously trained sequence model.
async fn model_forecast(
    State(state): State<AppState>,
    Json(request): Json<ModelForecastRequest>,
) -> Result<Json<Value>, ApiError> {
    let model = {
        let models = state.models.read().await;
        models.get(&request.symbol).cloned()
    };
    let model = model.ok_or_else(|| ApiError {
        status: StatusCode::NOT_FOUND,
        message: format!("no trained model for symbol '{}'", request.symbol),
    })?;

    let points = state
        .provider
        .get_history(&request.symbol, &request.period)
        .await?;

    let forecast = run_forecast(&points, request.horizon_days, &model, &state.forecast)?;
    state.metrics.forecasts_total.inc();

    Ok(Json(json!({
        "symbol": request.symbol,
        "forecast": forecast,
        "model": "sequence",
        "updated_at": Utc::now(),
    })))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/stock/info", post(stock_info))
        .route("/api/stock/history", post(stock_history))
        .route("/api/stock/analysis", post(stock_analysis))
        .route("/api/stock/forecast", post(stock_forecast))
        .route("/api/stock/news", post(stock_news))
        .route("/api/stock/comprehensive", post(comprehensive_analysis))
        .route("/api/models/train", post(train_model))
        .route("/api/models/forecast", post(model_forecast))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server() -> Result<(), Box<dyn std::error::Error>> {
    let port = get_port();
    let metrics = Arc::new(Metrics::new()?);

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
        provider: Arc::new(YahooFinanceProvider::from_env()),
        models: Arc::new(RwLock::new(HashMap::new())),
        scoring: Arc::new(ScoringConfig::default()),
        forecast: Arc::new(ForecastConfig::default()),
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
