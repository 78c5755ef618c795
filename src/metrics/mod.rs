//! Prometheus metrics for the API server.

use prometheus::{Encoder, Gauge, Histogram, HistogramOpts, IntCounter, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: Gauge,
    pub http_request_duration_seconds: Histogram,
    pub analyses_total: IntCounter,
    pub forecasts_total: IntCounter,
    pub models_trained_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total HTTP requests served")?;
        let http_requests_in_flight =
            Gauge::new("http_requests_in_flight", "HTTP requests currently in flight")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let analyses_total = IntCounter::new(
            "analyses_total",
            "Technical analysis computations performed",
        )?;
        let forecasts_total = IntCounter::new("forecasts_total", "Price forecasts produced")?;
        let models_trained_total =
            IntCounter::new("models_trained_total", "Sequence models trained")?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(analyses_total.clone()))?;
        registry.register(Box::new(forecasts_total.clone()))?;
        registry.register(Box::new(models_trained_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
            analyses_total,
            forecasts_total,
            models_trained_total,
        })
    }

    /// Render the registry in the Prometheus text exposition format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
