use chrono::NaiveDate;
use stockpulse::config::{ForecastConfig, ScoringConfig};
use stockpulse::forecast::{run_forecast, LinearPredictor};
use stockpulse::models::PricePoint;
use stockpulse::signals::{aggregate_score, AnalysisEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let points = sample_series(120);

    let analysis = AnalysisEngine::technical_analysis(&points)?;
    println!("Trend: {:?}", analysis.trend);
    println!("Current price: {:.2}", analysis.current_price);
    println!("Signals:");
    for (i, signal) in analysis.signals.iter().enumerate() {
        println!(
            "  {}. {:?} from {} at {:.2} ({})",
            i + 1,
            signal.kind,
            signal.indicator,
            signal.value,
            signal.reason
        );
    }

    let predictor = LinearPredictor::new();
    let forecast = run_forecast(&points, 5, &predictor, &ForecastConfig::default())?;
    println!(
        "Forecast: avg {:.2} ({:+.2}%), {:?} with confidence {:.0}%",
        forecast.average_prediction,
        forecast.percent_change,
        forecast.recommendation,
        forecast.confidence
    );

    let score = aggregate_score(
        &analysis.signals,
        Some(forecast.percent_change),
        None,
        &ScoringConfig::default(),
    );
    println!(
        "Score: {} -> {}",
        score.value,
        score.recommendation.as_str()
    );

    Ok(())
}

/// A gently oscillating uptrend, enough bars for every indicator.
fn sample_series(count: usize) -> Vec<PricePoint> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    (0..count)
        .map(|i| {
            let drift = i as f64 * 0.3;
            let wave = (i as f64 * 0.4).sin() * 2.0;
            let close = 100.0 + drift + wave;
            PricePoint::new(
                start + chrono::Duration::days(i as i64),
                close - 0.5,
                close + 1.0,
                close - 1.2,
                close,
                1_000_000 + (i as u64 * 5_000),
            )
        })
        .collect()
}
