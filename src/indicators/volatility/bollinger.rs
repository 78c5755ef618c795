//! Bollinger Bands indicator

use crate::common::math;

/// Aligned upper, middle, and lower band series.
#[derive(Debug, Clone)]
pub struct BollingerSeries {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Calculate Bollinger Bands.
///
/// Middle Band = SMA(window)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// The standard deviation is the sample deviation (ddof = 1); a window
/// of identical closes collapses all three bands onto the middle.
/// `None` for indices < window - 1.
pub fn calculate_bollinger(closes: &[f64], window: usize, std_dev: f64) -> BollingerSeries {
    let len = closes.len();
    let mut series = BollingerSeries {
        upper: vec![None; len],
        middle: vec![None; len],
        lower: vec![None; len],
    };
    if window < 2 {
        return series;
    }

    for i in 0..len {
        if i + 1 < window {
            continue;
        }
        let slice = &closes[i + 1 - window..=i];
        if let (Some(middle), Some(std)) = (math::mean(slice), math::sample_stddev(slice)) {
            series.upper[i] = Some(middle + std_dev * std);
            series.middle[i] = Some(middle);
            series.lower[i] = Some(middle - std_dev * std);
        }
    }

    series
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ).
pub fn calculate_bollinger_default(closes: &[f64]) -> BollingerSeries {
    calculate_bollinger(closes, 20, 2.0)
}
