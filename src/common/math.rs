//! Shared math helpers for indicator calculations.

/// Arithmetic mean of a slice. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (ddof = 1). `None` for fewer than 2 values.
pub fn sample_stddev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (values.len() - 1) as f64;
    Some(var.sqrt())
}

/// EMA smoothing factor for a span: 2 / (span + 1).
pub fn ema_alpha(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// One EMA step: blend the new value into the previous EMA.
pub fn ema_step(value: f64, previous: f64, alpha: f64) -> f64 {
    alpha * value + (1.0 - alpha) * previous
}

/// Full EMA series seeded with the first value. Empty input gives an
/// empty series; every index is defined.
pub fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = ema_alpha(span);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &v in values {
        let next = match prev {
            Some(p) => ema_step(v, p, alpha),
            None => v,
        };
        out.push(next);
        prev = Some(next);
    }
    out
}

/// Percent change from `from` to `to`. `None` when `from` is zero.
pub fn percent_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        return None;
    }
    Some((to - from) / from * 100.0)
}
