//! Linear-regression point predictor.
//!
//! Fits ordinary least squares of the next close on standardized per-bar
//! features (daily return, SMA 5, SMA 20, RSI 14, volume change). The
//! multi-day horizon is an explicit recursive loop: each predicted close
//! is appended to a working series and the features recomputed before
//! the next step.

use crate::error::AnalysisError;
use crate::forecast::PricePredictor;
use crate::indicators::{calculate_rsi, calculate_sma};
use crate::models::PricePoint;

const FEATURES: usize = 5;
// First index where every feature is defined: SMA 20 needs 19 prior bars.
const WARMUP: usize = 19;
// Keeps the normal equations solvable when a feature column degenerates.
const RIDGE: f64 = 1e-6;

pub struct LinearPredictor;

impl LinearPredictor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinearPredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl PricePredictor for LinearPredictor {
    fn predict(&self, points: &[PricePoint], horizon: usize) -> Result<Vec<f64>, AnalysisError> {
        let mut closes: Vec<f64> = points.iter().map(|p| p.close).collect();
        let mut volumes: Vec<f64> = points.iter().map(|p| p.volume as f64).collect();

        let model = FittedModel::fit(&closes, &volumes)?;

        let mut predictions = Vec::with_capacity(horizon);
        for _ in 0..horizon {
            let row = feature_row(&closes, &volumes, closes.len() - 1).ok_or_else(|| {
                AnalysisError::insufficient_data(WARMUP + 1, closes.len())
            })?;
            let next = model.predict(&row);
            predictions.push(next);
            // Feed the prediction back as the next bar; volume is carried
            // forward since no volume forecast exists.
            closes.push(next);
            let last_volume = *volumes.last().unwrap_or(&0.0);
            volumes.push(last_volume);
        }

        Ok(predictions)
    }
}

struct FittedModel {
    /// Intercept followed by one coefficient per feature.
    coefficients: [f64; FEATURES + 1],
    means: [f64; FEATURES],
    stddevs: [f64; FEATURES],
}

impl FittedModel {
    fn fit(closes: &[f64], volumes: &[f64]) -> Result<Self, AnalysisError> {
        // Training pairs: features at index i, target close at i + 1.
        let mut rows: Vec<[f64; FEATURES]> = Vec::new();
        let mut targets: Vec<f64> = Vec::new();
        for i in WARMUP..closes.len().saturating_sub(1) {
            if let Some(row) = feature_row(closes, volumes, i) {
                rows.push(row);
                targets.push(closes[i + 1]);
            }
        }

        if rows.len() < FEATURES + 1 {
            return Err(AnalysisError::insufficient_data(
                WARMUP + FEATURES + 2,
                closes.len(),
            ));
        }

        let (means, stddevs) = column_stats(&rows);
        let scaled: Vec<[f64; FEATURES]> = rows
            .iter()
            .map(|row| standardize(row, &means, &stddevs))
            .collect();

        let coefficients = solve_least_squares(&scaled, &targets)?;

        Ok(Self {
            coefficients,
            means,
            stddevs,
        })
    }

    fn predict(&self, row: &[f64; FEATURES]) -> f64 {
        let scaled = standardize(row, &self.means, &self.stddevs);
        let mut value = self.coefficients[0];
        for (i, x) in scaled.iter().enumerate() {
            value += self.coefficients[i + 1] * x;
        }
        value
    }
}

/// Feature vector at `index`, or `None` inside the warm-up window.
fn feature_row(closes: &[f64], volumes: &[f64], index: usize) -> Option<[f64; FEATURES]> {
    if index < WARMUP || index >= closes.len() {
        return None;
    }

    let ret = (closes[index] - closes[index - 1]) / closes[index - 1];
    let sma_5 = calculate_sma(&closes[..=index], 5).pop()??;
    let sma_20 = calculate_sma(&closes[..=index], 20).pop()??;
    let rsi = calculate_rsi(&closes[..=index], 14).pop()??;
    let volume_change = if volumes[index - 1] == 0.0 {
        0.0
    } else {
        (volumes[index] - volumes[index - 1]) / volumes[index - 1]
    };

    Some([ret, sma_5, sma_20, rsi, volume_change])
}

fn column_stats(rows: &[[f64; FEATURES]]) -> ([f64; FEATURES], [f64; FEATURES]) {
    let n = rows.len() as f64;
    let mut means = [0.0; FEATURES];
    let mut stddevs = [0.0; FEATURES];

    for row in rows {
        for (j, x) in row.iter().enumerate() {
            means[j] += x;
        }
    }
    for m in means.iter_mut() {
        *m /= n;
    }
    for row in rows {
        for (j, x) in row.iter().enumerate() {
            stddevs[j] += (x - means[j]) * (x - means[j]);
        }
    }
    for s in stddevs.iter_mut() {
        *s = (*s / n).sqrt();
    }

    (means, stddevs)
}

/// Z-score a row; zero-variance columns map to 0.
fn standardize(
    row: &[f64; FEATURES],
    means: &[f64; FEATURES],
    stddevs: &[f64; FEATURES],
) -> [f64; FEATURES] {
    let mut out = [0.0; FEATURES];
    for j in 0..FEATURES {
        out[j] = if stddevs[j] == 0.0 {
            0.0
        } else {
            (row[j] - means[j]) / stddevs[j]
        };
    }
    out
}

/// Solve the ridge-stabilized normal equations for [intercept, w1..w5]
/// by Gaussian elimination with partial pivoting.
fn solve_least_squares(
    rows: &[[f64; FEATURES]],
    targets: &[f64],
) -> Result<[f64; FEATURES + 1], AnalysisError> {
    const N: usize = FEATURES + 1;
    let mut ata = [[0.0f64; N]; N];
    let mut atb = [0.0f64; N];

    for (row, &y) in rows.iter().zip(targets) {
        let mut x = [0.0f64; N];
        x[0] = 1.0;
        x[1..].copy_from_slice(row);
        for i in 0..N {
            for j in 0..N {
                ata[i][j] += x[i] * x[j];
            }
            atb[i] += x[i] * y;
        }
    }
    for (i, diag) in ata.iter_mut().enumerate() {
        diag[i] += RIDGE;
    }

    let mut a = ata;
    let mut b = atb;
    for col in 0..N {
        let pivot_row = (col..N)
            .max_by(|&r1, &r2| a[r1][col].abs().total_cmp(&a[r2][col].abs()))
            .unwrap_or(col);
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        let pivot = a[col][col];
        if pivot.abs() < f64::EPSILON {
            return Err(AnalysisError::InvalidParameter(
                "regression features are degenerate".to_string(),
            ));
        }

        for row in col + 1..N {
            let factor = a[row][col] / pivot;
            for k in col..N {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut solution = [0.0f64; N];
    for row in (0..N).rev() {
        let mut sum = b[row];
        for col in row + 1..N {
            sum -= a[row][col] * solution[col];
        }
        solution[row] = sum / a[row][row];
    }

    Ok(solution)
}
