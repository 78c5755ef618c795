//! Sequence-model trainer for multi-day forecasts.
//!
//! A linear autoregressor over a sliding window of min–max scaled
//! closes, fit by batched gradient descent. The trained model is an
//! explicit per-symbol handle: `train` is a pure function returning the
//! handle, `predict` takes it by reference, and no global or interior
//! mutable state exists anywhere in between.

use crate::error::AnalysisError;
use crate::forecast::PricePredictor;
use crate::models::PricePoint;
use serde::{Deserialize, Serialize};

/// Training hyperparameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Bars per input window.
    pub sequence_length: usize,
    pub epochs: usize,
    pub batch_size: usize,
    pub learning_rate: f64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            sequence_length: 60,
            epochs: 50,
            batch_size: 32,
            learning_rate: 0.001,
        }
    }
}

impl SequenceConfig {
    /// Minimum history required to train: one window plus a margin of
    /// targets to fit against.
    pub fn required_points(&self) -> usize {
        self.sequence_length + 100
    }
}

/// Min–max scaler over the training closes, stored with the model so
/// predictions round-trip through the same transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MinMaxScaler {
    min: f64,
    max: f64,
}

impl MinMaxScaler {
    fn fit(values: &[f64]) -> Self {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self { min, max }
    }

    fn scale(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            0.0
        } else {
            (value - self.min) / range
        }
    }

    fn unscale(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            self.min
        } else {
            value * range + self.min
        }
    }
}

/// A trained per-symbol forecasting handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceModel {
    config: SequenceConfig,
    weights: Vec<f64>,
    bias: f64,
    scaler: MinMaxScaler,
}

impl SequenceModel {
    /// Train a model on a price series.
    ///
    /// Requires `config.required_points()` bars, else `InsufficientData`.
    pub fn train(points: &[PricePoint], config: SequenceConfig) -> Result<Self, AnalysisError> {
        if config.sequence_length == 0 {
            return Err(AnalysisError::InvalidParameter(
                "sequence length must be at least 1".to_string(),
            ));
        }
        if points.len() < config.required_points() {
            return Err(AnalysisError::insufficient_data(
                config.required_points(),
                points.len(),
            ));
        }

        let closes: Vec<f64> = points.iter().map(|p| p.close).collect();
        let scaler = MinMaxScaler::fit(&closes);
        let scaled: Vec<f64> = closes.iter().map(|&c| scaler.scale(c)).collect();

        let window = config.sequence_length;
        // Moving-average prior: untrained weights already predict the
        // window mean, so early epochs refine rather than bootstrap.
        let mut weights = vec![1.0 / window as f64; window];
        let mut bias = 0.0;

        let sample_count = scaled.len() - window;
        for _ in 0..config.epochs {
            let mut start = 0;
            while start < sample_count {
                let end = (start + config.batch_size).min(sample_count);
                let batch = end - start;

                let mut weight_grads = vec![0.0; window];
                let mut bias_grad = 0.0;
                for s in start..end {
                    let input = &scaled[s..s + window];
                    let target = scaled[s + window];
                    let predicted = dot(&weights, input) + bias;
                    let error = predicted - target;
                    for (g, &x) in weight_grads.iter_mut().zip(input) {
                        *g += error * x;
                    }
                    bias_grad += error;
                }

                let step = config.learning_rate / batch as f64;
                for (w, g) in weights.iter_mut().zip(&weight_grads) {
                    *w -= step * g;
                }
                bias -= step * bias_grad;

                start = end;
            }
        }

        Ok(Self {
            config,
            weights,
            bias,
            scaler,
        })
    }

    pub fn sequence_length(&self) -> usize {
        self.config.sequence_length
    }

    /// Predict `horizon` future closes from the latest window.
    ///
    /// Recursive fixed-point loop: each scaled prediction is pushed onto
    /// the window for the next step; every iteration is pure given the
    /// previous output.
    pub fn predict_future(
        &self,
        points: &[PricePoint],
        horizon: usize,
    ) -> Result<Vec<f64>, AnalysisError> {
        let window = self.config.sequence_length;
        if points.len() < window {
            return Err(AnalysisError::insufficient_data(window, points.len()));
        }

        let mut sequence: Vec<f64> = points[points.len() - window..]
            .iter()
            .map(|p| self.scaler.scale(p.close))
            .collect();

        let mut predictions = Vec::with_capacity(horizon);
        for _ in 0..horizon {
            let scaled_prediction = dot(&self.weights, &sequence) + self.bias;
            predictions.push(self.scaler.unscale(scaled_prediction));
            sequence.remove(0);
            sequence.push(scaled_prediction);
        }

        Ok(predictions)
    }
}

impl PricePredictor for SequenceModel {
    fn predict(&self, points: &[PricePoint], horizon: usize) -> Result<Vec<f64>, AnalysisError> {
        self.predict_future(points, horizon)
    }
}

fn dot(weights: &[f64], values: &[f64]) -> f64 {
    weights.iter().zip(values).map(|(w, v)| w * v).sum()
}
