//! Running statistics and target normalization for training loops.

use serde::{Deserialize, Serialize};

/// Online accumulator for a scalar metric.
///
/// `average` is `sum / count` over everything seen since the last
/// reset. It is meaningful only after the first update; before that it
/// holds the reset value 0.
#[derive(Debug, Clone, Default)]
pub struct AverageMeter {
    /// Most recently observed value.
    pub value: f64,
    pub sum: f64,
    pub count: f64,
    pub average: f64,
}

impl AverageMeter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Records `value` with weight 1.
    pub fn update(&mut self, value: f64) {
        self.update_weighted(value, 1.0);
    }

    /// Records `value` with the given weight.
    pub fn update_weighted(&mut self, value: f64, weight: f64) {
        self.value = value;
        self.sum += value * weight;
        self.count += weight;
        self.average = self.sum / self.count;
    }
}

/// Serializable snapshot of a [`Normalizer`], two plain scalars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizerState {
    pub mean: f64,
    pub std: f64,
}

/// Standardizes target values against a fitted mean and standard
/// deviation.
///
/// Before [`fit`](Normalizer::fit) is called the transform is the
/// identity (mean 0, std 1).
#[derive(Debug, Clone)]
pub struct Normalizer {
    mean: f64,
    std: f64,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self { mean: 0.0, std: 1.0 }
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fits mean and standard deviation from a sample of targets.
    ///
    /// The sample need not be the full dataset; a training-split
    /// subsample is typical. Uses the Bessel-corrected (n − 1) sample
    /// standard deviation, so the sample must hold at least two values.
    pub fn fit(&mut self, sample: &[f64]) {
        debug_assert!(
            sample.len() >= 2,
            "normalizer fit needs at least two values"
        );
        let n = sample.len() as f64;
        let mean = sample.iter().sum::<f64>() / n;
        let variance = sample.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        self.mean = mean;
        self.std = variance.sqrt();
    }

    #[inline]
    pub fn normalize(&self, x: f64) -> f64 {
        (x - self.mean) / self.std
    }

    #[inline]
    pub fn denormalize(&self, y: f64) -> f64 {
        y * self.std + self.mean
    }

    /// Snapshot of the fitted scalars, for checkpointing by the caller.
    pub fn state(&self) -> NormalizerState {
        NormalizerState {
            mean: self.mean,
            std: self.std,
        }
    }

    /// Restores previously exported scalars.
    pub fn load_state(&mut self, state: NormalizerState) {
        self.mean = state.mean;
        self.std = state.std;
    }
}
