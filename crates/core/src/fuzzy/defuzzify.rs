//! Centroid defuzzification over a discretized output universe

use serde::{Deserialize, Serialize};

/// Discretized output domain `[min, max]` sampled every `step`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for Universe {
    /// `0..=100` in unit steps (101 samples)
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

impl Universe {
    /// Guards `(max - min) / step` against representation error, e.g. 100 / 0.1
    const COUNT_EPSILON: f64 = 1e-9;

    /// Upper bound on the number of samples a universe may produce
    pub const MAX_SAMPLES: usize = 1_000_001;

    /// Risk universe with a custom step
    pub fn with_step(step: f64) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }

    /// Number of sample points
    ///
    /// Zero for an empty or malformed universe, and for one whose step is so
    /// fine that it would need more than [`Self::MAX_SAMPLES`] points.
    pub fn sample_count(&self) -> usize {
        let span = self.max - self.min;
        if !(span >= 0.0 && self.step > 0.0) || !span.is_finite() || !self.step.is_finite() {
            return 0;
        }
        let intervals = (span / self.step + Self::COUNT_EPSILON).floor();
        if !intervals.is_finite() || intervals >= Self::MAX_SAMPLES as f64 {
            return 0;
        }
        (intervals as usize).checked_add(1).unwrap_or(0)
    }

    /// Sample points in ascending order
    ///
    /// Each point is `min + i * step`, so no rounding error accumulates along
    /// the scan and repeated scans are bit-identical.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.sample_count()).map(move |i| self.min + i as f64 * self.step)
    }
}

/// Centre of mass `Σ x·w(x) / Σ w(x)` of `membership` over `universe`
///
/// Returns exactly 0 when the total weight is zero.
pub fn centroid<F>(universe: &Universe, membership: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for x in universe.samples() {
        let weight = membership(x);
        numerator += x * weight;
        denominator += weight;
    }

    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}
