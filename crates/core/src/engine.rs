//! Mamdani inference engine for cyclone risk
//!
//! One evaluation runs four stages over a single reading triple:
//! 1. Fuzzification of temperature, humidity and wind against their variables
//! 2. Rule firing (min) and per-label activation (max) over `RULE_BASE`
//! 3. Aggregation: each activation clips its `RISK` region, regions combine by max
//! 4. Centroid defuzzification over the discretized risk universe
//!
//! The engine holds no mutable state. Evaluations may run concurrently and
//! identical readings always produce bit-identical scores because the
//! universe is scanned in ascending order.

use crate::core_types::{Celsius, KilometersPerHour, Percent};
use crate::fuzzy::{
    activations, centroid, Fuzzified, Label, LabelDegrees, Universe, HUMIDITY, RISK, RULE_BASE,
    TEMPERATURE, WIND,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Aggregated output membership at `x`
///
/// `max` over labels of `min(activation, RISK.label(x))`.
pub fn aggregate(activations: &LabelDegrees, x: f64) -> f64 {
    Label::ALL
        .iter()
        .map(|&label| activations.get(label).min(RISK.membership(label, x)))
        .fold(0.0, f64::max)
}

/// Fuzzify one reading triple against the input variables
pub fn fuzzify(temperature: Celsius, humidity: Percent, wind: KilometersPerHour) -> Fuzzified {
    Fuzzified {
        temperature: TEMPERATURE.fuzzify(*temperature),
        humidity: HUMIDITY.fuzzify(*humidity),
        wind: WIND.fuzzify(*wind),
    }
}

/// Full trace of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskEvaluation {
    /// Input degree tables (9 numbers)
    pub fuzzified: Fuzzified,
    /// Per-label activation of the risk variable
    pub activations: LabelDegrees,
    /// Unrounded centroid
    pub centroid: f64,
    /// Centroid rounded half away from zero, in `[0, 100]`
    pub score: f64,
}

/// Fuzzy inference engine
///
/// The default engine samples the risk universe at `0, 1, ..., 100`.
/// A finer universe is available for sensitivity checks only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InferenceEngine {
    universe: Universe,
}

impl InferenceEngine {
    /// Engine with the standard unit-step universe
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom output discretization
    pub fn with_universe(universe: Universe) -> Self {
        Self { universe }
    }

    /// Output universe used for defuzzification
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Evaluate one reading triple and keep every intermediate result
    pub fn evaluate(
        &self,
        temperature: Celsius,
        humidity: Percent,
        wind: KilometersPerHour,
    ) -> RiskEvaluation {
        let fuzzified = fuzzify(temperature, humidity, wind);
        let activations = activations(&RULE_BASE, &fuzzified);
        let centroid = centroid(&self.universe, |x| aggregate(&activations, x));
        let score = centroid.round();

        trace!(
            temperature = *temperature,
            humidity = *humidity,
            wind = *wind,
            low = activations.low,
            medium = activations.medium,
            high = activations.high,
            score,
            "evaluated cyclone risk"
        );

        RiskEvaluation {
            fuzzified,
            activations,
            centroid,
            score,
        }
    }

    /// Rounded risk score in `[0, 100]`
    pub fn compute_risk(
        &self,
        temperature: Celsius,
        humidity: Percent,
        wind: KilometersPerHour,
    ) -> f64 {
        self.evaluate(temperature, humidity, wind).score
    }
}

/// Cyclone risk score in `[0, 100]` for one set of readings
///
/// Never fails: readings outside every fuzzy region (including NaN and
/// infinities) fire no rule and score exactly 0.
///
/// ```
/// use cyclone_risk_core::compute_risk;
/// use cyclone_risk_core::core_types::{Celsius, KilometersPerHour, Percent};
///
/// let score = compute_risk(Celsius::new(45.0), Percent::new(100.0), KilometersPerHour::new(120.0));
/// assert_eq!(score, 80.0);
/// ```
pub fn compute_risk(temperature: Celsius, humidity: Percent, wind: KilometersPerHour) -> f64 {
    InferenceEngine::default().compute_risk(temperature, humidity, wind)
}
