//! Cyclone Risk Core Library
//!
//! A fuzzy-inference risk engine that turns three weather readings
//! (temperature, relative humidity, wind speed) into a cyclone risk score in
//! `[0, 100]` using classical Mamdani reasoning: fuzzification, min/max rule
//! evaluation, max aggregation and centroid defuzzification.
//!
//! ## Layout
//! - `core_types` - semantic unit newtypes for the readings
//! - `fuzzy` - membership functions, linguistic variables, rule base, centroid
//! - `engine` - the inference engine and `compute_risk`
//! - `risk` - score banding (`none`/`low`/`medium`/`high`) and alert severity
//! - `forecast` - assessment of current conditions plus forecast intervals

// Core types and utilities
pub mod core_types;

// Fuzzy inference
pub mod engine;
pub mod fuzzy;

// Score interpretation and forecast assessment
pub mod forecast;
pub mod risk;

// Re-export core types
pub use core_types::{Celsius, KilometersPerHour, Percent};

// Re-export the engine surface
pub use engine::{compute_risk, InferenceEngine, RiskEvaluation};
pub use fuzzy::{Label, LabelDegrees, Universe};

// Re-export consumer types
pub use forecast::{assess, CycloneAssessment, ForecastInterval, ForecastRequest, WeatherConditions};
pub use risk::{AlertSeverity, RiskLevel, RiskThresholds};
