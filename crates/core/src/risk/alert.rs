//! Alert severity for the current-conditions probability
//!
//! Alerts are only raised for coastal locations. A probability above 50 is
//! an elevated risk, above 75 a severe one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Probability that must be exceeded before any alert is shown
pub const ALERT_THRESHOLD: f64 = 50.0;
/// Probability that must be exceeded for a severe alert
pub const SEVERE_THRESHOLD: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// No alert
    None,
    /// Elevated cyclone risk
    Elevated,
    /// High cyclone probability
    Severe,
}

impl AlertSeverity {
    pub fn from_probability(is_coastal: bool, probability: Option<f64>) -> Self {
        match probability {
            Some(p) if is_coastal && p > SEVERE_THRESHOLD => AlertSeverity::Severe,
            Some(p) if is_coastal && p > ALERT_THRESHOLD => AlertSeverity::Elevated,
            _ => AlertSeverity::None,
        }
    }

    /// Headline shown with the alert, if any
    pub fn headline(&self) -> Option<&'static str> {
        match self {
            AlertSeverity::None => None,
            AlertSeverity::Elevated => Some("Elevated Cyclone Risk"),
            AlertSeverity::Severe => Some("High Cyclone Probability"),
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::None => f.write_str("none"),
            AlertSeverity::Elevated => f.write_str("elevated"),
            AlertSeverity::Severe => f.write_str("severe"),
        }
    }
}
