//! Ordinal risk bands for a defuzzified score

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cyclone risk band reported per forecast point
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    None,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify with the standard thresholds (75 / 40 / 10)
    pub fn from_score(score: f64) -> Self {
        RiskThresholds::default().classify(score)
    }

    /// Lowercase name, as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::None => "none",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower bounds (exclusive) of each band
///
/// A score must strictly exceed a threshold to enter its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high: 75.0,
            medium: 40.0,
            low: 10.0,
        }
    }
}

impl RiskThresholds {
    /// Band for `score`; NaN falls through to `None`
    pub fn classify(&self, score: f64) -> RiskLevel {
        if score > self.high {
            RiskLevel::High
        } else if score > self.medium {
            RiskLevel::Medium
        } else if score > self.low {
            RiskLevel::Low
        } else {
            RiskLevel::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_are_exclusive() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::None);
        assert_eq!(RiskLevel::from_score(10.0), RiskLevel::None);
        assert_eq!(RiskLevel::from_score(11.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(40.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(41.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(75.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(76.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100.0), RiskLevel::High);
    }

    #[test]
    fn test_nan_is_none() {
        assert_eq!(RiskLevel::from_score(f64::NAN), RiskLevel::None);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(RiskLevel::None < RiskLevel::Low);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"medium\"");
        let level: RiskLevel = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(level, RiskLevel::None);
    }

    #[test]
    fn test_partial_threshold_config_uses_defaults() {
        let t: RiskThresholds = serde_json::from_str(r#"{"high": 90}"#).unwrap();
        assert_eq!(t.high, 90.0);
        assert_eq!(t.medium, 40.0);
        assert_eq!(t.classify(80.0), RiskLevel::Medium);
    }
}
