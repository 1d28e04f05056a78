//! Linguistic variables
//!
//! Each variable partitions one dimension into three overlapping triangular
//! regions labelled low / medium / high. The four variables used by the
//! cyclone rule base are fixed constants.

use super::membership::Triangle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fuzzy label shared by every variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Low,
    Medium,
    High,
}

impl Label {
    /// All labels in ascending order
    pub const ALL: [Label; 3] = [Label::Low, Label::Medium, Label::High];

    /// Lowercase name of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Low => "low",
            Label::Medium => "medium",
            Label::High => "high",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One degree per label
///
/// Used both for the fuzzified degrees of an input and for the per-label
/// activations of the output.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelDegrees {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl LabelDegrees {
    /// All degrees zero
    pub const ZERO: LabelDegrees = LabelDegrees {
        low: 0.0,
        medium: 0.0,
        high: 0.0,
    };

    /// Degree for `label`
    #[inline]
    pub fn get(&self, label: Label) -> f64 {
        match label {
            Label::Low => self.low,
            Label::Medium => self.medium,
            Label::High => self.high,
        }
    }

    /// Mutable degree for `label`
    #[inline]
    pub fn get_mut(&mut self, label: Label) -> &mut f64 {
        match label {
            Label::Low => &mut self.low,
            Label::Medium => &mut self.medium,
            Label::High => &mut self.high,
        }
    }

    /// True when every degree is zero
    pub fn is_zero(&self) -> bool {
        self.low == 0.0 && self.medium == 0.0 && self.high == 0.0
    }
}

/// A named dimension split into low / medium / high regions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinguisticVariable {
    pub name: &'static str,
    pub low: Triangle,
    pub medium: Triangle,
    pub high: Triangle,
}

impl LinguisticVariable {
    /// Region for `label`
    #[inline]
    pub fn region(&self, label: Label) -> &Triangle {
        match label {
            Label::Low => &self.low,
            Label::Medium => &self.medium,
            Label::High => &self.high,
        }
    }

    /// Membership of `x` in the region for `label`
    #[inline]
    pub fn membership(&self, label: Label, x: f64) -> f64 {
        self.region(label).evaluate(x)
    }

    /// Degree table for a crisp reading
    pub fn fuzzify(&self, x: f64) -> LabelDegrees {
        LabelDegrees {
            low: self.low.evaluate(x),
            medium: self.medium.evaluate(x),
            high: self.high.evaluate(x),
        }
    }
}

/// Air temperature in °C
pub const TEMPERATURE: LinguisticVariable = LinguisticVariable {
    name: "temperature",
    low: Triangle::new(0.0, 10.0, 20.0),
    medium: Triangle::new(15.0, 27.5, 40.0),
    high: Triangle::new(30.0, 45.0, 50.0),
};

/// Relative humidity in %
pub const HUMIDITY: LinguisticVariable = LinguisticVariable {
    name: "humidity",
    low: Triangle::new(0.0, 25.0, 50.0),
    medium: Triangle::new(40.0, 65.0, 90.0),
    high: Triangle::new(75.0, 100.0, 100.0),
};

/// Wind speed in km/h
pub const WIND: LinguisticVariable = LinguisticVariable {
    name: "wind",
    low: Triangle::new(0.0, 20.0, 40.0),
    medium: Triangle::new(30.0, 65.0, 100.0),
    high: Triangle::new(80.0, 120.0, 150.0),
};

/// Cyclone risk score (output, 0-100)
pub const RISK: LinguisticVariable = LinguisticVariable {
    name: "risk",
    low: Triangle::new(0.0, 20.0, 40.0),
    medium: Triangle::new(30.0, 50.0, 70.0),
    high: Triangle::new(60.0, 80.0, 100.0),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_tables() {
        assert_eq!(TEMPERATURE.low, Triangle::new(0.0, 10.0, 20.0));
        assert_eq!(TEMPERATURE.medium, Triangle::new(15.0, 27.5, 40.0));
        assert_eq!(TEMPERATURE.high, Triangle::new(30.0, 45.0, 50.0));

        assert_eq!(HUMIDITY.low, Triangle::new(0.0, 25.0, 50.0));
        assert_eq!(HUMIDITY.medium, Triangle::new(40.0, 65.0, 90.0));
        assert_eq!(HUMIDITY.high, Triangle::new(75.0, 100.0, 100.0));

        assert_eq!(WIND.low, Triangle::new(0.0, 20.0, 40.0));
        assert_eq!(WIND.medium, Triangle::new(30.0, 65.0, 100.0));
        assert_eq!(WIND.high, Triangle::new(80.0, 120.0, 150.0));

        assert_eq!(RISK.low, Triangle::new(0.0, 20.0, 40.0));
        assert_eq!(RISK.medium, Triangle::new(30.0, 50.0, 70.0));
        assert_eq!(RISK.high, Triangle::new(60.0, 80.0, 100.0));
    }

    #[test]
    fn test_every_region_peaks_at_one() {
        for var in [TEMPERATURE, HUMIDITY, WIND, RISK] {
            for label in Label::ALL {
                let peak = var.region(label).b;
                assert_eq!(var.membership(label, peak), 1.0, "{} {label}", var.name);
            }
        }
    }

    #[test]
    fn test_fuzzify_low_readings() {
        assert_eq!(
            TEMPERATURE.fuzzify(5.0),
            LabelDegrees {
                low: 0.5,
                medium: 0.0,
                high: 0.0
            }
        );
        assert_eq!(HUMIDITY.fuzzify(10.0).low, 0.4);
        assert_eq!(WIND.fuzzify(5.0).low, 0.25);
    }

    #[test]
    fn test_fuzzify_overlap() {
        // 35°C sits on the falling edge of medium and the rising edge of high
        let degrees = TEMPERATURE.fuzzify(35.0);
        assert_eq!(degrees.low, 0.0);
        assert!((degrees.medium - 0.4).abs() < 1e-12);
        assert!((degrees.high - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_label_degrees_accessors() {
        let mut degrees = LabelDegrees::ZERO;
        assert!(degrees.is_zero());
        *degrees.get_mut(Label::Medium) = 0.7;
        assert_eq!(degrees.get(Label::Medium), 0.7);
        assert!(!degrees.is_zero());
    }
}
