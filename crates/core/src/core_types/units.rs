//! Semantic unit types for the three weather readings the risk engine consumes
//!
//! Newtype wrappers keep temperature, humidity and wind speed from being
//! swapped at call sites (all three are plain `f64` underneath).
//!
//! # Design Philosophy
//! - All readings use f64 so the fuzzy engine never mixes precisions
//! - Total ordering via `Ord` (NaN sorts above every other value)
//! - No range validation: readings outside a variable's domain are legal and
//!   simply fall outside every fuzzy region
//! - Serde support, serialized as the bare number
//!
//! # Usage
//! ```
//! use cyclone_risk_core::core_types::units::{Celsius, KilometersPerHour, Percent};
//!
//! let temp = Celsius::new(28.0);
//! let humidity = Percent::new(85.0);
//! let wind = KilometersPerHour::new(15.0);
//! assert_eq!(*temp, 28.0);
//! assert_eq!(humidity.to_string(), "85.0%");
//! assert!(wind < KilometersPerHour::new(20.0));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

// ============================================================================
// HELPER FUNCTIONS FOR TOTAL ORDERING
// ============================================================================

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// TEMPERATURE
// ============================================================================

/// Air temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Celsius(f64);

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Celsius {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Celsius {
    /// Create a new Celsius temperature (unvalidated)
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Celsius(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Celsius {
    fn from(v: f64) -> Self {
        Celsius(v)
    }
}

impl From<Celsius> for f64 {
    fn from(c: Celsius) -> f64 {
        c.0
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

// ============================================================================
// HUMIDITY
// ============================================================================

/// Relative humidity as a percentage (nominally 0-100)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Percent(f64);

impl Eq for Percent {}

impl PartialOrd for Percent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Percent {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Percent {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Percent {
    /// Create a new percentage (unvalidated, values above 100 are accepted)
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Percent(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Percent {
    fn from(v: f64) -> Self {
        Percent(v)
    }
}

impl From<Percent> for f64 {
    fn from(p: Percent) -> f64 {
        p.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

// ============================================================================
// WIND SPEED
// ============================================================================

/// Wind speed in kilometres per hour
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct KilometersPerHour(f64);

impl Eq for KilometersPerHour {}

impl PartialOrd for KilometersPerHour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KilometersPerHour {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for KilometersPerHour {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KilometersPerHour {
    /// Create a new wind speed (unvalidated)
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilometersPerHour(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for KilometersPerHour {
    fn from(v: f64) -> Self {
        KilometersPerHour(v)
    }
}

impl From<KilometersPerHour> for f64 {
    fn from(k: KilometersPerHour) -> f64 {
        k.0
    }
}

impl fmt::Display for KilometersPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km/h", self.0)
    }
}
