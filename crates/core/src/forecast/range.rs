//! Parsing of reported readings such as `"27-29°C"` or `"10-15 km/h"`
//!
//! A reading is a single value or a range. Ranges collapse to their midpoint.
//! Units and trailing text are ignored.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static READING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<lo>-?[0-9]+(?:\.[0-9]+)?)(?:\s*[^0-9\s\-–]*\s*(?:-|–|to)\s*(?P<hi>-?[0-9]+(?:\.[0-9]+)?))?",
    )
    .expect("reading pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadingParseError {
    #[error("reading is empty")]
    Empty,

    #[error("no numeric value in reading {0:?}")]
    Unrecognized(String),
}

/// Parse a reported reading into a single value
///
/// ```
/// use cyclone_risk_core::forecast::parse_reading;
///
/// assert_eq!(parse_reading("27-29°C").unwrap(), 28.0);
/// assert_eq!(parse_reading("15 km/h").unwrap(), 15.0);
/// ```
pub fn parse_reading(text: &str) -> Result<f64, ReadingParseError> {
    if text.trim().is_empty() {
        return Err(ReadingParseError::Empty);
    }

    let caps = READING
        .captures(text)
        .ok_or_else(|| ReadingParseError::Unrecognized(text.to_string()))?;

    // Captures are ASCII decimal literals, which always parse as f64
    let number = |s: &str| s.parse::<f64>().expect("captured reading is a decimal literal");

    let lo = number(&caps["lo"]);
    match caps.name("hi") {
        Some(hi) => Ok((lo + number(hi.as_str())) / 2.0),
        None => Ok(lo),
    }
}
