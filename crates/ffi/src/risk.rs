use crate::error::{CycloneRiskErrorCode, DefaultCycloneRiskError};
use crate::helpers::{clear_last_error, track_error};
use cyclone_risk_core::{compute_risk, Celsius, KilometersPerHour, Percent, RiskLevel};
use std::slice;

/// C-compatible reading triple
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycloneRiskInput {
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in %
    pub humidity: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
}

/// C-compatible risk band
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycloneRiskLevel {
    None = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl From<RiskLevel> for CycloneRiskLevel {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::None => CycloneRiskLevel::None,
            RiskLevel::Low => CycloneRiskLevel::Low,
            RiskLevel::Medium => CycloneRiskLevel::Medium,
            RiskLevel::High => CycloneRiskLevel::High,
        }
    }
}

/// Compute the cyclone risk score for one set of readings
///
/// # Parameters
/// - `temperature`: Air temperature in °C
/// - `humidity`: Relative humidity in %
/// - `wind_speed`: Wind speed in km/h
///
/// # Returns
/// Rounded score in `[0, 100]`. Never fails: out-of-range or non-finite
/// readings score 0.
#[no_mangle]
pub extern "C" fn cyclone_risk_compute(temperature: f64, humidity: f64, wind_speed: f64) -> f64 {
    compute_risk(
        Celsius::new(temperature),
        Percent::new(humidity),
        KilometersPerHour::new(wind_speed),
    )
}

/// Classify a score into a risk band (`> 75` high, `> 40` medium, `> 10` low)
#[no_mangle]
pub extern "C" fn cyclone_risk_classify(score: f64) -> CycloneRiskLevel {
    RiskLevel::from_score(score).into()
}

/// Score `len` reading triples into `out_scores`
///
/// # Returns
/// - `Ok` (0) on success, with `out_scores[0..len]` written
/// - `NullPointer` (1) if `inputs` or `out_scores` is null while `len > 0`
/// - `InvalidParameter` (2) if `len` exceeds the addressable size
///
/// # Safety
/// `inputs` must point to `len` readable `CycloneRiskInput` values and
/// `out_scores` to `len` writable `double` values. The two may not overlap.
#[no_mangle]
pub unsafe extern "C" fn cyclone_risk_compute_batch(
    inputs: *const CycloneRiskInput,
    len: usize,
    out_scores: *mut f64,
) -> CycloneRiskErrorCode {
    if len == 0 {
        clear_last_error();
        return CycloneRiskErrorCode::Ok;
    }
    if inputs.is_null() {
        return track_error(&DefaultCycloneRiskError::null_pointer("inputs"));
    }
    if out_scores.is_null() {
        return track_error(&DefaultCycloneRiskError::null_pointer("out_scores"));
    }
    if len > isize::MAX as usize / std::mem::size_of::<CycloneRiskInput>() {
        return track_error(&DefaultCycloneRiskError::invalid_parameter(format!(
            "Batch length {len} exceeds the addressable size"
        )));
    }

    let inputs = slice::from_raw_parts(inputs, len);
    let out_scores = slice::from_raw_parts_mut(out_scores, len);
    for (input, out) in inputs.iter().zip(out_scores.iter_mut()) {
        *out = cyclone_risk_compute(input.temperature, input.humidity, input.wind_speed);
    }

    clear_last_error();
    CycloneRiskErrorCode::Ok
}
