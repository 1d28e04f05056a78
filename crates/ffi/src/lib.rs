//! C ABI for the cyclone risk engine
//!
//! All functions are stateless apart from the per-thread last-error slot and
//! may be called concurrently from any thread.

mod error;
mod helpers;
mod risk;

pub use error::{cyclone_risk_get_last_error, cyclone_risk_get_last_error_code, CycloneRiskErrorCode};
pub use risk::{
    cyclone_risk_classify, cyclone_risk_compute, cyclone_risk_compute_batch, CycloneRiskInput,
    CycloneRiskLevel,
};
