//! Consumer-side interpretation of risk scores

pub mod alert;
pub mod level;

pub use alert::AlertSeverity;
pub use level::{RiskLevel, RiskThresholds};
