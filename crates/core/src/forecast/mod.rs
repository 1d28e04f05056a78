//! Forecast-level cyclone assessment built on the inference engine

pub mod assessment;
pub mod conditions;
pub mod range;

pub use assessment::{assess, AssessmentError, Assessor, CycloneAssessment, ForecastRequest, IntervalAssessment};
pub use conditions::{ForecastInterval, WeatherConditions};
pub use range::{parse_reading, ReadingParseError};
