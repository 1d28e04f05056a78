//! Cyclone assessment of current conditions plus a forecast
//!
//! Coastal locations get a probability for the current readings, an alert
//! severity and a risk band per forecast interval. Inland locations get
//! none of these; their intervals are still parsed so the readings are
//! reported back.

use super::conditions::{ForecastInterval, WeatherConditions};
use super::range::ReadingParseError;
use crate::engine::InferenceEngine;
use crate::risk::{AlertSeverity, RiskLevel, RiskThresholds};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    pub is_coastal: bool,
    pub current: WeatherConditions,
    #[serde(default)]
    pub forecast: Vec<ForecastInterval>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalAssessment {
    pub time: String,
    pub conditions: WeatherConditions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cyclone_risk_level: Option<RiskLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycloneAssessment {
    pub is_coastal: bool,
    pub current: WeatherConditions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cyclone_probability: Option<f64>,
    pub alert: AlertSeverity,
    pub forecast: Vec<IntervalAssessment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("forecast interval {time:?} has an unreadable reading")]
    Interval {
        time: String,
        #[source]
        source: ReadingParseError,
    },
}

/// Scores readings and bands them
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Assessor {
    engine: InferenceEngine,
    thresholds: RiskThresholds,
}

impl Assessor {
    pub fn new(engine: InferenceEngine, thresholds: RiskThresholds) -> Self {
        Self { engine, thresholds }
    }

    /// Score of one reading triple
    pub fn score(&self, conditions: &WeatherConditions) -> f64 {
        self.engine.compute_risk(
            conditions.temperature,
            conditions.humidity,
            conditions.wind_speed,
        )
    }

    /// Assess a request; intervals are scored in parallel, output order matches input
    pub fn assess(&self, request: &ForecastRequest) -> Result<CycloneAssessment, AssessmentError> {
        let coastal = request.is_coastal;

        let forecast = request
            .forecast
            .par_iter()
            .map(|interval| self.assess_interval(interval, &request.current, coastal))
            .collect::<Result<Vec<_>, _>>()?;

        let cyclone_probability = coastal.then(|| self.score(&request.current));
        let alert = AlertSeverity::from_probability(coastal, cyclone_probability);

        debug!(
            coastal,
            intervals = forecast.len(),
            probability = cyclone_probability,
            %alert,
            "assessed forecast"
        );

        Ok(CycloneAssessment {
            is_coastal: coastal,
            current: request.current,
            cyclone_probability,
            alert,
            forecast,
        })
    }

    fn assess_interval(
        &self,
        interval: &ForecastInterval,
        current: &WeatherConditions,
        coastal: bool,
    ) -> Result<IntervalAssessment, AssessmentError> {
        let conditions = interval.conditions(current).map_err(|source| {
            warn!(time = %interval.time, error = %source, "unreadable forecast interval");
            AssessmentError::Interval {
                time: interval.time.clone(),
                source,
            }
        })?;

        let score = coastal.then(|| self.score(&conditions));
        Ok(IntervalAssessment {
            time: interval.time.clone(),
            conditions,
            score,
            cyclone_risk_level: score.map(|s| self.thresholds.classify(s)),
        })
    }
}

/// Assess with the default engine and thresholds
pub fn assess(request: &ForecastRequest) -> Result<CycloneAssessment, AssessmentError> {
    Assessor::default().assess(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{Celsius, KilometersPerHour, Percent};

    fn interval(time: &str, temperature: &str, wind: Option<&str>, humidity: Option<f64>) -> ForecastInterval {
        ForecastInterval {
            time: time.into(),
            temperature: temperature.into(),
            wind_speed: wind.map(Into::into),
            humidity,
        }
    }

    fn request(is_coastal: bool) -> ForecastRequest {
        ForecastRequest {
            is_coastal,
            current: WeatherConditions::new(
                Celsius::new(45.0),
                Percent::new(100.0),
                KilometersPerHour::new(120.0),
            ),
            forecast: vec![
                interval("Next 12 Hours", "44-46°C", Some("115-125 km/h"), Some(100.0)),
                interval("12-24 Hours", "4-6°C", Some("5 km/h"), Some(10.0)),
                interval("24-36 Hours", "1000°C", Some("1000 km/h"), Some(1000.0)),
            ],
        }
    }

    #[test]
    fn test_coastal_request_is_scored() {
        let out = assess(&request(true)).unwrap();
        assert_eq!(out.cyclone_probability, Some(80.0));
        assert_eq!(out.alert, AlertSeverity::Severe);

        let levels: Vec<_> = out.forecast.iter().map(|i| i.cyclone_risk_level).collect();
        assert_eq!(
            levels,
            vec![Some(RiskLevel::High), Some(RiskLevel::Low), Some(RiskLevel::None)]
        );
        assert_eq!(out.forecast[1].score, Some(20.0));
        assert_eq!(out.forecast[2].score, Some(0.0));
    }

    #[test]
    fn test_inland_request_is_not_scored() {
        let out = assess(&request(false)).unwrap();
        assert_eq!(out.cyclone_probability, None);
        assert_eq!(out.alert, AlertSeverity::None);
        assert_eq!(out.forecast.len(), 3);
        assert!(out.forecast.iter().all(|i| i.score.is_none() && i.cyclone_risk_level.is_none()));
        assert_eq!(*out.forecast[0].conditions.temperature, 45.0);
    }

    #[test]
    fn test_unreadable_interval_is_reported() {
        let mut req = request(true);
        req.forecast.push(interval("36-48 Hours", "warm", None, None));
        let err = assess(&req).unwrap_err();
        assert!(matches!(err, AssessmentError::Interval { ref time, .. } if time == "36-48 Hours"));
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = RiskThresholds {
            high: 90.0,
            ..RiskThresholds::default()
        };
        let out = Assessor::new(InferenceEngine::default(), strict)
            .assess(&request(true))
            .unwrap();
        assert_eq!(out.forecast[0].cyclone_risk_level, Some(RiskLevel::Medium));
    }

    #[test]
    fn test_inland_json_omits_risk_fields() {
        let out = assess(&request(false)).unwrap();
        let json = serde_json::to_value(&out).unwrap();
        assert!(json.get("cycloneProbability").is_none());
        assert!(json["forecast"][0].get("cycloneRiskLevel").is_none());
        assert_eq!(json["alert"], "none");
    }
}
