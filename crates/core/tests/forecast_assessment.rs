//! Forecast assessment from JSON requests, as produced by the weather pipeline

use cyclone_risk_core::forecast::{AssessmentError, ReadingParseError};
use cyclone_risk_core::{assess, AlertSeverity, ForecastRequest, RiskLevel};

const COASTAL_REQUEST: &str = r#"{
    "isCoastal": true,
    "current": { "temperature": 38.0, "humidity": 95.0, "windSpeed": 110.0 },
    "forecast": [
        { "time": "Next 12 Hours", "temperature": "44-46°C", "windSpeed": "115-125 km/h", "humidity": 100 },
        { "time": "12-24 Hours",   "temperature": "34-36°C", "windSpeed": "120 km/h",     "humidity": 100 },
        { "time": "24-36 Hours",   "temperature": "27-28°C", "windSpeed": "10-30 km/h" },
        { "time": "36-48 Hours",   "temperature": "4-6°C",   "windSpeed": "5 km/h",       "humidity": 10 },
        { "time": "48-60 Hours",   "temperature": "60-70°C", "windSpeed": "200 km/h",     "humidity": 0 }
    ]
}"#;

fn parse(json: &str) -> ForecastRequest {
    serde_json::from_str(json).expect("request fixture is valid JSON")
}

#[test]
fn test_coastal_request() {
    let out = assess(&parse(COASTAL_REQUEST)).unwrap();

    // Current conditions (38°C, 95%, 110 km/h) score 72
    assert_eq!(out.cyclone_probability, Some(72.0));
    assert_eq!(out.alert, AlertSeverity::Elevated);

    let rows: Vec<(&str, Option<f64>, Option<RiskLevel>)> = out
        .forecast
        .iter()
        .map(|i| (i.time.as_str(), i.score, i.cyclone_risk_level))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Next 12 Hours", Some(80.0), Some(RiskLevel::High)),
            ("12-24 Hours", Some(64.0), Some(RiskLevel::Medium)),
            ("24-36 Hours", Some(20.0), Some(RiskLevel::Low)),
            ("36-48 Hours", Some(20.0), Some(RiskLevel::Low)),
            ("48-60 Hours", Some(0.0), Some(RiskLevel::None)),
        ]
    );

    // Missing humidity is taken from current conditions
    assert_eq!(*out.forecast[2].conditions.humidity, 95.0);
}

#[test]
fn test_inland_request() {
    let json = COASTAL_REQUEST.replace(r#""isCoastal": true"#, r#""isCoastal": false"#);
    let out = assess(&parse(&json)).unwrap();
    assert_eq!(out.cyclone_probability, None);
    assert_eq!(out.alert, AlertSeverity::None);
    assert!(out.forecast.iter().all(|i| i.cyclone_risk_level.is_none()));
}

#[test]
fn test_request_without_forecast() {
    let json = r#"{ "isCoastal": true, "current": { "temperature": 45, "humidity": 100, "windSpeed": 120 } }"#;
    let out = assess(&parse(json)).unwrap();
    assert!(out.forecast.is_empty());
    assert_eq!(out.cyclone_probability, Some(80.0));
    assert_eq!(out.alert, AlertSeverity::Severe);
}

#[test]
fn test_unreadable_interval() {
    let json = r#"{
        "isCoastal": true,
        "current": { "temperature": 28, "humidity": 85, "windSpeed": 15 },
        "forecast": [ { "time": "Next 12 Hours", "temperature": "", "windSpeed": "15 km/h" } ]
    }"#;
    let err = assess(&parse(json)).unwrap_err();
    assert_eq!(
        err,
        AssessmentError::Interval {
            time: "Next 12 Hours".to_string(),
            source: ReadingParseError::Empty,
        }
    );
    assert_eq!(
        err.to_string(),
        "forecast interval \"Next 12 Hours\" has an unreadable reading"
    );
}

#[test]
fn test_assessment_serializes_camel_case() {
    let out = assess(&parse(COASTAL_REQUEST)).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["isCoastal"], true);
    assert_eq!(json["cycloneProbability"], 72.0);
    assert_eq!(json["alert"], "elevated");
    assert_eq!(json["forecast"][0]["cycloneRiskLevel"], "high");
    assert_eq!(json["current"]["windSpeed"], 110.0);
}
