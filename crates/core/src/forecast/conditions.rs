//! Weather readings for current conditions and forecast intervals

use super::range::{parse_reading, ReadingParseError};
use crate::core_types::{Celsius, KilometersPerHour, Percent};
use serde::{Deserialize, Serialize};

/// One crisp reading triple
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherConditions {
    pub temperature: Celsius,
    pub humidity: Percent,
    pub wind_speed: KilometersPerHour,
}

impl WeatherConditions {
    pub fn new(temperature: Celsius, humidity: Percent, wind_speed: KilometersPerHour) -> Self {
        Self {
            temperature,
            humidity,
            wind_speed,
        }
    }
}

/// A forecast row as reported upstream
///
/// Temperature and wind arrive as text (`"25-28°C"`, `"10-15 km/h"`),
/// humidity as a number. Wind and humidity may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastInterval {
    /// Period label, e.g. `"Next 12 Hours"`
    pub time: String,
    pub temperature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
}

impl ForecastInterval {
    /// Crisp readings for this interval
    ///
    /// Missing wind or humidity is taken from `current`.
    pub fn conditions(
        &self,
        current: &WeatherConditions,
    ) -> Result<WeatherConditions, ReadingParseError> {
        let temperature = Celsius::new(parse_reading(&self.temperature)?);
        let wind_speed = match &self.wind_speed {
            Some(text) => KilometersPerHour::new(parse_reading(text)?),
            None => current.wind_speed,
        };
        let humidity = self.humidity.map_or(current.humidity, Percent::new);

        Ok(WeatherConditions {
            temperature,
            humidity,
            wind_speed,
        })
    }
}
