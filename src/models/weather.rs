//! Daily weather snapshot consumed by outfit planning

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Overall sky condition for the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
    Foggy,
    Windy,
}

/// Daily temperature range in Celsius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Precipitation {
    /// Probability of precipitation (0-1)
    pub probability: f64,
    /// Expected amount in mm
    #[serde(default)]
    pub amount: Option<f64>,
}

/// Weather for a single trip day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub date: NaiveDate,
    pub temperature: TemperatureRange,
    /// Relative humidity percentage (0-100)
    #[serde(default)]
    pub humidity: Option<f64>,
    pub precipitation: Precipitation,
    /// Wind speed in m/s
    #[serde(default)]
    pub wind_speed: f64,
    pub condition: WeatherCondition,
    #[serde(default)]
    pub uv_index: f64,
}

impl WeatherSnapshot {
    /// Midpoint of the day's temperature range
    #[must_use]
    pub fn mean_temperature(&self) -> f64 {
        (self.temperature.min + self.temperature.max) / 2.0
    }

    #[must_use]
    pub fn is_rainy(&self) -> bool {
        self.condition == WeatherCondition::Rainy
    }

    /// Format temperature range with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!(
            "{:.1}°C to {:.1}°C",
            self.temperature.min, self.temperature.max
        )
    }
}
