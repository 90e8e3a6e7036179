//! Weather and formality gating for a single day

use crate::models::activity::formality_range;
use crate::models::{Activity, ClothingItem, WeatherSnapshot, WeatherType};

/// Temperature band selected by the day's mean temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    /// Above 25°C
    Hot,
    /// Above 15°C
    Warm,
    /// Above 5°C
    Mild,
    Cold,
}

impl TemperatureBand {
    #[must_use]
    pub fn from_celsius(temperature: f64) -> Self {
        match temperature {
            t if t > 25.0 => TemperatureBand::Hot,
            t if t > 15.0 => TemperatureBand::Warm,
            t if t > 5.0 => TemperatureBand::Mild,
            _ => TemperatureBand::Cold,
        }
    }

    /// Weather tags accepted within this band
    #[must_use]
    pub fn accepted(self) -> &'static [WeatherType] {
        match self {
            TemperatureBand::Hot => &[WeatherType::Hot, WeatherType::Warm, WeatherType::Dry],
            TemperatureBand::Warm => &[WeatherType::Warm, WeatherType::Mild],
            TemperatureBand::Mild => &[WeatherType::Mild, WeatherType::Cool],
            TemperatureBand::Cold => &[WeatherType::Cool, WeatherType::Cold],
        }
    }
}

#[must_use]
pub fn is_weather_suitable(item: &ClothingItem, weather: &WeatherSnapshot) -> bool {
    let band = TemperatureBand::from_celsius(weather.mean_temperature());
    item.suits_any(band.accepted())
}

/// An item fits when its formality lies in `[lowest, highest + 1]` of the
/// day's activities. A day with no activities imposes no constraint.
#[must_use]
pub fn is_activity_suitable(item: &ClothingItem, activities: &[Activity]) -> bool {
    let Some((lo, hi)) = formality_range(activities) else {
        return true;
    };
    let level = item.formality_level.level();
    level >= lo.level() && level <= hi.level() + 1
}

#[must_use]
pub fn is_suitable(item: &ClothingItem, weather: &WeatherSnapshot, activities: &[Activity]) -> bool {
    is_weather_suitable(item, weather) && is_activity_suitable(item, activities)
}
