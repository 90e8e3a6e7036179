//! Trip-level recommendation assembled from the per-day and packing results

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashSet;

use super::packing::{CapacityOverflow, EssentialRule, PackingScore};
use crate::models::{BagSize, ClothingItem, DailyOutfit, WeatherSnapshot};

const HEAT_WARNING_C: f64 = 30.0;
const RAIN_WARNING_PROBABILITY: f64 = 0.7;

/// Weather hazard flagged for a specific day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherWarning {
    pub date: NaiveDate,
    pub message: String,
}

/// Complete plan for a trip
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingRecommendation {
    pub trip_name: String,
    pub bag_size: BagSize,
    pub daily_outfits: Vec<DailyOutfit>,
    pub total_items: Vec<ClothingItem>,
    pub packing_score: PackingScore,
    /// Utilization percentage of the chosen bag; may exceed 100
    pub bag_utilization: f64,
    pub space_recommendations: Vec<String>,
    pub suggested_bag: BagSize,
    pub cultural_notes: Vec<String>,
    pub weather_warnings: Vec<WeatherWarning>,
    pub overflow: Option<CapacityOverflow>,
    pub generated_at: DateTime<Utc>,
}

/// Items worn or carried on any day, followed by wardrobe items matching an
/// essential rule that were never worn. First occurrence by id wins.
#[must_use]
pub fn collect_trip_items(
    days: &[DailyOutfit],
    wardrobe: &[ClothingItem],
    essentials: &[EssentialRule],
) -> Vec<ClothingItem> {
    let mut seen = HashSet::new();
    let mut pool = Vec::new();
    let essential_items = wardrobe
        .iter()
        .filter(|item| essentials.iter().any(|rule| rule.matches(item)));
    for item in days
        .iter()
        .flat_map(DailyOutfit::all_items)
        .chain(essential_items)
    {
        if seen.insert(item.id.as_str()) {
            pool.push(item.clone());
        }
    }
    pool
}

#[must_use]
pub fn weather_warnings(weather: &WeatherSnapshot) -> Vec<WeatherWarning> {
    let mut warnings = Vec::new();
    if weather.temperature.max > HEAT_WARNING_C {
        warnings.push(WeatherWarning {
            date: weather.date,
            message: format!(
                "Heat: highs of {:.0}°C expected",
                weather.temperature.max
            ),
        });
    }
    if weather.precipitation.probability > RAIN_WARNING_PROBABILITY {
        warnings.push(WeatherWarning {
            date: weather.date,
            message: format!(
                "Rain: {:.0}% chance of precipitation",
                weather.precipitation.probability * 100.0
            ),
        });
    }
    warnings
}
