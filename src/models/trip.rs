//! Trip input assembled by the caller

use serde::{Deserialize, Serialize};

use super::activity::Activity;
use super::bag::BagSize;
use super::clothing::ClothingItem;
use super::weather::WeatherSnapshot;

/// Weather and plans for one day of the trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripDay {
    pub weather: WeatherSnapshot,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// Everything needed to plan a trip's outfits and packing list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub name: String,
    pub bag_size: BagSize,
    pub days: Vec<TripDay>,
    pub wardrobe: Vec<ClothingItem>,
    /// Falls back to the configured default list when empty
    #[serde(default)]
    pub essential_keywords: Vec<String>,
    #[serde(default)]
    pub cultural_notes: Vec<String>,
}
