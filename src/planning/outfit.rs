//! Daily outfit assembly
//!
//! For one day the wardrobe is narrowed to weather- and formality-appropriate
//! items, the required categories are derived from the day's activities, and
//! the best item per category is picked by closeness to the day's target
//! formality. Accessories and advisory notes are added on top.

use chrono::NaiveDate;
use tracing::debug;

use super::suitability::is_suitable;
use crate::models::activity::target_formality;
use crate::models::{
    Activity, ClothingCategory, ClothingItem, DailyOutfit, Outfit, WeatherSnapshot,
};

pub const HYDRATION_NOTE: &str = "Stay hydrated and seek shade during peak sun hours";
pub const RAIN_NOTE: &str = "High chance of rain - consider waterproof options";
pub const FORMAL_NOTE: &str = "Formal attire required for some activities";

/// Categories every outfit tries to fill
const BASE_CATEGORIES: [ClothingCategory; 4] = [
    ClothingCategory::Tops,
    ClothingCategory::Bottoms,
    ClothingCategory::Shoes,
    ClothingCategory::Undergarments,
];

const HEAT_THRESHOLD_C: f64 = 30.0;
const RAIN_ACCESSORY_PROBABILITY: f64 = 0.5;
const RAIN_NOTE_PROBABILITY: f64 = 0.7;
const HIGH_UV_INDEX: f64 = 6.0;
const MAX_FORMAL_ACCESSORIES: usize = 2;

/// Inputs for a single day
#[derive(Debug, Clone, Copy)]
pub struct OutfitConstraints<'a> {
    pub weather: &'a WeatherSnapshot,
    pub activities: &'a [Activity],
    pub available_items: &'a [ClothingItem],
    pub cultural_notes: &'a [String],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OutfitAssembler;

impl OutfitAssembler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[tracing::instrument(name = "generate_daily_outfit", level = "debug", skip(self, constraints))]
    pub fn generate_daily_outfit(
        &self,
        date: NaiveDate,
        constraints: OutfitConstraints<'_>,
    ) -> DailyOutfit {
        let OutfitConstraints {
            weather,
            activities,
            available_items,
            cultural_notes,
        } = constraints;

        let suitable: Vec<&ClothingItem> = available_items
            .iter()
            .filter(|item| is_suitable(item, weather, activities))
            .collect();
        debug!(
            "{} of {} items suitable for {}",
            suitable.len(),
            available_items.len(),
            date
        );

        let outfit = build_outfit(&suitable, activities);
        let accessories = select_accessories(&suitable, weather, activities);
        let notes = outfit_notes(weather, activities, cultural_notes);

        DailyOutfit {
            date,
            weather: weather.clone(),
            activities: activities.to_vec(),
            outfit,
            accessories,
            notes,
        }
    }
}

/// Categories the day's activities call for, in fill order
#[must_use]
pub fn required_categories(activities: &[Activity]) -> Vec<ClothingCategory> {
    let mut categories = BASE_CATEGORIES.to_vec();
    if activities.iter().any(Activity::is_athletic) {
        categories.push(ClothingCategory::Athletic);
    }
    if activities.iter().any(Activity::is_formal) {
        categories.push(ClothingCategory::Dresses);
    }
    if activities.iter().any(Activity::is_beach) {
        categories.push(ClothingCategory::Swimwear);
    }
    categories
}

/// Formality closeness dominates; tags and weather tags break near-ties
#[must_use]
pub fn item_score(item: &ClothingItem, target_formality: u8) -> f64 {
    let distance = f64::from(item.formality_level.level().abs_diff(target_formality));
    let formality_fit = (10.0 - distance).max(0.0);
    formality_fit + 0.5 * item.tags.len() as f64 + 0.3 * item.weather_suitability.len() as f64
}

/// Highest-scoring item; the first one seen wins ties
fn select_best<'a>(items: &[&'a ClothingItem], target: u8) -> Option<&'a ClothingItem> {
    let mut best: Option<(&ClothingItem, f64)> = None;
    for &item in items {
        let score = item_score(item, target);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((item, score)),
        }
    }
    best.map(|(item, _)| item)
}

fn build_outfit(suitable: &[&ClothingItem], activities: &[Activity]) -> Outfit {
    let target = target_formality(activities);
    let mut outfit = Outfit::new();

    for category in required_categories(activities) {
        let candidates: Vec<&ClothingItem> = suitable
            .iter()
            .copied()
            .filter(|item| item.category == category)
            .collect();
        match select_best(&candidates, target) {
            Some(item) => {
                outfit.set(item.clone());
            }
            None => debug!("No suitable item for category {}", category),
        }
    }

    outfit
}

fn select_accessories(
    suitable: &[&ClothingItem],
    weather: &WeatherSnapshot,
    activities: &[Activity],
) -> Vec<ClothingItem> {
    let accessories: Vec<&ClothingItem> = suitable
        .iter()
        .copied()
        .filter(|item| item.category == ClothingCategory::Accessories)
        .collect();
    let mut selected: Vec<ClothingItem> = Vec::new();

    if weather.is_rainy() && weather.precipitation.probability > RAIN_ACCESSORY_PROBABILITY {
        if let Some(umbrella) = accessories
            .iter()
            .find(|item| item.name_contains("umbrella") || item.has_tag_containing("rain"))
        {
            selected.push((*umbrella).clone());
        }
    }

    if weather.uv_index > HIGH_UV_INDEX {
        if let Some(sunglasses) = accessories
            .iter()
            .find(|item| item.name_contains("sunglasses") || item.has_tag_containing("sun"))
        {
            if !selected.iter().any(|s| s.id == sunglasses.id) {
                selected.push((*sunglasses).clone());
            }
        }
    }

    if activities.iter().any(Activity::is_formal) {
        let formal: Vec<ClothingItem> = accessories
            .iter()
            .filter(|item| item.formality_level.level() >= 3)
            .filter(|item| !selected.iter().any(|s| s.id == item.id))
            .take(MAX_FORMAL_ACCESSORIES)
            .map(|item| (*item).clone())
            .collect();
        selected.extend(formal);
    }

    selected
}

fn outfit_notes(
    weather: &WeatherSnapshot,
    activities: &[Activity],
    cultural_notes: &[String],
) -> Vec<String> {
    let mut notes = Vec::new();

    if weather.temperature.max > HEAT_THRESHOLD_C {
        notes.push(HYDRATION_NOTE.to_string());
    }
    if weather.precipitation.probability > RAIN_NOTE_PROBABILITY {
        notes.push(RAIN_NOTE.to_string());
    }
    if activities.iter().any(Activity::is_formal) {
        notes.push(FORMAL_NOTE.to_string());
    }
    notes.extend(cultural_notes.iter().cloned());

    notes
}
