//! Entry points for callers planning a trip
//!
//! [`PackingEngine`] owns the capacity and dimension tables and exposes the
//! operations an orchestrating service needs: one outfit per day, one packing
//! plan and space analysis per trip, and a bag suggestion. Every call is a
//! pure function of its inputs and the engine's tables.

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::config::AipackrConfig;
use crate::models::{Activity, BagSize, ClothingItem, DailyOutfit, Trip, WeatherSnapshot};
use crate::planning::packing::essential_rules;
use crate::planning::trip::{collect_trip_items, weather_warnings};
use crate::planning::{
    CapacityModel, ItemDimensionEstimator, ItemDimensions, OutfitAssembler, OutfitConstraints,
    PackingPlan, PackingRecommendation, PackingSelector, SpaceAnalyzer, SpaceUtilization,
};

#[derive(Debug, Clone)]
pub struct PackingEngine {
    capacities: CapacityModel,
    estimator: ItemDimensionEstimator,
    safety_margin: f64,
    default_essentials: Vec<String>,
}

impl Default for PackingEngine {
    fn default() -> Self {
        Self::with_tables(CapacityModel::default(), ItemDimensionEstimator::default())
    }
}

impl PackingEngine {
    /// Engine with custom tables and default packing settings
    #[must_use]
    pub fn with_tables(capacities: CapacityModel, estimator: ItemDimensionEstimator) -> Self {
        let defaults = AipackrConfig::default().packing;
        Self {
            capacities,
            estimator,
            safety_margin: defaults.safety_margin,
            default_essentials: defaults.essential_keywords,
        }
    }

    /// Build the engine from loaded configuration
    pub fn from_config(config: &AipackrConfig) -> crate::Result<Self> {
        Ok(Self {
            capacities: config.capacity_model()?,
            estimator: config.dimension_estimator()?,
            safety_margin: config.packing.safety_margin,
            default_essentials: config.packing.essential_keywords.clone(),
        })
    }

    #[must_use]
    pub fn capacities(&self) -> &CapacityModel {
        &self.capacities
    }

    fn selector(&self) -> PackingSelector<'_> {
        PackingSelector::new(&self.capacities, &self.estimator)
    }

    fn analyzer(&self) -> SpaceAnalyzer<'_> {
        SpaceAnalyzer::new(&self.capacities, &self.estimator).with_safety_margin(self.safety_margin)
    }

    /// Outfit, accessories and notes for one day
    #[must_use]
    pub fn generate_daily_outfit(
        &self,
        date: NaiveDate,
        weather: &WeatherSnapshot,
        activities: &[Activity],
        items: &[ClothingItem],
        cultural_notes: &[String],
    ) -> DailyOutfit {
        OutfitAssembler::new().generate_daily_outfit(
            date,
            OutfitConstraints {
                weather,
                activities,
                available_items: items,
                cultural_notes,
            },
        )
    }

    /// Essentials plus the best optional items that fit in `bag`
    #[must_use]
    pub fn optimize_packing<S: AsRef<str>>(
        &self,
        items: &[ClothingItem],
        essential_keywords: &[S],
        bag: BagSize,
    ) -> PackingPlan {
        let rules = essential_rules(essential_keywords);
        self.selector().plan(items, &rules, bag)
    }

    #[must_use]
    pub fn analyze_space(&self, items: &[ClothingItem], bag: BagSize) -> SpaceUtilization {
        self.analyzer().calculate_space_utilization(items, bag)
    }

    #[must_use]
    pub fn suggest_bag_size(&self, items: &[ClothingItem]) -> BagSize {
        self.analyzer().suggest_bag_size(items)
    }

    /// Items reordered most space-efficient first
    #[must_use]
    pub fn optimize_space_usage(&self, items: &[ClothingItem]) -> Vec<ClothingItem> {
        self.analyzer().optimize_space_usage(items)
    }

    #[must_use]
    pub fn item_dimensions(&self, item: &ClothingItem) -> ItemDimensions {
        self.estimator.dimensions(item)
    }

    /// Daily outfits, packing list and space analysis for a whole trip
    #[tracing::instrument(name = "recommend_trip", level = "debug", skip(self, trip), fields(trip = %trip.name))]
    pub fn recommend_trip(&self, trip: &Trip) -> PackingRecommendation {
        let daily_outfits: Vec<DailyOutfit> = trip
            .days
            .iter()
            .map(|day| {
                self.generate_daily_outfit(
                    day.weather.date,
                    &day.weather,
                    &day.activities,
                    &trip.wardrobe,
                    &trip.cultural_notes,
                )
            })
            .collect();

        let rules = if trip.essential_keywords.is_empty() {
            essential_rules(&self.default_essentials)
        } else {
            essential_rules(&trip.essential_keywords)
        };
        let pool = collect_trip_items(&daily_outfits, &trip.wardrobe, &rules);
        let plan = self.selector().plan(&pool, &rules, trip.bag_size);
        let space = self.analyze_space(&plan.items, trip.bag_size);
        let suggested_bag = self.suggest_bag_size(&plan.items);
        let warnings = trip
            .days
            .iter()
            .flat_map(|day| weather_warnings(&day.weather))
            .collect();

        info!(
            "Planned {} days for '{}': {} items, {:.0}% of {}",
            daily_outfits.len(),
            trip.name,
            plan.items.len(),
            space.utilization_percentage,
            trip.bag_size
        );

        PackingRecommendation {
            trip_name: trip.name.clone(),
            bag_size: trip.bag_size,
            daily_outfits,
            total_items: plan.items,
            packing_score: plan.score,
            bag_utilization: space.utilization_percentage,
            space_recommendations: space.recommendations,
            suggested_bag,
            cultural_notes: trip.cultural_notes.clone(),
            weather_warnings: warnings,
            overflow: plan.overflow,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ActivityType, ClothingCategory, FormalityLevel, Precipitation, TemperatureRange, TripDay,
        WeatherCondition, WeatherType,
    };

    fn item(id: &str, category: ClothingCategory, subcategory: &str) -> ClothingItem {
        ClothingItem {
            id: id.to_string(),
            name: id.to_string(),
            category,
            subcategory: subcategory.to_string(),
            color: "black".to_string(),
            brand: None,
            tags: vec![],
            weather_suitability: vec![WeatherType::Warm, WeatherType::Mild],
            formality_level: FormalityLevel::Casual,
        }
    }

    fn day(date: u32, max: f64, rain: f64) -> TripDay {
        TripDay {
            weather: WeatherSnapshot {
                date: NaiveDate::from_ymd_opt(2024, 6, date).unwrap(),
                temperature: TemperatureRange { min: max - 10.0, max },
                humidity: None,
                precipitation: Precipitation {
                    probability: rain,
                    amount: None,
                },
                wind_speed: 1.0,
                condition: WeatherCondition::PartlyCloudy,
                uv_index: 5.0,
            },
            activities: vec![Activity {
                name: "City walk".to_string(),
                activity_type: ActivityType::Sightseeing,
                formality_level: FormalityLevel::Casual,
                dress_code: None,
            }],
        }
    }

    #[test]
    fn test_recommend_trip() {
        let trip = Trip {
            name: "Lisbon".to_string(),
            bag_size: BagSize::CarryOn,
            days: vec![day(1, 26.0, 0.1), day(2, 32.0, 0.8)],
            wardrobe: vec![
                item("tee", ClothingCategory::Tops, "tee"),
                item("shorts", ClothingCategory::Bottoms, "shorts"),
                item("sneakers", ClothingCategory::Shoes, "sneaker"),
                item("briefs", ClothingCategory::Undergarments, "briefs"),
                item("pyjamas", ClothingCategory::Sleepwear, "pyjamas"),
            ],
            essential_keywords: vec![],
            cultural_notes: vec!["Tipping is modest".to_string()],
        };

        let engine = PackingEngine::default();
        let recommendation = engine.recommend_trip(&trip);

        assert_eq!(recommendation.daily_outfits.len(), 2);
        assert_eq!(recommendation.daily_outfits[0].outfit.len(), 4);
        // sleepwear is never worn but is packed as a default essential
        let ids: Vec<_> = recommendation.total_items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["briefs", "pyjamas", "tee", "shorts", "sneakers"]);
        assert!(recommendation.overflow.is_none());
        assert_eq!(recommendation.suggested_bag, BagSize::CarryOn);
        // day 2: heat and rain
        assert_eq!(recommendation.weather_warnings.len(), 2);
        assert_eq!(recommendation.cultural_notes, trip.cultural_notes);
        assert!(recommendation.bag_utilization > 0.0);
    }

    #[test]
    fn test_engine_from_config_uses_tables() {
        let mut config = AipackrConfig::default();
        config.capacities.insert(
            BagSize::CarryOn,
            crate::models::BagCapacity::new(1.0, 1.0),
        );
        let engine = PackingEngine::from_config(&config).unwrap();
        let items = vec![item("tee", ClothingCategory::Tops, "tee")];
        assert_eq!(engine.suggest_bag_size(&items), BagSize::Backpack);
        assert!(engine.analyze_space(&items, BagSize::CarryOn).is_over_capacity());
    }
}
