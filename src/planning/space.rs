//! Space utilization analytics and bag-size suggestion

use serde::Serialize;
use tracing::debug;

use super::capacity::CapacityModel;
use super::dimensions::{ItemDimensionEstimator, ItemDimensions};
use crate::models::{BagCapacity, BagSize, ClothingCategory, ClothingItem};

pub const VOLUME_FULL_ADVICE: &str =
    "Your bag is nearly at volume capacity. Consider compression packing cubes.";
pub const SPARE_ROOM_ADVICE: &str =
    "You have plenty of space left. Consider adding versatile items.";
pub const WEIGHT_FULL_ADVICE: &str =
    "Your bag is nearly at weight capacity. Consider lighter alternatives.";
pub const COMPRESSION_ADVICE: &str =
    "Use compression packing cubes to save 20-30% space on soft items.";
pub const SHOES_ADVICE: &str =
    "Consider limiting shoes to 2 pairs and wearing the heaviest pair while traveling.";
pub const OUTERWEAR_ADVICE: &str =
    "Wear your heaviest coat/jacket while traveling to save space.";
pub const WELL_OPTIMIZED_ADVICE: &str =
    "Your packing looks well-optimized for the chosen bag size.";

const NEARLY_FULL: f64 = 0.9;
const MOSTLY_EMPTY: f64 = 0.5;
const COMPRESSIBLE_ITEM_LIMIT: usize = 3;
const SHOE_PAIR_LIMIT: usize = 2;
const OUTERWEAR_LIMIT: usize = 1;

/// Default headroom kept free when suggesting a bag
pub const DEFAULT_SAFETY_MARGIN: f64 = 0.85;

/// How much of a bag a set of items consumes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceUtilization {
    pub used_volume: f64,
    pub total_volume: f64,
    pub used_weight: f64,
    pub total_weight: f64,
    pub volume_fraction: f64,
    pub weight_fraction: f64,
    /// Larger of the two fractions as a percentage; above 100 means overflow
    pub utilization_percentage: f64,
    pub recommendations: Vec<String>,
}

impl SpaceUtilization {
    #[must_use]
    pub fn is_over_capacity(&self) -> bool {
        self.utilization_percentage > 100.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SpaceAnalyzer<'a> {
    capacities: &'a CapacityModel,
    estimator: &'a ItemDimensionEstimator,
    safety_margin: f64,
}

impl<'a> SpaceAnalyzer<'a> {
    #[must_use]
    pub fn new(capacities: &'a CapacityModel, estimator: &'a ItemDimensionEstimator) -> Self {
        Self {
            capacities,
            estimator,
            safety_margin: DEFAULT_SAFETY_MARGIN,
        }
    }

    #[must_use]
    pub fn with_safety_margin(mut self, safety_margin: f64) -> Self {
        self.safety_margin = safety_margin;
        self
    }

    #[must_use]
    pub fn get_item_dimensions(&self, item: &ClothingItem) -> ItemDimensions {
        self.estimator.dimensions(item)
    }

    #[must_use]
    pub fn calculate_total_dimensions(&self, items: &[ClothingItem]) -> BagCapacity {
        self.estimator.total(items)
    }

    #[tracing::instrument(name = "analyze_space", level = "debug", skip(self, items), fields(items = items.len()))]
    pub fn calculate_space_utilization(
        &self,
        items: &[ClothingItem],
        bag: BagSize,
    ) -> SpaceUtilization {
        let capacity = self.capacities.capacity(bag);
        let used = self.calculate_total_dimensions(items);

        let volume_fraction = used.volume / capacity.volume;
        let weight_fraction = used.weight / capacity.weight;
        let utilization_percentage = volume_fraction.max(weight_fraction) * 100.0;
        debug!("Utilization of {}: {:.1}%", bag, utilization_percentage);

        let recommendations =
            self.generate_recommendations(volume_fraction, weight_fraction, items);

        SpaceUtilization {
            used_volume: used.volume,
            total_volume: capacity.volume,
            used_weight: used.weight,
            total_weight: capacity.weight,
            volume_fraction,
            weight_fraction,
            utilization_percentage,
            recommendations,
        }
    }

    /// Every applicable rule contributes one line of advice
    #[must_use]
    pub fn generate_recommendations(
        &self,
        volume_fraction: f64,
        weight_fraction: f64,
        items: &[ClothingItem],
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if volume_fraction > NEARLY_FULL {
            recommendations.push(VOLUME_FULL_ADVICE.to_string());
        } else if volume_fraction < MOSTLY_EMPTY {
            recommendations.push(SPARE_ROOM_ADVICE.to_string());
        }

        if weight_fraction > NEARLY_FULL {
            recommendations.push(WEIGHT_FULL_ADVICE.to_string());
        }

        let compressible = items
            .iter()
            .filter(|item| self.get_item_dimensions(item).compressible)
            .count();
        if compressible > COMPRESSIBLE_ITEM_LIMIT {
            recommendations.push(COMPRESSION_ADVICE.to_string());
        }

        if count_category(items, ClothingCategory::Shoes) > SHOE_PAIR_LIMIT {
            recommendations.push(SHOES_ADVICE.to_string());
        }

        if count_category(items, ClothingCategory::Outerwear) > OUTERWEAR_LIMIT {
            recommendations.push(OUTERWEAR_ADVICE.to_string());
        }

        if recommendations.is_empty() {
            recommendations.push(WELL_OPTIMIZED_ADVICE.to_string());
        }

        recommendations
    }

    /// Versatility per unit of volume plus weight
    #[must_use]
    pub fn space_efficiency(&self, item: &ClothingItem) -> f64 {
        let dimensions = self.get_item_dimensions(item);
        item.versatility() as f64 / (dimensions.volume + dimensions.weight)
    }

    /// Copy of `items`, most space-efficient first; ties keep input order
    #[must_use]
    pub fn optimize_space_usage(&self, items: &[ClothingItem]) -> Vec<ClothingItem> {
        let mut ranked: Vec<(f64, &ClothingItem)> = items
            .iter()
            .map(|item| (self.space_efficiency(item), item))
            .collect();
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
        ranked.into_iter().map(|(_, item)| item.clone()).collect()
    }

    /// Smallest bag that holds the items within the safety margin
    #[must_use]
    pub fn suggest_bag_size(&self, items: &[ClothingItem]) -> BagSize {
        let total = self.calculate_total_dimensions(items);
        let suggestion = BagSize::PREFERENCE_ORDER
            .into_iter()
            .find(|bag| {
                self.capacities
                    .capacity(*bag)
                    .scaled(self.safety_margin)
                    .holds(&total)
            })
            .unwrap_or(BagSize::LARGEST);
        debug!(
            "Suggested {} for {:.1} L / {:.1} kg",
            suggestion, total.volume, total.weight
        );
        suggestion
    }
}

fn count_category(items: &[ClothingItem], category: ClothingCategory) -> usize {
    items.iter().filter(|item| item.category == category).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormalityLevel, WeatherType};
    use rstest::rstest;

    fn item(id: &str, category: ClothingCategory) -> ClothingItem {
        ClothingItem {
            id: id.to_string(),
            name: id.to_string(),
            category,
            subcategory: "basic".to_string(),
            color: id.to_string(),
            brand: None,
            tags: vec![],
            weather_suitability: vec![],
            formality_level: FormalityLevel::SmartCasual,
        }
    }

    fn items(category: ClothingCategory, count: usize) -> Vec<ClothingItem> {
        (0..count).map(|i| item(&format!("{category}{i}"), category)).collect()
    }

    fn with_analyzer<T>(f: impl FnOnce(SpaceAnalyzer<'_>) -> T) -> T {
        let capacities = CapacityModel::default();
        let estimator = ItemDimensionEstimator::default();
        f(SpaceAnalyzer::new(&capacities, &estimator))
    }

    #[test]
    fn test_utilization_is_not_clamped() {
        with_analyzer(|analyzer| {
            // 10 coats: 80 L / 12 kg in a 56 L / 7 kg carry-on
            let result =
                analyzer.calculate_space_utilization(&items(ClothingCategory::Outerwear, 10), BagSize::CarryOn);
            assert_eq!(result.used_volume, 80.0);
            assert!((result.utilization_percentage - 12.0 / 7.0 * 100.0).abs() < 1e-6);
            assert!(result.is_over_capacity());
            assert!(result.recommendations.contains(&VOLUME_FULL_ADVICE.to_string()));
            assert!(result.recommendations.contains(&WEIGHT_FULL_ADVICE.to_string()));
            assert!(result.recommendations.contains(&OUTERWEAR_ADVICE.to_string()));
            assert!(result.recommendations.contains(&COMPRESSION_ADVICE.to_string()));
        });
    }

    #[test]
    fn test_shoe_advice() {
        with_analyzer(|analyzer| {
            let result =
                analyzer.calculate_space_utilization(&items(ClothingCategory::Shoes, 3), BagSize::Duffel);
            assert!(result.recommendations.contains(&SHOES_ADVICE.to_string()));
            assert!(!result.recommendations.contains(&COMPRESSION_ADVICE.to_string()));
        });
    }

    #[test]
    fn test_default_advice_when_nothing_fires() {
        with_analyzer(|analyzer| {
            // 27 L of 45 L and 4.5 kg of 15 kg, none compressible
            let result = analyzer
                .calculate_space_utilization(&items(ClothingCategory::Bottoms, 9), BagSize::Backpack);
            assert_eq!(result.recommendations, vec![WELL_OPTIMIZED_ADVICE.to_string()]);
        });
    }

    #[test]
    fn test_empty_bag_gets_spare_room_advice() {
        with_analyzer(|analyzer| {
            let result = analyzer.calculate_space_utilization(&[], BagSize::CheckedLarge);
            assert_eq!(result.utilization_percentage, 0.0);
            assert_eq!(result.recommendations, vec![SPARE_ROOM_ADVICE.to_string()]);
        });
    }

    #[test]
    fn test_optimize_space_usage_orders_by_efficiency() {
        with_analyzer(|analyzer| {
            let mut coat = item("coat", ClothingCategory::Outerwear);
            coat.tags = vec!["waterproof".to_string()];
            let mut tee = item("tee", ClothingCategory::Tops);
            tee.weather_suitability = vec![WeatherType::Warm];
            let plain = item("plain", ClothingCategory::Tops);
            let input = vec![plain, coat, tee];

            let ordered = analyzer.optimize_space_usage(&input);
            let ids: Vec<_> = ordered.iter().map(|i| i.id.as_str()).collect();
            assert_eq!(ids, vec!["tee", "coat", "plain"]);
            // input left untouched
            assert_eq!(input[0].id, "plain");
        });
    }

    #[test]
    fn test_optimize_space_usage_keeps_order_on_ties() {
        with_analyzer(|analyzer| {
            let input: Vec<_> = ["a", "b", "c"]
                .iter()
                .map(|id| item(id, ClothingCategory::Tops))
                .collect();
            let ids: Vec<_> = analyzer
                .optimize_space_usage(&input)
                .into_iter()
                .map(|i| i.id)
                .collect();
            assert_eq!(ids, vec!["a", "b", "c"]);
        });
    }

    #[rstest]
    #[case(ClothingCategory::Tops, 5, BagSize::CarryOn)]
    // 25 shirts: 50 L > 47.6 L carry-on budget, 7.5 kg > 5.95 kg
    #[case(ClothingCategory::Tops, 25, BagSize::Duffel)]
    #[case(ClothingCategory::Outerwear, 8, BagSize::CheckedMedium)]
    #[case(ClothingCategory::Outerwear, 20, BagSize::CheckedLarge)]
    fn test_suggest_bag_size(
        #[case] category: ClothingCategory,
        #[case] count: usize,
        #[case] expected: BagSize,
    ) {
        with_analyzer(|analyzer| {
            assert_eq!(analyzer.suggest_bag_size(&items(category, count)), expected);
        });
    }

    #[test]
    fn test_custom_safety_margin() {
        with_analyzer(|analyzer| {
            // 24 L / 3.6 kg of tops; at half capacity the carry-on (3.5 kg)
            // and backpack (22.5 L) are both too small
            let tops = items(ClothingCategory::Tops, 12);
            assert_eq!(analyzer.suggest_bag_size(&tops), BagSize::CarryOn);
            assert_eq!(
                analyzer.with_safety_margin(0.5).suggest_bag_size(&tops),
                BagSize::Duffel
            );
        });
    }
}
