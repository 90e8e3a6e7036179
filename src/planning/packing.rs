//! Capacity-constrained packing selection
//!
//! Essential items always go in. Whatever budget they leave is filled with
//! optional items in descending score order, in a single greedy pass over two
//! budgets (volume and weight). A rejected item is never reconsidered, so the
//! result approximates rather than solves the 2D knapsack; an exact solver
//! would slot in behind [`PackingSelector::optimize`].

use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

use super::capacity::CapacityModel;
use super::dimensions::ItemDimensionEstimator;
use crate::models::{BagCapacity, BagSize, ClothingCategory, ClothingItem};

/// Stand-in until trip weather is scored against the selection
pub const WEATHER_MATCH_PLACEHOLDER: f64 = 0.8;
/// Stand-in until trip activities are scored against the selection
pub const ACTIVITY_MATCH_PLACEHOLDER: f64 = 0.8;

const UTILIZATION_WEIGHT: f64 = 0.2;
const VERSATILITY_WEIGHT: f64 = 0.3;
const WEATHER_MATCH_WEIGHT: f64 = 0.3;
const ACTIVITY_MATCH_WEIGHT: f64 = 0.2;

/// Distinct categories needed for a full versatility score
const VERSATILITY_CATEGORIES: f64 = 10.0;

/// Rule marking an item as essential
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EssentialRule {
    Category(ClothingCategory),
    /// Lowercased fragment matched against the subcategory
    Subcategory(String),
}

impl EssentialRule {
    /// Keywords naming a category become category rules, anything else
    /// matches subcategories
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return None;
        }
        Some(match keyword.parse::<ClothingCategory>() {
            Ok(category) => EssentialRule::Category(category),
            Err(_) => EssentialRule::Subcategory(keyword.to_lowercase()),
        })
    }

    #[must_use]
    pub fn matches(&self, item: &ClothingItem) -> bool {
        match self {
            EssentialRule::Category(category) => item.category == *category,
            EssentialRule::Subcategory(fragment) => {
                item.subcategory.to_lowercase().contains(fragment.as_str())
            }
        }
    }
}

#[must_use]
pub fn essential_rules<S: AsRef<str>>(keywords: &[S]) -> Vec<EssentialRule> {
    keywords
        .iter()
        .filter_map(|k| EssentialRule::from_keyword(k.as_ref()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingScore {
    pub utilization: f64,
    pub versatility: f64,
    pub weather_match: f64,
    pub activity_match: f64,
    pub overall: f64,
}

/// Essentials alone exceed the bag
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityOverflow {
    pub essential_load: BagCapacity,
    pub capacity: BagCapacity,
}

impl CapacityOverflow {
    #[must_use]
    pub fn excess_volume(&self) -> f64 {
        (self.essential_load.volume - self.capacity.volume).max(0.0)
    }

    #[must_use]
    pub fn excess_weight(&self) -> f64 {
        (self.essential_load.weight - self.capacity.weight).max(0.0)
    }

    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Essential items exceed bag capacity by {:.1} L and {:.1} kg; no optional items were added",
            self.excess_volume(),
            self.excess_weight()
        )
    }
}

/// Raw outcome of the greedy selection
#[derive(Debug, Clone, PartialEq)]
pub struct PackingSelection {
    pub items: Vec<ClothingItem>,
    /// Budget left for optional items after essentials
    pub remaining_capacity: BagCapacity,
    /// Load of the admitted optional items
    pub optional_load: BagCapacity,
    pub rejected_optional: usize,
    pub overflow: Option<CapacityOverflow>,
}

/// Selected items with their score and advice
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingPlan {
    pub bag_size: BagSize,
    pub items: Vec<ClothingItem>,
    pub score: PackingScore,
    pub notes: Vec<String>,
    pub overflow: Option<CapacityOverflow>,
}

impl PackingPlan {
    #[must_use]
    pub fn has_overflow(&self) -> bool {
        self.overflow.is_some()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PackingSelector<'a> {
    capacities: &'a CapacityModel,
    estimator: &'a ItemDimensionEstimator,
}

impl<'a> PackingSelector<'a> {
    #[must_use]
    pub fn new(capacities: &'a CapacityModel, estimator: &'a ItemDimensionEstimator) -> Self {
        Self {
            capacities,
            estimator,
        }
    }

    /// Select essentials plus the optional items that fit
    #[tracing::instrument(name = "optimize_packing", level = "debug", skip(self, pool, rules), fields(pool = pool.len()))]
    pub fn optimize(
        &self,
        pool: &[ClothingItem],
        rules: &[EssentialRule],
        bag: BagSize,
    ) -> PackingSelection {
        let capacity = self.capacities.capacity(bag);
        let (essentials, optionals): (Vec<&ClothingItem>, Vec<&ClothingItem>) = pool
            .iter()
            .partition(|item| rules.iter().any(|rule| rule.matches(item)));

        let essential_load = self.estimator.total(essentials.iter().copied());
        let overflow = if capacity.holds(&essential_load) {
            None
        } else {
            let overflow = CapacityOverflow {
                essential_load,
                capacity,
            };
            warn!("{} for bag {}", overflow.message(), bag);
            Some(overflow)
        };
        let remaining_capacity = capacity.saturating_sub(&essential_load);

        let mut ranked: Vec<(&ClothingItem, f64)> = optionals
            .into_iter()
            .map(|item| (item, optional_item_score(item)))
            .collect();
        // stable: equal scores keep input order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut optional_load = BagCapacity::ZERO;
        let mut admitted = Vec::new();
        let mut rejected_optional = 0;
        for (item, _) in ranked {
            let dimensions = self.estimator.dimensions(item);
            let candidate = BagCapacity::new(
                optional_load.volume + dimensions.volume,
                optional_load.weight + dimensions.weight,
            );
            if remaining_capacity.holds(&candidate) {
                optional_load = candidate;
                admitted.push(item);
            } else {
                rejected_optional += 1;
            }
        }
        debug!(
            "{} essential, {} optional admitted, {} rejected",
            essentials.len(),
            admitted.len(),
            rejected_optional
        );

        let items = remove_duplicates(essentials.into_iter().chain(admitted));

        PackingSelection {
            items,
            remaining_capacity,
            optional_load,
            rejected_optional,
            overflow,
        }
    }

    #[must_use]
    pub fn calculate_packing_score(&self, items: &[ClothingItem], bag: BagSize) -> PackingScore {
        let capacity = self.capacities.capacity(bag);
        let total = self.estimator.total(items);
        let utilization = (total.volume / capacity.volume).min(1.0);

        let categories: HashSet<ClothingCategory> = items.iter().map(|i| i.category).collect();
        let versatility = (categories.len() as f64 / VERSATILITY_CATEGORIES).min(1.0);

        let weather_match = WEATHER_MATCH_PLACEHOLDER;
        let activity_match = ACTIVITY_MATCH_PLACEHOLDER;
        let overall = utilization * UTILIZATION_WEIGHT
            + versatility * VERSATILITY_WEIGHT
            + weather_match * WEATHER_MATCH_WEIGHT
            + activity_match * ACTIVITY_MATCH_WEIGHT;

        PackingScore {
            utilization,
            versatility,
            weather_match,
            activity_match,
            overall,
        }
    }

    /// Selection, score and advice in one step
    #[must_use]
    pub fn plan(&self, pool: &[ClothingItem], rules: &[EssentialRule], bag: BagSize) -> PackingPlan {
        let selection = self.optimize(pool, rules, bag);
        let score = self.calculate_packing_score(&selection.items, bag);

        let mut notes = Vec::new();
        if let Some(overflow) = &selection.overflow {
            notes.push(overflow.message());
        } else if selection.rejected_optional > 0 {
            notes.push(format!(
                "{} optional item(s) did not fit in the {} and were left out",
                selection.rejected_optional, bag
            ));
        }

        PackingPlan {
            bag_size: bag,
            items: selection.items,
            score,
            notes,
            overflow: selection.overflow,
        }
    }
}

/// Ranking score for optional items
#[must_use]
pub fn optional_item_score(item: &ClothingItem) -> f64 {
    0.2 * f64::from(item.formality_level.level())
        + 0.1 * item.tags.len() as f64
        + 0.3 * item.weather_suitability.len() as f64
}

/// Keep the first item per (category, subcategory, color)
pub fn remove_duplicates<'a, I>(items: I) -> Vec<ClothingItem>
where
    I: IntoIterator<Item = &'a ClothingItem>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for item in items {
        if seen.insert(item.identity_key()) {
            unique.push(item.clone());
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormalityLevel, WeatherType};

    fn item(id: &str, category: ClothingCategory, subcategory: &str, color: &str) -> ClothingItem {
        ClothingItem {
            id: id.to_string(),
            name: id.to_string(),
            category,
            subcategory: subcategory.to_string(),
            color: color.to_string(),
            brand: None,
            tags: vec![],
            weather_suitability: vec![WeatherType::Mild],
            formality_level: FormalityLevel::Casual,
        }
    }

    fn fixtures() -> (CapacityModel, ItemDimensionEstimator) {
        (CapacityModel::default(), ItemDimensionEstimator::default())
    }

    #[test]
    fn test_keyword_parsing() {
        let rules = essential_rules(&["Undergarments", "sock", "  "]);
        assert_eq!(
            rules,
            vec![
                EssentialRule::Category(ClothingCategory::Undergarments),
                EssentialRule::Subcategory("sock".to_string()),
            ]
        );
        let socks = item("s", ClothingCategory::Undergarments, "Wool Socks", "grey");
        assert!(rules[1].matches(&socks));
    }

    #[test]
    fn test_greedy_respects_remaining_capacity() {
        let (capacities, estimator) = fixtures();
        let selector = PackingSelector::new(&capacities, &estimator);
        // 7 jackets = 56 L, fills the carry-on volume exactly
        let mut pool: Vec<_> = (0..7)
            .map(|i| item(&format!("j{i}"), ClothingCategory::Outerwear, "jacket", &format!("c{i}")))
            .collect();
        pool.push(item("tee", ClothingCategory::Tops, "tee", "white"));

        let rules = essential_rules(&["jacket"]);
        let selection = selector.optimize(&pool, &rules, BagSize::CarryOn);
        // 7 x 1.2 kg = 8.4 kg is over the 7 kg limit
        assert!(selection.overflow.is_some());
        assert_eq!(selection.remaining_capacity, BagCapacity::ZERO);
        assert_eq!(selection.items.len(), 7);
        assert_eq!(selection.rejected_optional, 1);
    }

    #[test]
    fn test_higher_scores_admitted_first() {
        let (capacities, estimator) = fixtures();
        let selector = PackingSelector::new(&capacities, &estimator);
        let mut plain = item("plain", ClothingCategory::Shoes, "sneaker", "white");
        plain.weather_suitability.clear();
        let mut versatile = item("versatile", ClothingCategory::Shoes, "boot", "brown");
        versatile.weather_suitability = vec![WeatherType::Cool, WeatherType::Rainy];
        // backpack holds 45 L: room for 7 pairs of shoes by volume
        let mut pool = vec![plain];
        pool.extend((0..7).map(|i| {
            let mut shoe = versatile.clone();
            shoe.color = format!("c{i}");
            shoe
        }));

        let selection = selector.optimize(&pool, &[], BagSize::Backpack);
        assert_eq!(selection.items.len(), 7);
        assert!(selection.items.iter().all(|i| i.subcategory == "boot"));
        assert!(selection.overflow.is_none());
    }

    #[test]
    fn test_duplicates_removed_after_selection() {
        let (capacities, estimator) = fixtures();
        let selector = PackingSelector::new(&capacities, &estimator);
        let pool: Vec<_> = (0..5)
            .map(|i| item(&format!("t{i}"), ClothingCategory::Tops, "tee", "white"))
            .collect();
        let selection = selector.optimize(&pool, &[], BagSize::CheckedLarge);
        assert_eq!(selection.items.len(), 1);
        assert_eq!(selection.items[0].id, "t0");
    }

    #[test]
    fn test_packing_score() {
        let (capacities, estimator) = fixtures();
        let selector = PackingSelector::new(&capacities, &estimator);
        let items = vec![
            item("a", ClothingCategory::Outerwear, "coat", "black"),
            item("b", ClothingCategory::Tops, "tee", "white"),
        ];
        let score = selector.calculate_packing_score(&items, BagSize::Backpack);
        assert!((score.utilization - 10.0 / 45.0).abs() < 1e-9);
        assert!((score.versatility - 0.2).abs() < 1e-9);
        assert_eq!(score.weather_match, WEATHER_MATCH_PLACEHOLDER);
        assert_eq!(score.activity_match, ACTIVITY_MATCH_PLACEHOLDER);
        let expected = 0.2 * (10.0 / 45.0) + 0.3 * 0.2 + 0.3 * 0.8 + 0.2 * 0.8;
        assert!((score.overall - expected).abs() < 1e-9);
    }

    #[test]
    fn test_utilization_capped_at_one() {
        let (capacities, estimator) = fixtures();
        let selector = PackingSelector::new(&capacities, &estimator);
        let items: Vec<_> = (0..10)
            .map(|i| item(&format!("c{i}"), ClothingCategory::Outerwear, "coat", &i.to_string()))
            .collect();
        let score = selector.calculate_packing_score(&items, BagSize::CarryOn);
        assert_eq!(score.utilization, 1.0);
    }

    #[test]
    fn test_plan_reports_overflow_note() {
        let (capacities, estimator) = fixtures();
        let selector = PackingSelector::new(&capacities, &estimator);
        let pool: Vec<_> = (0..10)
            .map(|i| item(&format!("s{i}"), ClothingCategory::Shoes, "boot", &i.to_string()))
            .collect();
        let plan = selector.plan(&pool, &essential_rules(&["shoes"]), BagSize::CarryOn);
        assert!(plan.has_overflow());
        assert!(plan.notes[0].contains("exceed bag capacity"));
        let overflow = plan.overflow.unwrap();
        assert!((overflow.excess_volume() - 4.0).abs() < 1e-9);
        assert!((overflow.excess_weight() - 1.0).abs() < 1e-9);
    }
}
