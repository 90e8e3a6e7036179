//! Item volume and weight estimation
//!
//! Each category has a base footprint. Tags then scale it:
//! - `thick` / `heavy`: volume x1.3, weight x1.4
//! - `light` / `thin`: volume x0.8, weight x0.7
//! - branded items tagged `premium` / `luxury`: weight x1.1
//!
//! Matching rules compose multiplicatively.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::PackingError;
use crate::models::{BagCapacity, ClothingCategory, ClothingItem};

/// Footprint and handling traits of a packed item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemDimensions {
    /// Liters
    pub volume: f64,
    /// Kilograms
    pub weight: f64,
    #[serde(default)]
    pub foldable: bool,
    #[serde(default)]
    pub compressible: bool,
}

impl ItemDimensions {
    #[must_use]
    pub const fn new(volume: f64, weight: f64, foldable: bool, compressible: bool) -> Self {
        Self {
            volume,
            weight,
            foldable,
            compressible,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Multiplier {
    volume: f64,
    weight: f64,
}

const BULKY: Multiplier = Multiplier {
    volume: 1.3,
    weight: 1.4,
};
const LIGHTWEIGHT: Multiplier = Multiplier {
    volume: 0.8,
    weight: 0.7,
};
const PREMIUM: Multiplier = Multiplier {
    volume: 1.0,
    weight: 1.1,
};

/// Base footprint per category
#[must_use]
pub fn default_dimensions() -> [(ClothingCategory, ItemDimensions); ClothingCategory::COUNT] {
    use ClothingCategory::*;
    [
        (Tops, ItemDimensions::new(2.0, 0.3, true, true)),
        (Bottoms, ItemDimensions::new(3.0, 0.5, true, false)),
        (Outerwear, ItemDimensions::new(8.0, 1.2, true, true)),
        (Dresses, ItemDimensions::new(4.0, 0.4, true, true)),
        (Shoes, ItemDimensions::new(6.0, 0.8, false, false)),
        (Undergarments, ItemDimensions::new(0.5, 0.1, true, true)),
        (Accessories, ItemDimensions::new(1.0, 0.2, false, false)),
        (Swimwear, ItemDimensions::new(1.0, 0.2, true, true)),
        (Sleepwear, ItemDimensions::new(2.0, 0.3, true, true)),
        (Athletic, ItemDimensions::new(2.0, 0.4, true, true)),
    ]
}

/// Estimates an item's dimensions from its category, tags and brand
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDimensionEstimator {
    base: [ItemDimensions; ClothingCategory::COUNT],
}

impl Default for ItemDimensionEstimator {
    fn default() -> Self {
        let mut base = [ItemDimensions::new(0.0, 0.0, false, false); ClothingCategory::COUNT];
        for (category, dimensions) in default_dimensions() {
            base[category.index()] = dimensions;
        }
        Self { base }
    }
}

impl ItemDimensionEstimator {
    /// Build from a table that must cover every category with positive sizes
    pub fn from_table(table: &HashMap<ClothingCategory, ItemDimensions>) -> crate::Result<Self> {
        let mut base = [ItemDimensions::new(0.0, 0.0, false, false); ClothingCategory::COUNT];
        for category in ClothingCategory::ALL {
            let dimensions = table.get(&category).ok_or_else(|| {
                PackingError::config(format!("missing dimensions for category '{category}'"))
            })?;
            if dimensions.volume <= 0.0 || dimensions.weight <= 0.0 {
                return Err(PackingError::config(format!(
                    "dimensions for category '{category}' must be positive"
                )));
            }
            base[category.index()] = *dimensions;
        }
        Ok(Self { base })
    }

    #[must_use]
    pub fn base(&self, category: ClothingCategory) -> ItemDimensions {
        self.base[category.index()]
    }

    #[must_use]
    pub fn dimensions(&self, item: &ClothingItem) -> ItemDimensions {
        let base = self.base(item.category);
        let (volume_factor, weight_factor) = multipliers(item)
            .into_iter()
            .fold((1.0, 1.0), |(v, w), m| (v * m.volume, w * m.weight));

        ItemDimensions {
            volume: base.volume * volume_factor,
            weight: base.weight * weight_factor,
            ..base
        }
    }

    /// Summed volume and weight of `items`
    #[must_use]
    pub fn total<'a, I>(&self, items: I) -> BagCapacity
    where
        I: IntoIterator<Item = &'a ClothingItem>,
    {
        items
            .into_iter()
            .map(|item| self.dimensions(item))
            .fold(BagCapacity::ZERO, |acc, d| {
                BagCapacity::new(acc.volume + d.volume, acc.weight + d.weight)
            })
    }
}

fn multipliers(item: &ClothingItem) -> Vec<Multiplier> {
    let mut applied = Vec::with_capacity(3);
    if item.has_tag("thick") || item.has_tag("heavy") {
        applied.push(BULKY);
    }
    if item.has_tag("light") || item.has_tag("thin") {
        applied.push(LIGHTWEIGHT);
    }
    if item.brand.is_some() && (item.has_tag("premium") || item.has_tag("luxury")) {
        applied.push(PREMIUM);
    }
    applied
}
