//! Daily outfit model

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::activity::Activity;
use super::clothing::{ClothingCategory, ClothingItem};
use super::weather::WeatherSnapshot;

/// One slot per clothing category, so a category can never hold two items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outfit {
    slots: [Option<ClothingItem>; ClothingCategory::COUNT],
}

impl Outfit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, category: ClothingCategory) -> Option<&ClothingItem> {
        self.slots[category.index()].as_ref()
    }

    /// Put `item` into its category slot, returning whatever was there
    pub fn set(&mut self, item: ClothingItem) -> Option<ClothingItem> {
        let index = item.category.index();
        self.slots[index].replace(item)
    }

    /// Filled slots in category order
    pub fn iter(&self) -> impl Iterator<Item = (ClothingCategory, &ClothingItem)> {
        ClothingCategory::ALL
            .into_iter()
            .filter_map(|category| self.get(category).map(|item| (category, item)))
    }

    pub fn items(&self) -> impl Iterator<Item = &ClothingItem> {
        self.slots.iter().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Serialized as a category -> item map with empty slots left out
impl Serialize for Outfit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (category, item) in self.iter() {
            map.serialize_entry(category.as_str(), item)?;
        }
        map.end()
    }
}

/// Recommendation for a single trip day
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyOutfit {
    pub date: NaiveDate,
    pub weather: WeatherSnapshot,
    pub activities: Vec<Activity>,
    pub outfit: Outfit,
    pub accessories: Vec<ClothingItem>,
    pub notes: Vec<String>,
}

impl DailyOutfit {
    /// Every item worn or carried that day, outfit first
    pub fn all_items(&self) -> impl Iterator<Item = &ClothingItem> {
        self.outfit.items().chain(self.accessories.iter())
    }
}
