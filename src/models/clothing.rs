//! Wardrobe model: clothing items and their classification enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PackingError;

/// Closed set of clothing categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClothingCategory {
    Tops,
    Bottoms,
    Outerwear,
    Dresses,
    Shoes,
    Undergarments,
    Accessories,
    Swimwear,
    Sleepwear,
    Athletic,
}

impl ClothingCategory {
    /// Number of categories; sizes every per-category table
    pub const COUNT: usize = 10;

    /// All categories in declaration order
    pub const ALL: [ClothingCategory; Self::COUNT] = [
        ClothingCategory::Tops,
        ClothingCategory::Bottoms,
        ClothingCategory::Outerwear,
        ClothingCategory::Dresses,
        ClothingCategory::Shoes,
        ClothingCategory::Undergarments,
        ClothingCategory::Accessories,
        ClothingCategory::Swimwear,
        ClothingCategory::Sleepwear,
        ClothingCategory::Athletic,
    ];

    /// Stable slot index used by fixed-size per-category tables
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ClothingCategory::Tops => "tops",
            ClothingCategory::Bottoms => "bottoms",
            ClothingCategory::Outerwear => "outerwear",
            ClothingCategory::Dresses => "dresses",
            ClothingCategory::Shoes => "shoes",
            ClothingCategory::Undergarments => "undergarments",
            ClothingCategory::Accessories => "accessories",
            ClothingCategory::Swimwear => "swimwear",
            ClothingCategory::Sleepwear => "sleepwear",
            ClothingCategory::Athletic => "athletic",
        }
    }
}

impl fmt::Display for ClothingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClothingCategory {
    type Err = PackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == needle)
            .ok_or_else(|| PackingError::validation(format!("unknown clothing category '{s}'")))
    }
}

/// Weather conditions an item is suited for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherType {
    Hot,
    Warm,
    Mild,
    Cool,
    Cold,
    Rainy,
    Snowy,
    Windy,
    Humid,
    Dry,
}

/// Ordinal dress formality, 1 (very casual) to 5 (formal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FormalityLevel {
    VeryCasual = 1,
    Casual = 2,
    SmartCasual = 3,
    SemiFormal = 4,
    Formal = 5,
}

impl FormalityLevel {
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Semi-formal and above call for formal attire
    #[must_use]
    pub fn is_formal(self) -> bool {
        self >= FormalityLevel::SemiFormal
    }
}

impl TryFrom<u8> for FormalityLevel {
    type Error = PackingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(FormalityLevel::VeryCasual),
            2 => Ok(FormalityLevel::Casual),
            3 => Ok(FormalityLevel::SmartCasual),
            4 => Ok(FormalityLevel::SemiFormal),
            5 => Ok(FormalityLevel::Formal),
            other => Err(PackingError::validation(format!(
                "formality level must be between 1 and 5, got {other}"
            ))),
        }
    }
}

impl From<FormalityLevel> for u8 {
    fn from(level: FormalityLevel) -> Self {
        level.level()
    }
}

/// A single wardrobe item. Dimensions are estimated, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: String,
    pub name: String,
    pub category: ClothingCategory,
    pub subcategory: String,
    pub color: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub weather_suitability: Vec<WeatherType>,
    pub formality_level: FormalityLevel,
}

/// Key under which two items count as the same piece of clothing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey<'a> {
    pub category: ClothingCategory,
    pub subcategory: &'a str,
    pub color: &'a str,
}

impl ClothingItem {
    #[must_use]
    pub fn identity_key(&self) -> IdentityKey<'_> {
        IdentityKey {
            category: self.category,
            subcategory: &self.subcategory,
            color: &self.color,
        }
    }

    /// Exact, case-insensitive tag membership
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Case-insensitive substring match over all tags
    #[must_use]
    pub fn has_tag_containing(&self, fragment: &str) -> bool {
        let fragment = fragment.to_lowercase();
        self.tags
            .iter()
            .any(|t| t.to_lowercase().contains(&fragment))
    }

    #[must_use]
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name.to_lowercase().contains(&fragment.to_lowercase())
    }

    #[must_use]
    pub fn suits_any(&self, weather: &[WeatherType]) -> bool {
        self.weather_suitability.iter().any(|w| weather.contains(w))
    }

    /// Tags plus weather tags; a rough measure of how widely the item applies
    #[must_use]
    pub fn versatility(&self) -> usize {
        self.tags.len() + self.weather_suitability.len()
    }
}
