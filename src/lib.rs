//! `AIPackr` - Outfit planning and packing optimization for multi-day trips
//!
//! This library provides the decision engine that turns a wardrobe, daily
//! weather and planned activities into per-day outfits, a packing list that
//! fits the chosen bag, and space utilization advice.

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod planning;

// Re-export core types for public API
pub use config::AipackrConfig;
pub use engine::PackingEngine;
pub use error::PackingError;
pub use models::{
    Activity, BagSize, ClothingCategory, ClothingItem, DailyOutfit, FormalityLevel, Trip,
    WeatherSnapshot,
};
pub use planning::{
    CapacityOverflow, PackingPlan, PackingRecommendation, PackingScore, SpaceUtilization,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PackingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
