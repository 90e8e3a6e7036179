//! Planning module
//!
//! This module provides the decision engine behind trip packing:
//! - Bag capacity and item dimension tables
//! - Weather and formality suitability checks
//! - Per-day outfit assembly
//! - Greedy packing selection over volume and weight budgets
//! - Space utilization analytics and bag-size suggestion
//! - Trip-level recommendation types

pub mod capacity;
pub mod dimensions;
pub mod outfit;
pub mod packing;
pub mod space;
pub mod suitability;
pub mod trip;

// Re-export commonly used types from submodules
pub use capacity::CapacityModel;
pub use dimensions::{ItemDimensionEstimator, ItemDimensions};
pub use outfit::{OutfitAssembler, OutfitConstraints};
pub use packing::{
    CapacityOverflow, EssentialRule, PackingPlan, PackingScore, PackingSelection,
    PackingSelector, ACTIVITY_MATCH_PLACEHOLDER, WEATHER_MATCH_PLACEHOLDER,
};
pub use space::{SpaceAnalyzer, SpaceUtilization};
pub use suitability::{is_activity_suitable, is_weather_suitable, TemperatureBand};
pub use trip::{PackingRecommendation, WeatherWarning};
