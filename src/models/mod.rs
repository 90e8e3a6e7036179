//! Data models for the AIPackr engine
//!
//! This module contains the domain models organized by concern:
//! - Clothing: wardrobe items, categories, formality and weather tags
//! - Activity: planned activities and dress codes
//! - Weather: the daily weather snapshot
//! - Bag: bag sizes and capacity budgets
//! - Outfit: per-day outfit records
//! - Trip: the caller-supplied trip description

pub mod activity;
pub mod bag;
pub mod clothing;
pub mod outfit;
pub mod trip;
pub mod weather;

// Re-export all public types for convenient access
pub use activity::{Activity, ActivityType, DressCode};
pub use bag::{BagCapacity, BagSize};
pub use clothing::{ClothingCategory, ClothingItem, FormalityLevel, IdentityKey, WeatherType};
pub use outfit::{DailyOutfit, Outfit};
pub use trip::{Trip, TripDay};
pub use weather::{Precipitation, TemperatureRange, WeatherCondition, WeatherSnapshot};
