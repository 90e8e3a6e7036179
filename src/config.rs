//! Configuration management for the `AIPackr` engine
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings. The capacity
//! and dimension tables live here so they can be tuned without touching
//! the planning code.

use crate::PackingError;
use crate::models::{BagCapacity, BagSize, ClothingCategory};
use crate::planning::capacity::{CapacityModel, default_capacities};
use crate::planning::dimensions::{ItemDimensionEstimator, ItemDimensions, default_dimensions};
use crate::planning::space::DEFAULT_SAFETY_MARGIN;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Root configuration structure for the `AIPackr` engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AipackrConfig {
    /// Volume/weight budget per bag size
    #[serde(default = "default_capacity_table")]
    pub capacities: HashMap<BagSize, BagCapacity>,
    /// Base footprint per clothing category
    #[serde(default = "default_dimension_table")]
    pub dimensions: HashMap<ClothingCategory, ItemDimensions>,
    /// Packing defaults
    #[serde(default)]
    pub packing: PackingConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Packing defaults applied when a request leaves them out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingConfig {
    /// Bag used when none is given
    #[serde(default = "default_bag_size")]
    pub default_bag_size: BagSize,
    /// Essential keywords used when a trip names none
    #[serde(default = "default_essential_keywords")]
    pub essential_keywords: Vec<String>,
    /// Fraction of a bag's capacity a suggested bag may be filled to
    #[serde(default = "default_safety_margin")]
    pub safety_margin: f64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_capacity_table() -> HashMap<BagSize, BagCapacity> {
    default_capacities().into_iter().collect()
}

fn default_dimension_table() -> HashMap<ClothingCategory, ItemDimensions> {
    default_dimensions().into_iter().collect()
}

fn default_bag_size() -> BagSize {
    BagSize::CarryOn
}

fn default_essential_keywords() -> Vec<String> {
    vec!["undergarments".to_string(), "sleepwear".to_string()]
}

fn default_safety_margin() -> f64 {
    DEFAULT_SAFETY_MARGIN
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            default_bag_size: default_bag_size(),
            essential_keywords: default_essential_keywords(),
            safety_margin: default_safety_margin(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for AipackrConfig {
    fn default() -> Self {
        Self {
            capacities: default_capacity_table(),
            dimensions: default_dimension_table(),
            packing: PackingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AipackrConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with AIPACKR_ prefix
        builder = builder.add_source(Self::environment());

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AipackrConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// `AIPACKR_SECTION__KEY` overrides; list values are comma separated
    fn environment() -> Environment {
        Environment::with_prefix("AIPACKR")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("packing.essential_keywords")
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("aipackr").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        for (bag, capacity) in default_capacities() {
            self.capacities.entry(bag).or_insert(capacity);
        }
        for (category, dimensions) in default_dimensions() {
            self.dimensions.entry(category).or_insert(dimensions);
        }
        if self.packing.safety_margin == 0.0 {
            self.packing.safety_margin = default_safety_margin();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_tables()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the capacity and dimension tables
    pub fn validate_tables(&self) -> Result<()> {
        self.capacity_model()
            .with_context(|| "Invalid bag capacity table")?;
        self.dimension_estimator()
            .with_context(|| "Invalid item dimension table")?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        let margin = self.packing.safety_margin;
        if !(margin > 0.0 && margin <= 1.0) {
            return Err(PackingError::config(format!(
                "Safety margin must be in (0, 1], got {margin}"
            ))
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(PackingError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(PackingError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }

    /// Capacity table as the engine consumes it
    pub fn capacity_model(&self) -> crate::Result<CapacityModel> {
        CapacityModel::from_table(&self.capacities)
    }

    /// Dimension table as the engine consumes it
    pub fn dimension_estimator(&self) -> crate::Result<ItemDimensionEstimator> {
        ItemDimensionEstimator::from_table(&self.dimensions)
    }
}
