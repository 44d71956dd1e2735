// ABOUTME: Engine configuration with defaults, environment overrides and validation
// ABOUTME: Supplies the unit policy, recursion default and batch/service heuristics to callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration
//!
//! The engine functions never read configuration on their own; the
//! application loads an [`EngineConfig`] once and passes the relevant policy
//! values into each call.
//!
//! Environment overrides:
//! - `BARBACK_UNIT_POLICY` (`strict` | `assume_priced_unit`)
//! - `BARBACK_ALLOW_SUB_RECIPES` (`true` | `false`)
//! - `BARBACK_FIT_TOLERANCE_ML`
//! - `BARBACK_SERVICE_CATEGORIES` (comma separated)
//! - `BARBACK_CITRUS_KEYWORDS` (comma separated)
//! - `BARBACK_KEEP_ALCOHOLIC_CITRUS` (`true` | `false`)

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

use crate::constants::service::{DEFAULT_CITRUS_KEYWORDS, DEFAULT_SERVICE_CATEGORIES};
use crate::models::UnitPolicy;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Recipe costing settings
    pub costing: CostingConfig,
    /// Batch scaling settings
    pub batching: BatchingConfig,
}

/// Recipe costing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostingConfig {
    /// Handling of lines whose unit cannot reach the priced unit
    pub unit_policy: UnitPolicy,
    /// Cost sub-recipe ingredients by recursing into their recipes
    pub allow_sub_recipe_recursion: bool,
}

impl Default for CostingConfig {
    fn default() -> Self {
        Self {
            unit_policy: UnitPolicy::Strict,
            allow_sub_recipe_recursion: true,
        }
    }
}

/// Batch scaling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchingConfig {
    /// Volume a batch may exceed its container by before it is reported as overflowing
    pub fit_tolerance_ml: f64,
    /// Ingredient categories prepared at service by default
    pub service_categories: Vec<String>,
    /// Name keywords sending a line to service
    pub citrus_keywords: Vec<String>,
    /// Keep citrus-named ingredients with alcohol (orange liqueurs) in the batch
    #[serde(default)]
    pub keep_alcoholic_citrus_in_batch: bool,
}

impl Default for BatchingConfig {
    fn default() -> Self {
        Self {
            fit_tolerance_ml: 0.5,
            service_categories: DEFAULT_SERVICE_CATEGORIES
                .iter()
                .map(|&s| s.to_owned())
                .collect(),
            citrus_keywords: DEFAULT_CITRUS_KEYWORDS
                .iter()
                .map(|&s| s.to_owned())
                .collect(),
            keep_alcoholic_citrus_in_batch: false,
        }
    }
}

impl EngineConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a value is out of its valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tolerance = self.batching.fit_tolerance_ml;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fit_tolerance_ml must be a non-negative number",
            ));
        }
        if tolerance > 100.0 {
            return Err(ConfigError::ValueOutOfRange(
                "fit_tolerance_ml must not exceed 100 ml",
            ));
        }
        Ok(())
    }

    /// Read an environment variable, treating "not present" as no override
    fn env_value(env_var_name: &str) -> Result<Option<String>, ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => Ok(Some(val)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Some(val) = Self::env_value(env_var_name)? {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply a comma-separated list override
    fn apply_env_list(env_var_name: &str, target: &mut Vec<String>) -> Result<(), ConfigError> {
        if let Some(val) = Self::env_value(env_var_name)? {
            *target = val
                .split(',')
                .map(|item| item.trim().to_lowercase())
                .filter(|item| !item.is_empty())
                .collect();
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("BARBACK_UNIT_POLICY", &mut self.costing.unit_policy)?;
        Self::apply_env_var(
            "BARBACK_ALLOW_SUB_RECIPES",
            &mut self.costing.allow_sub_recipe_recursion,
        )?;
        Self::apply_env_var(
            "BARBACK_FIT_TOLERANCE_ML",
            &mut self.batching.fit_tolerance_ml,
        )?;
        Self::apply_env_list(
            "BARBACK_SERVICE_CATEGORIES",
            &mut self.batching.service_categories,
        )?;
        Self::apply_env_list(
            "BARBACK_CITRUS_KEYWORDS",
            &mut self.batching.citrus_keywords,
        )?;
        Self::apply_env_var(
            "BARBACK_KEEP_ALCOHOLIC_CITRUS",
            &mut self.batching.keep_alcoholic_citrus_in_batch,
        )?;
        Ok(self)
    }
}
