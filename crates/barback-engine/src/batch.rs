// ABOUTME: Batch scaling calculator fitting a recipe into standard or custom containers
// ABOUTME: Splits lines into batch/service, derives the scale factor and dilution water volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Batch Scaling
//!
//! Dilution is a percentage `d` applied in one of two ways:
//!
//! - constrained: the batched liquid is shrunk to `target × (1 − d/100)` and
//!   the water fills the rest, so the batch lands exactly on the target
//! - unconstrained or manual scale: `d/100` of the scaled liquid is added on
//!   top as water, which can overflow the containers

use std::collections::{BTreeMap, BTreeSet};

use barback_core::constants::containers::{StandardContainer, STANDARD_CONTAINERS};
use barback_core::models::{BatchRole, BatchSettings, Ingredient, Recipe, RecipeLine};
use barback_core::BatchError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cost::servings_per_recipe;
use crate::policy::{DefaultServicePolicy, LineClassifier};
use crate::resolver::resolve_line;
use crate::units::to_milliliters;

/// Default volume a batch may exceed its container by before overflow is reported
pub const DEFAULT_FIT_TOLERANCE_ML: f64 = 0.5;

/// Everything the batch calculator needs for one recipe
#[derive(Debug, Clone)]
pub struct BatchConfig<'a> {
    /// Recipe being batched
    pub recipe: &'a Recipe,
    /// Catalog used to resolve lines
    pub all_ingredients: &'a [Ingredient],
    /// Explicit batch/service roles keyed by line name
    pub ingredient_overrides: BTreeMap<String, BatchRole>,
    /// Standard container label or key
    pub container_type: String,
    /// Containers to fill (missing or negative means zero)
    pub container_count: Option<i32>,
    /// Use `custom_volume_ml` instead of a standard container
    pub is_container_custom: bool,
    /// Volume of one custom container
    pub custom_volume_ml: Option<f64>,
    /// Manual scale factor
    pub scale_factor: Option<f64>,
    /// Add dilution water
    pub include_dilution: bool,
    /// Dilution percentage, 0 to 100 (missing or negative means zero)
    pub dilution_percentage: Option<f64>,
    /// Shrink the liquid so dilution fits in the container
    pub constrain_to_total_volume: bool,
    /// Milliliters of each line in one serving, keyed by line name
    pub original_batch_amounts_ml_per_serving: BTreeMap<String, f64>,
    /// Allowed overflow before `exceeds_container` is set
    pub fit_tolerance_ml: f64,
}

impl<'a> BatchConfig<'a> {
    /// Build a configuration from the recipe's persisted batch settings
    #[must_use]
    pub fn from_settings(
        recipe: &'a Recipe,
        all_ingredients: &'a [Ingredient],
        settings: &BatchSettings,
        volumes_ml_per_serving: BTreeMap<String, f64>,
    ) -> Self {
        Self {
            recipe,
            all_ingredients,
            ingredient_overrides: settings.ingredient_overrides.clone(),
            container_type: settings.container_type.clone(),
            container_count: settings.container_count,
            is_container_custom: settings.is_container_custom,
            custom_volume_ml: settings.custom_volume_ml,
            scale_factor: settings.scale_factor,
            include_dilution: settings.include_dilution,
            dilution_percentage: settings.dilution_percentage,
            constrain_to_total_volume: settings.constrain_to_total_volume,
            original_batch_amounts_ml_per_serving: volumes_ml_per_serving,
            fit_tolerance_ml: DEFAULT_FIT_TOLERANCE_ML,
        }
    }

    /// Set the overflow tolerance
    #[must_use]
    pub const fn with_fit_tolerance(mut self, tolerance_ml: f64) -> Self {
        self.fit_tolerance_ml = tolerance_ml;
        self
    }

    fn role_override(&self, line_name: &str) -> Option<BatchRole> {
        self.ingredient_overrides.get(line_name).copied().or_else(|| {
            self.ingredient_overrides
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(line_name))
                .map(|(_, role)| *role)
        })
    }

    fn check_finite(&self) -> Result<(), BatchError> {
        let fields = [
            ("custom_volume_ml", self.custom_volume_ml),
            ("scale_factor", self.scale_factor),
            ("dilution_percentage", self.dilution_percentage),
        ];
        for (field, value) in fields {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(BatchError::NonFinite { field });
            }
        }
        if self
            .original_batch_amounts_ml_per_serving
            .values()
            .any(|v| !v.is_finite())
        {
            return Err(BatchError::NonFinite {
                field: "original_batch_amounts_ml_per_serving",
            });
        }
        Ok(())
    }

    fn container_count(&self) -> f64 {
        f64::from(self.container_count.unwrap_or(0).max(0))
    }

    fn dilution_percentage(&self) -> Result<f64, BatchError> {
        if !self.include_dilution {
            return Ok(0.0);
        }
        let pct = self.dilution_percentage.unwrap_or(0.0).max(0.0);
        if pct > 100.0 {
            return Err(BatchError::DilutionOutOfRange(pct));
        }
        Ok(pct)
    }

    fn target_volume_ml(&self) -> Result<f64, BatchError> {
        let per_container = if self.is_container_custom {
            self.custom_volume_ml
                .filter(|v| *v > 0.0)
                .ok_or(BatchError::MissingCustomVolume)?
        } else {
            find_container(&self.container_type)
                .map(|c| c.volume_ml)
                .ok_or_else(|| BatchError::UnknownContainer(self.container_type.clone()))?
        };
        Ok(per_container * self.container_count())
    }
}

/// Result of fitting a recipe into its batch containers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchMetrics {
    /// Multiplier applied to one serving
    pub scale_factor: f64,
    /// Batched liquid plus dilution water
    pub total_volume_ml: f64,
    /// Water to add
    pub dilution_water_ml: f64,
    /// Scaled volume of every batched line, keyed by line name
    pub per_ingredient_scaled_ml: BTreeMap<String, f64>,
    /// Capacity of the selected containers
    pub target_volume_ml: f64,
    /// Milliliters of batched lines in one serving
    pub base_batch_volume_ml: f64,
    /// Lines left out of the batch for fresh preparation
    pub service_lines: Vec<String>,
    /// Batch lines with no known volume
    pub unmeasured_lines: Vec<String>,
    /// No batch line has any volume
    pub nothing_to_batch: bool,
    /// Total exceeds the containers by more than the tolerance
    pub exceeds_container: bool,
    /// Milliliters over the target (0 when it fits)
    pub overflow_ml: f64,
    /// Alcohol by volume of the finished batch, in percent
    pub batch_abv: Option<f64>,
}

impl BatchMetrics {
    /// Servings one batch replaces
    #[must_use]
    pub const fn servings_per_batch(&self) -> f64 {
        self.scale_factor
    }
}

fn container_key(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Look up a standard container by key or label, ignoring case and punctuation
#[must_use]
pub fn find_container(container_type: &str) -> Option<&'static StandardContainer> {
    let wanted = container_key(container_type);
    if wanted.is_empty() {
        return None;
    }
    STANDARD_CONTAINERS
        .iter()
        .find(|c| container_key(c.key) == wanted || container_key(c.label) == wanted)
}

/// One batched line with its per-serving volume
struct BatchLine<'a> {
    name: &'a str,
    ml_per_serving: f64,
    abv: Option<f64>,
}

/// Volume of a line in one serving: the caller's figure, else the line's own amount
///
/// The caller's figures are keyed by line name and already cover every line
/// sharing that name, so each one is handed out once; repeats get zero.
fn ml_per_serving<'a>(
    config: &'a BatchConfig<'_>,
    line: &'a RecipeLine,
    ingredient: Option<&Ingredient>,
    servings: f64,
    taken: &mut BTreeSet<&'a str>,
) -> Option<f64> {
    if let Some(ml) = config
        .original_batch_amounts_ml_per_serving
        .get(&line.ingredient_name)
    {
        let first = taken.insert(line.ingredient_name.as_str());
        return Some(if first { ml.max(0.0) } else { 0.0 });
    }
    to_milliliters(line.effective_amount(), &line.unit, ingredient).map(|ml| ml / servings)
}

/// Fit a recipe into its containers using the default service policy
///
/// # Errors
///
/// Returns a [`BatchError`] for an unknown container type, a custom container
/// without a positive volume, non-finite input, a negative manual scale factor
/// or a dilution percentage above 100.
pub fn calculate_batch_metrics(config: &BatchConfig<'_>) -> Result<BatchMetrics, BatchError> {
    calculate_batch_metrics_with(config, &DefaultServicePolicy::default())
}

/// Fit a recipe into its containers with a custom line classifier
///
/// # Errors
///
/// See [`calculate_batch_metrics`].
pub fn calculate_batch_metrics_with(
    config: &BatchConfig<'_>,
    classifier: &dyn LineClassifier,
) -> Result<BatchMetrics, BatchError> {
    config.check_finite()?;
    if let Some(scale) = config.scale_factor.filter(|s| *s < 0.0) {
        return Err(BatchError::NegativeScaleFactor(scale));
    }
    let dilution_pct = config.dilution_percentage()?;
    let target_volume_ml = config.target_volume_ml()?;
    let servings = servings_per_recipe(config.recipe);

    let mut metrics = BatchMetrics {
        target_volume_ml,
        ..BatchMetrics::default()
    };
    let mut batch_lines = Vec::new();
    let mut taken = BTreeSet::new();
    for line in &config.recipe.ingredients {
        let ingredient = resolve_line(line, config.all_ingredients).ingredient;
        let role = config
            .role_override(&line.ingredient_name)
            .unwrap_or_else(|| classifier.classify(line, ingredient));
        if role == BatchRole::Service {
            metrics.service_lines.push(line.ingredient_name.clone());
            continue;
        }
        match ml_per_serving(config, line, ingredient, servings, &mut taken) {
            Some(ml) => batch_lines.push(BatchLine {
                name: &line.ingredient_name,
                ml_per_serving: ml,
                abv: ingredient.map(|i| i.abv),
            }),
            None => {
                debug!(line = %line.ingredient_name, unit = %line.unit, "batch line has no volume");
                metrics.unmeasured_lines.push(line.ingredient_name.clone());
            }
        }
    }

    metrics.base_batch_volume_ml = batch_lines.iter().map(|l| l.ml_per_serving).sum();
    if metrics.base_batch_volume_ml <= 0.0 {
        debug!(recipe = %config.recipe.name, "nothing to batch");
        metrics.nothing_to_batch = true;
        return Ok(metrics);
    }
    let base = metrics.base_batch_volume_ml;

    let constrained =
        config.include_dilution && config.constrain_to_total_volume && config.scale_factor.is_none();
    metrics.scale_factor = match config.scale_factor {
        Some(manual) => manual,
        None if constrained => target_volume_ml * (1.0 - dilution_pct / 100.0) / base,
        None => target_volume_ml / base,
    };

    let mut scaled_total = 0.0;
    let mut alcohol_ml = 0.0;
    let mut abv_known = true;
    for line in &batch_lines {
        let scaled = line.ml_per_serving * metrics.scale_factor;
        scaled_total += scaled;
        match line.abv {
            Some(abv) => alcohol_ml += scaled * abv / 100.0,
            None => abv_known = false,
        }
        *metrics
            .per_ingredient_scaled_ml
            .entry(line.name.to_owned())
            .or_insert(0.0) += scaled;
    }

    metrics.dilution_water_ml = if constrained {
        target_volume_ml * dilution_pct / 100.0
    } else {
        scaled_total * dilution_pct / 100.0
    };
    metrics.total_volume_ml = scaled_total + metrics.dilution_water_ml;

    let overflow = metrics.total_volume_ml - target_volume_ml;
    if overflow > config.fit_tolerance_ml {
        warn!(
            recipe = %config.recipe.name,
            overflow_ml = overflow,
            "batch exceeds container volume"
        );
        metrics.exceeds_container = true;
        metrics.overflow_ml = overflow;
    }

    metrics.batch_abv = (abv_known && metrics.total_volume_ml > 0.0)
        .then(|| alcohol_ml / metrics.total_volume_ml * 100.0);
    Ok(metrics)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_find_container_by_label_or_key() {
        assert_eq!(find_container("1L Bottle").map(|c| c.key), Some("1l_bottle"));
        assert_eq!(find_container("1l_bottle").map(|c| c.key), Some("1l_bottle"));
        assert_eq!(find_container("4QT CAMBRO").map(|c| c.key), Some("4qt_cambro"));
        assert_eq!(find_container("1.75L Bottle").map(|c| c.key), Some("1_75l_bottle"));
        assert!(find_container("bathtub").is_none());
        assert!(find_container("").is_none());
    }

    #[test]
    fn test_override_lookup_ignores_case() {
        let recipe = Recipe::new("Daiquiri");
        let settings = BatchSettings::default().with_override("Lime Juice", BatchRole::Batch);
        let config = BatchConfig::from_settings(&recipe, &[], &settings, BTreeMap::new());
        assert_eq!(config.role_override("lime juice"), Some(BatchRole::Batch));
        assert_eq!(config.role_override("Rum"), None);
    }

    #[test]
    fn test_missing_count_means_zero_containers() {
        let recipe = Recipe::new("Negroni");
        let mut settings = BatchSettings::container("Quart", 2);
        settings.container_count = Some(-3);
        let config = BatchConfig::from_settings(&recipe, &[], &settings, BTreeMap::new());
        assert!(config.target_volume_ml().unwrap().abs() < f64::EPSILON);
    }
}
