// ABOUTME: In-memory catalog snapshot of ingredients, product variants and recipes
// ABOUTME: Loads snapshots from JSON and wires engine calls with configured policies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalog snapshots
//!
//! The engine works on plain slices. A [`CatalogSnapshot`] owns those slices,
//! keeps the variant index in step with them and resolves recipes by id or
//! name for the CLI and the menu report.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use barback_core::config::{CostingConfig, EngineConfig};
use barback_core::models::{CostMode, Ingredient, ProductVariant, Recipe};
use barback_core::{EngineError, EngineResult};
use barback_engine::batch::{calculate_batch_metrics_with, BatchConfig, BatchMetrics};
use barback_engine::cost::{calculate_recipe_cost, index_variants, RecipeCost, VariantIndex};
use barback_engine::policy::service_policy_from_config;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Serialized form of a snapshot
#[derive(Debug, Default, Serialize, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    ingredients: Vec<Ingredient>,
    #[serde(default)]
    variants: Vec<ProductVariant>,
    #[serde(default)]
    recipes: Vec<Recipe>,
}

/// Immutable catalog handed to the engine
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    ingredients: Vec<Ingredient>,
    variants: Vec<ProductVariant>,
    recipes: Vec<Recipe>,
    variant_index: VariantIndex,
}

impl CatalogSnapshot {
    /// Build a snapshot and index its variants
    #[must_use]
    pub fn new(
        ingredients: Vec<Ingredient>,
        variants: Vec<ProductVariant>,
        recipes: Vec<Recipe>,
    ) -> Self {
        let variant_index = index_variants(&variants);
        Self {
            ingredients,
            variants,
            recipes,
            variant_index,
        }
    }

    /// Parse a snapshot from a JSON reader
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Catalog`] when the JSON does not match the catalog schema
    pub fn from_reader(reader: impl Read) -> EngineResult<Self> {
        let file: SnapshotFile = serde_json::from_reader(reader)?;
        Ok(Self::new(file.ingredients, file.variants, file.recipes))
    }

    /// Parse a snapshot from a JSON string
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Catalog`] when the JSON does not match the catalog schema
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        Self::from_reader(json.as_bytes())
    }

    /// Load a snapshot from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Io`] if the file cannot be opened, or
    /// [`EngineError::Catalog`] if its content is not a valid snapshot
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let snapshot = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!(
            path = %path.display(),
            ingredients = snapshot.ingredients.len(),
            variants = snapshot.variants.len(),
            recipes = snapshot.recipes.len(),
            "catalog snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Serialize the snapshot back to pretty JSON
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Catalog`] if serialization fails
    pub fn to_json_pretty(&self) -> EngineResult<String> {
        let file = SnapshotFile {
            ingredients: self.ingredients.clone(),
            variants: self.variants.clone(),
            recipes: self.recipes.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Catalog ingredients
    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Product variants
    #[must_use]
    pub fn variants(&self) -> &[ProductVariant] {
        &self.variants
    }

    /// Recipes
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Variants grouped by ingredient
    #[must_use]
    pub const fn variant_index(&self) -> &VariantIndex {
        &self.variant_index
    }

    /// Find a recipe by id or by case-insensitive name
    #[must_use]
    pub fn recipe(&self, key: &str) -> Option<&Recipe> {
        let key = key.trim();
        if let Ok(id) = Uuid::parse_str(key) {
            if let Some(recipe) = self.recipes.iter().find(|r| r.id == id) {
                return Some(recipe);
            }
        }
        self.recipes
            .iter()
            .find(|r| r.name.trim().eq_ignore_ascii_case(key))
    }

    /// Find a recipe by id or name, failing when it does not exist
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RecipeNotFound`] when nothing matches
    pub fn require_recipe(&self, key: &str) -> EngineResult<&Recipe> {
        self.recipe(key)
            .ok_or_else(|| EngineError::RecipeNotFound(key.to_owned()))
    }

    /// Recipes served to guests, in catalog order
    pub fn sellable_recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter().filter(|r| r.is_sellable_item)
    }

    /// Cost a recipe against this snapshot
    #[must_use]
    pub fn cost_recipe(&self, recipe: &Recipe, mode: CostMode, config: &CostingConfig) -> RecipeCost {
        calculate_recipe_cost(
            recipe,
            &self.ingredients,
            mode,
            config.allow_sub_recipe_recursion,
            &self.variant_index,
            config.unit_policy,
            &self.recipes,
        )
    }

    /// Fit a batchable recipe into the containers named by its batch settings
    ///
    /// Per-serving volumes come from a whole-recipe cost run, so sub-recipe
    /// lines and prep yields are measured the same way they are priced.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotBatchable`] if the recipe has no batch
    /// settings, or [`EngineError::Batch`] if the settings are invalid
    pub fn batch_recipe(&self, recipe: &Recipe, config: &EngineConfig) -> EngineResult<BatchMetrics> {
        let settings = recipe
            .batch_settings
            .as_ref()
            .ok_or_else(|| EngineError::NotBatchable(recipe.name.clone()))?;

        let cost = self.cost_recipe(recipe, CostMode::Total, &config.costing);
        let batch_config = BatchConfig::from_settings(
            recipe,
            &self.ingredients,
            settings,
            cost.volumes_ml_per_serving(),
        )
        .with_fit_tolerance(config.batching.fit_tolerance_ml);

        let policy = service_policy_from_config(&config.batching);
        let metrics = calculate_batch_metrics_with(&batch_config, &*policy)?;
        debug!(
            recipe = %recipe.name,
            scale_factor = metrics.scale_factor,
            total_ml = metrics.total_volume_ml,
            "batch computed"
        );
        Ok(metrics)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_lookup_by_name_and_id() {
        let negroni = Recipe::new("Negroni");
        let id = negroni.id;
        let snapshot = CatalogSnapshot::new(Vec::new(), Vec::new(), vec![negroni]);

        assert_eq!(snapshot.recipe("  negroni ").map(|r| r.id), Some(id));
        assert_eq!(snapshot.recipe(&id.to_string()).map(|r| r.id), Some(id));
        assert!(matches!(
            snapshot.require_recipe("Boulevardier"),
            Err(EngineError::RecipeNotFound(_))
        ));
    }

    #[test]
    fn test_empty_json_is_an_empty_catalog() {
        let snapshot = CatalogSnapshot::from_json_str("{}").unwrap();
        assert!(snapshot.ingredients().is_empty());
        assert!(snapshot.variant_index().is_empty());
    }

    #[test]
    fn test_malformed_json_is_a_catalog_error() {
        let result = CatalogSnapshot::from_json_str("{\"ingredients\": 42}");
        assert!(matches!(result, Err(EngineError::Catalog(_))));
    }
}
