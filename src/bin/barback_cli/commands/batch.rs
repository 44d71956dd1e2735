// ABOUTME: Batch planning command for barback-cli
// ABOUTME: Fits a batchable recipe into its containers and prints the prep sheet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use barback::{CatalogSnapshot, EngineConfig, PrepSheet};
use barback_core::models::CostMode;
use tracing::warn;

use crate::helpers::display::print_report;

/// Compute a batch and print its prep sheet
pub fn run(snapshot_path: &Path, recipe_key: &str, config: &EngineConfig, json: bool) -> Result<()> {
    let snapshot = CatalogSnapshot::load(snapshot_path)?;
    let recipe = snapshot.require_recipe(recipe_key)?;

    let metrics = snapshot.batch_recipe(recipe, config)?;
    if metrics.nothing_to_batch {
        warn!(recipe = %recipe.name, "no batchable volume in recipe");
    }
    let cost = snapshot.cost_recipe(recipe, CostMode::Total, &config.costing);
    print_report(&PrepSheet::new(recipe, &metrics, &cost), json)
}
