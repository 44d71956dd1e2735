// ABOUTME: Recipe costing command for barback-cli
// ABOUTME: Costs one recipe from a snapshot and prints its cost sheet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use barback::{CatalogSnapshot, CostSheet, EngineConfig};
use barback_core::models::CostMode;
use tracing::info;

use crate::helpers::display::print_report;

/// Cost a recipe and print its cost sheet
pub fn run(
    snapshot_path: &Path,
    recipe_key: &str,
    per_serving: bool,
    no_recursion: bool,
    config: &EngineConfig,
    json: bool,
) -> Result<()> {
    let snapshot = CatalogSnapshot::load(snapshot_path)?;
    let recipe = snapshot.require_recipe(recipe_key)?;

    let mut costing = config.costing.clone();
    if no_recursion {
        costing.allow_sub_recipe_recursion = false;
    }
    let mode = if per_serving {
        CostMode::PerServing
    } else {
        CostMode::Total
    };

    let cost = snapshot.cost_recipe(recipe, mode, &costing);
    info!(recipe = %recipe.name, total = cost.total_cost, "recipe costed");
    print_report(&CostSheet::new(recipe, &cost), json)
}
