// ABOUTME: Menu-wide pour cost report computed in parallel over a catalog snapshot
// ABOUTME: Each sellable recipe is costed independently with rayon; output keeps catalog order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use barback_core::config::CostingConfig;
use barback_core::models::{CostMode, Recipe};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::catalog::CatalogSnapshot;

/// Pour cost summary of one menu item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    /// Recipe id
    pub recipe_id: Uuid,
    /// Recipe name
    pub name: String,
    /// Menu price of one serving
    pub menu_price: Option<f64>,
    /// Ingredient cost of one serving
    pub cost_per_serving: f64,
    /// Cost as a percentage of the menu price
    pub pour_cost_percentage: Option<f64>,
    /// Lines needing attention
    pub flagged_lines: usize,
}

/// Pour cost report over all sellable recipes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuReport {
    /// Items in catalog order
    pub items: Vec<MenuItem>,
    /// Mean pour cost of the items with a menu price
    pub average_pour_cost_percentage: Option<f64>,
}

fn price_item(snapshot: &CatalogSnapshot, recipe: &Recipe, config: &CostingConfig) -> MenuItem {
    let cost = snapshot.cost_recipe(recipe, CostMode::PerServing, config);
    MenuItem {
        recipe_id: recipe.id,
        name: recipe.name.clone(),
        menu_price: recipe.menu_price,
        cost_per_serving: cost.cost_per_serving(),
        pour_cost_percentage: recipe
            .menu_price
            .and_then(|price| cost.pour_cost_percentage(price)),
        flagged_lines: cost.flagged_lines().count(),
    }
}

/// Cost every sellable recipe in the snapshot
///
/// Recipes are independent, so they are costed on the rayon pool; the
/// snapshot is only read.
#[must_use]
pub fn price_menu(snapshot: &CatalogSnapshot, config: &CostingConfig) -> MenuReport {
    let sellable: Vec<&Recipe> = snapshot.sellable_recipes().collect();
    let items: Vec<MenuItem> = sellable
        .par_iter()
        .map(|recipe| price_item(snapshot, recipe, config))
        .collect();

    let priced: Vec<f64> = items
        .iter()
        .filter_map(|item| item.pour_cost_percentage)
        .collect();
    let average_pour_cost_percentage =
        (!priced.is_empty()).then(|| priced.iter().sum::<f64>() / priced.len() as f64);

    info!(items = items.len(), "menu priced");
    MenuReport {
        items,
        average_pour_cost_percentage,
    }
}
