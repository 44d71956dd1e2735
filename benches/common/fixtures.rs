// ABOUTME: Benchmark fixtures generating synthetic bar catalogs
// ABOUTME: Deterministic ingredients, house syrups and cocktail specs for reproducible measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic bar catalog generation for benchmarks.

use barback::CatalogSnapshot;
use barback_core::models::{
    BatchSettings, Ingredient, PrepAction, ProductVariant, Recipe, RecipeCategory, RecipeLine,
};

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// Small back bar (40 ingredients, 20 cocktails)
    Small,
    /// Large program (400 ingredients, 200 cocktails)
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn ingredient_count(self) -> usize {
        match self {
            Self::Small => 40,
            Self::Large => 400,
        }
    }

    #[must_use]
    pub const fn recipe_count(self) -> usize {
        match self {
            Self::Small => 20,
            Self::Large => 200,
        }
    }
}

const UNITS: [&str; 4] = ["oz", "ml", "barspoon", "dash"];

#[allow(clippy::cast_precision_loss)]
fn generate_ingredient(index: usize) -> Ingredient {
    let name = format!("Spirit {index}");
    match index % 5 {
        0 => Ingredient::new(name)
            .with_category("citrus")
            .with_cost_per_unit(0.25, "each")
            .with_prep_action(PrepAction::new("Juiced").with_yield(1.0, "oz")),
        1 => Ingredient::new(name)
            .with_category("liqueur")
            .with_abv(20.0 + (index % 15) as f64)
            .with_purchase(18.0 + (index % 20) as f64, 700.0, "ml")
            .with_container(6.0, "bottle"),
        _ => Ingredient::new(name)
            .with_category("spirit")
            .with_abv(40.0 + (index % 10) as f64)
            .with_alias(format!("House Spirit {index}"))
            .with_purchase(25.0 + (index % 30) as f64, 750.0, "ml"),
    }
}

/// Generate a catalog of `size` with house syrups and sellable cocktails
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_catalog(size: CatalogSize) -> CatalogSnapshot {
    let mut ingredients: Vec<Ingredient> =
        (0..size.ingredient_count()).map(generate_ingredient).collect();
    ingredients.push(
        Ingredient::new("Sugar")
            .with_category("pantry")
            .with_purchase(2.0, 1.0, "kg"),
    );
    ingredients.push(Ingredient::new("Water").with_cost_per_unit(0.002, "L"));

    let mut recipes = Vec::with_capacity(size.recipe_count() + 1);
    let syrup = Recipe::new("Rich Syrup")
        .with_category(RecipeCategory::SubRecipe)
        .with_line(RecipeLine::new("Sugar", 1000.0, "g"))
        .with_line(RecipeLine::new("Water", 500.0, "ml"))
        .with_yield(1100.0, "ml");
    ingredients.push(
        Ingredient::new("Rich Syrup")
            .with_category("syrup")
            .with_sub_recipe(syrup.id),
    );
    recipes.push(syrup);

    let variants: Vec<ProductVariant> = ingredients
        .iter()
        .step_by(7)
        .map(|ingredient| ProductVariant::new(ingredient.id, 1750.0, 45.0))
        .collect();

    let pool = size.ingredient_count();
    for index in 0..size.recipe_count() {
        let mut recipe = Recipe::new(format!("Cocktail {index}"))
            .with_line(RecipeLine::new(format!("Spirit {}", (index * 3 + 2) % pool), 2.0, "oz"))
            .with_line(RecipeLine::new(
                format!("House Spirit {}", (index * 7 + 3) % pool),
                0.75,
                UNITS[index % UNITS.len()],
            ))
            .with_line(RecipeLine::new(
                format!("Spirit {} - Juiced", (index * 5) % pool),
                0.75,
                "oz",
            ))
            .with_line(RecipeLine::new("Rich Syrup", 0.5, "oz"))
            .sellable_at(12.0 + (index % 6) as f64);
        if index % 4 == 0 {
            recipe = recipe.with_batch_settings(
                BatchSettings::container("1L Bottle", 2).with_dilution(20.0, true),
            );
        }
        recipes.push(recipe);
    }

    CatalogSnapshot::new(ingredients, variants, recipes)
}
