// ABOUTME: Shared test utilities and catalog fixtures for integration tests
// ABOUTME: Provides a small bar catalog with priced spirits, a sub-recipe and prep actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `barback`
//!
//! Fixed ids keep fixtures comparable across calls.

use std::sync::Once;

use barback::CatalogSnapshot;
use barback_core::models::{
    BatchRole, BatchSettings, Ingredient, PrepAction, ProductVariant, Recipe, RecipeCategory,
    RecipeLine,
};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

pub const ML_PER_OZ: f64 = 29.5735;

pub const BOURBON_ID: Uuid = Uuid::from_u128(0x0b0b_0001);
pub const GIN_ID: Uuid = Uuid::from_u128(0x0b0b_0002);
pub const CAMPARI_ID: Uuid = Uuid::from_u128(0x0b0b_0003);
pub const VERMOUTH_ID: Uuid = Uuid::from_u128(0x0b0b_0004);
pub const LIME_ID: Uuid = Uuid::from_u128(0x0b0b_0005);
pub const LIME_JUICED_ID: Uuid = Uuid::from_u128(0x0b0b_0105);
pub const SUGAR_ID: Uuid = Uuid::from_u128(0x0b0b_0006);
pub const WATER_ID: Uuid = Uuid::from_u128(0x0b0b_0007);
pub const SIMPLE_SYRUP_ID: Uuid = Uuid::from_u128(0x0b0b_0008);
pub const BITTERS_ID: Uuid = Uuid::from_u128(0x0b0b_0009);
pub const ORANGE_PEEL_ID: Uuid = Uuid::from_u128(0x0b0b_000a);
pub const RUM_ID: Uuid = Uuid::from_u128(0x0b0b_000b);
pub const AMARO_ID: Uuid = Uuid::from_u128(0x0b0b_000c);
pub const RYE_ID: Uuid = Uuid::from_u128(0x0b0b_000d);

pub const SIMPLE_SYRUP_RECIPE_ID: Uuid = Uuid::from_u128(0x5eed_0001);
pub const OLD_FASHIONED_ID: Uuid = Uuid::from_u128(0x5eed_0002);
pub const OLD_FASHIONED_BATCH_ID: Uuid = Uuid::from_u128(0x5eed_0003);
pub const NEGRONI_BATCH_ID: Uuid = Uuid::from_u128(0x5eed_0004);
pub const DAIQUIRI_ID: Uuid = Uuid::from_u128(0x5eed_0005);

/// Bar catalog used across tests
///
/// - Bourbon: $30 / 750 ml
/// - Gin: $25 / 750 ml, with a cheaper 1.75 L variant at $45
/// - Lime: $0.30 each, one lime juices to 1 oz
/// - Simple Syrup: house sub-recipe, 500 g sugar + 500 ml water → 800 ml
/// - Amaro Nonino: matched but unpriced
pub fn bar_ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient::new("Bourbon")
            .with_id(BOURBON_ID)
            .with_category("spirit")
            .with_alias("Buffalo Trace")
            .with_abv(45.0)
            .with_purchase(30.0, 750.0, "ml"),
        Ingredient::new("London Dry Gin")
            .with_id(GIN_ID)
            .with_category("spirit")
            .with_alias("Gin")
            .with_abv(47.0)
            .with_purchase(25.0, 750.0, "ml"),
        Ingredient::new("Campari")
            .with_id(CAMPARI_ID)
            .with_category("liqueur")
            .with_abv(24.0)
            .with_purchase(28.0, 1.0, "L"),
        Ingredient::new("Sweet Vermouth")
            .with_id(VERMOUTH_ID)
            .with_category("vermouth")
            .with_abv(16.0)
            .with_purchase(18.0, 1.0, "L"),
        Ingredient::new("Lime")
            .with_id(LIME_ID)
            .with_category("produce")
            .with_purchase(0.30, 1.0, "each")
            .with_prep_action({
                let mut juiced = PrepAction::new("Juiced").with_yield(1.0, "oz");
                juiced.id = LIME_JUICED_ID;
                juiced
            }),
        Ingredient::new("Sugar")
            .with_id(SUGAR_ID)
            .with_category("pantry")
            .with_purchase(2.0, 1.0, "kg"),
        Ingredient::new("Water")
            .with_id(WATER_ID)
            .with_category("pantry")
            .with_cost_per_unit(0.002, "L"),
        Ingredient::new("Simple Syrup")
            .with_id(SIMPLE_SYRUP_ID)
            .with_category("syrup")
            .with_sub_recipe(SIMPLE_SYRUP_RECIPE_ID),
        Ingredient::new("Angostura Bitters")
            .with_id(BITTERS_ID)
            .with_category("bitters")
            .with_abv(44.7)
            .with_cost_per_unit(0.05, "dash"),
        Ingredient::new("Orange Peel")
            .with_id(ORANGE_PEEL_ID)
            .with_category("garnish")
            .with_cost_per_unit(0.10, "each"),
        Ingredient::new("White Rum")
            .with_id(RUM_ID)
            .with_category("spirit")
            .with_abv(40.0)
            .with_purchase(22.0, 1.0, "L"),
        Ingredient::new("Amaro Nonino")
            .with_id(AMARO_ID)
            .with_category("liqueur")
            .with_abv(35.0),
        Ingredient::new("Rye")
            .with_id(RYE_ID)
            .with_category("spirit")
            .with_abv(50.0)
            .with_purchase(30.0, 750.0, "ml")
            .with_case(300.0, 12),
    ]
}

pub fn bar_variants() -> Vec<ProductVariant> {
    vec![
        ProductVariant::new(GIN_ID, 750.0, 25.0).with_label("750ml"),
        ProductVariant::new(GIN_ID, 1750.0, 45.0).with_label("1.75L"),
    ]
}

pub fn simple_syrup_recipe() -> Recipe {
    Recipe::new("Simple Syrup")
        .with_id(SIMPLE_SYRUP_RECIPE_ID)
        .with_category(RecipeCategory::SubRecipe)
        .with_line(RecipeLine::new("Sugar", 500.0, "g"))
        .with_line(RecipeLine::new("Water", 500.0, "ml"))
        .with_yield(800.0, "ml")
}

pub fn old_fashioned() -> Recipe {
    Recipe::new("Old Fashioned")
        .with_id(OLD_FASHIONED_ID)
        .with_line(RecipeLine::new("Bourbon", 2.0, "oz"))
        .with_line(RecipeLine::new("Simple Syrup", 0.25, "oz"))
        .with_line(RecipeLine::new("Angostura Bitters", 2.0, "dashes"))
        .with_line(RecipeLine::new("Orange Peel", 1.0, "each"))
        .sellable_at(14.0)
}

pub fn old_fashioned_batch() -> Recipe {
    Recipe::new("Old Fashioned Batch")
        .with_id(OLD_FASHIONED_BATCH_ID)
        .with_category(RecipeCategory::Batch)
        .with_line(RecipeLine::new("Bourbon", 2.0, "oz"))
        .with_line(RecipeLine::new("Orange Peel", 1.0, "each"))
        .with_batch_settings(BatchSettings::container("1L Bottle", 1))
}

/// Negroni batched into a quart with 20 % dilution kept inside the container
pub fn negroni_batch() -> Recipe {
    Recipe::new("Negroni Batch")
        .with_id(NEGRONI_BATCH_ID)
        .with_category(RecipeCategory::Batch)
        .with_line(RecipeLine::new("Gin", 1.0, "oz"))
        .with_line(RecipeLine::new("Campari", 1.0, "oz"))
        .with_line(RecipeLine::new("Sweet Vermouth", 1.0, "oz"))
        .with_line(RecipeLine::new("Orange Peel", 1.0, "each"))
        .with_batch_settings(BatchSettings::container("Quart", 1).with_dilution(20.0, true))
        .sellable_at(13.0)
}

pub fn daiquiri() -> Recipe {
    Recipe::new("Daiquiri")
        .with_id(DAIQUIRI_ID)
        .with_line(RecipeLine::new("White Rum", 2.0, "oz"))
        .with_line(RecipeLine::new("Lime - Juiced", 0.75, "oz"))
        .with_line(RecipeLine::new("Simple Syrup", 0.75, "oz"))
        .with_batch_settings(
            BatchSettings::container("750ml Bottle", 2)
                .with_override("Lime - Juiced", BatchRole::Service),
        )
        .sellable_at(12.0)
}

pub fn bar_recipes() -> Vec<Recipe> {
    vec![
        simple_syrup_recipe(),
        old_fashioned(),
        old_fashioned_batch(),
        negroni_batch(),
        daiquiri(),
    ]
}

pub fn bar_snapshot() -> CatalogSnapshot {
    CatalogSnapshot::new(bar_ingredients(), bar_variants(), bar_recipes())
}

/// Simple syrup cost per milliliter: ($1.00 sugar + $0.001 water) / 800 ml
pub const SIMPLE_SYRUP_PER_ML: f64 = 1.001 / 800.0;
