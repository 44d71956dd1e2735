// ABOUTME: Recipe costing and batch-scaling engine for bar programs
// ABOUTME: Pure synchronous functions over an in-memory catalog snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Barback Engine
//!
//! Turns recipe lines written by bartenders into money and milliliters:
//!
//! - **resolver**: Match free-text lines ("Lime - Juiced") to catalog ingredients and prep actions
//! - **units**: Convert between volume, mass, count and container units
//! - **cost**: Price each line and recurse through house-made sub-recipes
//! - **policy**: Decide which lines belong in a pre-mixed batch
//! - **batch**: Fit a recipe into containers with optional dilution
//!
//! Nothing here reads configuration, touches I/O or keeps state between calls.

/// Batch scaling calculator
pub mod batch;
/// Recursive recipe cost resolver
pub mod cost;
/// Batch/service line classification
pub mod policy;
/// Free-text ingredient line resolution
pub mod resolver;
/// Unit conversion table
pub mod units;

pub use batch::{
    calculate_batch_metrics, calculate_batch_metrics_with, find_container, BatchConfig,
    BatchMetrics,
};
pub use cost::{
    calculate_recipe_cost, index_variants, servings_per_recipe, LineCost, RecipeCost,
    VariantIndex,
};
pub use policy::{
    service_policy_from_config, AlcoholAwareServicePolicy, DefaultServicePolicy, LineClassifier,
};
pub use resolver::{resolve_ingredient_line, resolve_line, Resolution};
pub use units::{convert_amount, convert_with_ingredient, to_milliliters, Unit};
