// ABOUTME: Catalog data model shared by the costing engine and the application layer
// ABOUTME: Re-exports ingredient, recipe, batch settings and costing vocabulary types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Models
//!
//! The engine only ever reads these types. They are created and edited by the
//! surrounding CRUD layer and handed to the engine as in-memory snapshots.

/// Batch preparation settings embedded in recipes
pub mod batch;
/// Costing vocabulary (modes, statuses, price sources, unit policy)
pub mod costing;
/// Catalog ingredients, product variants and prep actions
pub mod ingredient;
/// Recipes and their ingredient lines
pub mod recipe;

pub use batch::{BatchRole, BatchSettings};
pub use costing::{CostMode, CostStatus, PriceSource, UnitPolicy};
pub use ingredient::{Ingredient, Measure, PrepAction, ProductVariant};
pub use recipe::{LineRef, Recipe, RecipeCategory, RecipeLine};
