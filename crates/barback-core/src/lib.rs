// ABOUTME: Core types and constants for the Barback recipe costing engine
// ABOUTME: Foundation crate with the catalog data model, error handling, constants and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Barback Core
//!
//! Foundation crate providing the shared data model for the recipe costing and
//! batch-scaling engine. It changes infrequently, so the engine and the
//! application crate can compile incrementally on top of it.
//!
//! ## Modules
//!
//! - **models**: Ingredients, variants, recipes, recipe lines and batch settings
//! - **errors**: Hard errors (`EngineError`, `BatchError`) for caller contract violations
//! - **constants**: Unit factors, standard batch containers and service heuristics
//! - **config**: Engine configuration with environment overrides

/// Catalog data model (Ingredient, `ProductVariant`, Recipe, `BatchSettings`, ...)
pub mod models;

/// Hard error types for contract violations
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Engine configuration loading and validation
pub mod config;

pub use errors::{BatchError, EngineError, EngineResult};
pub use models::{
    BatchRole, BatchSettings, CostMode, CostStatus, Ingredient, LineRef, Measure, PrepAction,
    PriceSource, ProductVariant, Recipe, RecipeCategory, RecipeLine, UnitPolicy,
};
