// ABOUTME: Main library entry point for the Barback recipe costing application
// ABOUTME: Catalog snapshots, menu pour cost reports, printable sheets and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Barback
//!
//! Recipe costing and batch scaling for bar programs. The pure engine lives in
//! `barback-engine`; this crate loads catalog snapshots, applies configured
//! policies and formats results.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use barback::catalog::CatalogSnapshot;
//! use barback::report::CostSheet;
//! use barback_core::config::EngineConfig;
//! use barback_core::models::CostMode;
//!
//! fn main() -> anyhow::Result<()> {
//!     let snapshot = CatalogSnapshot::load("catalog.json")?;
//!     let recipe = snapshot.require_recipe("Old Fashioned")?;
//!     let cost = snapshot.cost_recipe(recipe, CostMode::PerServing, &EngineConfig::global().costing);
//!     println!("{}", CostSheet::new(recipe, &cost));
//!     Ok(())
//! }
//! ```

/// Catalog snapshot loading and engine wiring
pub mod catalog;

/// Structured logging configuration
pub mod logging;

/// Menu-wide pour cost report
pub mod menu;

/// Printable cost and prep sheets
pub mod report;

pub use barback_core::config::EngineConfig;
pub use barback_core::{EngineError, EngineResult};
pub use catalog::CatalogSnapshot;
pub use menu::{price_menu, MenuItem, MenuReport};
pub use report::{CostSheet, PrepSheet};
