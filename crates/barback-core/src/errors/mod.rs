// ABOUTME: Hard error types for the costing engine and its application layer
// ABOUTME: Data-quality problems are per-line statuses; only contract violations become errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Types
//!
//! Missing prices, unknown ingredients, cycles and unconvertible units are
//! reported as [`CostStatus`](crate::models::CostStatus) values on individual
//! lines. The types here cover the remaining cases: malformed batch
//! configuration, invalid engine configuration and snapshot loading failures.

/// Batch configuration errors
pub mod batch;

pub use batch::BatchError;

use std::io;
use thiserror::Error;

use crate::config::ConfigError;

/// Umbrella error for engine and catalog operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// Batch configuration violated the calculator's contract
    #[error(transparent)]
    Batch(#[from] BatchError),

    /// Engine configuration is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Requested recipe is not in the catalog snapshot
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    /// Recipe has no batch settings
    #[error("Recipe '{0}' is not configured for batching")]
    NotBatchable(String),

    /// Catalog snapshot could not be parsed
    #[error("Invalid catalog snapshot: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Catalog snapshot could not be read
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
