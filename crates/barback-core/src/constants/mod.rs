// ABOUTME: Engine constants organized by domain
// ABOUTME: Unit factors, standard batch containers and batch/service heuristics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Standard batch container sizes
pub mod containers;
/// Default batch/service classification tables and line qualifiers
pub mod service;
/// Measurement unit conversion factors
pub mod units;

/// Tolerance for cost conservation checks (`Σ line.cost == total`)
pub const COST_EPSILON: f64 = 1e-6;
