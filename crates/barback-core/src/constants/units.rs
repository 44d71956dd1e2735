// ABOUTME: Measurement unit conversion factors used across the engine
// ABOUTME: Volume units are expressed in milliliters or fluid ounces, mass units in grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `oz` always means the US fluid ounce. Small bar measures (dash, barspoon,
//! splash) are fixed fractions of an ounce so that every screen, prep sheet and
//! cost figure agrees on them.

/// Milliliters per US fluid ounce
pub const ML_PER_OZ: f64 = 29.5735;
/// Milliliters per centiliter
pub const ML_PER_CL: f64 = 10.0;
/// Milliliters per liter
pub const ML_PER_L: f64 = 1000.0;
/// Milliliters per US gallon
pub const ML_PER_GALLON: f64 = 3785.41;

/// Ounces per dash
pub const OZ_PER_DASH: f64 = 0.03125;
/// Ounces per barspoon
pub const OZ_PER_BARSPOON: f64 = 0.125;
/// Ounces per splash
pub const OZ_PER_SPLASH: f64 = 0.25;
/// Ounces per teaspoon
pub const OZ_PER_TSP: f64 = 1.0 / 6.0;
/// Ounces per tablespoon
pub const OZ_PER_TBSP: f64 = 0.5;
/// Ounces per cup
pub const OZ_PER_CUP: f64 = 8.0;
/// Ounces per pint
pub const OZ_PER_PINT: f64 = 16.0;
/// Ounces per quart
pub const OZ_PER_QUART: f64 = 32.0;

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;
