// ABOUTME: Integration tests for the unit conversion table
// ABOUTME: Round trips between bar measures and catalog-aware container conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use barback_engine::units::{convert_amount, Unit};
use common::{assert_close, bar_ingredients, ML_PER_OZ};

const VOLUME_UNITS: [&str; 13] = [
    "ml", "cl", "L", "oz", "dash", "barspoon", "splash", "tsp", "tbsp", "cup", "pint", "quart",
    "gallon",
];

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_oz_ml_round_trip_for_all_volume_units() {
    for unit in VOLUME_UNITS {
        for amount in [0.25, 1.0, 2.0, 750.0] {
            let there = convert_amount(amount, unit, "oz", &[], None).unwrap();
            let back = convert_amount(there, "oz", unit, &[], None).unwrap();
            assert_close(back, amount, 1e-9 * amount.max(1.0));

            let ml = convert_amount(amount, unit, "ml", &[], None).unwrap();
            let back = convert_amount(ml, "ml", unit, &[], None).unwrap();
            assert_close(back, amount, 1e-9 * amount.max(1.0));
        }
    }
}

#[test]
fn test_standard_factors() {
    assert_close(convert_amount(1.0, "oz", "ml", &[], None).unwrap(), ML_PER_OZ, 1e-12);
    assert_close(convert_amount(1.0, "L", "ml", &[], None).unwrap(), 1000.0, 1e-12);
    assert_close(convert_amount(3.0, "cl", "ml", &[], None).unwrap(), 30.0, 1e-12);
    assert_close(convert_amount(1.0, "lb", "g", &[], None).unwrap(), 453.592, 1e-9);
    assert_close(convert_amount(2.0, "tbsp", "tsp", &[], None).unwrap(), 6.0, 1e-9);
}

#[test]
fn test_zero_amount_converts_to_zero() {
    assert_close(convert_amount(0.0, "oz", "ml", &[], None).unwrap(), 0.0, 0.0);
}

// ============================================================================
// Catalog-Aware Units
// ============================================================================

#[test]
fn test_bottle_uses_context_ingredient() {
    let catalog = bar_ingredients();
    let ml = convert_amount(2.0, "bottles", "ml", &catalog, Some("bourbon")).unwrap();
    assert_close(ml, 1500.0, 1e-9);

    let by_alias = convert_amount(1.0, "bottle", "oz", &catalog, Some("Buffalo Trace")).unwrap();
    assert_close(by_alias, 750.0 / ML_PER_OZ, 1e-9);
}

#[test]
fn test_case_to_bottles() {
    let catalog = bar_ingredients();
    let bottles = convert_amount(1.0, "case", "bottle", &catalog, Some("Rye")).unwrap();
    assert_close(bottles, 12.0, 1e-12);
}

#[test]
fn test_container_units_need_an_ingredient() {
    let catalog = bar_ingredients();
    assert_eq!(convert_amount(1.0, "bottle", "ml", &catalog, None), None);
    assert_eq!(convert_amount(1.0, "bottle", "ml", &catalog, Some("Nope")), None);
    // Campari has no case size
    assert_eq!(convert_amount(1.0, "case", "ml", &catalog, Some("Campari")), None);
}

// ============================================================================
// No Conversion Path
// ============================================================================

#[test]
fn test_unconvertible_pairs() {
    assert_eq!(convert_amount(1.0, "oz", "g", &[], None), None);
    assert_eq!(convert_amount(1.0, "each", "ml", &[], None), None);
    assert_eq!(convert_amount(1.0, "handful", "ml", &[], None), None);
    assert_eq!(convert_amount(-1.0, "oz", "ml", &[], None), None);
    assert_eq!(convert_amount(f64::INFINITY, "oz", "ml", &[], None), None);
}

#[test]
fn test_unit_metadata() {
    let oz = Unit::parse("fl. oz").unwrap();
    assert!(oz.is_volume());
    assert!(!oz.is_mass());
    assert_eq!(oz.abbreviation(), "oz");
    assert!(Unit::parse("Each").unwrap().is_ingredient_specific());
    assert!(Unit::parse("kg").unwrap().is_mass());
}
