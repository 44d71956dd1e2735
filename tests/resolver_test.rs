// ABOUTME: Integration tests for free-text ingredient line resolution
// ABOUTME: Exact, alias, partial and qualifier matching plus explicit id links
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use barback_core::models::{Ingredient, PrepAction, RecipeLine};
use barback_engine::resolver::{resolve_ingredient_line, resolve_line};
use common::{bar_ingredients, BOURBON_ID, GIN_ID, LIME_ID, LIME_JUICED_ID};
use uuid::Uuid;

fn resolved_id(line: &str) -> Option<Uuid> {
    let catalog = bar_ingredients();
    resolve_ingredient_line(line, None, &catalog)
        .ingredient
        .map(|i| i.id)
}

#[test]
fn test_exact_name_is_case_and_space_insensitive() {
    assert_eq!(resolved_id("bourbon"), Some(BOURBON_ID));
    assert_eq!(resolved_id("  BOURBON  "), Some(BOURBON_ID));
}

#[test]
fn test_alias_match() {
    assert_eq!(resolved_id("Buffalo Trace"), Some(BOURBON_ID));
    assert_eq!(resolved_id("gin"), Some(GIN_ID));
}

#[test]
fn test_delimited_prep_qualifier() {
    let catalog = bar_ingredients();
    let resolution = resolve_ingredient_line("Lime - Juiced", None, &catalog);
    assert_eq!(resolution.ingredient.map(|i| i.id), Some(LIME_ID));
    assert_eq!(resolution.prep_action.map(|p| p.id), Some(LIME_JUICED_ID));
    assert_eq!(resolution.display_name, "Lime - Juiced");
}

#[test]
fn test_trailing_qualifier_word_matches_prep() {
    let catalog = bar_ingredients();
    let resolution = resolve_ingredient_line("Fresh Lime Juice", None, &catalog);
    assert_eq!(resolution.ingredient.map(|i| i.id), Some(LIME_ID));
    assert_eq!(resolution.prep_action.map(|p| p.id), Some(LIME_JUICED_ID));
}

#[test]
fn test_partial_prefers_longest_contained_name() {
    let catalog = vec![
        Ingredient::new("Rum"),
        Ingredient::new("Jamaican Rum"),
        Ingredient::new("Ginger Syrup"),
    ];
    let resolution = resolve_ingredient_line("Overproof Jamaican Rum", None, &catalog);
    assert_eq!(resolution.ingredient.unwrap().name, "Jamaican Rum");

    // "gin" must not match inside "ginger"
    let resolution = resolve_ingredient_line("Gin", None, &catalog);
    assert!(!resolution.is_resolved());
}

#[test]
fn test_partial_falls_back_to_shortest_containing_name() {
    let catalog = vec![
        Ingredient::new("Dry Vermouth Blanc Reserve"),
        Ingredient::new("Dry Vermouth Blanc"),
    ];
    let resolution = resolve_ingredient_line("Vermouth Blanc", None, &catalog);
    assert_eq!(resolution.ingredient.unwrap().name, "Dry Vermouth Blanc");
}

#[test]
fn test_unmatched_line_keeps_its_name() {
    let catalog = bar_ingredients();
    let resolution = resolve_ingredient_line("Unicorn Tears", None, &catalog);
    assert!(!resolution.is_resolved());
    assert_eq!(resolution.display_name, "Unicorn Tears");

    let resolution = resolve_ingredient_line("   ", None, &catalog);
    assert!(!resolution.is_resolved());
}

#[test]
fn test_explicit_id_beats_name() {
    let catalog = bar_ingredients();
    let resolution = resolve_ingredient_line("Bourbon", Some(GIN_ID), &catalog);
    assert_eq!(resolution.ingredient.map(|i| i.id), Some(GIN_ID));
}

#[test]
fn test_dangling_id_falls_back_to_name() {
    let catalog = bar_ingredients();
    let resolution = resolve_ingredient_line("Bourbon", Some(Uuid::from_u128(0xdead)), &catalog);
    assert_eq!(resolution.ingredient.map(|i| i.id), Some(BOURBON_ID));
}

#[test]
fn test_linked_prep_action_on_recipe_line() {
    let catalog = bar_ingredients();
    let line = RecipeLine::new("lime stuff", 1.0, "oz")
        .with_ingredient_id(LIME_ID)
        .with_prep_action_id(LIME_JUICED_ID);
    let resolution = resolve_line(&line, &catalog);
    assert_eq!(resolution.ingredient.map(|i| i.id), Some(LIME_ID));
    assert_eq!(resolution.prep_action.map(|p| p.id), Some(LIME_JUICED_ID));
    assert_eq!(resolution.display_name, "Lime - Juiced");
}

#[test]
fn test_qualifier_already_in_name_is_not_a_prep() {
    let catalog = vec![Ingredient::new("Lemon Juice").with_prep_action(PrepAction::new("Juiced"))];
    let resolution = resolve_ingredient_line("Lemon Juice", None, &catalog);
    assert!(resolution.is_resolved());
    assert!(resolution.prep_action.is_none());
    assert_eq!(resolution.display_name, "Lemon Juice");
}
