// ABOUTME: Default lookup tables for batch/service classification and line qualifiers
// ABOUTME: Citrus, garnish and ice stay out of pre-mixed batches unless overridden
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Ingredient categories prepared fresh at service by default
pub const DEFAULT_SERVICE_CATEGORIES: &[&str] = &["juice", "citrus", "garnish", "ice"];

/// Name keywords that mark a line as citrus
pub const DEFAULT_CITRUS_KEYWORDS: &[&str] =
    &["lemon", "lime", "grapefruit", "orange", "yuzu", "citrus"];

/// Trailing words that qualify a base ingredient ("Lemon Juice", "Orange Peel")
pub const PREP_QUALIFIERS: &[&str] = &[
    "juice", "juiced", "zest", "zested", "peel", "peeled", "twist", "wheel", "wedge", "slice",
    "muddled",
];

/// Delimiter between an ingredient name and its prep action ("Lime - Juiced")
pub const PREP_DELIMITER: &str = " - ";
