// ABOUTME: Standard batch container catalog
// ABOUTME: Bottles, deli quarts and Cambro tubs with their fill volumes in milliliters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// A standard container a batch can be prepared in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardContainer {
    /// Stable key persisted in batch settings
    pub key: &'static str,
    /// Display label shown in the batch-prep UI
    pub label: &'static str,
    /// Fill volume in milliliters
    pub volume_ml: f64,
}

/// Known batch containers
pub const STANDARD_CONTAINERS: &[StandardContainer] = &[
    StandardContainer {
        key: "1l_bottle",
        label: "1L Bottle",
        volume_ml: 1000.0,
    },
    StandardContainer {
        key: "750ml_bottle",
        label: "750ml Bottle",
        volume_ml: 750.0,
    },
    StandardContainer {
        key: "375ml_bottle",
        label: "375ml Bottle",
        volume_ml: 375.0,
    },
    StandardContainer {
        key: "1_75l_bottle",
        label: "1.75L Bottle",
        volume_ml: 1750.0,
    },
    StandardContainer {
        key: "quart",
        label: "Quart",
        volume_ml: 946.353,
    },
    StandardContainer {
        key: "half_gallon",
        label: "Half Gallon",
        volume_ml: 1892.706,
    },
    StandardContainer {
        key: "gallon",
        label: "Gallon",
        volume_ml: 3785.41,
    },
    StandardContainer {
        key: "2qt_cambro",
        label: "2qt Cambro",
        volume_ml: 1892.706,
    },
    StandardContainer {
        key: "4qt_cambro",
        label: "4qt Cambro",
        volume_ml: 3785.41,
    },
];
