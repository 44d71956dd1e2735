// ABOUTME: Batch preparation settings embedded in batchable recipes
// ABOUTME: Container choice, dilution options, manual scale override and per-line batch/service roles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Whether a line goes into the pre-mixed batch or is added at pour time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchRole {
    /// Mixed into the batch container ahead of service
    Batch,
    /// Prepared fresh at the point of service
    Service,
}

/// User-edited batch configuration of a recipe
///
/// Numeric fields are optional because the batch-prep UI persists partially
/// filled forms; missing counts and percentages are treated as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSettings {
    /// Standard container label or key ("1L Bottle", "quart")
    pub container_type: String,
    /// Number of containers to fill
    #[serde(default)]
    pub container_count: Option<i32>,
    /// Use `custom_volume_ml` instead of a standard container
    #[serde(default)]
    pub is_container_custom: bool,
    /// Volume of one custom container
    #[serde(default)]
    pub custom_volume_ml: Option<f64>,
    /// Manual scale factor, overrides container fitting
    #[serde(default)]
    pub scale_factor: Option<f64>,
    /// Add dilution water to the batch
    #[serde(default)]
    pub include_dilution: bool,
    /// Dilution water as a percentage of the final batch volume
    #[serde(default)]
    pub dilution_percentage: Option<f64>,
    /// Shrink batched ingredients so dilution fits inside the container
    #[serde(default)]
    pub constrain_to_total_volume: bool,
    /// Per-line role overrides keyed by line name
    #[serde(default)]
    pub ingredient_overrides: BTreeMap<String, BatchRole>,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            container_type: "1L Bottle".into(),
            container_count: Some(1),
            is_container_custom: false,
            custom_volume_ml: None,
            scale_factor: None,
            include_dilution: false,
            dilution_percentage: None,
            constrain_to_total_volume: false,
            ingredient_overrides: BTreeMap::new(),
        }
    }
}

impl BatchSettings {
    /// Fill `count` standard containers
    #[must_use]
    pub fn container(container_type: impl Into<String>, count: i32) -> Self {
        Self {
            container_type: container_type.into(),
            container_count: Some(count),
            ..Self::default()
        }
    }

    /// Fill `count` custom containers of `volume_ml`
    #[must_use]
    pub fn custom(volume_ml: f64, count: i32) -> Self {
        Self {
            container_type: "custom".into(),
            container_count: Some(count),
            is_container_custom: true,
            custom_volume_ml: Some(volume_ml),
            ..Self::default()
        }
    }

    /// Enable dilution
    #[must_use]
    pub const fn with_dilution(mut self, percentage: f64, constrain_to_total_volume: bool) -> Self {
        self.include_dilution = true;
        self.dilution_percentage = Some(percentage);
        self.constrain_to_total_volume = constrain_to_total_volume;
        self
    }

    /// Set a manual scale factor
    #[must_use]
    pub const fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = Some(scale_factor);
        self
    }

    /// Override the role of a line
    #[must_use]
    pub fn with_override(mut self, line_name: impl Into<String>, role: BatchRole) -> Self {
        self.ingredient_overrides.insert(line_name.into(), role);
        self
    }
}
