// ABOUTME: Costing vocabulary shared by the engine, configuration and reports
// ABOUTME: Defines cost modes, per-line cost statuses, price sources and the unconvertible-unit policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whole-recipe or per-serving costing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CostMode {
    /// Cost of everything the recipe produces
    #[default]
    Total,
    /// Cost of one serving (total divided by yield / serving size)
    PerServing,
}

/// Data-quality status of a costed line
///
/// Every non-`Ok` status is recovered locally: the line contributes what it
/// can (usually zero) and the recipe still gets a best-effort total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CostStatus {
    /// Priced normally
    #[default]
    Ok,
    /// Line could not be matched to a catalog ingredient
    NotFound,
    /// Ingredient matched but no price is available
    NoCost,
    /// Sub-recipe resolution revisited a recipe already being costed
    CycleError,
    /// Amount/unit pair has no conversion path to the priced unit
    UnconvertibleUnit,
}

impl CostStatus {
    /// Whether the UI should flag this line
    #[must_use]
    pub const fn is_flagged(&self) -> bool {
        !matches!(self, Self::Ok)
    }

    /// Machine-readable name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NotFound => "not_found",
            Self::NoCost => "no_cost",
            Self::CycleError => "cycle_error",
            Self::UnconvertibleUnit => "unconvertible_unit",
        }
    }
}

impl Display for CostStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which pricing basis won for a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    /// Explicit `cost_per_unit` on the ingredient
    CostPerUnit,
    /// Best matching product variant
    Variant,
    /// Ingredient purchase price
    Bottle,
    /// Ingredient case price divided by bottles per case
    Case,
    /// Recursively costed sub-recipe
    SubRecipe,
}

/// What to do with a line whose unit cannot be converted to the priced unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnitPolicy {
    /// Exclude the line from the total (cost 0) and flag it
    #[default]
    Strict,
    /// Assume the amount is already in the priced unit, cost it, and flag it
    AssumePricedUnit,
}

impl FromStr for UnitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "strict" => Ok(Self::Strict),
            "assume_priced_unit" | "assume" => Ok(Self::AssumePricedUnit),
            other => Err(format!("unknown unit policy: {other}")),
        }
    }
}
