// ABOUTME: Display summaries of engine results for the CLI and downstream UIs
// ABOUTME: Cost sheets list priced lines and flags, prep sheets list batch volumes and dilution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display, Formatter};

use barback_core::constants::units::ML_PER_OZ;
use barback_core::models::{CostMode, CostStatus, Recipe};
use barback_engine::batch::BatchMetrics;
use barback_engine::cost::RecipeCost;
use serde::Serialize;

/// One row of a cost sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSheetLine {
    /// Resolved display name
    pub name: String,
    /// "2 oz" style quantity
    pub quantity: String,
    /// Line cost
    pub cost: f64,
    /// Line status
    pub status: CostStatus,
}

/// Printable cost breakdown of a recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSheet {
    /// Recipe name
    pub recipe_name: String,
    /// Whole recipe or per serving
    pub mode: CostMode,
    /// Servings in the whole recipe
    pub servings: f64,
    /// Priced lines
    pub lines: Vec<CostSheetLine>,
    /// Sum of line costs
    pub total_cost: f64,
    /// Cost of one serving
    pub cost_per_serving: f64,
    /// Menu price of one serving
    pub menu_price: Option<f64>,
    /// Pour cost as a percentage of the menu price
    pub pour_cost_percentage: Option<f64>,
    /// Number of lines needing attention
    pub flagged_lines: usize,
}

fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}

impl CostSheet {
    /// Summarize a cost result
    #[must_use]
    pub fn new(recipe: &Recipe, cost: &RecipeCost) -> Self {
        let lines = cost
            .ingredients_with_cost
            .iter()
            .map(|line| CostSheetLine {
                name: line.display_name.clone(),
                quantity: format!("{} {}", format_amount(line.amount), line.unit.trim()),
                cost: line.cost,
                status: line.cost_status,
            })
            .collect();
        let pour_cost_percentage = recipe
            .menu_price
            .and_then(|price| cost.pour_cost_percentage(price));
        Self {
            recipe_name: cost.recipe_name.clone(),
            mode: cost.mode,
            servings: cost.servings,
            lines,
            total_cost: cost.total_cost,
            cost_per_serving: cost.cost_per_serving(),
            menu_price: recipe.menu_price,
            pour_cost_percentage,
            flagged_lines: cost.flagged_lines().count(),
        }
    }
}

impl Display for CostSheet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mode = match self.mode {
            CostMode::Total => "total",
            CostMode::PerServing => "per serving",
        };
        writeln!(f, "{} ({mode})", self.recipe_name)?;
        writeln!(f, "{}", "=".repeat(60))?;
        for line in &self.lines {
            write!(f, "{:<32} {:>12} {:>9.2}", line.name, line.quantity, line.cost)?;
            if line.status.is_flagged() {
                write!(f, "  [{}]", line.status)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "-".repeat(60))?;
        writeln!(f, "{:<45} {:>9.2}", "Total", self.total_cost)?;
        if self.mode == CostMode::Total && self.servings != 1.0 {
            writeln!(
                f,
                "{:<45} {:>9.2}",
                format!("Per serving ({} servings)", format_amount(self.servings)),
                self.cost_per_serving
            )?;
        }
        if let (Some(price), Some(pct)) = (self.menu_price, self.pour_cost_percentage) {
            writeln!(f, "Menu price {price:.2}, pour cost {pct:.1}%")?;
        }
        if self.flagged_lines > 0 {
            writeln!(f, "{} line(s) need attention", self.flagged_lines)?;
        }
        Ok(())
    }
}

/// One ingredient row of a prep sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrepSheetLine {
    /// Line name
    pub name: String,
    /// Scaled volume in milliliters
    pub ml: f64,
    /// Scaled volume in fluid ounces
    pub oz: f64,
}

/// Printable batch preparation instructions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrepSheet {
    /// Recipe name
    pub recipe_name: String,
    /// Container description ("2 x Quart")
    pub container: String,
    /// Servings per batch
    pub servings: f64,
    /// Batched lines
    pub lines: Vec<PrepSheetLine>,
    /// Water to add
    pub dilution_water_ml: f64,
    /// Finished volume
    pub total_volume_ml: f64,
    /// Container capacity
    pub target_volume_ml: f64,
    /// Volume over capacity, when the batch overflows
    pub overflow_ml: Option<f64>,
    /// Lines prepared at service
    pub service_lines: Vec<String>,
    /// Batch lines with no known volume
    pub unmeasured_lines: Vec<String>,
    /// Finished ABV in percent
    pub batch_abv: Option<f64>,
    /// Ingredient cost of the batched lines
    pub batch_cost: f64,
}

impl PrepSheet {
    /// Summarize a batch result
    ///
    /// `cost` must be a whole-recipe cost of the same recipe; it prices the
    /// batched lines at the batch scale.
    #[must_use]
    pub fn new(recipe: &Recipe, metrics: &BatchMetrics, cost: &RecipeCost) -> Self {
        let container = recipe.batch_settings.as_ref().map_or_else(String::new, |s| {
            let count = s.container_count.unwrap_or(0).max(0);
            if s.is_container_custom {
                let volume = s.custom_volume_ml.unwrap_or(0.0);
                format!("{count} x {} ml", format_amount(volume))
            } else {
                format!("{count} x {}", s.container_type)
            }
        });

        let lines = metrics
            .per_ingredient_scaled_ml
            .iter()
            .map(|(name, ml)| PrepSheetLine {
                name: name.clone(),
                ml: *ml,
                oz: ml / ML_PER_OZ,
            })
            .collect();

        let servings = if cost.servings > 0.0 { cost.servings } else { 1.0 };
        let batch_cost = cost
            .ingredients_with_cost
            .iter()
            .filter(|line| {
                metrics
                    .per_ingredient_scaled_ml
                    .contains_key(&line.line_name)
            })
            .map(|line| line.cost / servings * metrics.scale_factor)
            .sum();

        Self {
            recipe_name: recipe.name.clone(),
            container,
            servings: metrics.servings_per_batch(),
            lines,
            dilution_water_ml: metrics.dilution_water_ml,
            total_volume_ml: metrics.total_volume_ml,
            target_volume_ml: metrics.target_volume_ml,
            overflow_ml: metrics.exceeds_container.then_some(metrics.overflow_ml),
            service_lines: metrics.service_lines.clone(),
            unmeasured_lines: metrics.unmeasured_lines.clone(),
            batch_abv: metrics.batch_abv,
            batch_cost,
        }
    }
}

impl Display for PrepSheet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} batch: {}", self.recipe_name, self.container)?;
        writeln!(f, "{}", "=".repeat(60))?;
        if self.lines.is_empty() {
            writeln!(f, "Nothing to batch")?;
        }
        for line in &self.lines {
            writeln!(f, "{:<32} {:>9.1} ml {:>7.2} oz", line.name, line.ml, line.oz)?;
        }
        if self.dilution_water_ml > 0.0 {
            writeln!(
                f,
                "{:<32} {:>9.1} ml {:>7.2} oz",
                "Water (dilution)",
                self.dilution_water_ml,
                self.dilution_water_ml / ML_PER_OZ
            )?;
        }
        writeln!(f, "{}", "-".repeat(60))?;
        writeln!(
            f,
            "Total {:.1} ml of {:.1} ml, {:.1} servings, cost {:.2}",
            self.total_volume_ml, self.target_volume_ml, self.servings, self.batch_cost
        )?;
        if let Some(abv) = self.batch_abv {
            writeln!(f, "Batch ABV {abv:.1}%")?;
        }
        if let Some(overflow) = self.overflow_ml {
            writeln!(f, "WARNING: exceeds container by {overflow:.1} ml")?;
        }
        if !self.service_lines.is_empty() {
            writeln!(f, "Add at service: {}", self.service_lines.join(", "))?;
        }
        if !self.unmeasured_lines.is_empty() {
            writeln!(f, "Not measurable: {}", self.unmeasured_lines.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(2.0), "2");
        assert_eq!(format_amount(0.75), "0.75");
        assert_eq!(format_amount(1.0 / 3.0), "0.33");
    }
}
