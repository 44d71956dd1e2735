// ABOUTME: Recipe and recipe line models for cocktails, sub-recipes and batches
// ABOUTME: Defines Recipe, RecipeLine, RecipeCategory and the LineRef tagged reference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::batch::BatchSettings;
use super::ingredient::Measure;

/// Recipe category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecipeCategory {
    /// Drink served to guests
    #[default]
    Cocktail,
    /// House-made component (syrup, infusion, cordial) used inside other recipes
    #[serde(alias = "syrup", alias = "infusion", alias = "prep")]
    SubRecipe,
    /// Pre-mixed batch prepared ahead of service
    Batch,
    /// Anything else
    #[serde(other)]
    Other,
}

impl RecipeCategory {
    /// Whether recipes of this category are normally consumed by other recipes
    #[must_use]
    pub const fn is_sub_recipe_type(&self) -> bool {
        matches!(self, Self::SubRecipe)
    }
}

/// How a recipe line refers to its ingredient
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRef {
    /// Free-text reference resolved by name
    ByName(String),
    /// Catalog reference, optionally with a specific prep action
    ById {
        /// Ingredient identifier
        id: Uuid,
        /// Prep action identifier
        prep_action_id: Option<Uuid>,
    },
}

/// Single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeLine {
    /// Free-text ingredient name as written on the recipe
    pub ingredient_name: String,
    /// Catalog ingredient identifier, when linked
    #[serde(default)]
    pub ingredient_id: Option<Uuid>,
    /// Prep action identifier, when linked
    #[serde(default)]
    pub prep_action_id: Option<Uuid>,
    /// Amount in `unit`
    pub amount: f64,
    /// Unit as written on the recipe
    pub unit: String,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl RecipeLine {
    /// Create a line referenced by name only
    #[must_use]
    pub fn new(ingredient_name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            ingredient_name: ingredient_name.into(),
            ingredient_id: None,
            prep_action_id: None,
            amount,
            unit: unit.into(),
            notes: None,
        }
    }

    /// Link the line to a catalog ingredient
    #[must_use]
    pub const fn with_ingredient_id(mut self, id: Uuid) -> Self {
        self.ingredient_id = Some(id);
        self
    }

    /// Link the line to a prep action
    #[must_use]
    pub const fn with_prep_action_id(mut self, id: Uuid) -> Self {
        self.prep_action_id = Some(id);
        self
    }

    /// Attach notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// The amount, clamped to be non-negative and finite
    #[must_use]
    pub fn effective_amount(&self) -> f64 {
        if self.amount.is_finite() && self.amount > 0.0 {
            self.amount
        } else {
            0.0
        }
    }

    /// Tagged reference used by the resolver
    #[must_use]
    pub fn line_ref(&self) -> LineRef {
        match self.ingredient_id {
            Some(id) => LineRef::ById {
                id,
                prep_action_id: self.prep_action_id,
            },
            None => LineRef::ByName(self.ingredient_name.clone()),
        }
    }
}

/// A named formula: cocktail, sub-recipe or batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: Uuid,
    /// Recipe name
    pub name: String,
    /// Category
    #[serde(default)]
    pub category: RecipeCategory,
    /// Ordered ingredient lines
    #[serde(default)]
    pub ingredients: Vec<RecipeLine>,
    /// Size of one serving
    #[serde(default)]
    pub serving_size_amount: Option<f64>,
    /// Unit of one serving
    #[serde(default)]
    pub serving_size_unit: Option<String>,
    /// Total amount the recipe produces
    #[serde(default)]
    pub yield_total_amount: Option<f64>,
    /// Unit of the total yield
    #[serde(default)]
    pub yield_total_unit: Option<String>,
    /// Served to guests (as opposed to a sub-recipe)
    #[serde(default)]
    pub is_sellable_item: bool,
    /// Menu price of one serving
    #[serde(default)]
    pub menu_price: Option<f64>,
    /// Batch preparation settings
    #[serde(default)]
    pub batch_settings: Option<BatchSettings>,
}

impl Recipe {
    /// Create an empty cocktail recipe
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: RecipeCategory::Cocktail,
            ingredients: Vec::new(),
            serving_size_amount: None,
            serving_size_unit: None,
            yield_total_amount: None,
            yield_total_unit: None,
            is_sellable_item: false,
            menu_price: None,
            batch_settings: None,
        }
    }

    /// Use a fixed identifier
    #[must_use]
    pub const fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Set the category
    #[must_use]
    pub const fn with_category(mut self, category: RecipeCategory) -> Self {
        self.category = category;
        self
    }

    /// Add an ingredient line
    #[must_use]
    pub fn with_line(mut self, line: RecipeLine) -> Self {
        self.ingredients.push(line);
        self
    }

    /// Add multiple ingredient lines
    #[must_use]
    pub fn with_lines(mut self, lines: Vec<RecipeLine>) -> Self {
        self.ingredients.extend(lines);
        self
    }

    /// Set the serving size
    #[must_use]
    pub fn with_serving(mut self, amount: f64, unit: impl Into<String>) -> Self {
        self.serving_size_amount = Some(amount);
        self.serving_size_unit = Some(unit.into());
        self
    }

    /// Set the total yield
    #[must_use]
    pub fn with_yield(mut self, amount: f64, unit: impl Into<String>) -> Self {
        self.yield_total_amount = Some(amount);
        self.yield_total_unit = Some(unit.into());
        self
    }

    /// Mark as a guest-facing item with a menu price
    #[must_use]
    pub const fn sellable_at(mut self, menu_price: f64) -> Self {
        self.is_sellable_item = true;
        self.menu_price = Some(menu_price);
        self
    }

    /// Attach batch settings
    #[must_use]
    pub fn with_batch_settings(mut self, settings: BatchSettings) -> Self {
        self.batch_settings = Some(settings);
        self
    }

    /// Whether the recipe is prepared in bulk
    #[must_use]
    pub const fn is_batchable(&self) -> bool {
        self.batch_settings.is_some()
    }

    /// Total yield as a measure, when both parts are present and positive
    #[must_use]
    pub fn yield_measure(&self) -> Option<Measure> {
        positive_measure(self.yield_total_amount, self.yield_total_unit.as_deref())
    }

    /// Serving size as a measure, when both parts are present and positive
    #[must_use]
    pub fn serving_measure(&self) -> Option<Measure> {
        positive_measure(self.serving_size_amount, self.serving_size_unit.as_deref())
    }
}

fn positive_measure(amount: Option<f64>, unit: Option<&str>) -> Option<Measure> {
    let amount = amount.filter(|a| a.is_finite() && *a > 0.0)?;
    let unit = unit.map(str::trim).filter(|u| !u.is_empty())?;
    Some(Measure::new(amount, unit))
}
