// ABOUTME: Catalog ingredient, product variant and prep action models
// ABOUTME: Carries purchase pricing, case pricing, unit sizes and sub-recipe back-references
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An amount paired with a free-text unit (e.g. `750 ml`, `1 oz`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    /// Numeric amount
    pub amount: f64,
    /// Unit as written in the catalog
    pub unit: String,
}

impl Measure {
    /// Create a new measure
    #[must_use]
    pub fn new(amount: f64, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }
}

/// A named transformation of an ingredient ("Juiced", "Zested", ...)
///
/// When `yield_per_unit` is set, one `each` of the raw ingredient produces
/// that measure once prepared, e.g. one lime juiced yields `1 oz`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepAction {
    /// Prep action identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Prepared output of one raw `each`
    #[serde(default)]
    pub yield_per_unit: Option<Measure>,
}

impl PrepAction {
    /// Create a prep action without a yield
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            yield_per_unit: None,
        }
    }

    /// Set the prepared yield of one raw unit
    #[must_use]
    pub fn with_yield(mut self, amount: f64, unit: impl Into<String>) -> Self {
        self.yield_per_unit = Some(Measure::new(amount, unit));
        self
    }
}

/// A catalog entry for a purchasable good (or a house-made sub-recipe)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique ingredient identifier
    pub id: Uuid,
    /// Canonical name
    pub name: String,
    /// Alternative names used when matching free-text lines
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Category (spirit, liqueur, vermouth, juice, garnish, ...)
    #[serde(default)]
    pub category: String,
    /// Spirit type (bourbon, gin, ...)
    #[serde(default)]
    pub spirit_type: Option<String>,
    /// Style or substyle
    #[serde(default, alias = "substyle")]
    pub style: Option<String>,
    /// Alcohol by volume in percent (0 for non-alcoholic)
    #[serde(default)]
    pub abv: f64,
    /// Price of one purchase container
    #[serde(default)]
    pub purchase_price: Option<f64>,
    /// Size of the purchase container
    #[serde(default)]
    pub purchase_quantity: Option<f64>,
    /// Unit of the purchase container
    #[serde(default)]
    pub purchase_unit: Option<String>,
    /// Price of a full case
    #[serde(default)]
    pub case_price: Option<f64>,
    /// Containers per case
    #[serde(default)]
    pub bottles_per_case: Option<u32>,
    /// Prefer case-derived pricing over the single-container price
    #[serde(default)]
    pub use_case_pricing: bool,
    /// Explicit cost override, quoted per `cost_unit`
    #[serde(default)]
    pub cost_per_unit: Option<f64>,
    /// Unit `cost_per_unit` is quoted in (defaults to the purchase unit)
    #[serde(default)]
    pub cost_unit: Option<String>,
    /// What a single `each` of this ingredient measures
    #[serde(default)]
    pub unit_size: Option<Measure>,
    /// Set when this ingredient is itself a prepared recipe
    #[serde(default)]
    pub sub_recipe_id: Option<Uuid>,
    /// Named transformations of this ingredient
    #[serde(default)]
    pub prep_actions: Vec<PrepAction>,
}

impl Ingredient {
    /// Create an uncategorized, unpriced ingredient
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            aliases: Vec::new(),
            category: String::new(),
            spirit_type: None,
            style: None,
            abv: 0.0,
            purchase_price: None,
            purchase_quantity: None,
            purchase_unit: None,
            case_price: None,
            bottles_per_case: None,
            use_case_pricing: false,
            cost_per_unit: None,
            cost_unit: None,
            unit_size: None,
            sub_recipe_id: None,
            prep_actions: Vec::new(),
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
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Add a matching alias
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Set alcohol by volume (percent)
    #[must_use]
    pub const fn with_abv(mut self, abv: f64) -> Self {
        self.abv = abv;
        self
    }

    /// Set the purchase container and its price
    #[must_use]
    pub fn with_purchase(mut self, price: f64, quantity: f64, unit: impl Into<String>) -> Self {
        self.purchase_price = Some(price);
        self.purchase_quantity = Some(quantity);
        self.purchase_unit = Some(unit.into());
        self
    }

    /// Set the purchase container without a single-container price
    #[must_use]
    pub fn with_container(mut self, quantity: f64, unit: impl Into<String>) -> Self {
        self.purchase_quantity = Some(quantity);
        self.purchase_unit = Some(unit.into());
        self
    }

    /// Set case pricing
    #[must_use]
    pub const fn with_case(mut self, case_price: f64, bottles_per_case: u32) -> Self {
        self.case_price = Some(case_price);
        self.bottles_per_case = Some(bottles_per_case);
        self
    }

    /// Prefer case-derived pricing over the bottle price
    #[must_use]
    pub const fn with_case_pricing(mut self) -> Self {
        self.use_case_pricing = true;
        self
    }

    /// Set an explicit cost override
    #[must_use]
    pub fn with_cost_per_unit(mut self, cost: f64, unit: impl Into<String>) -> Self {
        self.cost_per_unit = Some(cost);
        self.cost_unit = Some(unit.into());
        self
    }

    /// Declare what one `each` of this ingredient measures
    #[must_use]
    pub fn with_unit_size(mut self, amount: f64, unit: impl Into<String>) -> Self {
        self.unit_size = Some(Measure::new(amount, unit));
        self
    }

    /// Mark this ingredient as a prepared sub-recipe
    #[must_use]
    pub const fn with_sub_recipe(mut self, recipe_id: Uuid) -> Self {
        self.sub_recipe_id = Some(recipe_id);
        self
    }

    /// Add a prep action
    #[must_use]
    pub fn with_prep_action(mut self, action: PrepAction) -> Self {
        self.prep_actions.push(action);
        self
    }

    /// Whether this ingredient is a house-made sub-recipe
    #[must_use]
    pub const fn is_sub_recipe(&self) -> bool {
        self.sub_recipe_id.is_some()
    }

    /// Whether this ingredient contains no alcohol
    #[must_use]
    pub fn is_non_alcoholic(&self) -> bool {
        self.abv <= 0.0
    }

    /// The priced purchase container, when a unit is declared
    ///
    /// A missing or non-positive quantity means a single unit.
    #[must_use]
    pub fn purchase_container(&self) -> Option<Measure> {
        let unit = self.purchase_unit.as_deref()?.trim();
        if unit.is_empty() {
            return None;
        }
        let quantity = self
            .purchase_quantity
            .filter(|q| q.is_finite() && *q > 0.0)
            .unwrap_or(1.0);
        Some(Measure::new(quantity, unit))
    }

    /// Single-container price when positive
    #[must_use]
    pub fn bottle_price(&self) -> Option<f64> {
        self.purchase_price.filter(|p| p.is_finite() && *p > 0.0)
    }

    /// Per-container price derived from the case price
    #[must_use]
    pub fn case_derived_price(&self) -> Option<f64> {
        let case_price = self.case_price.filter(|p| p.is_finite() && *p > 0.0)?;
        let bottles = self.bottles_per_case.filter(|b| *b > 0)?;
        Some(case_price / f64::from(bottles))
    }

    /// Find a prep action by identifier
    #[must_use]
    pub fn prep_action(&self, id: Uuid) -> Option<&PrepAction> {
        self.prep_actions.iter().find(|p| p.id == id)
    }
}

/// A specific purchasable SKU/size of an ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant identifier
    pub id: Uuid,
    /// Ingredient this variant belongs to
    pub ingredient_id: Uuid,
    /// Optional display label ("Liter", "Well 750")
    #[serde(default)]
    pub label: Option<String>,
    /// Container size in milliliters
    pub size_ml: f64,
    /// Price of one container
    #[serde(default)]
    pub purchase_price: Option<f64>,
    /// Price of a full case
    #[serde(default)]
    pub case_price: Option<f64>,
    /// Containers per case
    #[serde(default)]
    pub bottles_per_case: Option<u32>,
}

impl ProductVariant {
    /// Create a bottle-priced variant
    #[must_use]
    pub fn new(ingredient_id: Uuid, size_ml: f64, purchase_price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            ingredient_id,
            label: None,
            size_ml,
            purchase_price: Some(purchase_price),
            case_price: None,
            bottles_per_case: None,
        }
    }

    /// Create a case-priced variant
    #[must_use]
    pub fn case_only(ingredient_id: Uuid, size_ml: f64, case_price: f64, bottles: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            ingredient_id,
            label: None,
            size_ml,
            purchase_price: None,
            case_price: Some(case_price),
            bottles_per_case: Some(bottles),
        }
    }

    /// Set the display label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Single-container price when positive
    #[must_use]
    pub fn bottle_price(&self) -> Option<f64> {
        self.purchase_price.filter(|p| p.is_finite() && *p > 0.0)
    }

    /// Per-container price derived from the case price
    #[must_use]
    pub fn case_derived_price(&self) -> Option<f64> {
        let case_price = self.case_price.filter(|p| p.is_finite() && *p > 0.0)?;
        let bottles = self.bottles_per_case.filter(|b| *b > 0)?;
        Some(case_price / f64::from(bottles))
    }
}
