// ABOUTME: Recursive recipe cost resolver with sub-recipe support and cycle detection
// ABOUTME: Picks one pricing basis per ingredient and converts each line into its priced unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Cost Resolver
//!
//! Pricing basis priority for a purchased ingredient:
//!
//! 1. explicit `cost_per_unit` (quoted per `cost_unit`, else per purchase unit, else per `each`)
//! 2. cheapest variant per ml with a bottle price, then cheapest per ml by case price
//! 3. the ingredient's bottle price over its purchase container
//! 4. the ingredient's case price ÷ bottles per case (ranked above 3 when `use_case_pricing`)
//!
//! Ingredients backed by a sub-recipe are costed by recursing into that
//! recipe. The recipe ids on the current path travel with the call, and a
//! repeat visit is reported as [`CostStatus::CycleError`] on the offending
//! line. Every data problem stays on its line; the total is always the sum of
//! what could be priced.

use std::collections::{BTreeMap, HashMap};

use barback_core::models::{
    CostMode, CostStatus, Ingredient, PrepAction, PriceSource, ProductVariant, Recipe, RecipeLine,
    UnitPolicy,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::resolver::resolve_line;
use crate::units::{convert_with_ingredient, to_milliliters};

/// Product variants grouped by ingredient id
pub type VariantIndex = HashMap<Uuid, Vec<ProductVariant>>;

/// Group variants by ingredient, preserving input order within each group
#[must_use]
pub fn index_variants(variants: &[ProductVariant]) -> VariantIndex {
    let mut index = VariantIndex::new();
    for variant in variants {
        index
            .entry(variant.ingredient_id)
            .or_default()
            .push(variant.clone());
    }
    index
}

/// Cost of one recipe line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineCost {
    /// Line name as written on the recipe
    pub line_name: String,
    /// Resolved display name
    pub display_name: String,
    /// Matched ingredient
    pub ingredient_id: Option<Uuid>,
    /// Matched prep action
    pub prep_action_id: Option<Uuid>,
    /// Sub-recipe the line was costed through
    pub sub_recipe_id: Option<Uuid>,
    /// Line amount
    pub amount: f64,
    /// Line unit
    pub unit: String,
    /// Line cost in the recipe's currency
    pub cost: f64,
    /// Data-quality status
    pub cost_status: CostStatus,
    /// Winning pricing basis
    pub price_source: Option<PriceSource>,
    /// Price of one `priced_unit`
    pub unit_price: Option<f64>,
    /// Unit the price is quoted in
    pub priced_unit: Option<String>,
    /// Line volume in milliliters, when convertible
    pub volume_ml: Option<f64>,
}

impl LineCost {
    fn new(line: &RecipeLine, display_name: String) -> Self {
        Self {
            line_name: line.ingredient_name.clone(),
            display_name,
            ingredient_id: None,
            prep_action_id: None,
            sub_recipe_id: None,
            amount: line.effective_amount(),
            unit: line.unit.clone(),
            cost: 0.0,
            cost_status: CostStatus::NotFound,
            price_source: None,
            unit_price: None,
            priced_unit: None,
            volume_ml: None,
        }
    }

    fn flag(&mut self, status: CostStatus) {
        self.cost_status = status;
        self.cost = 0.0;
    }
}

/// Cost breakdown of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCost {
    /// Costed recipe
    pub recipe_id: Uuid,
    /// Recipe name
    pub recipe_name: String,
    /// Whole recipe or one serving
    pub mode: CostMode,
    /// Servings in the whole recipe (1 when yield or serving size is unknown)
    pub servings: f64,
    /// Sum of all line costs
    pub total_cost: f64,
    /// Per-line breakdown, in recipe order
    pub ingredients_with_cost: Vec<LineCost>,
}

impl RecipeCost {
    fn from_lines(recipe: &Recipe, servings: f64, lines: Vec<LineCost>) -> Self {
        let total_cost = lines.iter().map(|l| l.cost).sum();
        Self {
            recipe_id: recipe.id,
            recipe_name: recipe.name.clone(),
            mode: CostMode::Total,
            servings,
            total_cost,
            ingredients_with_cost: lines,
        }
    }

    fn into_per_serving(mut self) -> Self {
        if self.servings > 0.0 {
            for line in &mut self.ingredients_with_cost {
                line.cost /= self.servings;
            }
        }
        self.total_cost = self.ingredients_with_cost.iter().map(|l| l.cost).sum();
        self.mode = CostMode::PerServing;
        self
    }

    /// Lines carrying a non-`ok` status
    pub fn flagged_lines(&self) -> impl Iterator<Item = &LineCost> {
        self.ingredients_with_cost
            .iter()
            .filter(|l| l.cost_status.is_flagged())
    }

    /// Whether any line needs attention
    #[must_use]
    pub fn has_flags(&self) -> bool {
        self.flagged_lines().next().is_some()
    }

    /// Cost of one serving regardless of mode
    #[must_use]
    pub fn cost_per_serving(&self) -> f64 {
        match self.mode {
            CostMode::PerServing => self.total_cost,
            CostMode::Total if self.servings > 0.0 => self.total_cost / self.servings,
            CostMode::Total => self.total_cost,
        }
    }

    /// Pour cost as a percentage of the menu price
    #[must_use]
    pub fn pour_cost_percentage(&self, menu_price: f64) -> Option<f64> {
        (menu_price.is_finite() && menu_price > 0.0)
            .then(|| self.cost_per_serving() / menu_price * 100.0)
    }

    /// Milliliters per serving for every line with a known volume
    ///
    /// Lines sharing a name are summed. This is the input the batch
    /// calculator expects.
    #[must_use]
    pub fn volumes_ml_per_serving(&self) -> BTreeMap<String, f64> {
        let servings = if self.servings > 0.0 {
            self.servings
        } else {
            1.0
        };
        let mut volumes = BTreeMap::new();
        for line in &self.ingredients_with_cost {
            if let Some(ml) = line.volume_ml {
                *volumes.entry(line.line_name.clone()).or_insert(0.0) += ml / servings;
            }
        }
        volumes
    }
}

/// A price and the quantity it buys
#[derive(Debug, Clone, PartialEq)]
struct PriceBasis {
    price: f64,
    quantity: f64,
    unit: String,
    source: PriceSource,
}

impl PriceBasis {
    fn unit_price(&self) -> f64 {
        self.price / self.quantity
    }
}

fn cheapest_per_ml<'v>(
    candidates: impl Iterator<Item = (f64, &'v ProductVariant)>,
) -> Option<(f64, &'v ProductVariant)> {
    let mut best: Option<(f64, &ProductVariant)> = None;
    for (price, variant) in candidates {
        let per_ml = price / variant.size_ml;
        if best.is_none_or(|(p, v)| per_ml < p / v.size_ml) {
            best = Some((price, variant));
        }
    }
    best
}

fn best_variant_basis(variants: &[ProductVariant]) -> Option<PriceBasis> {
    let sized = || {
        variants
            .iter()
            .filter(|v| v.size_ml.is_finite() && v.size_ml > 0.0)
    };
    let (price, variant) =
        cheapest_per_ml(sized().filter_map(|v| v.bottle_price().map(|p| (p, v)))).or_else(
            || cheapest_per_ml(sized().filter_map(|v| v.case_derived_price().map(|p| (p, v)))),
        )?;
    Some(PriceBasis {
        price,
        quantity: variant.size_ml,
        unit: "ml".into(),
        source: PriceSource::Variant,
    })
}

fn select_price_basis(
    ingredient: &Ingredient,
    variants: Option<&[ProductVariant]>,
) -> Option<PriceBasis> {
    if let Some(cost) = ingredient.cost_per_unit.filter(|c| c.is_finite() && *c > 0.0) {
        let unit = ingredient
            .cost_unit
            .clone()
            .or_else(|| ingredient.purchase_unit.clone())
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| "each".into());
        return Some(PriceBasis {
            price: cost,
            quantity: 1.0,
            unit,
            source: PriceSource::CostPerUnit,
        });
    }

    if let Some(basis) = variants.and_then(best_variant_basis) {
        return Some(basis);
    }

    let bottle = ingredient.bottle_price().map(|p| (p, PriceSource::Bottle));
    let case = ingredient
        .case_derived_price()
        .map(|p| (p, PriceSource::Case));
    let (price, source) = if ingredient.use_case_pricing {
        case.or(bottle)
    } else {
        bottle.or(case)
    }?;
    let container = ingredient.purchase_container();
    let (quantity, unit) = container.map_or_else(|| (1.0, "each".into()), |m| (m.amount, m.unit));
    Some(PriceBasis {
        price,
        quantity,
        unit,
        source,
    })
}

/// Convert a line amount into `target_unit`, going through the prep yield when there is one
///
/// "1 oz Lime - Juiced" against a lime priced per `each` needs the juice
/// yield of one lime, not the volume of a whole lime.
fn convert_line_amount(
    amount: f64,
    unit: &str,
    target_unit: &str,
    ingredient: &Ingredient,
    prep: Option<&PrepAction>,
) -> Option<f64> {
    if let Some(prep_yield) = prep.and_then(|p| p.yield_per_unit.as_ref()) {
        if prep_yield.amount.is_finite() && prep_yield.amount > 0.0 {
            let raw_units = convert_with_ingredient(amount, unit, &prep_yield.unit, Some(ingredient))
                .map(|prepared| prepared / prep_yield.amount);
            if let Some(converted) = raw_units
                .and_then(|raw| convert_with_ingredient(raw, "each", target_unit, Some(ingredient)))
            {
                return Some(converted);
            }
        }
    }
    convert_with_ingredient(amount, unit, target_unit, Some(ingredient))
}

/// Servings in one whole recipe: yield ÷ serving size, or 1
#[must_use]
pub fn servings_per_recipe(recipe: &Recipe) -> f64 {
    let (Some(total), Some(serving)) = (recipe.yield_measure(), recipe.serving_measure()) else {
        return 1.0;
    };
    convert_with_ingredient(total.amount, &total.unit, &serving.unit, None)
        .map(|total_in_serving_unit| total_in_serving_unit / serving.amount)
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or(1.0)
}

/// Per-unit cost of a sub-recipe's yield
#[derive(Debug, Clone)]
struct SubRecipeUnitCost {
    cost_per_unit: f64,
    unit: String,
    has_priced_lines: bool,
    has_cycle: bool,
}

/// Shared state of one top-level cost computation
struct CostContext<'a> {
    catalog: &'a [Ingredient],
    variants: &'a VariantIndex,
    unit_policy: UnitPolicy,
    allow_recursion: bool,
    recipes: HashMap<Uuid, &'a Recipe>,
    memo: HashMap<Uuid, Option<SubRecipeUnitCost>>,
}

impl<'a> CostContext<'a> {
    fn new(
        catalog: &'a [Ingredient],
        variants: &'a VariantIndex,
        unit_policy: UnitPolicy,
        allow_recursion: bool,
        all_recipes: &'a [Recipe],
    ) -> Self {
        let mut recipes = HashMap::with_capacity(all_recipes.len());
        for recipe in all_recipes {
            recipes.entry(recipe.id).or_insert(recipe);
        }
        Self {
            catalog,
            variants,
            unit_policy,
            allow_recursion,
            recipes,
            memo: HashMap::new(),
        }
    }

    /// Cost every line of `recipe`; the flag reports whether a cycle was hit anywhere below
    fn cost_lines(&mut self, recipe: &Recipe, visiting: &mut Vec<Uuid>) -> (Vec<LineCost>, bool) {
        let mut has_cycle = false;
        let lines = recipe
            .ingredients
            .iter()
            .map(|line| {
                let (cost, cycle) = self.cost_line(line, visiting);
                has_cycle |= cycle;
                cost
            })
            .collect();
        (lines, has_cycle)
    }

    fn cost_line(&mut self, line: &RecipeLine, visiting: &mut Vec<Uuid>) -> (LineCost, bool) {
        let resolution = resolve_line(line, self.catalog);
        let mut out = LineCost::new(line, resolution.display_name.clone());

        let Some(ingredient) = resolution.ingredient else {
            out.volume_ml = to_milliliters(line.effective_amount(), &line.unit, None);
            debug!(line = %line.ingredient_name, "line not found in catalog");
            return (out, false);
        };
        let prep = resolution.prep_action;
        out.ingredient_id = Some(ingredient.id);
        out.prep_action_id = prep.map(|p| p.id);
        out.volume_ml = to_milliliters(line.effective_amount(), &line.unit, Some(ingredient));

        if self.allow_recursion {
            if let Some(sub_id) = ingredient.sub_recipe_id {
                if let Some(sub) = self.recipes.get(&sub_id).copied() {
                    return self.cost_sub_recipe_line(out, line, ingredient, prep, sub, visiting);
                }
                debug!(
                    line = %line.ingredient_name,
                    %sub_id,
                    "sub-recipe not loaded, pricing ingredient directly"
                );
            }
        }

        self.price_ingredient_line(&mut out, line, ingredient, prep);
        (out, false)
    }

    fn price_ingredient_line(
        &self,
        out: &mut LineCost,
        line: &RecipeLine,
        ingredient: &Ingredient,
        prep: Option<&PrepAction>,
    ) {
        let Some(basis) = select_price_basis(
            ingredient,
            self.variants.get(&ingredient.id).map(Vec::as_slice),
        ) else {
            debug!(ingredient = %ingredient.name, "no price available");
            out.flag(CostStatus::NoCost);
            return;
        };
        let unit_price = basis.unit_price();
        out.price_source = Some(basis.source);
        out.unit_price = Some(unit_price);
        out.priced_unit = Some(basis.unit.clone());
        self.apply_conversion(out, line, ingredient, prep, unit_price, &basis.unit);
    }

    fn apply_conversion(
        &self,
        out: &mut LineCost,
        line: &RecipeLine,
        ingredient: &Ingredient,
        prep: Option<&PrepAction>,
        unit_price: f64,
        priced_unit: &str,
    ) {
        let amount = line.effective_amount();
        if let Some(quantity) = convert_line_amount(amount, &line.unit, priced_unit, ingredient, prep)
        {
            out.cost = unit_price * quantity;
            out.cost_status = CostStatus::Ok;
            return;
        }

        warn!(
            line = %line.ingredient_name,
            from = %line.unit,
            to = priced_unit,
            "no conversion path to priced unit"
        );
        out.cost_status = CostStatus::UnconvertibleUnit;
        out.cost = match self.unit_policy {
            UnitPolicy::Strict => 0.0,
            UnitPolicy::AssumePricedUnit => unit_price * amount,
        };
    }

    fn cost_sub_recipe_line(
        &mut self,
        mut out: LineCost,
        line: &RecipeLine,
        ingredient: &Ingredient,
        prep: Option<&PrepAction>,
        sub: &'a Recipe,
        visiting: &mut Vec<Uuid>,
    ) -> (LineCost, bool) {
        out.sub_recipe_id = Some(sub.id);
        out.price_source = Some(PriceSource::SubRecipe);

        if visiting.contains(&sub.id) {
            warn!(
                line = %line.ingredient_name,
                sub_recipe = %sub.name,
                "sub-recipe cycle detected, skipping branch"
            );
            out.flag(CostStatus::CycleError);
            return (out, true);
        }

        let Some(unit_cost) = self.sub_recipe_unit_cost(sub, visiting) else {
            debug!(sub_recipe = %sub.name, "sub-recipe has no usable yield");
            out.flag(CostStatus::NoCost);
            return (out, false);
        };

        out.unit_price = Some(unit_cost.cost_per_unit);
        out.priced_unit = Some(unit_cost.unit.clone());
        if !unit_cost.has_priced_lines && !unit_cost.has_cycle {
            out.flag(CostStatus::NoCost);
            return (out, false);
        }

        self.apply_conversion(
            &mut out,
            line,
            ingredient,
            prep,
            unit_cost.cost_per_unit,
            &unit_cost.unit,
        );
        if unit_cost.has_cycle && out.cost_status == CostStatus::Ok {
            out.cost_status = CostStatus::CycleError;
        }
        (out, unit_cost.has_cycle)
    }

    fn sub_recipe_unit_cost(
        &mut self,
        sub: &'a Recipe,
        visiting: &mut Vec<Uuid>,
    ) -> Option<SubRecipeUnitCost> {
        if let Some(cached) = self.memo.get(&sub.id) {
            return cached.clone();
        }

        visiting.push(sub.id);
        let (lines, has_cycle) = self.cost_lines(sub, visiting);
        visiting.pop();

        let total: f64 = lines.iter().map(|l| l.cost).sum();
        let has_priced_lines = lines.iter().any(|l| l.cost_status == CostStatus::Ok);
        let yield_measure = sub.yield_measure().map(|m| (m.amount, m.unit)).or_else(|| {
            let ml: f64 = lines.iter().filter_map(|l| l.volume_ml).sum();
            (ml > 0.0).then(|| (ml, "ml".to_owned()))
        });

        let unit_cost = yield_measure.map(|(amount, unit)| SubRecipeUnitCost {
            cost_per_unit: total / amount,
            unit,
            has_priced_lines,
            has_cycle,
        });
        if !has_cycle {
            self.memo.insert(sub.id, unit_cost.clone());
        }
        unit_cost
    }
}

/// Compute the cost of a recipe
///
/// The computation always runs on the whole recipe; `CostMode::PerServing`
/// divides each line and the total by [`servings_per_recipe`] afterwards.
/// With `allow_sub_recipe_recursion` off, sub-recipe ingredients are priced
/// like purchased goods.
#[must_use]
#[instrument(skip_all, fields(recipe = %recipe.name, mode = ?mode))]
pub fn calculate_recipe_cost(
    recipe: &Recipe,
    catalog: &[Ingredient],
    mode: CostMode,
    allow_sub_recipe_recursion: bool,
    variants_by_ingredient: &VariantIndex,
    unit_policy: UnitPolicy,
    all_recipes: &[Recipe],
) -> RecipeCost {
    let mut context = CostContext::new(
        catalog,
        variants_by_ingredient,
        unit_policy,
        allow_sub_recipe_recursion,
        all_recipes,
    );
    let mut visiting = vec![recipe.id];
    let (lines, has_cycle) = context.cost_lines(recipe, &mut visiting);
    if has_cycle {
        warn!("recipe costed with cycle errors");
    }

    let cost = RecipeCost::from_lines(recipe, servings_per_recipe(recipe), lines);
    match mode {
        CostMode::Total => cost,
        CostMode::PerServing => cost.into_per_serving(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_prefers_bottle_price_then_cheapest_per_ml() {
        let id = Uuid::new_v4();
        let variants = vec![
            ProductVariant::case_only(id, 750.0, 60.0, 12),
            ProductVariant::new(id, 750.0, 30.0),
            ProductVariant::new(id, 1000.0, 32.0),
        ];
        let basis = best_variant_basis(&variants).unwrap();
        assert!((basis.price - 32.0).abs() < f64::EPSILON);
        assert!((basis.quantity - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_case_pricing_preference() {
        let bottle_first = Ingredient::new("Rye")
            .with_purchase(30.0, 750.0, "ml")
            .with_case(240.0, 12);
        let basis = select_price_basis(&bottle_first, None).unwrap();
        assert_eq!(basis.source, PriceSource::Bottle);

        let case_first = bottle_first.with_case_pricing();
        let basis = select_price_basis(&case_first, None).unwrap();
        assert_eq!(basis.source, PriceSource::Case);
        assert!((basis.unit_price() - 20.0 / 750.0).abs() < 1e-12);
    }

    #[test]
    fn test_cost_per_unit_wins() {
        let id = Uuid::new_v4();
        let ingredient = Ingredient::new("House Bitters")
            .with_id(id)
            .with_purchase(20.0, 4.0, "oz")
            .with_cost_per_unit(0.10, "dash");
        let variants = vec![ProductVariant::new(id, 118.0, 10.0)];
        let basis = select_price_basis(&ingredient, Some(variants.as_slice())).unwrap();
        assert_eq!(basis.source, PriceSource::CostPerUnit);
        assert_eq!(basis.unit, "dash");
    }

    #[test]
    fn test_servings_per_recipe() {
        let recipe = Recipe::new("Punch")
            .with_yield(1.0, "L")
            .with_serving(4.0, "oz");
        let servings = servings_per_recipe(&recipe);
        assert!((servings - 1000.0 / (4.0 * 29.5735)).abs() < 1e-9);
        assert!((servings_per_recipe(&Recipe::new("Single")) - 1.0).abs() < f64::EPSILON);
    }
}
