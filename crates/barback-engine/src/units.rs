// ABOUTME: Unit conversion table for recipe lines, purchase containers and batch volumes
// ABOUTME: Scalar volume/mass factors plus ingredient-specific bottle, case and each conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unit Conversion
//!
//! Standard volume and mass units convert through fixed factors (see
//! [`barback_core::constants::units`]). `bottle`, `case` and `each` have no
//! fixed size: they are converted through the ingredient's purchase container,
//! `bottles_per_case` and declared `unit_size`. A conversion that has no path
//! returns `None`; callers flag the line instead of failing.

use barback_core::constants::units::{
    G_PER_KG, G_PER_LB, ML_PER_CL, ML_PER_GALLON, ML_PER_L, ML_PER_OZ, OZ_PER_BARSPOON,
    OZ_PER_CUP, OZ_PER_DASH, OZ_PER_PINT, OZ_PER_QUART, OZ_PER_SPLASH, OZ_PER_TBSP, OZ_PER_TSP,
};
use barback_core::models::{Ingredient, Measure};
use serde::{Deserialize, Serialize};

/// Measurement unit recognized by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Milliliters (volume base unit)
    Milliliter,
    /// Centiliters (10 ml)
    Centiliter,
    /// Liters (1000 ml)
    Liter,
    /// US fluid ounces (29.5735 ml)
    Ounce,
    /// Dash (1/32 oz)
    Dash,
    /// Barspoon (1/8 oz)
    Barspoon,
    /// Splash (1/4 oz)
    Splash,
    /// Teaspoon (1/6 oz)
    Teaspoon,
    /// Tablespoon (1/2 oz)
    Tablespoon,
    /// Cup (8 oz)
    Cup,
    /// Pint (16 oz)
    Pint,
    /// Quart (32 oz)
    Quart,
    /// US gallon (3785.41 ml)
    Gallon,
    /// Grams (mass base unit)
    Gram,
    /// Kilograms
    Kilogram,
    /// Pounds
    Pound,
    /// Count of whole items, sized per ingredient
    Each,
    /// One purchase container of the ingredient
    Bottle,
    /// One case of purchase containers
    Case,
}

impl Unit {
    /// Parse a free-text unit ("fl oz", "Dashes", "bsp", ...)
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let unit = match normalize_unit(raw).as_str() {
            "ml" | "mls" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Self::Milliliter
            }
            "cl" | "centiliter" | "centiliters" | "centilitre" | "centilitres" => {
                Self::Centiliter
            }
            "l" | "ltr" | "liter" | "liters" | "litre" | "litres" => Self::Liter,
            "oz" | "ozs" | "ounce" | "ounces" | "fl oz" | "floz" | "fluid ounce"
            | "fluid ounces" => Self::Ounce,
            "dash" | "dashes" => Self::Dash,
            "barspoon" | "barspoons" | "bsp" | "bar spoon" | "bar spoons" => Self::Barspoon,
            "splash" | "splashes" => Self::Splash,
            "tsp" | "teaspoon" | "teaspoons" => Self::Teaspoon,
            "tbsp" | "tablespoon" | "tablespoons" => Self::Tablespoon,
            "cup" | "cups" => Self::Cup,
            "pt" | "pint" | "pints" => Self::Pint,
            "qt" | "quart" | "quarts" => Self::Quart,
            "gal" | "gallon" | "gallons" => Self::Gallon,
            "g" | "gr" | "gram" | "grams" => Self::Gram,
            "kg" | "kilogram" | "kilograms" => Self::Kilogram,
            "lb" | "lbs" | "pound" | "pounds" => Self::Pound,
            "each" | "ea" | "piece" | "pieces" | "pc" | "pcs" | "whole" | "unit" | "units"
            | "count" | "ct" => Self::Each,
            "bottle" | "bottles" | "btl" | "btls" => Self::Bottle,
            "case" | "cases" | "cs" => Self::Case,
            _ => return None,
        };
        Some(unit)
    }

    /// Milliliters per unit, for volume units
    #[must_use]
    pub fn ml_factor(&self) -> Option<f64> {
        let ml = match self {
            Self::Milliliter => 1.0,
            Self::Centiliter => ML_PER_CL,
            Self::Liter => ML_PER_L,
            Self::Ounce => ML_PER_OZ,
            Self::Dash => OZ_PER_DASH * ML_PER_OZ,
            Self::Barspoon => OZ_PER_BARSPOON * ML_PER_OZ,
            Self::Splash => OZ_PER_SPLASH * ML_PER_OZ,
            Self::Teaspoon => OZ_PER_TSP * ML_PER_OZ,
            Self::Tablespoon => OZ_PER_TBSP * ML_PER_OZ,
            Self::Cup => OZ_PER_CUP * ML_PER_OZ,
            Self::Pint => OZ_PER_PINT * ML_PER_OZ,
            Self::Quart => OZ_PER_QUART * ML_PER_OZ,
            Self::Gallon => ML_PER_GALLON,
            _ => return None,
        };
        Some(ml)
    }

    /// Grams per unit, for mass units
    #[must_use]
    pub const fn gram_factor(&self) -> Option<f64> {
        match self {
            Self::Gram => Some(1.0),
            Self::Kilogram => Some(G_PER_KG),
            Self::Pound => Some(G_PER_LB),
            _ => None,
        }
    }

    /// Check if this unit is a volume measurement
    #[must_use]
    pub fn is_volume(&self) -> bool {
        self.ml_factor().is_some()
    }

    /// Check if this unit is a mass measurement
    #[must_use]
    pub const fn is_mass(&self) -> bool {
        self.gram_factor().is_some()
    }

    /// Check if the size of this unit depends on the ingredient
    #[must_use]
    pub const fn is_ingredient_specific(&self) -> bool {
        matches!(self, Self::Each | Self::Bottle | Self::Case)
    }

    /// Get the abbreviation for display
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Milliliter => "ml",
            Self::Centiliter => "cl",
            Self::Liter => "L",
            Self::Ounce => "oz",
            Self::Dash => "dash",
            Self::Barspoon => "barspoon",
            Self::Splash => "splash",
            Self::Teaspoon => "tsp",
            Self::Tablespoon => "tbsp",
            Self::Cup => "cup",
            Self::Pint => "pt",
            Self::Quart => "qt",
            Self::Gallon => "gal",
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Pound => "lb",
            Self::Each => "each",
            Self::Bottle => "bottle",
            Self::Case => "case",
        }
    }
}

/// Lower-case, drop periods and collapse whitespace ("Fl. Oz" → "fl oz")
#[must_use]
pub fn normalize_unit(raw: &str) -> String {
    raw.replace('.', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// An amount reduced to one of the engine's base dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
enum Base {
    Volume(f64),
    Mass(f64),
    Count(f64),
}

impl Base {
    fn ratio(self, per_unit: Self) -> Option<f64> {
        let (amount, size) = match (self, per_unit) {
            (Self::Volume(a), Self::Volume(s))
            | (Self::Mass(a), Self::Mass(s))
            | (Self::Count(a), Self::Count(s)) => (a, s),
            _ => return None,
        };
        (size > 0.0).then(|| amount / size)
    }
}

/// Reduce a simple measure (no bottle/case) to a base amount
fn simple_to_base(amount: f64, unit: Unit, ingredient: Option<&Ingredient>) -> Option<Base> {
    if let Some(ml) = unit.ml_factor() {
        return Some(Base::Volume(amount * ml));
    }
    if let Some(g) = unit.gram_factor() {
        return Some(Base::Mass(amount * g));
    }
    if unit == Unit::Each {
        return match ingredient.and_then(unit_size_base) {
            Some(size) => Some(scale_base(size, amount)),
            None => Some(Base::Count(amount)),
        };
    }
    None
}

/// Size of one `each`, when declared as a volume or mass
fn unit_size_base(ingredient: &Ingredient) -> Option<Base> {
    let size = ingredient.unit_size.as_ref()?;
    let unit = Unit::parse(&size.unit)?;
    if unit.is_ingredient_specific() || !size.amount.is_finite() || size.amount <= 0.0 {
        return None;
    }
    simple_to_base(size.amount, unit, None)
}

/// Size of one purchase container
fn bottle_base(ingredient: &Ingredient) -> Option<Base> {
    let Measure { amount, unit } = ingredient.purchase_container()?;
    let unit = Unit::parse(&unit)?;
    if matches!(unit, Unit::Bottle | Unit::Case) {
        return None;
    }
    simple_to_base(amount, unit, Some(ingredient))
}

/// Size of one case
fn case_base(ingredient: &Ingredient) -> Option<Base> {
    let bottles = ingredient.bottles_per_case.filter(|b| *b > 0)?;
    Some(scale_base(bottle_base(ingredient)?, f64::from(bottles)))
}

fn scale_base(base: Base, factor: f64) -> Base {
    match base {
        Base::Volume(v) => Base::Volume(v * factor),
        Base::Mass(m) => Base::Mass(m * factor),
        Base::Count(c) => Base::Count(c * factor),
    }
}

/// Size of one `unit` in base terms
fn unit_base(unit: Unit, ingredient: Option<&Ingredient>) -> Option<Base> {
    match unit {
        Unit::Bottle => bottle_base(ingredient?),
        Unit::Case => case_base(ingredient?),
        _ => simple_to_base(1.0, unit, ingredient),
    }
}

/// Convert an amount between units using an already-resolved ingredient
///
/// Returns `None` for negative or non-finite amounts, unknown units, and
/// conversions with no path (volume ↔ mass, `each` without a unit size).
/// Identical unit strings always convert, even when the unit is unknown.
#[must_use]
pub fn convert_with_ingredient(
    amount: f64,
    from_unit: &str,
    to_unit: &str,
    ingredient: Option<&Ingredient>,
) -> Option<f64> {
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }
    let from_key = normalize_unit(from_unit);
    let to_key = normalize_unit(to_unit);
    if from_key == to_key {
        return Some(amount);
    }

    let from = Unit::parse(&from_key)?;
    let to = Unit::parse(&to_key)?;
    if from == to {
        return Some(amount);
    }

    let source = scale_base(unit_base(from, ingredient)?, amount);
    let target = unit_base(to, ingredient)?;
    source.ratio(target)
}

/// Convert an amount between units, consulting the catalog for ingredient-specific units
///
/// `context_ingredient_name` is matched case-insensitively against catalog
/// names and aliases; it is only needed for `bottle`, `case` and `each`.
///
/// # Examples
///
/// ```rust
/// use barback_engine::units::convert_amount;
///
/// let ml = convert_amount(2.0, "oz", "ml", &[], None);
/// assert!((ml.unwrap_or_default() - 59.147).abs() < 1e-9);
/// ```
#[must_use]
pub fn convert_amount(
    amount: f64,
    from_unit: &str,
    to_unit: &str,
    catalog: &[Ingredient],
    context_ingredient_name: Option<&str>,
) -> Option<f64> {
    let ingredient = context_ingredient_name.and_then(|name| find_context_ingredient(name, catalog));
    convert_with_ingredient(amount, from_unit, to_unit, ingredient)
}

/// Convert an amount to milliliters
#[must_use]
pub fn to_milliliters(amount: f64, unit: &str, ingredient: Option<&Ingredient>) -> Option<f64> {
    convert_with_ingredient(amount, unit, "ml", ingredient)
}

fn find_context_ingredient<'a>(name: &str, catalog: &'a [Ingredient]) -> Option<&'a Ingredient> {
    let name = name.trim();
    catalog
        .iter()
        .find(|i| i.name.trim().eq_ignore_ascii_case(name))
        .or_else(|| {
            catalog
                .iter()
                .find(|i| i.aliases.iter().any(|a| a.trim().eq_ignore_ascii_case(name)))
        })
}
