// ABOUTME: Resolves free-text recipe lines to canonical catalog ingredients and prep actions
// ABOUTME: Splits "Lime - Juiced" / "Lemon Juice" style names and matches by id, name or alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ingredient Resolver
//!
//! Matching order for lines without an explicit id:
//!
//! 1. exact name, then exact alias, on the full normalized line
//! 2. exact name, then exact alias, on the base name (qualifier removed)
//! 3. the longest catalog name that appears as whole words inside the line
//! 4. the shortest catalog name that contains the base name as whole words
//!
//! Ties always go to the earlier catalog entry, so results never depend on
//! anything but the inputs.

use barback_core::constants::service::{PREP_DELIMITER, PREP_QUALIFIERS};
use barback_core::models::{Ingredient, LineRef, PrepAction, RecipeLine};
use tracing::debug;
use uuid::Uuid;

/// Result of resolving one recipe line
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    /// Matched catalog ingredient
    pub ingredient: Option<&'a Ingredient>,
    /// Matched prep action of that ingredient
    pub prep_action: Option<&'a PrepAction>,
    /// Name to show for the line
    pub display_name: String,
}

impl<'a> Resolution<'a> {
    fn unresolved(line_name: &str) -> Self {
        Self {
            ingredient: None,
            prep_action: None,
            display_name: line_name.to_owned(),
        }
    }

    fn matched(ingredient: &'a Ingredient, prep_action: Option<&'a PrepAction>) -> Self {
        let display_name = match prep_action {
            Some(prep) => format!("{}{PREP_DELIMITER}{}", ingredient.name, prep.name),
            None => ingredient.name.clone(),
        };
        Self {
            ingredient: Some(ingredient),
            prep_action,
            display_name,
        }
    }

    /// Whether a catalog ingredient was found
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.ingredient.is_some()
    }
}

/// A normalized line name split into base ingredient and prep qualifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitName {
    /// Normalized full line
    pub full: String,
    /// Normalized base ingredient name
    pub base: String,
    /// Normalized prep qualifier, if any
    pub qualifier: Option<String>,
}

/// Lower-case and collapse whitespace
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Split a line name on the prep delimiter or a trailing qualifier word
#[must_use]
pub fn split_line_name(line_name: &str) -> SplitName {
    let full = normalize_name(line_name);

    if let Some((base, qualifier)) = full.split_once(PREP_DELIMITER) {
        let base = base.trim();
        let qualifier = qualifier.trim();
        if !base.is_empty() && !qualifier.is_empty() {
            return SplitName {
                base: base.to_owned(),
                qualifier: Some(qualifier.to_owned()),
                full,
            };
        }
    }

    if let Some((base, last)) = full.rsplit_once(' ') {
        if PREP_QUALIFIERS.contains(&last) {
            return SplitName {
                base: base.trim().to_owned(),
                qualifier: Some(last.to_owned()),
                full,
            };
        }
    }

    SplitName {
        base: full.clone(),
        qualifier: None,
        full,
    }
}

/// Crude suffix stemmer so "juiced" matches "juice" and "wedges" matches "wedge"
fn stem(word: &str) -> &str {
    for suffix in ["ed", "es", "s", "e"] {
        if let Some(stripped) = word.strip_suffix(suffix) {
            if stripped.len() >= 3 {
                return stripped;
            }
        }
    }
    word
}

/// Whether `needle` occurs in `haystack` on word boundaries
fn contains_words(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && format!(" {haystack} ").contains(&format!(" {needle} "))
}

fn match_prep_action<'a>(ingredient: &'a Ingredient, qualifier: &str) -> Option<&'a PrepAction> {
    let qualifier_stem = stem(qualifier);
    let by_whole_name = ingredient.prep_actions.iter().find(|prep| {
        let name = normalize_name(&prep.name);
        name == qualifier || stem(&name) == qualifier_stem
    });
    by_whole_name.or_else(|| {
        ingredient.prep_actions.iter().find(|prep| {
            normalize_name(&prep.name)
                .split(' ')
                .any(|word| qualifier.split(' ').any(|q| stem(word) == stem(q)))
        })
    })
}

fn has_alias(ingredient: &Ingredient, normalized: &str) -> bool {
    ingredient
        .aliases
        .iter()
        .any(|alias| normalize_name(alias) == normalized)
}

fn find_exact<'a>(normalized: &str, catalog: &'a [Ingredient]) -> Option<&'a Ingredient> {
    catalog
        .iter()
        .find(|i| normalize_name(&i.name) == normalized)
        .or_else(|| catalog.iter().find(|i| has_alias(i, normalized)))
}

/// Longest catalog name contained in the line, then shortest name containing the base
fn find_partial<'a>(split: &SplitName, catalog: &'a [Ingredient]) -> Option<&'a Ingredient> {
    let mut best: Option<(usize, &Ingredient)> = None;
    for ingredient in catalog {
        let name = normalize_name(&ingredient.name);
        if contains_words(&split.full, &name) && best.is_none_or(|(len, _)| name.len() > len) {
            best = Some((name.len(), ingredient));
        }
    }
    if let Some((_, ingredient)) = best {
        return Some(ingredient);
    }

    for ingredient in catalog {
        let name = normalize_name(&ingredient.name);
        if contains_words(&name, &split.base) && best.is_none_or(|(len, _)| name.len() < len) {
            best = Some((name.len(), ingredient));
        }
    }
    best.map(|(_, ingredient)| ingredient)
}

/// Prep action named by the qualifier, unless the ingredient name already includes it
fn qualifier_prep<'a>(ingredient: &'a Ingredient, split: &SplitName) -> Option<&'a PrepAction> {
    let qualifier = split.qualifier.as_deref()?;
    if contains_words(&normalize_name(&ingredient.name), qualifier) {
        return None;
    }
    match_prep_action(ingredient, qualifier)
}

/// Resolve a free-text line name to a catalog ingredient
///
/// An `explicit_id` found in the catalog wins outright; the line name is then
/// only used to pick a prep action. Never fails: an unmatched line comes back
/// with no ingredient and its original name.
#[must_use]
pub fn resolve_ingredient_line<'a>(
    line_name: &str,
    explicit_id: Option<Uuid>,
    catalog: &'a [Ingredient],
) -> Resolution<'a> {
    let split = split_line_name(line_name);

    if let Some(id) = explicit_id {
        if let Some(ingredient) = catalog.iter().find(|i| i.id == id) {
            return Resolution::matched(ingredient, qualifier_prep(ingredient, &split));
        }
        debug!(line = line_name, %id, "explicit ingredient id not in catalog, matching by name");
    }

    if split.full.is_empty() {
        return Resolution::unresolved(line_name);
    }

    if let Some(ingredient) = find_exact(&split.full, catalog) {
        return Resolution::matched(ingredient, None);
    }

    let by_base = if split.base == split.full {
        None
    } else {
        find_exact(&split.base, catalog)
    };

    match by_base.or_else(|| find_partial(&split, catalog)) {
        Some(ingredient) => Resolution::matched(ingredient, qualifier_prep(ingredient, &split)),
        None => {
            debug!(line = line_name, "no catalog ingredient matched");
            Resolution::unresolved(line_name)
        }
    }
}

/// Resolve a recipe line, honouring its linked ingredient and prep action ids
#[must_use]
pub fn resolve_line<'a>(line: &RecipeLine, catalog: &'a [Ingredient]) -> Resolution<'a> {
    match line.line_ref() {
        LineRef::ByName(name) => resolve_ingredient_line(&name, None, catalog),
        LineRef::ById { id, prep_action_id } => {
            let resolution = resolve_ingredient_line(&line.ingredient_name, Some(id), catalog);
            let linked_prep = resolution
                .ingredient
                .zip(prep_action_id)
                .and_then(|(ingredient, prep_id)| ingredient.prep_action(prep_id));
            match (resolution.ingredient, linked_prep) {
                (Some(ingredient), Some(prep)) => Resolution::matched(ingredient, Some(prep)),
                _ => resolution,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_delimiter() {
        let split = split_line_name("  Lime  -  Juiced ");
        assert_eq!(split.base, "lime");
        assert_eq!(split.qualifier.as_deref(), Some("juiced"));
    }

    #[test]
    fn test_split_on_trailing_qualifier() {
        let split = split_line_name("Fresh Lemon Juice");
        assert_eq!(split.base, "fresh lemon");
        assert_eq!(split.qualifier.as_deref(), Some("juice"));

        let plain = split_line_name("Juice");
        assert_eq!(plain.base, "juice");
        assert_eq!(plain.qualifier, None);
    }

    #[test]
    fn test_stem() {
        assert_eq!(stem("juiced"), stem("juice"));
        assert_eq!(stem("wedges"), stem("wedge"));
        assert_eq!(stem("zested"), "zest");
    }

    #[test]
    fn test_word_boundaries() {
        assert!(contains_words("plymouth gin", "gin"));
        assert!(!contains_words("ginger syrup", "gin"));
    }
}
