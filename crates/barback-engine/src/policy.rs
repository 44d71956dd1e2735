// ABOUTME: Injectable batch/service classification for recipe lines without an explicit override
// ABOUTME: Default policy keeps citrus, juice, garnish and ice out of the pre-mixed batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use barback_core::config::BatchingConfig;
use barback_core::constants::service::{DEFAULT_CITRUS_KEYWORDS, DEFAULT_SERVICE_CATEGORIES};
use barback_core::models::{BatchRole, Ingredient, RecipeLine};

use crate::resolver::normalize_name;

/// Decides whether a line belongs in the batch when the user has not said
pub trait LineClassifier {
    /// Classify a line given its resolved ingredient (if any)
    fn classify(&self, line: &RecipeLine, ingredient: Option<&Ingredient>) -> BatchRole;
}

impl<F> LineClassifier for F
where
    F: Fn(&RecipeLine, Option<&Ingredient>) -> BatchRole,
{
    fn classify(&self, line: &RecipeLine, ingredient: Option<&Ingredient>) -> BatchRole {
        self(line, ingredient)
    }
}

/// Category and citrus-keyword lookup tables
///
/// A line is prepared at service when its ingredient's category is one of
/// `service_categories`, or when a citrus keyword appears in the line name or
/// the matched ingredient's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultServicePolicy {
    service_categories: Vec<String>,
    citrus_keywords: Vec<String>,
}

impl Default for DefaultServicePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_CATEGORIES, DEFAULT_CITRUS_KEYWORDS)
    }
}

impl DefaultServicePolicy {
    /// Build a policy from explicit tables
    #[must_use]
    pub fn new<S: AsRef<str>>(service_categories: &[S], citrus_keywords: &[S]) -> Self {
        let normalize = |items: &[S]| {
            items
                .iter()
                .map(|s| normalize_name(s.as_ref()))
                .filter(|s| !s.is_empty())
                .collect()
        };
        Self {
            service_categories: normalize(service_categories),
            citrus_keywords: normalize(citrus_keywords),
        }
    }

    /// Build a policy from engine configuration
    #[must_use]
    pub fn from_config(config: &BatchingConfig) -> Self {
        Self::new(
            config.service_categories.as_slice(),
            config.citrus_keywords.as_slice(),
        )
    }

    fn is_service_category(&self, category: &str) -> bool {
        let category = normalize_name(category);
        self.service_categories.iter().any(|c| *c == category)
    }

    fn mentions_citrus(&self, name: &str) -> bool {
        let name = normalize_name(name);
        name.split(|c: char| !c.is_alphanumeric())
            .any(|word| self.citrus_keywords.iter().any(|k| k == word))
    }

    fn is_citrus_line(&self, line: &RecipeLine, ingredient: Option<&Ingredient>) -> bool {
        self.mentions_citrus(&line.ingredient_name)
            || ingredient.is_some_and(|i| self.mentions_citrus(&i.name))
    }
}

impl LineClassifier for DefaultServicePolicy {
    fn classify(&self, line: &RecipeLine, ingredient: Option<&Ingredient>) -> BatchRole {
        if ingredient.is_some_and(|i| self.is_service_category(&i.category)) {
            return BatchRole::Service;
        }
        if self.is_citrus_line(line, ingredient) {
            BatchRole::Service
        } else {
            BatchRole::Batch
        }
    }
}

/// [`DefaultServicePolicy`] that keeps alcoholic citrus-named ingredients in the batch
///
/// Orange liqueurs and citrus vodkas match the citrus keywords but keep
/// without going off, so only non-alcoholic or unmatched citrus lines go to
/// service. Category rules still apply unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlcoholAwareServicePolicy {
    base: DefaultServicePolicy,
}

impl AlcoholAwareServicePolicy {
    /// Wrap an existing lookup table policy
    #[must_use]
    pub const fn new(base: DefaultServicePolicy) -> Self {
        Self { base }
    }
}

impl LineClassifier for AlcoholAwareServicePolicy {
    fn classify(&self, line: &RecipeLine, ingredient: Option<&Ingredient>) -> BatchRole {
        if ingredient.is_some_and(|i| self.base.is_service_category(&i.category)) {
            return BatchRole::Service;
        }
        let non_alcoholic = ingredient.is_none_or(Ingredient::is_non_alcoholic);
        if non_alcoholic && self.base.is_citrus_line(line, ingredient) {
            BatchRole::Service
        } else {
            BatchRole::Batch
        }
    }
}

/// Pick the configured classifier
#[must_use]
pub fn service_policy_from_config(config: &BatchingConfig) -> Box<dyn LineClassifier + Send + Sync> {
    let base = DefaultServicePolicy::from_config(config);
    if config.keep_alcoholic_citrus_in_batch {
        Box::new(AlcoholAwareServicePolicy::new(base))
    } else {
        Box::new(base)
    }
}
