// ABOUTME: Immutable, queryable food catalog with nutrition facts and tags
// ABOUTME: Filters by category, tag, predicate, and dietary restriction allow-lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::predicate::TagPredicate;
use super::seed;
use fitplan_core::errors::{AppError, AppResult, ErrorCode};
use fitplan_core::models::{FoodCategory, FoodItem};
use std::collections::HashSet;
use tracing::debug;

/// Keep only items satisfying every known restriction in `restrictions`
///
/// Each restriction keeps items carrying at least one tag from its allow-list;
/// several restrictions intersect. Unknown restriction names are ignored.
pub fn apply_restrictions<'a, I>(mut items: Vec<&'a FoodItem>, restrictions: I) -> Vec<&'a FoodItem>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for restriction in restrictions {
        let restriction = restriction.as_ref();
        match TagPredicate::for_restriction(restriction) {
            Some(allowed) => items.retain(|item| allowed.matches(*item)),
            None => debug!(restriction, "Ignoring unknown dietary restriction"),
        }
    }
    items
}

/// Food catalog
#[derive(Debug, Clone, Default)]
pub struct NutritionCatalog {
    items: Vec<FoodItem>,
}

impl NutritionCatalog {
    /// Build a catalog from records
    ///
    /// # Errors
    ///
    /// Returns an error if names repeat or nutrition values are negative or non-finite
    pub fn new(items: Vec<FoodItem>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.name.as_str()) {
                return Err(AppError::new(
                    ErrorCode::ResourceAlreadyExists,
                    format!("Duplicate food name '{}'", item.name),
                ));
            }
            let values = [item.calories, item.protein_g, item.carbs_g, item.fat_g];
            if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(AppError::invalid_input(format!(
                    "Food '{}' has negative or non-finite nutrition values",
                    item.name
                )));
            }
        }
        Ok(Self { items })
    }

    /// Built-in sample catalog
    #[must_use]
    pub fn sample() -> Self {
        Self {
            items: seed::sample_foods(),
        }
    }

    /// All items in catalog order
    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the catalog holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a food by exact name
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no food has that name
    pub fn get(&self, name: &str) -> AppResult<&FoodItem> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .ok_or_else(|| AppError::not_found(format!("Food '{name}'")))
    }

    /// Foods in `category`
    #[must_use]
    pub fn by_category(&self, category: FoodCategory) -> Vec<&FoodItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Foods carrying `tag`
    #[must_use]
    pub fn by_tag(&self, tag: &str) -> Vec<&FoodItem> {
        self.items.iter().filter(|item| item.has_tag(tag)).collect()
    }

    /// Foods matching an arbitrary tag predicate
    #[must_use]
    pub fn filter(&self, predicate: &TagPredicate) -> Vec<&FoodItem> {
        self.items
            .iter()
            .filter(|item| predicate.matches(*item))
            .collect()
    }

    /// Foods compatible with every restriction
    #[must_use]
    pub fn filter_by_restrictions<I>(&self, restrictions: I) -> Vec<&FoodItem>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        apply_restrictions(self.items.iter().collect(), restrictions)
    }
}
