// ABOUTME: Immutable, queryable exercise catalog with difficulty and equipment metadata
// ABOUTME: Filters by category, muscle group, difficulty, equipment, and tag predicate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::predicate::TagPredicate;
use super::seed;
use fitplan_core::constants::equipment::ALWAYS_AVAILABLE;
use fitplan_core::errors::{AppError, AppResult, ErrorCode};
use fitplan_core::models::{Difficulty, ExerciseCategory, ExerciseItem};
use std::collections::HashSet;

/// Predicate accepting exercises that can be done with `available` equipment
///
/// Equipment marked "none" or "bodyweight" is always available.
pub fn equipment_predicate<I>(available: I) -> TagPredicate
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    TagPredicate::any_of(
        available
            .into_iter()
            .map(|name| name.as_ref().to_owned())
            .chain(ALWAYS_AVAILABLE.iter().map(|name| (*name).to_owned())),
    )
}

/// True when `item` can be performed with the equipment accepted by `predicate`
#[must_use]
pub fn is_usable(item: &ExerciseItem, predicate: &TagPredicate) -> bool {
    item.equipment.is_empty() || predicate.matches(item)
}

/// Exercise catalog
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    items: Vec<ExerciseItem>,
}

impl ExerciseCatalog {
    /// Build a catalog from records
    ///
    /// # Errors
    ///
    /// Returns an error if two exercises share a name
    pub fn new(items: Vec<ExerciseItem>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.name.as_str()) {
                return Err(AppError::new(
                    ErrorCode::ResourceAlreadyExists,
                    format!("Duplicate exercise name '{}'", item.name),
                ));
            }
        }
        Ok(Self { items })
    }

    /// Built-in sample catalog
    #[must_use]
    pub fn sample() -> Self {
        Self {
            items: seed::sample_exercises(),
        }
    }

    /// All items in catalog order
    #[must_use]
    pub fn items(&self) -> &[ExerciseItem] {
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

    /// Look up an exercise by exact name
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no exercise has that name
    pub fn get(&self, name: &str) -> AppResult<&ExerciseItem> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .ok_or_else(|| AppError::not_found(format!("Exercise '{name}'")))
    }

    /// Exercises in `category`
    #[must_use]
    pub fn by_category(&self, category: ExerciseCategory) -> Vec<&ExerciseItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Exercises training `muscle_group`
    #[must_use]
    pub fn by_muscle_group(&self, muscle_group: &str) -> Vec<&ExerciseItem> {
        self.items
            .iter()
            .filter(|item| item.muscle_group == muscle_group)
            .collect()
    }

    /// Exercises rated `difficulty`
    #[must_use]
    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&ExerciseItem> {
        self.items
            .iter()
            .filter(|item| item.difficulty == difficulty)
            .collect()
    }

    /// Exercises that can be performed with `available` equipment
    #[must_use]
    pub fn by_equipment<I>(&self, available: I) -> Vec<&ExerciseItem>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let predicate = equipment_predicate(available);
        self.items
            .iter()
            .filter(|item| is_usable(item, &predicate))
            .collect()
    }

    /// Exercises whose equipment set matches an arbitrary tag predicate
    #[must_use]
    pub fn filter(&self, predicate: &TagPredicate) -> Vec<&ExerciseItem> {
        self.items
            .iter()
            .filter(|item| predicate.matches(*item))
            .collect()
    }
}
