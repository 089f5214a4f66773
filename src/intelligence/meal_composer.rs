// ABOUTME: Meal composer selecting protein, carb, fat, and vegetable items for one meal
// ABOUTME: Uses a per-meal-type rule table, fallback pools, and clamped serving multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Composer
//!
//! A meal is built in four steps from a pre-filtered pool of foods:
//!
//! 1. A protein source sized to 80% of the meal's protein target
//! 2. A carbohydrate source covering part of the remaining calories
//! 3. A fat source covering part of what is still left
//! 4. One serving of vegetables (main meals only)
//!
//! Which foods count as "protein" or "carb" depends on the meal slot and is
//! looked up in [`MEAL_RULES`].

use super::random::{choose, choose_many, RandomSource};
use crate::catalog::TagPredicate;
use crate::config::{MealComposerConfig, MultiplierRange};
use crate::utils::rounding::round1;
use fitplan_core::constants::energy::KCAL_PER_GRAM_PROTEIN;
use fitplan_core::constants::meals::{
    TAG_BREAKFAST, TAG_COMPLEX_CARBS, TAG_HIGH_PROTEIN, TAG_QUICK_ENERGY, TAG_SNACK,
    TAG_WHOLE_GRAIN,
};
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{FoodCategory, FoodItem, Meal, MealFood, MealType, Nutrition};
use tracing::debug;

/// How a pool of candidate foods is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodSelector {
    /// Items carrying at least one of the tags
    AnyTag(&'static [&'static str]),
    /// Items in the category
    Category(FoodCategory),
}

impl FoodSelector {
    /// Items of `pool` accepted by this selector
    #[must_use]
    pub fn select<'a>(&self, pool: &[&'a FoodItem]) -> Vec<&'a FoodItem> {
        match *self {
            Self::AnyTag(tags) => {
                let predicate = TagPredicate::any_of(tags.iter().copied());
                pool.iter()
                    .copied()
                    .filter(|item| predicate.matches(*item))
                    .collect()
            }
            Self::Category(category) => pool
                .iter()
                .copied()
                .filter(|item| item.category == category)
                .collect(),
        }
    }
}

/// Meal slots that select foods differently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    /// First meal of the day
    Breakfast,
    /// Any snack
    Snack,
    /// Meal following training
    PostWorkout,
    /// Lunch, dinner, pre-workout, and numbered meals
    Standard,
}

impl From<MealType> for MealSlot {
    fn from(meal_type: MealType) -> Self {
        match meal_type {
            MealType::Breakfast => Self::Breakfast,
            MealType::Snack(_) => Self::Snack,
            MealType::PostWorkout => Self::PostWorkout,
            MealType::Lunch | MealType::Dinner | MealType::PreWorkout | MealType::Numbered(_) => {
                Self::Standard
            }
        }
    }
}

/// Protein and carb selectors for one meal slot
#[derive(Debug, Clone, Copy)]
pub struct MealRule {
    /// Slot the rule applies to
    pub slot: MealSlot,
    /// Protein pool selector
    pub protein: FoodSelector,
    /// Carbohydrate pool selector
    pub carb: FoodSelector,
}

/// Selection rules per meal slot
pub static MEAL_RULES: [MealRule; 4] = [
    MealRule {
        slot: MealSlot::Breakfast,
        protein: FoodSelector::AnyTag(&[TAG_BREAKFAST, TAG_HIGH_PROTEIN]),
        carb: FoodSelector::AnyTag(&[TAG_BREAKFAST, TAG_WHOLE_GRAIN]),
    },
    MealRule {
        slot: MealSlot::Snack,
        protein: FoodSelector::AnyTag(&[TAG_SNACK, TAG_HIGH_PROTEIN]),
        carb: FoodSelector::AnyTag(&[TAG_SNACK, TAG_QUICK_ENERGY]),
    },
    MealRule {
        slot: MealSlot::PostWorkout,
        protein: FoodSelector::Category(FoodCategory::Protein),
        carb: FoodSelector::AnyTag(&[TAG_QUICK_ENERGY, TAG_COMPLEX_CARBS]),
    },
    MealRule {
        slot: MealSlot::Standard,
        protein: FoodSelector::Category(FoodCategory::Protein),
        carb: FoodSelector::Category(FoodCategory::Carb),
    },
];

/// Rule for `meal_type`
#[must_use]
pub fn rule_for(meal_type: MealType) -> &'static MealRule {
    let slot = MealSlot::from(meal_type);
    MEAL_RULES
        .iter()
        .find(|rule| rule.slot == slot)
        .unwrap_or(&MEAL_RULES[MEAL_RULES.len() - 1])
}

/// Candidate pools for one meal after fallbacks
struct MealPools<'a> {
    protein: Vec<&'a FoodItem>,
    carb: Vec<&'a FoodItem>,
    fat: Vec<&'a FoodItem>,
    vegetable: Vec<&'a FoodItem>,
}

/// Composes single meals from a food pool
#[derive(Debug, Clone, Default)]
pub struct MealComposer {
    config: MealComposerConfig,
}

impl MealComposer {
    /// Create a composer with the given serving rules
    #[must_use]
    pub const fn new(config: MealComposerConfig) -> Self {
        Self { config }
    }

    /// Compose one meal of roughly `target_calories` from `pool`
    ///
    /// `protein_ratio` is the share of the meal's calories that should come
    /// from protein.
    ///
    /// # Errors
    ///
    /// Returns `CatalogExhausted` when `pool` is empty
    pub fn compose_meal<R>(
        &self,
        pool: &[&FoodItem],
        target_calories: f64,
        protein_ratio: f64,
        meal_type: MealType,
        rng: &mut R,
    ) -> AppResult<Meal>
    where
        R: RandomSource + ?Sized,
    {
        if pool.is_empty() {
            return Err(AppError::catalog_exhausted(format!(
                "No foods available to compose {meal_type}"
            )));
        }

        let pools = self.build_pools(pool, meal_type, rng);
        let cfg = &self.config;
        let mut meal = Meal {
            meal_type,
            foods: Vec::new(),
            nutrition: Nutrition::default(),
        };

        let protein_target_g = target_calories * protein_ratio / KCAL_PER_GRAM_PROTEIN;
        if let Some(item) = choose(rng, &pools.protein) {
            let multiplier = scaled_servings(
                protein_target_g * cfg.protein_source_share,
                item.protein_g,
                cfg.protein_servings,
            );
            add_food(&mut meal, item, multiplier);
        } else {
            debug!(%meal_type, "No protein source available");
        }

        let remaining = target_calories - meal.nutrition.calories;
        if remaining > cfg.carb_min_remaining_kcal {
            if let Some(item) = choose(rng, &pools.carb) {
                let multiplier =
                    scaled_servings(remaining * cfg.carb_share, item.calories, cfg.carb_servings);
                add_food(&mut meal, item, multiplier);
            }
        }

        let remaining = target_calories - meal.nutrition.calories;
        if remaining > cfg.fat_min_remaining_kcal {
            if let Some(item) = choose(rng, &pools.fat) {
                let multiplier =
                    scaled_servings(remaining * cfg.fat_share, item.calories, cfg.fat_servings);
                add_food(&mut meal, item, multiplier);
            }
        }

        if !meal_type.is_snack() {
            if let Some(item) = choose(rng, &pools.vegetable) {
                add_food(&mut meal, item, 1.0);
            }
        }

        Ok(meal)
    }

    fn build_pools<'a, R>(
        &self,
        pool: &[&'a FoodItem],
        meal_type: MealType,
        rng: &mut R,
    ) -> MealPools<'a>
    where
        R: RandomSource + ?Sized,
    {
        let cfg = &self.config;
        let rule = rule_for(meal_type);

        let mut protein = rule.protein.select(pool);
        if protein.is_empty() {
            debug!(%meal_type, "Protein pool empty, falling back to protein-rich foods");
            protein = filter_pool(pool, |item| item.protein_g > cfg.fallback_protein_min_g);
        }

        let mut carb = rule.carb.select(pool);
        if carb.is_empty() {
            debug!(%meal_type, "Carb pool empty, falling back to carb-rich foods");
            carb = filter_pool(pool, |item| item.carbs_g > cfg.fallback_carbs_min_g);
        }

        let mut fat = FoodSelector::Category(FoodCategory::Fat).select(pool);
        if fat.is_empty() {
            debug!(%meal_type, "Fat pool empty, falling back to fat-containing foods");
            fat = filter_pool(pool, |item| item.fat_g > cfg.fallback_fat_min_g);
        }

        let mut vegetable = FoodSelector::Category(FoodCategory::Vegetable).select(pool);
        if vegetable.is_empty() && !meal_type.is_snack() {
            debug!(%meal_type, "Vegetable pool empty, sampling from the whole pool");
            vegetable = choose_many(rng, pool, cfg.fallback_vegetable_sample);
        }

        MealPools {
            protein,
            carb,
            fat,
            vegetable,
        }
    }
}

fn filter_pool<'a>(pool: &[&'a FoodItem], keep: impl Fn(&FoodItem) -> bool) -> Vec<&'a FoodItem> {
    pool.iter().copied().filter(|item| keep(*item)).collect()
}

/// Servings needed to supply `wanted` units from an item providing `per_serving`
///
/// Items providing nothing get the smallest allowed serving.
fn scaled_servings(wanted: f64, per_serving: f64, range: MultiplierRange) -> f64 {
    if per_serving <= 0.0 || !wanted.is_finite() {
        return range.min;
    }
    range.clamp(wanted / per_serving)
}

fn add_food(meal: &mut Meal, item: &FoodItem, multiplier: f64) {
    let nutrition = item.nutrition().map(|value| round1(value * multiplier));
    meal.foods.push(MealFood {
        name: item.name.clone(),
        servings: round1(multiplier),
        serving_size: item.serving_size.clone(),
        nutrition,
    });
    meal.nutrition += nutrition;
    meal.nutrition = meal.nutrition.map(round1);
}
