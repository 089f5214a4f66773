// ABOUTME: Meal plan assembler building daily and weekly meal plans for a profile
// ABOUTME: Applies restriction and allergy filters, splits calories, and jitters daily targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal_composer::MealComposer;
use super::profile_calculator::UserProfile;
use super::random::RandomSource;
use crate::catalog::{apply_restrictions, NutritionCatalog};
use crate::config::{MealCounts, MealPlanConfig};
use crate::utils::rounding::{round1, round2};
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{DayMealPlan, FoodItem, MealType, Nutrition, WeekMealPlan};
use std::sync::Arc;
use tracing::{debug, info};

/// Assembles day and week meal plans from a shared food catalog
#[derive(Debug, Clone)]
pub struct MealPlanner {
    catalog: Arc<NutritionCatalog>,
    config: MealPlanConfig,
    composer: MealComposer,
}

impl MealPlanner {
    /// Create a planner over `catalog`
    #[must_use]
    pub fn new(catalog: Arc<NutritionCatalog>, config: MealPlanConfig) -> Self {
        let composer = MealComposer::new(config.composer.clone());
        Self {
            catalog,
            config,
            composer,
        }
    }

    /// Foods the profile may eat: restriction allow-lists, then allergen exclusion
    ///
    /// An allergen excludes every food whose name contains it, ignoring case.
    #[must_use]
    pub fn available_foods(&self, profile: &UserProfile) -> Vec<&FoodItem> {
        let mut foods = apply_restrictions(
            self.catalog.items().iter().collect(),
            profile.dietary_restrictions(),
        );
        if !profile.allergies().is_empty() {
            foods.retain(|item| {
                let name = item.name.to_lowercase();
                !profile
                    .allergies()
                    .iter()
                    .any(|allergen| name.contains(allergen.as_str()))
            });
        }
        foods
    }

    /// Build one day of meals around `target_calories`
    ///
    /// Main meals share the main-meal portion of the target equally, snacks the
    /// snack portion. The reported daily target carries `target_calories`, rounded
    /// to two decimals, with the profile's macro targets.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `counts.meals` is zero and `CatalogExhausted`
    /// when restrictions and allergies leave no foods
    pub fn generate_day<R>(
        &self,
        profile: &UserProfile,
        target_calories: f64,
        counts: MealCounts,
        day: u32,
        rng: &mut R,
    ) -> AppResult<DayMealPlan>
    where
        R: RandomSource + ?Sized,
    {
        if counts.meals == 0 {
            return Err(AppError::invalid_input("A day needs at least one main meal"));
        }

        let pool = self.available_foods(profile);
        if pool.is_empty() {
            return Err(AppError::catalog_exhausted(format!(
                "No foods remain for user {} after dietary restrictions and allergies",
                profile.user_id()
            )));
        }

        let per_meal = target_calories * self.config.main_meal_share / counts.meals as f64;
        let per_snack = if counts.snacks == 0 {
            0.0
        } else {
            target_calories * self.config.snack_share / counts.snacks as f64
        };

        let macros = profile.macros();
        let mut plan = DayMealPlan {
            day,
            daily_target: Nutrition {
                calories: round2(target_calories),
                protein_g: macros.protein_g,
                carbs_g: macros.carb_g,
                fat_g: macros.fat_g,
            },
            meals: Vec::with_capacity(counts.meals),
            snacks: Vec::with_capacity(counts.snacks),
            total_nutrition: Nutrition::default(),
        };

        for index in 0..counts.meals {
            let meal = self.composer.compose_meal(
                &pool,
                per_meal,
                self.config.main_protein_ratio,
                MealType::main(index),
                rng,
            )?;
            plan.total_nutrition += meal.nutrition;
            plan.meals.push(meal);
        }

        for index in 0..counts.snacks {
            let snack = self.composer.compose_meal(
                &pool,
                per_snack,
                self.config.snack_protein_ratio,
                MealType::snack(index),
                rng,
            )?;
            plan.total_nutrition += snack.nutrition;
            plan.snacks.push(snack);
        }

        plan.total_nutrition = plan.total_nutrition.map(round1);
        debug!(
            user_id = %profile.user_id(),
            day,
            target_calories,
            actual_calories = plan.total_nutrition.calories,
            "Generated daily meal plan"
        );
        Ok(plan)
    }

    /// Build `days` consecutive days of meals
    ///
    /// Meal and snack counts follow the profile's goal. Each day's calorie
    /// target is the profile target scaled by an independent uniform factor
    /// within the configured jitter bounds; macro targets are not rescaled.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `days` is zero, or any error from
    /// [`MealPlanner::generate_day`]
    pub fn generate_week<R>(
        &self,
        profile: &UserProfile,
        days: u32,
        rng: &mut R,
    ) -> AppResult<WeekMealPlan>
    where
        R: RandomSource + ?Sized,
    {
        if days == 0 {
            return Err(AppError::invalid_input("Meal plan needs at least one day"));
        }

        let counts = self.config.structure.for_goal(profile.goal());
        let mut plan = WeekMealPlan {
            user_id: profile.user_id().to_owned(),
            days: Vec::with_capacity(days as usize),
            weekly_nutrition_avg: Nutrition::default(),
        };

        for day in 1..=days {
            let adjustment = rng.uniform(self.config.jitter_min, self.config.jitter_max);
            let target = profile.target_calories() * adjustment;
            let day_plan = self.generate_day(profile, target, counts, day, rng)?;
            plan.weekly_nutrition_avg += day_plan.total_nutrition.map(|v| v / f64::from(days));
            plan.days.push(day_plan);
        }
        plan.weekly_nutrition_avg = plan.weekly_nutrition_avg.map(round1);

        info!(
            user_id = %plan.user_id,
            days,
            meals_per_day = counts.meals,
            snacks_per_day = counts.snacks,
            avg_calories = plan.weekly_nutrition_avg.calories,
            "Generated weekly meal plan"
        );
        Ok(plan)
    }
}
