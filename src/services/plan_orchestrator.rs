// ABOUTME: Plan orchestrator owning profile CRUD and combined meal and workout plan generation
// ABOUTME: FitnessPlanner wires the calculator, planners, shared catalogs, and a profile store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan orchestration
//!
//! [`FitnessPlanner`] is the single entry point an embedding application
//! needs: it validates and stores profiles, and produces meal, workout and
//! combined plans for stored profiles.

use super::profile_store::{InMemoryProfileStore, ProfileStore};
use crate::catalog::{ExerciseCatalog, NutritionCatalog};
use crate::config::PlannerConfig;
use crate::intelligence::{
    MealPlanner, ProfileCalculator, RandomSource, UserProfile, WorkoutPlanner,
};
use chrono::{Days, NaiveDate, Utc};
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{ProfileInput, WeekMealPlan, WeekWorkoutPlan};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Meal plan, workout plan, and profile snapshot generated together
#[derive(Debug, Clone, Serialize)]
pub struct CompletePlan {
    /// Profile the plan was generated for
    pub user_id: String,
    /// Profile as it was at generation time
    pub user_profile: UserProfile,
    /// Meal plan starting on `plan_start_date`
    pub meal_plan: WeekMealPlan,
    /// Workout plan for one week
    pub workout_plan: WeekWorkoutPlan,
    /// Day the plan was generated
    pub generation_date: NaiveDate,
    /// First planned day, the day after generation
    pub plan_start_date: NaiveDate,
    /// Last planned day
    pub plan_end_date: NaiveDate,
}

/// Profile management and plan generation over a pluggable profile store
pub struct FitnessPlanner<S: ProfileStore = InMemoryProfileStore> {
    calculator: ProfileCalculator,
    meal_planner: MealPlanner,
    workout_planner: WorkoutPlanner,
    store: S,
}

impl<S: ProfileStore> FitnessPlanner<S> {
    /// Create a planner from configuration, shared catalogs, and a store
    #[must_use]
    pub fn new(
        config: PlannerConfig,
        foods: Arc<NutritionCatalog>,
        exercises: Arc<ExerciseCatalog>,
        store: S,
    ) -> Self {
        let PlannerConfig {
            nutrition,
            meals,
            workouts,
        } = config;
        Self {
            calculator: ProfileCalculator::new(nutrition),
            meal_planner: MealPlanner::new(foods, meals),
            workout_planner: WorkoutPlanner::new(exercises, workouts),
            store,
        }
    }

    /// Profile calculator in use
    #[must_use]
    pub const fn calculator(&self) -> &ProfileCalculator {
        &self.calculator
    }

    /// Underlying profile store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Validate, compute, and store a new profile
    ///
    /// A missing `user_id` is replaced by the store's next sequential identifier.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad inputs or `ResourceAlreadyExists` when
    /// the identifier is taken
    pub fn create_profile(&self, mut input: ProfileInput) -> AppResult<UserProfile> {
        if input.user_id.is_none() {
            input.user_id = Some(self.store.next_id());
        }
        let profile = self.calculator.compute(&input)?;
        self.store.insert(profile.clone())?;
        info!(
            user_id = %profile.user_id(),
            goal = profile.goal().as_str(),
            target_calories = profile.target_calories(),
            "Created user profile"
        );
        Ok(profile)
    }

    /// Fetch a stored profile
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no profile has the identifier
    pub fn get_profile(&self, user_id: &str) -> AppResult<UserProfile> {
        self.store
            .get(user_id)
            .ok_or_else(|| AppError::not_found(format!("User profile '{user_id}'")))
    }

    /// Rebuild a stored profile with `updates` merged over its current inputs
    ///
    /// The identifier never changes; every derived metric is recomputed.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown profile or a validation error
    /// when the merged inputs are invalid
    pub fn update_profile(&self, user_id: &str, updates: ProfileInput) -> AppResult<UserProfile> {
        let existing = self.get_profile(user_id)?;
        let merged = ProfileInput {
            user_id: Some(existing.user_id().to_owned()),
            ..updates
        }
        .merged_over(&existing.to_input());
        let profile = self.calculator.compute(&merged)?;
        self.store.replace(profile.clone())?;
        info!(user_id = %profile.user_id(), "Updated user profile");
        Ok(profile)
    }

    /// Meal plan of `days` days for a stored profile
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown profile, `InvalidInput` when
    /// `days` is zero, or `CatalogExhausted` when no foods remain
    pub fn generate_meal_plan<R>(
        &self,
        user_id: &str,
        days: u32,
        rng: &mut R,
    ) -> AppResult<WeekMealPlan>
    where
        R: RandomSource + ?Sized,
    {
        let profile = self.get_profile(user_id)?;
        self.meal_planner.generate_week(&profile, days, rng)
    }

    /// Weekly workout plan for a stored profile
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown profile or `InvalidInput` when
    /// `days` exceeds seven
    pub fn generate_workout_plan<R>(
        &self,
        user_id: &str,
        days: Option<u8>,
        rng: &mut R,
    ) -> AppResult<WeekWorkoutPlan>
    where
        R: RandomSource + ?Sized,
    {
        let profile = self.get_profile(user_id)?;
        self.workout_planner.generate_week(&profile, days, rng)
    }

    /// Meal and workout plans generated today (UTC)
    ///
    /// # Errors
    ///
    /// See [`FitnessPlanner::generate_complete_plan_on`]
    pub fn generate_complete_plan<R>(
        &self,
        user_id: &str,
        meal_days: u32,
        workout_days: Option<u8>,
        rng: &mut R,
    ) -> AppResult<CompletePlan>
    where
        R: RandomSource + ?Sized,
    {
        let today = Utc::now().date_naive();
        self.generate_complete_plan_on(today, user_id, meal_days, workout_days, rng)
    }

    /// Meal and workout plans generated on `generation_date`
    ///
    /// The plan starts the day after `generation_date` and ends `meal_days`
    /// days after it.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown profile, or any meal or
    /// workout planning error
    pub fn generate_complete_plan_on<R>(
        &self,
        generation_date: NaiveDate,
        user_id: &str,
        meal_days: u32,
        workout_days: Option<u8>,
        rng: &mut R,
    ) -> AppResult<CompletePlan>
    where
        R: RandomSource + ?Sized,
    {
        let profile = self.get_profile(user_id)?;
        let meal_plan = self.meal_planner.generate_week(&profile, meal_days, rng)?;
        let workout_plan = self
            .workout_planner
            .generate_week(&profile, workout_days, rng)?;

        let plan_start_date = offset_date(generation_date, 1)?;
        let plan_end_date = offset_date(generation_date, u64::from(meal_days))?;

        info!(
            user_id,
            meal_days,
            workout_days = workout_plan.days_per_week,
            %plan_start_date,
            %plan_end_date,
            "Generated complete fitness plan"
        );
        Ok(CompletePlan {
            user_id: profile.user_id().to_owned(),
            user_profile: profile,
            meal_plan,
            workout_plan,
            generation_date,
            plan_start_date,
            plan_end_date,
        })
    }
}

fn offset_date(date: NaiveDate, days: u64) -> AppResult<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| AppError::internal(format!("Date {date} plus {days} days is out of range")))
}
