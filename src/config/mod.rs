// ABOUTME: Planner configuration combining nutrition, meal, and workout parameters
// ABOUTME: Loads defaults, applies FITPLAN_* environment overrides, and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration
//!
//! Every tunable number used by the profile calculator, meal composer and
//! session composer lives here with its documented default. Configuration is
//! passed explicitly to the components that need it; there is no global
//! instance.

/// Configuration error types
pub mod error;
/// Meal distribution and portion sizing
pub mod meals;
/// Metabolic coefficients and profile limits
pub mod nutrition;
/// Session sizing
pub mod workouts;

pub use error::ConfigError;
pub use meals::{MealComposerConfig, MealCounts, MealPlanConfig, MealStructureConfig, MultiplierRange};
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalCalorieConfig, MacroDistribution, MacroSplitConfig,
    NutritionConfig, ProfileLimitsConfig,
};
pub use workouts::WorkoutPlanConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Top-level planner configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Profile calculator coefficients
    pub nutrition: NutritionConfig,
    /// Meal plan assembly
    pub meals: MealPlanConfig,
    /// Workout session sizing
    pub workouts: WorkoutPlanConfig,
}

impl PlannerConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override fails to parse or the result is invalid
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Apply environment variable overrides
        config = config.apply_env_overrides()?;

        // Validate the final configuration
        config.validate()?;

        debug!(?config, "Planner configuration loaded");
        Ok(config)
    }

    /// Validate every configuration section
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.meals.validate()?;
        self.workouts.validate()?;
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Activity multipliers
        let factors = &mut self.nutrition.activity_factors;
        Self::apply_env_var("FITPLAN_ACTIVITY_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var("FITPLAN_ACTIVITY_LIGHTLY_ACTIVE", &mut factors.lightly_active)?;
        Self::apply_env_var(
            "FITPLAN_ACTIVITY_MODERATELY_ACTIVE",
            &mut factors.moderately_active,
        )?;
        Self::apply_env_var("FITPLAN_ACTIVITY_VERY_ACTIVE", &mut factors.very_active)?;
        Self::apply_env_var("FITPLAN_ACTIVITY_EXTRA_ACTIVE", &mut factors.extra_active)?;

        // Goal calorie factors
        let goals = &mut self.nutrition.goal_calories;
        Self::apply_env_var("FITPLAN_WEIGHT_LOSS_FACTOR", &mut goals.weight_loss_factor)?;
        Self::apply_env_var("FITPLAN_MUSCLE_GAIN_FACTOR", &mut goals.muscle_gain_factor)?;

        // Profile limits
        let limits = &mut self.nutrition.limits;
        Self::apply_env_var("FITPLAN_MAX_AGE", &mut limits.max_age)?;
        Self::apply_env_var("FITPLAN_MAX_HEIGHT_CM", &mut limits.max_height_cm)?;
        Self::apply_env_var("FITPLAN_MAX_WEIGHT_KG", &mut limits.max_weight_kg)?;

        // Meal distribution
        let meals = &mut self.meals;
        Self::apply_env_var("FITPLAN_MAIN_MEAL_SHARE", &mut meals.main_meal_share)?;
        Self::apply_env_var("FITPLAN_SNACK_SHARE", &mut meals.snack_share)?;
        Self::apply_env_var("FITPLAN_MAIN_PROTEIN_RATIO", &mut meals.main_protein_ratio)?;
        Self::apply_env_var("FITPLAN_SNACK_PROTEIN_RATIO", &mut meals.snack_protein_ratio)?;
        Self::apply_env_var("FITPLAN_JITTER_MIN", &mut meals.jitter_min)?;
        Self::apply_env_var("FITPLAN_JITTER_MAX", &mut meals.jitter_max)?;

        // Session sizing
        let workouts = &mut self.workouts;
        Self::apply_env_var(
            "FITPLAN_WARM_UP_COOL_DOWN_MINUTES",
            &mut workouts.warm_up_cool_down_minutes,
        )?;
        Self::apply_env_var(
            "FITPLAN_MINUTES_PER_EXERCISE",
            &mut workouts.minutes_per_exercise,
        )?;

        Ok(self)
    }
}
