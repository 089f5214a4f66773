// ABOUTME: Profile calculator deriving BMI, BMR, TDEE, calorie target, and macro grams
// ABOUTME: Validates raw profile inputs and builds immutable UserProfile values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile Calculator
//!
//! Implements the Mifflin-St Jeor resting energy equation and the activity
//! multiplier model for daily expenditure. Every derived value is rounded to
//! two decimals as soon as it is computed, and later steps consume the
//! rounded value.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{MacroDistribution, NutritionConfig};
use crate::utils::rounding::round2;
use fitplan_core::constants::energy::{
    KCAL_PER_GRAM_CARB, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use fitplan_core::constants::profile_defaults;
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{
    ActivityLevel, ExperienceLevel, FitnessGoal, Gender, MacroTargets, ProfileInput,
    ProfileMetrics,
};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// A validated profile with its derived metabolic metrics
///
/// Fields are private: a profile is only produced by [`ProfileCalculator::compute`],
/// so the metrics always match the inputs. Updating a profile means building a new
/// one from merged inputs (see [`UserProfile::to_input`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    user_id: String,
    age: u32,
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
    goal: FitnessGoal,
    activity_level: ActivityLevel,
    dietary_restrictions: BTreeSet<String>,
    allergies: BTreeSet<String>,
    fitness_experience: ExperienceLevel,
    preferred_workout_days: u8,
    workout_duration_minutes: u32,
    available_equipment: BTreeSet<String>,
    health_conditions: Vec<String>,
    favorite_foods: Vec<String>,
    disliked_foods: Vec<String>,
    #[serde(flatten)]
    metrics: ProfileMetrics,
}

impl UserProfile {
    /// Store identifier
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Age in years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Biological sex used by the BMR equation
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Training goal
    #[must_use]
    pub const fn goal(&self) -> FitnessGoal {
        self.goal
    }

    /// Daily activity level
    #[must_use]
    pub const fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }

    /// Normalized lowercase restriction names
    #[must_use]
    pub const fn dietary_restrictions(&self) -> &BTreeSet<String> {
        &self.dietary_restrictions
    }

    /// Lowercase allergen substrings
    #[must_use]
    pub const fn allergies(&self) -> &BTreeSet<String> {
        &self.allergies
    }

    /// Training experience
    #[must_use]
    pub const fn fitness_experience(&self) -> ExperienceLevel {
        self.fitness_experience
    }

    /// Training days per week
    #[must_use]
    pub const fn preferred_workout_days(&self) -> u8 {
        self.preferred_workout_days
    }

    /// Session length in minutes
    #[must_use]
    pub const fn workout_duration_minutes(&self) -> u32 {
        self.workout_duration_minutes
    }

    /// Lowercase equipment names
    #[must_use]
    pub const fn available_equipment(&self) -> &BTreeSet<String> {
        &self.available_equipment
    }

    /// Free-form health notes
    #[must_use]
    pub fn health_conditions(&self) -> &[String] {
        &self.health_conditions
    }

    /// Preferred foods
    #[must_use]
    pub fn favorite_foods(&self) -> &[String] {
        &self.favorite_foods
    }

    /// Foods to avoid
    #[must_use]
    pub fn disliked_foods(&self) -> &[String] {
        &self.disliked_foods
    }

    /// All derived metrics
    #[must_use]
    pub const fn metrics(&self) -> &ProfileMetrics {
        &self.metrics
    }

    /// Body mass index
    #[must_use]
    pub const fn bmi(&self) -> f64 {
        self.metrics.bmi
    }

    /// Basal metabolic rate in kcal/day
    #[must_use]
    pub const fn bmr(&self) -> f64 {
        self.metrics.bmr
    }

    /// Total daily energy expenditure in kcal/day
    #[must_use]
    pub const fn tdee(&self) -> f64 {
        self.metrics.tdee
    }

    /// Daily calorie target
    #[must_use]
    pub const fn target_calories(&self) -> f64 {
        self.metrics.target_calories
    }

    /// Macro gram targets
    #[must_use]
    pub const fn macros(&self) -> MacroTargets {
        self.metrics.macros
    }

    /// Raw inputs that rebuild this profile
    #[must_use]
    pub fn to_input(&self) -> ProfileInput {
        let list = |set: &BTreeSet<String>| Some(set.iter().cloned().collect::<Vec<_>>());
        ProfileInput {
            user_id: Some(self.user_id.clone()),
            age: Some(i64::from(self.age)),
            gender: Some(self.gender.as_str().to_owned()),
            height_cm: Some(self.height_cm),
            weight_kg: Some(self.weight_kg),
            goal: Some(self.goal.as_str().to_owned()),
            activity_level: Some(self.activity_level.as_str().to_owned()),
            dietary_restrictions: list(&self.dietary_restrictions),
            allergies: list(&self.allergies),
            fitness_experience: Some(self.fitness_experience.as_str().to_owned()),
            preferred_workout_days: Some(i64::from(self.preferred_workout_days)),
            workout_duration_minutes: Some(i64::from(self.workout_duration_minutes)),
            available_equipment: list(&self.available_equipment),
            health_conditions: Some(self.health_conditions.clone()),
            favorite_foods: Some(self.favorite_foods.clone()),
            disliked_foods: Some(self.disliked_foods.clone()),
        }
    }
}

/// Computes profile metrics from validated inputs
#[derive(Debug, Clone, Default)]
pub struct ProfileCalculator {
    config: NutritionConfig,
}

impl ProfileCalculator {
    /// Create a calculator with the given coefficients
    #[must_use]
    pub const fn new(config: NutritionConfig) -> Self {
        Self { config }
    }

    /// Coefficients in use
    #[must_use]
    pub const fn config(&self) -> &NutritionConfig {
        &self.config
    }

    /// Body mass index: weight / height(m)², 2 decimals
    #[must_use]
    pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
        let height_m = height_cm / 100.0;
        round2(weight_kg / (height_m * height_m))
    }

    /// Mifflin-St Jeor basal metabolic rate, 2 decimals
    #[must_use]
    pub fn calculate_bmr(&self, weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
        let bmr = &self.config.bmr;
        let gender_constant = match gender {
            Gender::Male => bmr.msj_male_constant,
            Gender::Female => bmr.msj_female_constant,
        };
        round2(
            bmr.msj_weight_coef * weight_kg
                + bmr.msj_height_coef * height_cm
                + bmr.msj_age_coef * f64::from(age)
                + gender_constant,
        )
    }

    /// Total daily energy expenditure: BMR × activity multiplier, 2 decimals
    #[must_use]
    pub fn calculate_tdee(&self, bmr: f64, activity_level: ActivityLevel) -> f64 {
        round2(bmr * self.config.activity_factors.factor(activity_level))
    }

    /// Daily calorie target for `goal`, 2 decimals
    #[must_use]
    pub fn calculate_target_calories(&self, tdee: f64, goal: FitnessGoal) -> f64 {
        round2(tdee * self.config.goal_calories.factor(goal))
    }

    /// Macro gram targets for `goal` at `target_calories`
    #[must_use]
    pub fn calculate_macros(&self, target_calories: f64, goal: FitnessGoal) -> MacroTargets {
        let MacroDistribution {
            protein_ratio,
            fat_ratio,
            carb_ratio,
        } = self.config.macro_splits.for_goal(goal);
        MacroTargets {
            protein_g: round2(target_calories * protein_ratio / KCAL_PER_GRAM_PROTEIN),
            fat_g: round2(target_calories * fat_ratio / KCAL_PER_GRAM_FAT),
            carb_g: round2(target_calories * carb_ratio / KCAL_PER_GRAM_CARB),
        }
    }

    /// Validate raw inputs, apply defaults, and derive every metric
    ///
    /// # Errors
    ///
    /// Returns a validation error when a required field is missing, a number is
    /// non-positive or implausible, or an enumerated field is unrecognized
    pub fn compute(&self, input: &ProfileInput) -> AppResult<UserProfile> {
        let limits = &self.config.limits;

        let age = input.age.ok_or_else(|| AppError::missing_field("age"))?;
        if age <= 0 {
            return Err(AppError::invalid_input("Age must be positive"));
        }
        if age > limits.max_age {
            return Err(AppError::out_of_range(format!(
                "Age must be at most {} years",
                limits.max_age
            )));
        }
        let age = u32::try_from(age)
            .map_err(|_| AppError::out_of_range("Age does not fit in 32 bits"))?;

        let height_cm = positive_measure(input.height_cm, "height_cm", limits.max_height_cm)?;
        let weight_kg = positive_measure(input.weight_kg, "weight_kg", limits.max_weight_kg)?;

        let gender: Gender = input
            .gender
            .as_deref()
            .ok_or_else(|| AppError::missing_field("gender"))?
            .parse()?;
        let goal: FitnessGoal = input
            .goal
            .as_deref()
            .unwrap_or(profile_defaults::GOAL)
            .parse()?;
        let activity_level: ActivityLevel = input
            .activity_level
            .as_deref()
            .unwrap_or(profile_defaults::ACTIVITY_LEVEL)
            .parse()?;
        let fitness_experience: ExperienceLevel = input
            .fitness_experience
            .as_deref()
            .unwrap_or(profile_defaults::FITNESS_EXPERIENCE)
            .parse()?;

        let days = input
            .preferred_workout_days
            .unwrap_or(profile_defaults::PREFERRED_WORKOUT_DAYS);
        let max_days = profile_defaults::MAX_WORKOUT_DAYS;
        let preferred_workout_days = u8::try_from(days)
            .ok()
            .filter(|d| (1..=max_days).contains(d))
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Preferred workout days must be between 1 and {max_days}"
                ))
            })?;

        let duration = input
            .workout_duration_minutes
            .unwrap_or(profile_defaults::WORKOUT_DURATION_MINUTES);
        let workout_duration_minutes = u32::try_from(duration)
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(|| AppError::invalid_input("Workout duration must be positive"))?;

        let bmi = Self::calculate_bmi(weight_kg, height_cm);
        let bmr = self.calculate_bmr(weight_kg, height_cm, age, gender);
        if bmr <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Computed BMR {bmr} is not positive; check age, height and weight"
            )));
        }
        let tdee = self.calculate_tdee(bmr, activity_level);
        let target_calories = self.calculate_target_calories(tdee, goal);
        let macros = self.calculate_macros(target_calories, goal);

        let equipment = input.available_equipment.as_ref().map_or_else(
            || normalized_set(profile_defaults::AVAILABLE_EQUIPMENT.iter().copied()),
            |items| normalized_set(items.iter().map(String::as_str)),
        );

        let profile = UserProfile {
            user_id: input
                .user_id
                .clone()
                .unwrap_or_else(|| profile_defaults::ANONYMOUS_USER_ID.to_owned()),
            age,
            gender,
            height_cm,
            weight_kg,
            goal,
            activity_level,
            dietary_restrictions: input
                .dietary_restrictions
                .as_deref()
                .map(|items| normalized_labels(items.iter().map(String::as_str)))
                .unwrap_or_default(),
            allergies: input
                .allergies
                .as_deref()
                .map(|items| normalized_set(items.iter().map(String::as_str)))
                .unwrap_or_default(),
            fitness_experience,
            preferred_workout_days,
            workout_duration_minutes,
            available_equipment: equipment,
            health_conditions: input.health_conditions.clone().unwrap_or_default(),
            favorite_foods: input.favorite_foods.clone().unwrap_or_default(),
            disliked_foods: input.disliked_foods.clone().unwrap_or_default(),
            metrics: ProfileMetrics {
                bmi,
                bmr,
                tdee,
                target_calories,
                macros,
            },
        };

        debug!(
            user_id = %profile.user_id,
            bmr,
            tdee,
            target_calories,
            "Computed profile metrics"
        );
        Ok(profile)
    }
}

fn positive_measure(value: Option<f64>, field: &str, max: f64) -> AppResult<f64> {
    let value = value.ok_or_else(|| AppError::missing_field(field))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::invalid_input(format!("{field} must be positive")));
    }
    if value > max {
        return Err(AppError::out_of_range(format!(
            "{field} must be at most {max}"
        )));
    }
    Ok(value)
}

fn normalized_set<'a>(items: impl Iterator<Item = &'a str>) -> BTreeSet<String> {
    items
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

// Restriction names additionally fold "gluten-free" and "gluten free" to "gluten_free"
fn normalized_labels<'a>(items: impl Iterator<Item = &'a str>) -> BTreeSet<String> {
    normalized_set(items)
        .into_iter()
        .map(|item| item.replace(['-', ' '], "_"))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn calculator() -> ProfileCalculator {
        ProfileCalculator::new(NutritionConfig::default())
    }

    #[test]
    fn test_reference_female_values() {
        let calc = calculator();
        let bmr = calc.calculate_bmr(60.0, 165.0, 30, Gender::Female);
        assert!((bmr - 1320.25).abs() < 1e-9);
        let tdee = calc.calculate_tdee(bmr, ActivityLevel::Sedentary);
        assert!((tdee - 1584.3).abs() < 1e-9);
        let target = calc.calculate_target_calories(tdee, FitnessGoal::WeightLoss);
        assert!((target - 1267.44).abs() < 1e-9);
    }

    #[test]
    fn test_missing_age_is_reported() {
        let err = calculator()
            .compute(&ProfileInput {
                gender: Some("male".into()),
                height_cm: Some(180.0),
                weight_kg: Some(80.0),
                ..ProfileInput::default()
            })
            .unwrap_err();
        assert!(err.message.contains("age"));
    }

    #[test]
    fn test_restriction_labels_are_folded() {
        let labels = normalized_labels(["Gluten-Free", " vegan "].into_iter());
        assert!(labels.contains("gluten_free"));
        assert!(labels.contains("vegan"));
    }
}
