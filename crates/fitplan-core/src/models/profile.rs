// ABOUTME: Profile input record, biometric enumerations, and derived metabolic metrics
// ABOUTME: Gender, FitnessGoal, ActivityLevel, ExperienceLevel, ProfileInput, ProfileMetrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lowercase a label and fold `-` and spaces to `_` so "Weight Loss" parses
fn normalize_label(value: &str) -> String {
    value.trim().to_lowercase().replace(['-', ' '], "_")
}

/// Biological sex used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male offset (+5 kcal)
    Male,
    /// Female offset (-161 kcal)
    Female,
}

impl Gender {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized gender '{other}' (expected male or female)"
            ))),
        }
    }
}

/// Training goal driving calorie adjustment and macro split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric surplus
    MuscleGain,
    /// Caloric balance
    #[default]
    Maintenance,
}

impl FitnessGoal {
    /// Canonical snake-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Maintenance => "maintenance",
        }
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "weight_loss" => Ok(Self::WeightLoss),
            "muscle_gain" => Ok(Self::MuscleGain),
            "maintenance" => Ok(Self::Maintenance),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized goal '{other}' (expected weight_loss, muscle_gain or maintenance)"
            ))),
        }
    }
}

/// Activity level used for the TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Physical job or twice-daily training
    ExtraActive,
}

impl ActivityLevel {
    /// Canonical snake-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtraActive => "extra_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly_active" => Ok(Self::LightlyActive),
            "moderately_active" => Ok(Self::ModeratelyActive),
            "very_active" => Ok(Self::VeryActive),
            "extra_active" => Ok(Self::ExtraActive),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized activity level '{other}'"
            ))),
        }
    }
}

/// Self-reported training experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New to structured training
    #[default]
    Beginner,
    /// Trains regularly
    Intermediate,
    /// Several years of structured training
    Advanced,
}

impl ExperienceLevel {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized fitness experience '{other}'"
            ))),
        }
    }
}

/// Raw profile fields as supplied by a caller
///
/// Every field is optional so the same record serves profile creation and
/// partial updates. Numbers are signed so that negative values reach validation
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    /// Store key; assigned sequentially when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Age in years
    pub age: Option<i64>,
    /// "male" or "female"
    pub gender: Option<String>,
    /// Height in centimeters
    #[serde(alias = "height")]
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    #[serde(alias = "weight")]
    pub weight_kg: Option<f64>,
    /// Training goal name
    pub goal: Option<String>,
    /// Activity level name
    pub activity_level: Option<String>,
    /// Dietary restriction names
    pub dietary_restrictions: Option<Vec<String>>,
    /// Allergen substrings
    pub allergies: Option<Vec<String>>,
    /// Experience level name
    pub fitness_experience: Option<String>,
    /// Training days per week
    pub preferred_workout_days: Option<i64>,
    /// Session length in minutes
    #[serde(alias = "workout_duration")]
    pub workout_duration_minutes: Option<i64>,
    /// Equipment on hand
    pub available_equipment: Option<Vec<String>>,
    /// Free-form health notes
    pub health_conditions: Option<Vec<String>>,
    /// Preferred foods
    pub favorite_foods: Option<Vec<String>>,
    /// Foods to avoid
    pub disliked_foods: Option<Vec<String>>,
}

impl ProfileInput {
    /// Overlay the fields set on `self` onto `base`
    #[must_use]
    pub fn merged_over(self, base: &Self) -> Self {
        Self {
            user_id: self.user_id.or_else(|| base.user_id.clone()),
            age: self.age.or(base.age),
            gender: self.gender.or_else(|| base.gender.clone()),
            height_cm: self.height_cm.or(base.height_cm),
            weight_kg: self.weight_kg.or(base.weight_kg),
            goal: self.goal.or_else(|| base.goal.clone()),
            activity_level: self.activity_level.or_else(|| base.activity_level.clone()),
            dietary_restrictions: self
                .dietary_restrictions
                .or_else(|| base.dietary_restrictions.clone()),
            allergies: self.allergies.or_else(|| base.allergies.clone()),
            fitness_experience: self
                .fitness_experience
                .or_else(|| base.fitness_experience.clone()),
            preferred_workout_days: self.preferred_workout_days.or(base.preferred_workout_days),
            workout_duration_minutes: self
                .workout_duration_minutes
                .or(base.workout_duration_minutes),
            available_equipment: self
                .available_equipment
                .or_else(|| base.available_equipment.clone()),
            health_conditions: self
                .health_conditions
                .or_else(|| base.health_conditions.clone()),
            favorite_foods: self.favorite_foods.or_else(|| base.favorite_foods.clone()),
            disliked_foods: self.disliked_foods.or_else(|| base.disliked_foods.clone()),
        }
    }
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein grams
    pub protein_g: f64,
    /// Fat grams
    pub fat_g: f64,
    /// Carbohydrate grams
    pub carb_g: f64,
}

/// Metabolic metrics derived from a profile's inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetrics {
    /// Body mass index
    pub bmi: f64,
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Goal-adjusted daily calories
    pub target_calories: f64,
    /// Macro gram targets
    pub macros: MacroTargets,
}
