// ABOUTME: Nutrition configuration for metabolic calculations and profile limits
// ABOUTME: Configures BMR coefficients, activity multipliers, goal adjustments, and macro splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! Coefficients for the profile calculator.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use fitplan_core::models::{ActivityLevel, FitnessGoal};
use serde::{Deserialize, Serialize};

/// Tolerance when checking that a macro split sums to one
const SPLIT_SUM_TOLERANCE: f64 = 1e-6;

/// Nutrition calculation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie multipliers applied to TDEE per goal
    pub goal_calories: GoalCalorieConfig,
    /// Macronutrient split per goal
    pub macro_splits: MacroSplitConfig,
    /// Plausibility limits for profile inputs
    pub limits: ProfileLimitsConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for `level`
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtraActive => self.extra_active,
        }
    }
}

/// TDEE multipliers per goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalCalorieConfig {
    /// Deficit multiplier: 0.8
    pub weight_loss_factor: f64,
    /// Surplus multiplier: 1.1
    pub muscle_gain_factor: f64,
    /// Balance multiplier: 1.0
    pub maintenance_factor: f64,
}

impl Default for GoalCalorieConfig {
    fn default() -> Self {
        Self {
            weight_loss_factor: 0.8,
            muscle_gain_factor: 1.1,
            maintenance_factor: 1.0,
        }
    }
}

impl GoalCalorieConfig {
    /// Multiplier for `goal`
    #[must_use]
    pub const fn factor(&self, goal: FitnessGoal) -> f64 {
        match goal {
            FitnessGoal::WeightLoss => self.weight_loss_factor,
            FitnessGoal::MuscleGain => self.muscle_gain_factor,
            FitnessGoal::Maintenance => self.maintenance_factor,
        }
    }
}

/// Share of target calories assigned to each macronutrient (fractions of 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein share
    pub protein_ratio: f64,
    /// Fat share
    pub fat_ratio: f64,
    /// Carbohydrate share
    pub carb_ratio: f64,
}

impl MacroDistribution {
    fn is_valid(&self) -> bool {
        let all_positive = self.protein_ratio > 0.0 && self.fat_ratio > 0.0 && self.carb_ratio > 0.0;
        let sum = self.protein_ratio + self.fat_ratio + self.carb_ratio;
        all_positive && (sum - 1.0).abs() < SPLIT_SUM_TOLERANCE
    }
}

/// Macro split per goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// 40% protein, 30% fat, 30% carbs
    pub weight_loss: MacroDistribution,
    /// 30% protein, 25% fat, 45% carbs
    pub muscle_gain: MacroDistribution,
    /// 30% protein, 30% fat, 40% carbs
    pub maintenance: MacroDistribution,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            weight_loss: MacroDistribution {
                protein_ratio: 0.40,
                fat_ratio: 0.30,
                carb_ratio: 0.30,
            },
            muscle_gain: MacroDistribution {
                protein_ratio: 0.30,
                fat_ratio: 0.25,
                carb_ratio: 0.45,
            },
            maintenance: MacroDistribution {
                protein_ratio: 0.30,
                fat_ratio: 0.30,
                carb_ratio: 0.40,
            },
        }
    }
}

impl MacroSplitConfig {
    /// Split for `goal`
    #[must_use]
    pub const fn for_goal(&self, goal: FitnessGoal) -> MacroDistribution {
        match goal {
            FitnessGoal::WeightLoss => self.weight_loss,
            FitnessGoal::MuscleGain => self.muscle_gain,
            FitnessGoal::Maintenance => self.maintenance,
        }
    }
}

/// Upper bounds rejecting implausible biometric inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileLimitsConfig {
    /// Maximum age in years
    pub max_age: i64,
    /// Maximum height in centimeters
    pub max_height_cm: f64,
    /// Maximum weight in kilograms
    pub max_weight_kg: f64,
}

impl Default for ProfileLimitsConfig {
    fn default() -> Self {
        Self {
            max_age: 120,
            max_height_cm: 300.0,
            max_weight_kg: 500.0,
        }
    }
}

impl NutritionConfig {
    /// Validate nutrition coefficients
    ///
    /// # Errors
    ///
    /// Returns an error when coefficients, factors, or splits are inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.extra_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.lightly_active
            || factors.lightly_active >= factors.moderately_active
            || factors.moderately_active >= factors.very_active
            || factors.very_active >= factors.extra_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let goals = &self.goal_calories;
        if goals.weight_loss_factor <= 0.0
            || goals.muscle_gain_factor <= 0.0
            || goals.maintenance_factor <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Goal calorie factors must be positive",
            ));
        }

        let splits = &self.macro_splits;
        if !(splits.weight_loss.is_valid()
            && splits.muscle_gain.is_valid()
            && splits.maintenance.is_valid())
        {
            return Err(ConfigError::InvalidWeights(
                "Macro splits must be positive and sum to 1.0",
            ));
        }

        if self.limits.max_age <= 0
            || self.limits.max_height_cm <= 0.0
            || self.limits.max_weight_kg <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Profile limits must be positive",
            ));
        }

        Ok(())
    }
}
