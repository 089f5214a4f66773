// ABOUTME: Meal planning configuration for calorie distribution and serving scaling
// ABOUTME: Configures meal/snack shares, protein ratios, jitter, meal structure, and clamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use fitplan_core::models::FitnessGoal;
use serde::{Deserialize, Serialize};

/// Inclusive bounds for a serving multiplier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiplierRange {
    /// Smallest allowed multiplier
    pub min: f64,
    /// Largest allowed multiplier
    pub max: f64,
}

impl MultiplierRange {
    /// Clamp `value` into the range
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    fn is_valid(&self) -> bool {
        self.min > 0.0 && self.min <= self.max
    }
}

/// Number of main meals and snacks per day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealCounts {
    /// Main meals
    pub meals: usize,
    /// Snacks
    pub snacks: usize,
}

/// Daily meal structure per goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealStructureConfig {
    /// Fewer, more structured meals: 3 meals, 1 snack
    pub weight_loss: MealCounts,
    /// Frequent feeding: 5 meals, 2 snacks
    pub muscle_gain: MealCounts,
    /// 3 meals, 2 snacks
    pub maintenance: MealCounts,
}

impl Default for MealStructureConfig {
    fn default() -> Self {
        Self {
            weight_loss: MealCounts {
                meals: 3,
                snacks: 1,
            },
            muscle_gain: MealCounts {
                meals: 5,
                snacks: 2,
            },
            maintenance: MealCounts {
                meals: 3,
                snacks: 2,
            },
        }
    }
}

impl MealStructureConfig {
    /// Counts for `goal`
    #[must_use]
    pub const fn for_goal(&self, goal: FitnessGoal) -> MealCounts {
        match goal {
            FitnessGoal::WeightLoss => self.weight_loss,
            FitnessGoal::MuscleGain => self.muscle_gain,
            FitnessGoal::Maintenance => self.maintenance,
        }
    }
}

/// Portion sizing used when composing a single meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealComposerConfig {
    /// Fraction of the protein target taken from the protein item: 0.8
    pub protein_source_share: f64,
    /// Protein serving clamp: 0.5 - 2.0
    pub protein_servings: MultiplierRange,
    /// Remaining kcal required before a carb is added: 100
    pub carb_min_remaining_kcal: f64,
    /// Fraction of remaining kcal aimed at the carb item: 0.45
    pub carb_share: f64,
    /// Carb serving clamp: 0.5 - 2.0
    pub carb_servings: MultiplierRange,
    /// Remaining kcal required before a fat is added: 50
    pub fat_min_remaining_kcal: f64,
    /// Fraction of remaining kcal aimed at the fat item: 0.25
    pub fat_share: f64,
    /// Fat serving clamp: 0.25 - 1.5
    pub fat_servings: MultiplierRange,
    /// Protein grams marking a fallback protein source: 5
    pub fallback_protein_min_g: f64,
    /// Carb grams marking a fallback carb source: 5
    pub fallback_carbs_min_g: f64,
    /// Fat grams marking a fallback fat source: 3
    pub fallback_fat_min_g: f64,
    /// Items sampled from the whole pool when no vegetable exists: 3
    pub fallback_vegetable_sample: usize,
}

impl Default for MealComposerConfig {
    fn default() -> Self {
        Self {
            protein_source_share: 0.8,
            protein_servings: MultiplierRange { min: 0.5, max: 2.0 },
            carb_min_remaining_kcal: 100.0,
            carb_share: 0.45,
            carb_servings: MultiplierRange { min: 0.5, max: 2.0 },
            fat_min_remaining_kcal: 50.0,
            fat_share: 0.25,
            fat_servings: MultiplierRange {
                min: 0.25,
                max: 1.5,
            },
            fallback_protein_min_g: 5.0,
            fallback_carbs_min_g: 5.0,
            fallback_fat_min_g: 3.0,
            fallback_vegetable_sample: 3,
        }
    }
}

/// Meal plan assembly configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanConfig {
    /// Share of daily calories for main meals: 0.8
    pub main_meal_share: f64,
    /// Share of daily calories for snacks: 0.2
    pub snack_share: f64,
    /// Protein share of main-meal calories: 0.35
    pub main_protein_ratio: f64,
    /// Protein share of snack calories: 0.25
    pub snack_protein_ratio: f64,
    /// Lower bound of the daily calorie jitter: 0.95
    pub jitter_min: f64,
    /// Upper bound of the daily calorie jitter: 1.05
    pub jitter_max: f64,
    /// Meals and snacks per goal
    pub structure: MealStructureConfig,
    /// Portion sizing
    pub composer: MealComposerConfig,
}

impl Default for MealPlanConfig {
    fn default() -> Self {
        Self {
            main_meal_share: 0.8,
            snack_share: 0.2,
            main_protein_ratio: 0.35,
            snack_protein_ratio: 0.25,
            jitter_min: 0.95,
            jitter_max: 1.05,
            structure: MealStructureConfig::default(),
            composer: MealComposerConfig::default(),
        }
    }
}

fn is_fraction(value: f64) -> bool {
    value > 0.0 && value <= 1.0
}

impl MealPlanConfig {
    /// Validate meal planning parameters
    ///
    /// # Errors
    ///
    /// Returns an error when shares, ratios, jitter bounds, or clamps are inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_fraction(self.main_meal_share) || !is_fraction(self.snack_share) {
            return Err(ConfigError::ValueOutOfRange(
                "Meal and snack shares must be in (0, 1]",
            ));
        }
        if (self.main_meal_share + self.snack_share - 1.0).abs() > 1e-6 {
            return Err(ConfigError::InvalidWeights(
                "Meal and snack shares must sum to 1.0",
            ));
        }
        if !is_fraction(self.main_protein_ratio) || !is_fraction(self.snack_protein_ratio) {
            return Err(ConfigError::ValueOutOfRange(
                "Protein ratios must be in (0, 1]",
            ));
        }
        if self.jitter_min <= 0.0 || self.jitter_min > self.jitter_max {
            return Err(ConfigError::InvalidRange(
                "Calorie jitter must satisfy 0 < min <= max",
            ));
        }
        for counts in [
            self.structure.weight_loss,
            self.structure.muscle_gain,
            self.structure.maintenance,
        ] {
            if counts.meals == 0 {
                return Err(ConfigError::ValueOutOfRange(
                    "Every goal needs at least one main meal",
                ));
            }
        }

        let composer = &self.composer;
        if !(composer.protein_servings.is_valid()
            && composer.carb_servings.is_valid()
            && composer.fat_servings.is_valid())
        {
            return Err(ConfigError::InvalidRange(
                "Serving clamps must satisfy 0 < min <= max",
            ));
        }
        if !is_fraction(composer.protein_source_share)
            || !is_fraction(composer.carb_share)
            || !is_fraction(composer.fat_share)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Composer shares must be in (0, 1]",
            ));
        }
        Ok(())
    }
}
