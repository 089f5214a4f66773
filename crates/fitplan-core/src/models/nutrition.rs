// ABOUTME: Food catalog records and generated meal plan structures
// ABOUTME: FoodItem, FoodCategory, Nutrition, MealType, Meal, DayMealPlan, WeekMealPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::meals::MAIN_MEAL_LABELS;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::AddAssign;

/// Macronutrient group a food is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Protein source
    Protein,
    /// Carbohydrate source
    Carb,
    /// Fat source
    Fat,
    /// Vegetable side
    Vegetable,
}

impl FoodCategory {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Carb => "carb",
            Self::Fat => "fat",
            Self::Vegetable => "vegetable",
        }
    }
}

fn default_serving_size() -> String {
    "100g".to_owned()
}

/// Catalog entry with nutrition facts for one serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Unique name
    pub name: String,
    /// Macronutrient group
    pub category: FoodCategory,
    /// Kilocalories per serving
    pub calories: f64,
    /// Protein grams per serving
    #[serde(alias = "protein")]
    pub protein_g: f64,
    /// Carbohydrate grams per serving
    #[serde(alias = "carbs")]
    pub carbs_g: f64,
    /// Fat grams per serving
    #[serde(alias = "fat")]
    pub fat_g: f64,
    /// Human-readable serving description
    #[serde(default = "default_serving_size")]
    pub serving_size: String,
    /// Descriptive tags used by restriction and meal rules
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl FoodItem {
    /// Nutrition facts for one serving
    #[must_use]
    pub const fn nutrition(&self) -> Nutrition {
        Nutrition {
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
    }

    /// True when the item carries `tag`
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Calories and macronutrient grams
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    /// Kilocalories
    pub calories: f64,
    /// Protein grams
    pub protein_g: f64,
    /// Carbohydrate grams
    pub carbs_g: f64,
    /// Fat grams
    pub fat_g: f64,
}

impl Nutrition {
    /// Apply `f` to every nutrient
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            protein_g: f(self.protein_g),
            carbs_g: f(self.carbs_g),
            fat_g: f(self.fat_g),
        }
    }
}

impl AddAssign for Nutrition {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.protein_g += rhs.protein_g;
        self.carbs_g += rhs.carbs_g;
        self.fat_g += rhs.fat_g;
    }
}

/// Meal slot within a day
///
/// Serialized as its display label ("Breakfast", "Meal 6", "Snack 2").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MealType {
    /// First main meal
    Breakfast,
    /// Second main meal
    Lunch,
    /// Third main meal
    Dinner,
    /// Fourth main meal
    PreWorkout,
    /// Fifth main meal
    PostWorkout,
    /// Main meals past the fifth, numbered from 1
    Numbered(u32),
    /// Snacks, numbered from 1
    Snack(u32),
}

impl MealType {
    /// Main meal at zero-based position `index` within a day
    #[must_use]
    pub const fn main(index: usize) -> Self {
        match index {
            0 => Self::Breakfast,
            1 => Self::Lunch,
            2 => Self::Dinner,
            3 => Self::PreWorkout,
            4 => Self::PostWorkout,
            n => Self::Numbered(n as u32 + 1),
        }
    }

    /// Snack at zero-based position `index` within a day
    #[must_use]
    pub const fn snack(index: usize) -> Self {
        Self::Snack(index as u32 + 1)
    }

    /// True for snack slots
    #[must_use]
    pub const fn is_snack(self) -> bool {
        matches!(self, Self::Snack(_))
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Breakfast => f.write_str(MAIN_MEAL_LABELS[0]),
            Self::Lunch => f.write_str(MAIN_MEAL_LABELS[1]),
            Self::Dinner => f.write_str(MAIN_MEAL_LABELS[2]),
            Self::PreWorkout => f.write_str(MAIN_MEAL_LABELS[3]),
            Self::PostWorkout => f.write_str(MAIN_MEAL_LABELS[4]),
            Self::Numbered(n) => write!(f, "Meal {n}"),
            Self::Snack(n) => write!(f, "Snack {n}"),
        }
    }
}

impl From<MealType> for String {
    fn from(meal_type: MealType) -> Self {
        meal_type.to_string()
    }
}

impl TryFrom<String> for MealType {
    type Error = AppError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        if let Some(index) = MAIN_MEAL_LABELS.iter().position(|l| *l == label) {
            return Ok(Self::main(index));
        }
        let numbered = |prefix: &str| {
            label
                .strip_prefix(prefix)
                .and_then(|n| n.parse::<u32>().ok())
                .filter(|n| *n > 0)
        };
        if let Some(n) = numbered("Snack ") {
            return Ok(Self::Snack(n));
        }
        if let Some(n) = numbered("Meal ") {
            return Ok(Self::Numbered(n));
        }
        Err(AppError::invalid_input(format!(
            "Unrecognized meal label '{label}'"
        )))
    }
}

/// One food within a meal, scaled by a serving multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealFood {
    /// Catalog name of the food
    pub name: String,
    /// Serving multiplier rounded to one decimal
    pub servings: f64,
    /// Catalog serving description
    pub serving_size: String,
    /// Scaled nutrition
    pub nutrition: Nutrition,
}

/// A composed meal or snack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Slot label
    #[serde(rename = "type")]
    pub meal_type: MealType,
    /// Foods in selection order
    pub foods: Vec<MealFood>,
    /// Sum of food nutrition
    pub nutrition: Nutrition,
}

/// One day of meals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMealPlan {
    /// 1-based day number
    pub day: u32,
    /// Calorie and macro targets used for this day
    pub daily_target: Nutrition,
    /// Main meals in order
    pub meals: Vec<Meal>,
    /// Snacks in order
    pub snacks: Vec<Meal>,
    /// Sum over meals and snacks, rounded to one decimal
    pub total_nutrition: Nutrition,
}

/// Multi-day meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekMealPlan {
    /// Profile the plan was generated for
    pub user_id: String,
    /// Day plans in order
    pub days: Vec<DayMealPlan>,
    /// Per-nutrient mean of day totals, rounded to one decimal
    pub weekly_nutrition_avg: Nutrition,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_labels() {
        assert_eq!(MealType::main(0).to_string(), "Breakfast");
        assert_eq!(MealType::main(3).to_string(), "Pre-workout Meal");
        assert_eq!(MealType::main(5).to_string(), "Meal 6");
        assert_eq!(MealType::snack(1).to_string(), "Snack 2");
    }

    #[test]
    fn test_meal_type_label_parsing() {
        assert_eq!(
            MealType::try_from("Post-workout Meal".to_owned()).unwrap(),
            MealType::PostWorkout
        );
        assert_eq!(
            MealType::try_from("Meal 7".to_owned()).unwrap(),
            MealType::Numbered(7)
        );
        assert!(MealType::try_from("Brunch".to_owned()).is_err());
    }

    #[test]
    fn test_food_item_accepts_short_field_names() {
        let json = r#"{"name":"Tofu","category":"protein","calories":144,
            "protein":17,"carbs":3,"fat":8,"tags":["vegan"]}"#;
        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert!((item.protein_g - 17.0).abs() < f64::EPSILON);
        assert_eq!(item.serving_size, "100g");
        assert!(item.has_tag("vegan"));
    }
}
