// ABOUTME: Core data models for profiles, catalogs, and generated plans
// ABOUTME: Re-exports profile, nutrition, and exercise types for the planner crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models
//!
//! Catalog item schemas double as the on-disk record format read by the catalog
//! loader, so field names here are part of the file format.

/// Profile inputs, enumerations, and derived metrics
pub mod profile;

/// Food items and meal plan structures
pub mod nutrition;

/// Exercise items and workout plan structures
pub mod exercise;

pub use exercise::{
    Difficulty, Dose, ExerciseCategory, ExerciseItem, ExercisePrescription, WeekWorkoutPlan,
    WorkoutFocus, WorkoutSession,
};
pub use nutrition::{
    DayMealPlan, FoodCategory, FoodItem, Meal, MealFood, MealType, Nutrition, WeekMealPlan,
};
pub use profile::{
    ActivityLevel, ExperienceLevel, FitnessGoal, Gender, MacroTargets, ProfileInput,
    ProfileMetrics,
};
