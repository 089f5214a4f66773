// ABOUTME: Planning intelligence: profile math, meal and session composers, week assemblers
// ABOUTME: Re-exports the calculator, composers, planners, and the injectable random source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure planning logic. Nothing here performs I/O or holds global state: the
//! catalogs arrive behind an `Arc`, configuration is passed in, and every
//! random choice goes through a caller-supplied [`RandomSource`].

/// Meal composition rules and serving scaling
pub mod meal_composer;
/// Day and week meal plan assembly
pub mod meal_planner;
/// BMI, BMR, TDEE, calorie target, and macro derivation
pub mod profile_calculator;
/// Injectable randomness
pub mod random;
/// Session composition and prescriptions
pub mod workout_composer;
/// Weekly split selection and session assembly
pub mod workout_planner;

pub use meal_composer::{rule_for, FoodSelector, MealComposer, MealRule, MealSlot, MEAL_RULES};
pub use meal_planner::MealPlanner;
pub use profile_calculator::{ProfileCalculator, UserProfile};
pub use random::RandomSource;
pub use workout_composer::{strength_scheme, target_groups, WorkoutComposer};
pub use workout_planner::{split_for, WorkoutPlanner};
