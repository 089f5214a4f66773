// ABOUTME: Unit tests for planner configuration defaults, validation, and environment overrides
// ABOUTME: Environment-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitplan::config::{ConfigError, MealCounts, PlannerConfig};
use fitplan_core::errors::{AppError, ErrorCode};
use fitplan_core::models::{ActivityLevel, FitnessGoal};
use serial_test::serial;
use std::env;

// ============================================================================
// DEFAULTS AND VALIDATION
// ============================================================================

#[test]
fn test_defaults_are_valid() {
    let config = PlannerConfig::default();
    config.validate().unwrap();

    let nutrition = &config.nutrition;
    assert!((nutrition.activity_factors.factor(ActivityLevel::ModeratelyActive) - 1.55).abs() < f64::EPSILON);
    assert!((nutrition.goal_calories.factor(FitnessGoal::MuscleGain) - 1.1).abs() < f64::EPSILON);
    assert!((nutrition.macro_splits.for_goal(FitnessGoal::WeightLoss).protein_ratio - 0.40).abs() < f64::EPSILON);

    assert_eq!(
        config.meals.structure.for_goal(FitnessGoal::MuscleGain),
        MealCounts { meals: 5, snacks: 2 }
    );
    assert_eq!(config.workouts.warm_up_cool_down_minutes, 10);
    assert_eq!(config.workouts.minutes_per_exercise, 5);
}

#[test]
fn test_activity_factors_must_ascend() {
    let mut config = PlannerConfig::default();
    config.nutrition.activity_factors.very_active = 1.5;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_macro_split_must_sum_to_one() {
    let mut config = PlannerConfig::default();
    config.nutrition.macro_splits.maintenance.carb_ratio = 0.5;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_jitter_bounds_ordered() {
    let mut config = PlannerConfig::default();
    config.meals.jitter_min = 1.1;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_every_goal_needs_a_meal() {
    let mut config = PlannerConfig::default();
    config.meals.structure.weight_loss = MealCounts { meals: 0, snacks: 3 };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_config_error_converts_to_app_error() {
    let err: AppError = ConfigError::Parse("Invalid FITPLAN_MAX_AGE".into()).into();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("FITPLAN_MAX_AGE"));
}

// ============================================================================
// ENVIRONMENT OVERRIDES
// ============================================================================

#[test]
#[serial]
fn test_env_override_applied() {
    env::set_var("FITPLAN_WEIGHT_LOSS_FACTOR", "0.75");
    env::set_var("FITPLAN_MINUTES_PER_EXERCISE", "6");

    let config = PlannerConfig::load();

    env::remove_var("FITPLAN_WEIGHT_LOSS_FACTOR");
    env::remove_var("FITPLAN_MINUTES_PER_EXERCISE");

    let config = config.unwrap();
    assert!((config.nutrition.goal_calories.weight_loss_factor - 0.75).abs() < f64::EPSILON);
    assert_eq!(config.workouts.minutes_per_exercise, 6);
}

#[test]
#[serial]
fn test_env_override_parse_failure() {
    env::set_var("FITPLAN_MAX_AGE", "old");
    let result = PlannerConfig::load();
    env::remove_var("FITPLAN_MAX_AGE");

    match result {
        Err(ConfigError::Parse(message)) => assert!(message.contains("FITPLAN_MAX_AGE")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_env_override_validated() {
    env::set_var("FITPLAN_JITTER_MIN", "1.2");
    let result = PlannerConfig::load();
    env::remove_var("FITPLAN_JITTER_MIN");

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}
