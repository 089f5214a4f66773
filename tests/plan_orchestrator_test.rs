// ABOUTME: Integration tests for FitnessPlanner profile CRUD and combined plan generation
// ABOUTME: Covers identifier assignment, merged updates, not-found handling, and plan dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use fitplan::services::ProfileStore;
use fitplan_core::errors::ErrorCode;
use fitplan_core::models::{FitnessGoal, ProfileInput};

mod common;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ============================================================================
// PROFILE CRUD
// ============================================================================

#[test]
fn test_create_assigns_sequential_ids() {
    let planner = common::sample_planner();
    let first = planner.create_profile(common::reference_female_input()).unwrap();
    let second = planner.create_profile(common::typical_male_input()).unwrap();

    assert_eq!(first.user_id(), "1");
    assert_eq!(second.user_id(), "2");
    assert_eq!(planner.store().len(), 2);
}

#[test]
fn test_generated_id_skips_taken() {
    let planner = common::sample_planner();
    planner
        .create_profile(ProfileInput {
            user_id: Some("1".into()),
            ..common::typical_male_input()
        })
        .unwrap();
    let generated = planner.create_profile(common::typical_male_input()).unwrap();
    assert_eq!(generated.user_id(), "2");
}

#[test]
fn test_duplicate_id_rejected() {
    let planner = common::sample_planner();
    let input = ProfileInput {
        user_id: Some("alex".into()),
        ..common::typical_male_input()
    };
    planner.create_profile(input.clone()).unwrap();
    let err = planner.create_profile(input).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
}

#[test]
fn test_invalid_profile_not_stored() {
    let planner = common::sample_planner();
    let err = planner
        .create_profile(ProfileInput {
            age: None,
            ..common::typical_male_input()
        })
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(planner.store().is_empty());
}

#[test]
fn test_get_profile_round_trip() {
    let planner = common::sample_planner();
    let created = planner.create_profile(common::reference_female_input()).unwrap();
    assert_eq!(planner.get_profile(created.user_id()).unwrap(), created);

    let err = planner.get_profile("missing").unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_update_recomputes_metrics() {
    let planner = common::sample_planner();
    let created = planner.create_profile(common::reference_female_input()).unwrap();

    let updated = planner
        .update_profile(
            created.user_id(),
            ProfileInput {
                weight_kg: Some(70.0),
                goal: Some("maintenance".into()),
                ..ProfileInput::default()
            },
        )
        .unwrap();

    assert_eq!(updated.user_id(), created.user_id());
    assert_eq!(updated.age(), 30);
    assert_eq!(updated.goal(), FitnessGoal::Maintenance);
    // 700 + 1031.25 - 150 - 161
    assert!((updated.bmr() - 1420.25).abs() < 1e-9);
    assert!((updated.target_calories() - updated.tdee()).abs() < 1e-9);
    assert_eq!(planner.get_profile(created.user_id()).unwrap(), updated);
}

#[test]
fn test_update_cannot_change_id() {
    let planner = common::sample_planner();
    let created = planner.create_profile(common::reference_female_input()).unwrap();
    let updated = planner
        .update_profile(
            created.user_id(),
            ProfileInput {
                user_id: Some("someone-else".into()),
                ..ProfileInput::default()
            },
        )
        .unwrap();
    assert_eq!(updated.user_id(), created.user_id());
    assert_eq!(planner.store().len(), 1);
}

#[test]
fn test_invalid_update_keeps_previous_profile() {
    let planner = common::sample_planner();
    let created = planner.create_profile(common::reference_female_input()).unwrap();
    let err = planner
        .update_profile(
            created.user_id(),
            ProfileInput {
                weight_kg: Some(-1.0),
                ..ProfileInput::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(planner.get_profile(created.user_id()).unwrap(), created);
}

#[test]
fn test_update_unknown_profile() {
    let planner = common::sample_planner();
    let err = planner
        .update_profile("ghost", ProfileInput::default())
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

// ============================================================================
// PLAN GENERATION
// ============================================================================

#[test]
fn test_plans_for_unknown_profile() {
    let planner = common::sample_planner();
    let mut rng = common::seeded_rng(1);

    let err = planner.generate_meal_plan("ghost", 7, &mut rng).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    let err = planner
        .generate_workout_plan("ghost", None, &mut rng)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    let err = planner
        .generate_complete_plan("ghost", 7, None, &mut rng)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_complete_plan_dates() {
    let planner = common::sample_planner();
    let profile = planner.create_profile(common::typical_male_input()).unwrap();
    let mut rng = common::seeded_rng(2);

    let plan = planner
        .generate_complete_plan_on(date(2025, 12, 28), profile.user_id(), 7, None, &mut rng)
        .unwrap();

    assert_eq!(plan.user_id, profile.user_id());
    assert_eq!(plan.user_profile, profile);
    assert_eq!(plan.generation_date, date(2025, 12, 28));
    assert_eq!(plan.plan_start_date, date(2025, 12, 29));
    assert_eq!(plan.plan_end_date, date(2026, 1, 4));
    assert_eq!(plan.meal_plan.days.len(), 7);
    assert_eq!(plan.workout_plan.days_per_week, 4);
}

#[test]
fn test_complete_plan_workout_override() {
    let planner = common::sample_planner();
    let profile = planner.create_profile(common::typical_male_input()).unwrap();
    let mut rng = common::seeded_rng(3);

    let plan = planner
        .generate_complete_plan(profile.user_id(), 3, Some(2), &mut rng)
        .unwrap();
    assert_eq!(plan.meal_plan.days.len(), 3);
    assert_eq!(plan.workout_plan.workouts.len(), 2);
    assert_eq!(plan.workout_plan.rest_days, 5);
}

#[test]
fn test_complete_plan_is_reproducible() {
    let planner = common::sample_planner();
    let profile = planner.create_profile(common::typical_male_input()).unwrap();
    let day = date(2025, 6, 1);

    let first = planner
        .generate_complete_plan_on(day, profile.user_id(), 7, None, &mut common::seeded_rng(99))
        .unwrap();
    let second = planner
        .generate_complete_plan_on(day, profile.user_id(), 7, None, &mut common::seeded_rng(99))
        .unwrap();

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn test_complete_plan_serializes_flat_profile() {
    let planner = common::sample_planner();
    let profile = planner.create_profile(common::reference_female_input()).unwrap();
    let mut rng = common::seeded_rng(4);

    let plan = planner
        .generate_complete_plan_on(date(2025, 3, 10), profile.user_id(), 1, Some(1), &mut rng)
        .unwrap();
    let value = serde_json::to_value(&plan).unwrap();

    assert_eq!(value["plan_start_date"], "2025-03-11");
    assert_eq!(value["plan_end_date"], "2025-03-11");
    assert_eq!(value["user_profile"]["goal"], "weight_loss");
    assert_eq!(value["user_profile"]["bmr"], 1320.25);
    assert_eq!(value["meal_plan"]["days"][0]["meals"][0]["type"], "Breakfast");
    assert_eq!(value["workout_plan"]["workouts"][0]["title"], "Full Body Workout");
}
