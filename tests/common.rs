// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, seeded random sources, sample profiles, and planner setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitplan`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use fitplan::catalog::{ExerciseCatalog, NutritionCatalog};
use fitplan::config::PlannerConfig;
use fitplan::intelligence::{ProfileCalculator, UserProfile};
use fitplan::services::{FitnessPlanner, InMemoryProfileStore};
use fitplan_core::models::ProfileInput;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Deterministic random source
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// 30-year-old, 60 kg, 165 cm sedentary woman aiming to lose weight
pub fn reference_female_input() -> ProfileInput {
    ProfileInput {
        age: Some(30),
        gender: Some("female".into()),
        height_cm: Some(165.0),
        weight_kg: Some(60.0),
        goal: Some("weight_loss".into()),
        activity_level: Some("sedentary".into()),
        ..ProfileInput::default()
    }
}

/// 30-year-old, 80 kg, 180 cm moderately active man maintaining weight
pub fn typical_male_input() -> ProfileInput {
    ProfileInput {
        age: Some(30),
        gender: Some("male".into()),
        height_cm: Some(180.0),
        weight_kg: Some(80.0),
        goal: Some("maintenance".into()),
        activity_level: Some("moderately_active".into()),
        fitness_experience: Some("intermediate".into()),
        preferred_workout_days: Some(4),
        workout_duration_minutes: Some(45),
        available_equipment: Some(vec!["dumbbells".into(), "bench".into()]),
        ..ProfileInput::default()
    }
}

/// Compute a profile with default coefficients
pub fn compute_profile(input: &ProfileInput) -> UserProfile {
    ProfileCalculator::default().compute(input).unwrap()
}

/// Planner over the built-in sample catalogs with default configuration
pub fn sample_planner() -> FitnessPlanner {
    init_test_logging();
    FitnessPlanner::new(
        PlannerConfig::default(),
        Arc::new(NutritionCatalog::sample()),
        Arc::new(ExerciseCatalog::sample()),
        InMemoryProfileStore::new(),
    )
}
