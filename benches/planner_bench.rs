// ABOUTME: Criterion benchmarks for profile computation and plan generation
// ABOUTME: Measures meal week assembly, workout week assembly, and combined plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the planner.
//!
//! All plans are generated from the built-in sample catalogs with a seeded
//! random source so every iteration does comparable work.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fitplan::catalog::{ExerciseCatalog, NutritionCatalog};
use fitplan::config::{MealPlanConfig, PlannerConfig, WorkoutPlanConfig};
use fitplan::intelligence::{MealPlanner, ProfileCalculator, UserProfile, WorkoutPlanner};
use fitplan::services::{FitnessPlanner, InMemoryProfileStore};
use fitplan_core::models::ProfileInput;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

fn bench_input() -> ProfileInput {
    ProfileInput {
        age: Some(34),
        gender: Some("female".into()),
        height_cm: Some(170.0),
        weight_kg: Some(68.0),
        goal: Some("muscle_gain".into()),
        activity_level: Some("very_active".into()),
        fitness_experience: Some("intermediate".into()),
        preferred_workout_days: Some(5),
        available_equipment: Some(vec!["dumbbells".into(), "bench".into()]),
        ..ProfileInput::default()
    }
}

fn bench_profile() -> UserProfile {
    ProfileCalculator::default().compute(&bench_input()).unwrap()
}

/// Benchmark profile validation and metric derivation
fn bench_profile_compute(c: &mut Criterion) {
    let calculator = ProfileCalculator::default();
    let input = bench_input();
    c.bench_function("profile_compute", |b| {
        b.iter(|| calculator.compute(black_box(&input)));
    });
}

/// Benchmark meal plans of increasing length
fn bench_meal_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("meal_plan");
    let planner = MealPlanner::new(Arc::new(NutritionCatalog::sample()), MealPlanConfig::default());
    let profile = bench_profile();

    for days in [1_u32, 7, 28] {
        group.bench_with_input(BenchmarkId::new("generate_week", days), &days, |b, &days| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| planner.generate_week(black_box(&profile), days, &mut rng));
        });
    }

    group.finish();
}

/// Benchmark weekly workout plans across split sizes
fn bench_workout_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("workout_plan");
    let planner = WorkoutPlanner::new(
        Arc::new(ExerciseCatalog::sample()),
        WorkoutPlanConfig::default(),
    );
    let profile = bench_profile();

    for days in [2_u8, 4, 7] {
        group.bench_with_input(BenchmarkId::new("generate_week", days), &days, |b, &days| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| planner.generate_week(black_box(&profile), Some(days), &mut rng));
        });
    }

    group.finish();
}

/// Benchmark the orchestrated combined plan
fn bench_complete_plan(c: &mut Criterion) {
    let planner = FitnessPlanner::new(
        PlannerConfig::default(),
        Arc::new(NutritionCatalog::sample()),
        Arc::new(ExerciseCatalog::sample()),
        InMemoryProfileStore::new(),
    );
    let profile = planner.create_profile(bench_input()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    c.bench_function("complete_plan_7_days", |b| {
        b.iter(|| planner.generate_complete_plan(black_box(profile.user_id()), 7, None, &mut rng));
    });
}

criterion_group!(
    benches,
    bench_profile_compute,
    bench_meal_plan,
    bench_workout_plan,
    bench_complete_plan,
);
criterion_main!(benches);
