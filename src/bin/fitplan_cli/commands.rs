// ABOUTME: Subcommand implementations for fitplan-cli
// ABOUTME: Each command registers the profile file and renders its result as pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use fitplan::catalog::load_document;
use fitplan::intelligence::RandomSource;
use fitplan::services::FitnessPlanner;
use fitplan_core::models::ProfileInput;
use serde::Serialize;
use std::path::Path;

fn render<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

/// Read and store the profile, returning its identifier
fn register(planner: &FitnessPlanner, path: &Path) -> Result<String> {
    let input: ProfileInput = load_document(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile = planner.create_profile(input)?;
    Ok(profile.user_id().to_owned())
}

/// Profile with derived metrics
pub fn profile(planner: &FitnessPlanner, path: &Path) -> Result<String> {
    let user_id = register(planner, path)?;
    render(&planner.get_profile(&user_id)?)
}

/// Multi-day meal plan
pub fn meal_plan<R: RandomSource>(
    planner: &FitnessPlanner,
    path: &Path,
    days: u32,
    rng: &mut R,
) -> Result<String> {
    let user_id = register(planner, path)?;
    render(&planner.generate_meal_plan(&user_id, days, rng)?)
}

/// Weekly workout plan
pub fn workout_plan<R: RandomSource>(
    planner: &FitnessPlanner,
    path: &Path,
    days: Option<u8>,
    rng: &mut R,
) -> Result<String> {
    let user_id = register(planner, path)?;
    render(&planner.generate_workout_plan(&user_id, days, rng)?)
}

/// Combined meal and workout plan
pub fn plan<R: RandomSource>(
    planner: &FitnessPlanner,
    path: &Path,
    meal_days: u32,
    workout_days: Option<u8>,
    rng: &mut R,
) -> Result<String> {
    let user_id = register(planner, path)?;
    render(&planner.generate_complete_plan(&user_id, meal_days, workout_days, rng)?)
}
