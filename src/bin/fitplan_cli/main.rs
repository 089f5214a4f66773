// ABOUTME: fitplan-cli - command-line front end for profile metrics and plan generation
// ABOUTME: Reads a profile file, optionally loads catalogs, and prints plans as pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show BMI, BMR, TDEE, calorie target and macros for a profile
//! fitplan-cli profile --profile me.yaml
//!
//! # Seven-day meal plan from a custom food catalog
//! fitplan-cli --foods foods.json meal-plan --profile me.yaml --days 7
//!
//! # Four-day workout split, reproducible
//! fitplan-cli --seed 42 workout-plan --profile me.json --days 4
//!
//! # Combined plan
//! fitplan-cli plan --profile me.json --meal-days 7
//! ```

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fitplan::catalog::{load_exercises, load_foods, ExerciseCatalog, NutritionCatalog};
use fitplan::config::PlannerConfig;
use fitplan::logging::LoggingConfig;
use fitplan::services::{FitnessPlanner, InMemoryProfileStore};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fitplan-cli",
    about = "Personalized nutrition and workout plan generator",
    long_about = "Computes metabolic targets from a profile file and generates meal, workout, or combined plans as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Food catalog file (.json, .yaml or .yml); built-in sample data when omitted
    #[arg(long, global = true)]
    foods: Option<PathBuf>,

    /// Exercise catalog file (.json, .yaml or .yml); built-in sample data when omitted
    #[arg(long, global = true)]
    exercises: Option<PathBuf>,

    /// Seed for reproducible plans
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute profile metrics
    Profile {
        /// Profile file (.json, .yaml or .yml)
        #[arg(long)]
        profile: PathBuf,
    },

    /// Generate a multi-day meal plan
    MealPlan {
        /// Profile file (.json, .yaml or .yml)
        #[arg(long)]
        profile: PathBuf,

        /// Number of days
        #[arg(long, default_value = "7")]
        days: u32,
    },

    /// Generate a weekly workout plan
    WorkoutPlan {
        /// Profile file (.json, .yaml or .yml)
        #[arg(long)]
        profile: PathBuf,

        /// Training days (defaults to the profile's preference)
        #[arg(long)]
        days: Option<u8>,
    },

    /// Generate meal and workout plans together
    Plan {
        /// Profile file (.json, .yaml or .yml)
        #[arg(long)]
        profile: PathBuf,

        /// Number of meal plan days
        #[arg(long, default_value = "7")]
        meal_days: u32,

        /// Training days (defaults to the profile's preference)
        #[arg(long)]
        workout_days: Option<u8>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env().with_stderr();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let config = PlannerConfig::load().context("Invalid planner configuration")?;

    let foods = match &cli.foods {
        Some(path) => load_foods(path)
            .with_context(|| format!("Failed to load food catalog {}", path.display()))?,
        None => NutritionCatalog::sample(),
    };
    let exercises = match &cli.exercises {
        Some(path) => load_exercises(path)
            .with_context(|| format!("Failed to load exercise catalog {}", path.display()))?,
        None => ExerciseCatalog::sample(),
    };
    info!(
        foods = foods.len(),
        exercises = exercises.len(),
        "Catalogs ready"
    );

    let planner = FitnessPlanner::new(
        config,
        Arc::new(foods),
        Arc::new(exercises),
        InMemoryProfileStore::new(),
    );
    let mut rng = cli
        .seed
        .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);

    let output = match cli.command {
        Command::Profile { profile } => commands::profile(&planner, &profile)?,
        Command::MealPlan { profile, days } => {
            commands::meal_plan(&planner, &profile, days, &mut rng)?
        }
        Command::WorkoutPlan { profile, days } => {
            commands::workout_plan(&planner, &profile, days, &mut rng)?
        }
        Command::Plan {
            profile,
            meal_days,
            workout_days,
        } => commands::plan(&planner, &profile, meal_days, workout_days, &mut rng)?,
    };

    println!("{output}");
    Ok(())
}
