// ABOUTME: Main library entry point for the fitplan nutrition and workout planner
// ABOUTME: Wires configuration, logging, catalogs, intelligence engine, and plan services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # Fitplan
//!
//! Personalized nutrition and workout plan generation. Given a biometric
//! profile the planner derives metabolic targets, composes meals from a food
//! catalog and sessions from an exercise catalog, and assembles them into
//! weekly plans.
//!
//! ## Architecture
//!
//! - **Profile calculator**: BMI, BMR, TDEE, target calories, macro targets
//! - **Catalogs**: immutable, queryable food and exercise collections
//! - **Composers**: one meal or one session from a filtered pool
//! - **Planners**: day and week assembly with jitter and split schedules
//! - **Plan orchestrator**: profile CRUD over a pluggable store plus plan generation
//!
//! ## Example
//!
//! ```rust,no_run
//! use fitplan::catalog::{ExerciseCatalog, NutritionCatalog};
//! use fitplan::config::PlannerConfig;
//! use fitplan::services::{FitnessPlanner, InMemoryProfileStore};
//! use fitplan_core::models::ProfileInput;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use std::sync::Arc;
//!
//! # fn main() -> fitplan_core::AppResult<()> {
//! let planner = FitnessPlanner::new(
//!     PlannerConfig::default(),
//!     Arc::new(NutritionCatalog::sample()),
//!     Arc::new(ExerciseCatalog::sample()),
//!     InMemoryProfileStore::new(),
//! );
//! let profile = planner.create_profile(ProfileInput {
//!     age: Some(30),
//!     gender: Some("female".into()),
//!     height_cm: Some(165.0),
//!     weight_kg: Some(60.0),
//!     ..ProfileInput::default()
//! })?;
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let plan = planner.generate_complete_plan(profile.user_id(), 7, None, &mut rng)?;
//! println!("{}", plan.meal_plan.days.len());
//! # Ok(())
//! # }
//! ```

/// Planner configuration with environment overrides
pub mod config;

/// Structured logging setup
pub mod logging;

/// Shared numeric helpers
pub mod utils;

/// Food and exercise catalogs, predicates, and file loading
pub mod catalog;

/// Profile math, composers, and planners
pub mod intelligence;

/// Profile storage and the plan orchestrator
pub mod services;
