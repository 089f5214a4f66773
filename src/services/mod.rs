// ABOUTME: Service layer exposing profile storage and the plan orchestrator
// ABOUTME: FitnessPlanner is the entry point used by the CLI and embedding applications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Protocol-agnostic entry points. The CLI and any embedding web layer go
//! through [`FitnessPlanner`] rather than calling planners directly.

/// Profile CRUD and combined plan generation
pub mod plan_orchestrator;

/// Profile storage trait and in-memory implementation
pub mod profile_store;

pub use plan_orchestrator::{CompletePlan, FitnessPlanner};
pub use profile_store::{InMemoryProfileStore, ProfileStore};
