// ABOUTME: Core types and constants for the fitplan recommendation engine
// ABOUTME: Foundation crate with error handling, domain constants, and plan data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan Core
//!
//! Foundation crate providing shared types and constants for the fitplan
//! nutrition and workout planner. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Domain constants (energy densities, rule labels, prescriptions)
//! - **models**: Profile inputs, catalog item schemas, and generated plan structures

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models (profile inputs, foods, exercises, plans)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
