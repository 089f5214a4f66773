// ABOUTME: Configuration error types for planner configuration validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and bad weight sums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitplan_core::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Problems found while loading or validating [`super::PlannerConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two bounds are in the wrong order (jitter minimum above maximum, unsorted factors)
    #[error("Bounds out of order: {0}")]
    InvalidRange(&'static str),

    /// An override variable is set but not valid unicode
    #[error("Unreadable override variable: {0}")]
    EnvVar(#[from] env::VarError),

    /// An override variable could not be parsed into its field type
    #[error("Could not parse override: {0}")]
    Parse(String),

    /// Ratios that must sum to one do not
    #[error("Ratios do not sum to one: {0}")]
    InvalidWeights(&'static str),

    /// A single value lies outside its permitted interval
    #[error("Setting out of bounds: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
