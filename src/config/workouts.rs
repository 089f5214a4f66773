// ABOUTME: Workout planning configuration for session sizing
// ABOUTME: Configures warm-up/cool-down allowance, minutes per exercise, and cardio minimums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Workout session sizing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlanConfig {
    /// Minutes reserved for warm-up and cool-down: 10
    pub warm_up_cool_down_minutes: u32,
    /// Minutes budgeted per main exercise including rest: 5
    pub minutes_per_exercise: u32,
    /// Minimum main exercises on cardio days: 2
    pub cardio_min_exercises: usize,
}

impl Default for WorkoutPlanConfig {
    fn default() -> Self {
        Self {
            warm_up_cool_down_minutes: 10,
            minutes_per_exercise: 5,
            cardio_min_exercises: 2,
        }
    }
}

impl WorkoutPlanConfig {
    /// Validate session sizing
    ///
    /// # Errors
    ///
    /// Returns an error when minutes per exercise is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minutes_per_exercise == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Minutes per exercise must be positive",
            ));
        }
        Ok(())
    }
}
