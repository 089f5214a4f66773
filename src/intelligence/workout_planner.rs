// ABOUTME: Workout plan assembler choosing a weekly split and composing each session
// ABOUTME: Split depends on training days and goal; remaining days of the week are rest days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::profile_calculator::UserProfile;
use super::random::RandomSource;
use super::workout_composer::WorkoutComposer;
use crate::catalog::ExerciseCatalog;
use crate::config::WorkoutPlanConfig;
use fitplan_core::constants::profile_defaults::MAX_WORKOUT_DAYS;
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{FitnessGoal, WeekWorkoutPlan, WorkoutFocus};
use std::sync::Arc;
use tracing::info;

use WorkoutFocus::{Cardio, Core, Full, Lower, Upper};

/// Session focus for each training day of the week
#[must_use]
pub fn split_for(days: u8, goal: FitnessGoal) -> Vec<WorkoutFocus> {
    let weight_loss = goal == FitnessGoal::WeightLoss;
    match days {
        0..=2 => vec![Full; usize::from(days)],
        3 if weight_loss => vec![Full, Cardio, Full],
        3 => vec![Upper, Lower, Full],
        4 if weight_loss => vec![Upper, Cardio, Lower, Cardio],
        4 => vec![Upper, Lower, Upper, Lower],
        _ => {
            let mut split = if goal == FitnessGoal::MuscleGain {
                vec![Upper, Lower, Core, Upper, Lower]
            } else {
                vec![Upper, Lower, Cardio, Upper, Lower]
            };
            split.resize(usize::from(days), Cardio);
            split
        }
    }
}

/// Assembles weekly workout plans
#[derive(Debug, Clone)]
pub struct WorkoutPlanner {
    composer: WorkoutComposer,
}

impl WorkoutPlanner {
    /// Create a planner over `catalog`
    #[must_use]
    pub const fn new(catalog: Arc<ExerciseCatalog>, config: WorkoutPlanConfig) -> Self {
        Self {
            composer: WorkoutComposer::new(catalog, config),
        }
    }

    /// Session composer used for each day
    #[must_use]
    pub const fn composer(&self) -> &WorkoutComposer {
        &self.composer
    }

    /// Build a week of sessions
    ///
    /// `days` defaults to the profile's preferred training days. Every session
    /// uses the profile's preferred duration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `days` exceeds seven, or `CatalogExhausted`
    /// when the exercise catalog is empty
    pub fn generate_week<R>(
        &self,
        profile: &UserProfile,
        days: Option<u8>,
        rng: &mut R,
    ) -> AppResult<WeekWorkoutPlan>
    where
        R: RandomSource + ?Sized,
    {
        let days = days.unwrap_or_else(|| profile.preferred_workout_days());
        if days > MAX_WORKOUT_DAYS {
            return Err(AppError::invalid_input(format!(
                "A week has at most {MAX_WORKOUT_DAYS} training days, got {days}"
            )));
        }

        let split = split_for(days, profile.goal());
        let mut workouts = Vec::with_capacity(split.len());
        for (day, focus) in (1_u32..).zip(split) {
            let mut session = self.composer.compose_session(
                profile,
                focus,
                profile.workout_duration_minutes(),
                rng,
            )?;
            session.day = Some(day);
            workouts.push(session);
        }

        info!(
            user_id = %profile.user_id(),
            days,
            goal = profile.goal().as_str(),
            "Generated weekly workout plan"
        );
        Ok(WeekWorkoutPlan {
            user_id: profile.user_id().to_owned(),
            days_per_week: days,
            workouts,
            rest_days: MAX_WORKOUT_DAYS - days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_table() {
        assert_eq!(split_for(2, FitnessGoal::MuscleGain), vec![Full, Full]);
        assert_eq!(split_for(3, FitnessGoal::WeightLoss), vec![Full, Cardio, Full]);
        assert_eq!(split_for(4, FitnessGoal::Maintenance), vec![Upper, Lower, Upper, Lower]);
        assert_eq!(
            split_for(7, FitnessGoal::MuscleGain),
            vec![Upper, Lower, Core, Upper, Lower, Cardio, Cardio]
        );
        assert_eq!(
            split_for(5, FitnessGoal::WeightLoss),
            vec![Upper, Lower, Cardio, Upper, Lower]
        );
    }
}
