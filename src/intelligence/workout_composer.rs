// ABOUTME: Workout composer building one session with warm-up, main block, and cool-down
// ABOUTME: Filters by equipment and experience, samples per muscle group, and prescribes sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout Composer
//!
//! The main block size comes from the session length: warm-up and cool-down
//! get a fixed allowance, then every exercise takes a fixed number of minutes
//! including rest. Cardio sessions use fewer, longer exercises.

use super::profile_calculator::UserProfile;
use super::random::{choose, choose_many, RandomSource};
use crate::catalog::{equipment_predicate, is_usable, ExerciseCatalog};
use crate::config::WorkoutPlanConfig;
use fitplan_core::constants::muscle_groups::{ARMS, BACK, CHEST, CORE, LEGS, SHOULDERS};
use fitplan_core::constants::prescriptions as rx;
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{
    Difficulty, Dose, ExerciseCategory, ExerciseItem, ExercisePrescription, ExperienceLevel,
    FitnessGoal, WorkoutFocus, WorkoutSession,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Muscle groups trained by `focus`, with how many exercises each gets
///
/// Cardio sessions draw from the cardio category instead and return nothing here.
#[must_use]
pub const fn target_groups(focus: WorkoutFocus) -> &'static [(&'static str, usize)] {
    match focus {
        WorkoutFocus::Upper => &[(CHEST, 2), (BACK, 2), (SHOULDERS, 1), (ARMS, 1)],
        WorkoutFocus::Lower => &[(LEGS, 2)],
        WorkoutFocus::Core => &[(CORE, 2)],
        WorkoutFocus::Cardio => &[],
        WorkoutFocus::Full => &[
            (CHEST, 1),
            (BACK, 1),
            (SHOULDERS, 1),
            (ARMS, 1),
            (LEGS, 1),
            (CORE, 1),
        ],
    }
}

/// Composes single sessions from a shared exercise catalog
#[derive(Debug, Clone)]
pub struct WorkoutComposer {
    catalog: Arc<ExerciseCatalog>,
    config: WorkoutPlanConfig,
}

impl WorkoutComposer {
    /// Create a composer over `catalog`
    #[must_use]
    pub const fn new(catalog: Arc<ExerciseCatalog>, config: WorkoutPlanConfig) -> Self {
        Self { catalog, config }
    }

    /// Exercises the profile can perform with its equipment at its experience level
    #[must_use]
    pub fn available_exercises(&self, profile: &UserProfile) -> Vec<&ExerciseItem> {
        let equipment = equipment_predicate(profile.available_equipment());
        let permitted = Difficulty::permitted_for(profile.fitness_experience());
        self.catalog
            .items()
            .iter()
            .filter(|item| is_usable(item, &equipment))
            .filter(|item| permitted.contains(&item.difficulty))
            .collect()
    }

    /// Number of main-block exercises that fit in `duration_minutes`
    #[must_use]
    pub fn exercise_count(&self, focus: WorkoutFocus, duration_minutes: u32) -> usize {
        let main_minutes = duration_minutes.saturating_sub(self.config.warm_up_cool_down_minutes);
        let count = (main_minutes / self.config.minutes_per_exercise.max(1)) as usize;
        if focus == WorkoutFocus::Cardio {
            (count / 2).max(self.config.cardio_min_exercises)
        } else {
            count
        }
    }

    /// Compose one session for `profile`
    ///
    /// # Errors
    ///
    /// Returns `CatalogExhausted` when the exercise catalog is empty
    pub fn compose_session<R>(
        &self,
        profile: &UserProfile,
        focus: WorkoutFocus,
        duration_minutes: u32,
        rng: &mut R,
    ) -> AppResult<WorkoutSession>
    where
        R: RandomSource + ?Sized,
    {
        if self.catalog.is_empty() {
            return Err(AppError::catalog_exhausted(
                "Exercise catalog is empty; cannot compose a session",
            ));
        }

        let mut session = WorkoutSession {
            day: None,
            focus,
            title: focus.title().to_owned(),
            duration_minutes,
            warm_up: Vec::new(),
            main_exercises: Vec::new(),
            cool_down: Vec::new(),
            total_exercises: 0,
        };

        let pool = self.available_exercises(profile);
        if pool.is_empty() {
            warn!(
                user_id = %profile.user_id(),
                focus = focus.as_str(),
                "No exercises match the available equipment and experience level"
            );
            return Ok(session);
        }

        let cardio = of_category(&pool, ExerciseCategory::Cardio);
        let flexibility = of_category(&pool, ExerciseCategory::Flexibility);

        if let Some(item) = choose(rng, &cardio) {
            session.warm_up.push(
                ExercisePrescription::for_item(item, 1, Dose::Time(rx::WARM_UP_CARDIO_TIME.to_owned()))
                    .with_intensity(rx::WARM_UP_INTENSITY),
            );
        }
        if let Some(item) = choose(rng, &flexibility) {
            session.warm_up.push(ExercisePrescription::for_item(
                item,
                1,
                Dose::Time(rx::WARM_UP_MOBILITY_TIME.to_owned()),
            ));
        }

        // Stretches only appear in warm-up and cool-down
        let main_pool: Vec<&ExerciseItem> = pool
            .iter()
            .copied()
            .filter(|item| item.category != ExerciseCategory::Flexibility)
            .collect();
        let count = self.exercise_count(focus, duration_minutes);
        let selected = select_main(&main_pool, &cardio, focus, count, rng);
        session.main_exercises = selected
            .iter()
            .filter_map(|item| prescribe(item, focus, profile))
            .collect();
        session.total_exercises = session.main_exercises.len();

        if let Some(item) = choose(rng, &flexibility) {
            session.cool_down.push(ExercisePrescription::for_item(
                item,
                1,
                Dose::Time(rx::COOL_DOWN_TIME.to_owned()),
            ));
        }

        debug!(
            user_id = %profile.user_id(),
            focus = focus.as_str(),
            requested = count,
            selected = session.total_exercises,
            "Composed workout session"
        );
        Ok(session)
    }
}

fn of_category<'a>(pool: &[&'a ExerciseItem], category: ExerciseCategory) -> Vec<&'a ExerciseItem> {
    pool.iter()
        .copied()
        .filter(|item| item.category == category)
        .collect()
}

fn select_main<'a, R>(
    pool: &[&'a ExerciseItem],
    cardio: &[&'a ExerciseItem],
    focus: WorkoutFocus,
    count: usize,
    rng: &mut R,
) -> Vec<&'a ExerciseItem>
where
    R: RandomSource + ?Sized,
{
    let mut selected: Vec<&ExerciseItem> = if focus == WorkoutFocus::Cardio {
        choose_many(rng, cardio, count)
    } else {
        target_groups(focus)
            .iter()
            .flat_map(|&(group, per_group)| {
                let candidates: Vec<&ExerciseItem> = pool
                    .iter()
                    .copied()
                    .filter(|item| item.muscle_group == group)
                    .collect();
                choose_many(rng, &candidates, per_group)
            })
            .collect()
    };

    // Backfill; every pass either adds an unselected exercise or stops
    while selected.len() < count {
        let unselected = |item: &&&ExerciseItem| !selected.iter().any(|s| s.name == item.name);
        let mut candidates: Vec<&ExerciseItem> = Vec::new();
        if focus != WorkoutFocus::Cardio {
            candidates = pool
                .iter()
                .filter(unselected)
                .filter(|item| item.category == ExerciseCategory::Strength)
                .copied()
                .collect();
        }
        if candidates.is_empty() {
            candidates = pool.iter().filter(unselected).copied().collect();
        }
        match choose(rng, &candidates) {
            Some(&item) => selected.push(item),
            None => break,
        }
    }
    selected
}

fn prescribe(
    item: &ExerciseItem,
    focus: WorkoutFocus,
    profile: &UserProfile,
) -> Option<ExercisePrescription> {
    let experience = profile.fitness_experience();
    let prescription = match item.category {
        ExerciseCategory::Cardio => {
            let time = if focus == WorkoutFocus::Cardio {
                rx::CARDIO_FOCUS_TIME
            } else {
                rx::CARDIO_FINISHER_TIME
            };
            ExercisePrescription::for_item(item, 1, Dose::Time(time.to_owned()))
                .with_intensity(rx::CARDIO_INTENSITY)
        }
        ExerciseCategory::Strength => {
            let (sets, reps) = strength_scheme(experience, profile.goal(), item.difficulty);
            ExercisePrescription::for_item(item, sets, Dose::Reps(reps.to_owned()))
                .with_rest(rx::STRENGTH_REST)
        }
        ExerciseCategory::Core => {
            let beginner = experience == ExperienceLevel::Beginner;
            let sets = if beginner { 2 } else { 3 };
            let reps = match (item.name == rx::PLANK, beginner) {
                (true, true) => rx::PLANK_BEGINNER_HOLD,
                (true, false) => rx::PLANK_HOLD,
                (false, true) => "10-12",
                (false, false) => "15-20",
            };
            ExercisePrescription::for_item(item, sets, Dose::Reps(reps.to_owned()))
                .with_rest(rx::CORE_REST)
        }
        ExerciseCategory::Flexibility => return None,
    };
    Some(prescription)
}

/// Sets and rep range for a strength exercise
#[must_use]
pub const fn strength_scheme(
    experience: ExperienceLevel,
    goal: FitnessGoal,
    difficulty: Difficulty,
) -> (u8, &'static str) {
    let muscle_gain = matches!(goal, FitnessGoal::MuscleGain);
    match experience {
        ExperienceLevel::Beginner => {
            if matches!(difficulty, Difficulty::Beginner) {
                (2, "12-15")
            } else {
                (2, "8-12")
            }
        }
        ExperienceLevel::Intermediate => {
            if muscle_gain {
                (3, "8-12")
            } else {
                (3, "10-15")
            }
        }
        ExperienceLevel::Advanced => {
            if muscle_gain {
                (4, "6-10")
            } else {
                (4, "8-15")
            }
        }
    }
}
