// ABOUTME: Exercise catalog records and generated workout plan structures
// ABOUTME: ExerciseItem, categories, difficulty, focus, prescriptions, sessions, and weekly plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::models::profile::ExperienceLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Training modality of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    /// Resistance training
    Strength,
    /// Trunk stability and rotation
    Core,
    /// Conditioning
    Cardio,
    /// Stretching and mobility
    Flexibility,
}

impl ExerciseCategory {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Core => "core",
            Self::Cardio => "cardio",
            Self::Flexibility => "flexibility",
        }
    }
}

/// Difficulty rating of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Suitable for everyone
    Beginner,
    /// Needs some training background
    Intermediate,
    /// Needs solid technique and conditioning
    Advanced,
    /// Intensity scales with the athlete (running, cycling)
    Adjustable,
}

impl Difficulty {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Adjustable => "adjustable",
        }
    }

    /// Difficulties an athlete at `experience` may be prescribed
    #[must_use]
    pub const fn permitted_for(experience: ExperienceLevel) -> &'static [Self] {
        match experience {
            ExperienceLevel::Beginner => &[Self::Beginner],
            ExperienceLevel::Intermediate => &[Self::Beginner, Self::Intermediate],
            ExperienceLevel::Advanced => &[
                Self::Beginner,
                Self::Intermediate,
                Self::Advanced,
                Self::Adjustable,
            ],
        }
    }
}

/// Catalog entry describing one exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseItem {
    /// Unique name
    pub name: String,
    /// Training modality
    pub category: ExerciseCategory,
    /// Primary muscle group ("chest", "legs", "full body", ...)
    pub muscle_group: String,
    /// Difficulty rating
    pub difficulty: Difficulty,
    /// Equipment that can be used to perform the exercise
    #[serde(default)]
    pub equipment: BTreeSet<String>,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// How to perform it
    #[serde(default)]
    pub instructions: String,
}

/// Session focus label used by weekly splits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutFocus {
    /// Every muscle group
    #[default]
    Full,
    /// Chest, back, shoulders, arms
    Upper,
    /// Legs
    Lower,
    /// Core
    Core,
    /// Conditioning
    Cardio,
}

impl WorkoutFocus {
    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Core => "core",
            Self::Cardio => "cardio",
        }
    }

    /// Session title shown to the user
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Full => "Full Body Workout",
            Self::Upper => "Upper Workout",
            Self::Lower => "Lower Workout",
            Self::Core => "Core Workout",
            Self::Cardio => "Cardio Workout",
        }
    }
}

impl FromStr for WorkoutFocus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" | "full body" | "full_body" => Ok(Self::Full),
            "upper" => Ok(Self::Upper),
            "lower" => Ok(Self::Lower),
            "core" => Ok(Self::Core),
            "cardio" => Ok(Self::Cardio),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized workout focus '{other}'"
            ))),
        }
    }
}

/// Work prescribed per set: a repetition range or a duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dose {
    /// Repetition range, e.g. "8-12"
    Reps(String),
    /// Duration, e.g. "5 minutes"
    Time(String),
}

/// One exercise as it appears in a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExercisePrescription {
    /// Catalog name
    pub name: String,
    /// Training modality
    pub category: ExerciseCategory,
    /// Primary muscle group
    pub muscle_group: String,
    /// Number of sets
    pub sets: u8,
    /// Reps or time per set
    #[serde(flatten)]
    pub dose: Dose,
    /// Rest between sets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest: Option<String>,
    /// Effort guidance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    /// Catalog description
    pub description: String,
    /// Catalog instructions
    pub instructions: String,
}

impl ExercisePrescription {
    /// Prescription skeleton carrying the catalog fields of `item`
    #[must_use]
    pub fn for_item(item: &ExerciseItem, sets: u8, dose: Dose) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category,
            muscle_group: item.muscle_group.clone(),
            sets,
            dose,
            rest: None,
            intensity: None,
            description: item.description.clone(),
            instructions: item.instructions.clone(),
        }
    }

    /// Set the rest period
    #[must_use]
    pub fn with_rest(mut self, rest: &str) -> Self {
        self.rest = Some(rest.to_owned());
        self
    }

    /// Set the intensity guidance
    #[must_use]
    pub fn with_intensity(mut self, intensity: &str) -> Self {
        self.intensity = Some(intensity.to_owned());
        self
    }
}

/// One training session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// 1-based day number when part of a weekly plan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    /// Session focus
    pub focus: WorkoutFocus,
    /// Display title
    pub title: String,
    /// Planned length in minutes
    pub duration_minutes: u32,
    /// Warm-up block
    pub warm_up: Vec<ExercisePrescription>,
    /// Main block
    pub main_exercises: Vec<ExercisePrescription>,
    /// Cool-down block
    pub cool_down: Vec<ExercisePrescription>,
    /// Number of main-block exercises
    pub total_exercises: usize,
}

/// Multi-session training week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWorkoutPlan {
    /// Profile the plan was generated for
    pub user_id: String,
    /// Training days in the week
    pub days_per_week: u8,
    /// Sessions in training-day order
    pub workouts: Vec<WorkoutSession>,
    /// Days without a session
    pub rest_days: u8,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_prescription_serializes_dose_inline() {
        let item = ExerciseItem {
            name: "Plank".into(),
            category: ExerciseCategory::Core,
            muscle_group: "core".into(),
            difficulty: Difficulty::Beginner,
            equipment: BTreeSet::from(["bodyweight".to_owned()]),
            description: String::new(),
            instructions: String::new(),
        };
        let prescription =
            ExercisePrescription::for_item(&item, 2, Dose::Reps("20-30 seconds".into()))
                .with_rest("45-60 seconds");
        let value = serde_json::to_value(&prescription).unwrap();
        assert_eq!(value["reps"], "20-30 seconds");
        assert_eq!(value["rest"], "45-60 seconds");
        assert!(value.get("intensity").is_none());
    }

    #[test]
    fn test_permitted_difficulties() {
        assert_eq!(
            Difficulty::permitted_for(ExperienceLevel::Beginner),
            &[Difficulty::Beginner]
        );
        assert!(Difficulty::permitted_for(ExperienceLevel::Advanced)
            .contains(&Difficulty::Adjustable));
    }
}
