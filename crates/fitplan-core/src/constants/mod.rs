// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, profile defaults, dietary rules, and workout prescriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.
//! Tunable numbers (ratios, multipliers, clamps) live in the planner configuration;
//! what remains here is fixed vocabulary and physical constants.

/// Energy density of macronutrients
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARB: f64 = 4.0;
}

/// Values applied when a new profile omits a field
pub mod profile_defaults {
    /// Goal when none is supplied
    pub const GOAL: &str = "maintenance";
    /// Activity level when none is supplied
    pub const ACTIVITY_LEVEL: &str = "lightly_active";
    /// Fitness experience when none is supplied
    pub const FITNESS_EXPERIENCE: &str = "beginner";
    /// Training days per week
    pub const PREFERRED_WORKOUT_DAYS: i64 = 3;
    /// Session length in minutes
    pub const WORKOUT_DURATION_MINUTES: i64 = 45;
    /// Equipment assumed to be available
    pub const AVAILABLE_EQUIPMENT: &[&str] = &["bodyweight"];
    /// Identifier used when a profile is computed outside a store
    pub const ANONYMOUS_USER_ID: &str = "anonymous";
    /// Maximum training days in a week
    pub const MAX_WORKOUT_DAYS: u8 = 7;
}

/// Dietary restriction vocabulary
pub mod diet {
    /// Restriction name mapped to the tags that satisfy it
    pub const RESTRICTION_ALLOWED_TAGS: &[(&str, &[&str])] = &[
        ("vegetarian", &["vegetarian", "vegan", "plant_based"]),
        ("vegan", &["vegan", "plant_based"]),
        ("gluten_free", &["gluten_free"]),
        ("dairy_free", &["dairy_free", "vegan", "plant_based"]),
        ("nut_free", &["nut_free"]),
    ];

    /// Look up the allow-list for a restriction, `None` for unknown restrictions
    #[must_use]
    pub fn allowed_tags(restriction: &str) -> Option<&'static [&'static str]> {
        RESTRICTION_ALLOWED_TAGS
            .iter()
            .find(|(name, _)| *name == restriction)
            .map(|(_, tags)| *tags)
    }
}

/// Meal labels and food tags used by meal selection rules
pub mod meals {
    /// Labels for main meals in order; later meals are "Meal N"
    pub const MAIN_MEAL_LABELS: &[&str] = &[
        "Breakfast",
        "Lunch",
        "Dinner",
        "Pre-workout Meal",
        "Post-workout Meal",
    ];

    /// Breakfast-friendly food
    pub const TAG_BREAKFAST: &str = "breakfast";
    /// Protein-dense food
    pub const TAG_HIGH_PROTEIN: &str = "high_protein";
    /// Whole grain carbohydrate
    pub const TAG_WHOLE_GRAIN: &str = "whole_grain";
    /// Portable snack food
    pub const TAG_SNACK: &str = "snack";
    /// Fast-digesting carbohydrate
    pub const TAG_QUICK_ENERGY: &str = "quick_energy";
    /// Slow-digesting carbohydrate
    pub const TAG_COMPLEX_CARBS: &str = "complex_carbs";
}

/// Muscle group names targeted by session focus
pub mod muscle_groups {
    /// Chest
    pub const CHEST: &str = "chest";
    /// Back
    pub const BACK: &str = "back";
    /// Shoulders
    pub const SHOULDERS: &str = "shoulders";
    /// Arms
    pub const ARMS: &str = "arms";
    /// Legs
    pub const LEGS: &str = "legs";
    /// Core
    pub const CORE: &str = "core";
}

/// Equipment vocabulary
pub mod equipment {
    /// Equipment entries that never restrict an exercise
    pub const ALWAYS_AVAILABLE: &[&str] = &["none", "bodyweight"];
}

/// Display strings used in exercise prescriptions
pub mod prescriptions {
    /// Warm-up cardio duration
    pub const WARM_UP_CARDIO_TIME: &str = "5 minutes";
    /// Warm-up cardio intensity
    pub const WARM_UP_INTENSITY: &str = "Light to moderate";
    /// Warm-up mobility duration
    pub const WARM_UP_MOBILITY_TIME: &str = "3-5 minutes";
    /// Main-block cardio duration on cardio days
    pub const CARDIO_FOCUS_TIME: &str = "15-20 minutes";
    /// Main-block cardio duration on other days
    pub const CARDIO_FINISHER_TIME: &str = "8-10 minutes";
    /// Main-block cardio intensity
    pub const CARDIO_INTENSITY: &str = "Moderate to high";
    /// Rest between strength sets
    pub const STRENGTH_REST: &str = "60-90 seconds";
    /// Rest between core sets
    pub const CORE_REST: &str = "45-60 seconds";
    /// Cool-down duration
    pub const COOL_DOWN_TIME: &str = "5 minutes";
    /// Plank hold for beginners
    pub const PLANK_BEGINNER_HOLD: &str = "20-30 seconds";
    /// Plank hold for everyone else
    pub const PLANK_HOLD: &str = "30-60 seconds";
    /// Exercise whose core prescription is a timed hold
    pub const PLANK: &str = "Plank";
}
