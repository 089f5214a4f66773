// ABOUTME: Built-in sample food and exercise records used when no catalog file is supplied
// ABOUTME: 23 foods across four categories and 24 exercises across four training modalities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitplan_core::models::{Difficulty, ExerciseCategory, ExerciseItem, FoodCategory, FoodItem};
use std::collections::BTreeSet;

// ============================================================================
// Food Data
// ============================================================================

struct FoodData {
    name: &'static str,
    category: FoodCategory,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    serving_size: &'static str,
    tags: &'static [&'static str],
}

const FOODS: &[FoodData] = &[
    // Proteins
    FoodData {
        name: "Chicken Breast",
        category: FoodCategory::Protein,
        calories: 165.0,
        protein_g: 31.0,
        carbs_g: 0.0,
        fat_g: 3.6,
        serving_size: "100g",
        tags: &["high_protein", "low_carb"],
    },
    FoodData {
        name: "Salmon",
        category: FoodCategory::Protein,
        calories: 208.0,
        protein_g: 20.0,
        carbs_g: 0.0,
        fat_g: 13.0,
        serving_size: "100g",
        tags: &["high_protein", "healthy_fat", "omega3"],
    },
    FoodData {
        name: "Tofu",
        category: FoodCategory::Protein,
        calories: 144.0,
        protein_g: 17.0,
        carbs_g: 3.0,
        fat_g: 8.0,
        serving_size: "100g",
        tags: &["vegetarian", "vegan", "plant_based"],
    },
    FoodData {
        name: "Greek Yogurt",
        category: FoodCategory::Protein,
        calories: 59.0,
        protein_g: 10.0,
        carbs_g: 3.6,
        fat_g: 0.4,
        serving_size: "100g",
        tags: &["high_protein", "probiotic", "breakfast"],
    },
    FoodData {
        name: "Eggs",
        category: FoodCategory::Protein,
        calories: 143.0,
        protein_g: 13.0,
        carbs_g: 1.0,
        fat_g: 9.5,
        serving_size: "2 eggs",
        tags: &["high_protein", "breakfast"],
    },
    FoodData {
        name: "Lean Beef",
        category: FoodCategory::Protein,
        calories: 250.0,
        protein_g: 26.0,
        carbs_g: 0.0,
        fat_g: 17.0,
        serving_size: "100g",
        tags: &["high_protein", "iron_rich"],
    },
    FoodData {
        name: "Turkey Breast",
        category: FoodCategory::Protein,
        calories: 157.0,
        protein_g: 24.0,
        carbs_g: 0.0,
        fat_g: 7.0,
        serving_size: "100g",
        tags: &["high_protein", "low_fat"],
    },
    FoodData {
        name: "Lentils",
        category: FoodCategory::Protein,
        calories: 116.0,
        protein_g: 9.0,
        carbs_g: 20.0,
        fat_g: 0.4,
        serving_size: "100g",
        tags: &["vegetarian", "vegan", "plant_based", "fiber"],
    },
    // Carbohydrates
    FoodData {
        name: "Brown Rice",
        category: FoodCategory::Carb,
        calories: 112.0,
        protein_g: 2.6,
        carbs_g: 23.0,
        fat_g: 0.9,
        serving_size: "100g",
        tags: &["whole_grain", "gluten_free"],
    },
    FoodData {
        name: "Sweet Potato",
        category: FoodCategory::Carb,
        calories: 86.0,
        protein_g: 1.6,
        carbs_g: 20.0,
        fat_g: 0.1,
        serving_size: "100g",
        tags: &["complex_carbs", "vitamin_a"],
    },
    FoodData {
        name: "Quinoa",
        category: FoodCategory::Carb,
        calories: 120.0,
        protein_g: 4.4,
        carbs_g: 21.3,
        fat_g: 1.9,
        serving_size: "100g",
        tags: &["whole_grain", "complete_protein", "gluten_free"],
    },
    FoodData {
        name: "Oats",
        category: FoodCategory::Carb,
        calories: 389.0,
        protein_g: 16.9,
        carbs_g: 66.3,
        fat_g: 6.9,
        serving_size: "100g",
        tags: &["whole_grain", "fiber", "breakfast"],
    },
    FoodData {
        name: "Whole Wheat Bread",
        category: FoodCategory::Carb,
        calories: 265.0,
        protein_g: 13.2,
        carbs_g: 43.1,
        fat_g: 4.2,
        serving_size: "100g",
        tags: &["whole_grain", "fiber"],
    },
    FoodData {
        name: "Banana",
        category: FoodCategory::Carb,
        calories: 89.0,
        protein_g: 1.1,
        carbs_g: 22.8,
        fat_g: 0.3,
        serving_size: "1 medium",
        tags: &["fruit", "potassium", "quick_energy"],
    },
    FoodData {
        name: "Pasta (whole grain)",
        category: FoodCategory::Carb,
        calories: 131.0,
        protein_g: 5.3,
        carbs_g: 27.2,
        fat_g: 0.9,
        serving_size: "100g",
        tags: &["whole_grain", "complex_carbs"],
    },
    // Fats
    FoodData {
        name: "Avocado",
        category: FoodCategory::Fat,
        calories: 160.0,
        protein_g: 2.0,
        carbs_g: 8.5,
        fat_g: 14.7,
        serving_size: "1/2 avocado",
        tags: &["healthy_fat", "monounsaturated"],
    },
    FoodData {
        name: "Olive Oil",
        category: FoodCategory::Fat,
        calories: 119.0,
        protein_g: 0.0,
        carbs_g: 0.0,
        fat_g: 13.5,
        serving_size: "1 tbsp",
        tags: &["healthy_fat", "monounsaturated"],
    },
    FoodData {
        name: "Almonds",
        category: FoodCategory::Fat,
        calories: 164.0,
        protein_g: 6.0,
        carbs_g: 6.0,
        fat_g: 14.0,
        serving_size: "28g",
        tags: &["healthy_fat", "fiber", "snack"],
    },
    FoodData {
        name: "Chia Seeds",
        category: FoodCategory::Fat,
        calories: 58.0,
        protein_g: 2.0,
        carbs_g: 4.0,
        fat_g: 3.7,
        serving_size: "1 tbsp",
        tags: &["healthy_fat", "omega3", "fiber"],
    },
    // Vegetables
    FoodData {
        name: "Broccoli",
        category: FoodCategory::Vegetable,
        calories: 34.0,
        protein_g: 2.8,
        carbs_g: 6.6,
        fat_g: 0.4,
        serving_size: "100g",
        tags: &["cruciferous", "fiber", "vitamin_c"],
    },
    FoodData {
        name: "Spinach",
        category: FoodCategory::Vegetable,
        calories: 23.0,
        protein_g: 2.9,
        carbs_g: 3.6,
        fat_g: 0.4,
        serving_size: "100g",
        tags: &["leafy_green", "iron", "vitamin_k"],
    },
    FoodData {
        name: "Bell Pepper",
        category: FoodCategory::Vegetable,
        calories: 31.0,
        protein_g: 1.0,
        carbs_g: 6.0,
        fat_g: 0.3,
        serving_size: "100g",
        tags: &["vitamin_c", "antioxidants"],
    },
    FoodData {
        name: "Carrots",
        category: FoodCategory::Vegetable,
        calories: 41.0,
        protein_g: 0.9,
        carbs_g: 9.6,
        fat_g: 0.2,
        serving_size: "100g",
        tags: &["vitamin_a", "fiber"],
    },
];

// ============================================================================
// Exercise Data
// ============================================================================

struct ExerciseData {
    name: &'static str,
    category: ExerciseCategory,
    muscle_group: &'static str,
    difficulty: Difficulty,
    equipment: &'static [&'static str],
    description: &'static str,
    instructions: &'static str,
}

const EXERCISES: &[ExerciseData] = &[
    // Strength - upper body
    ExerciseData {
        name: "Push-up",
        category: ExerciseCategory::Strength,
        muscle_group: "chest",
        difficulty: Difficulty::Beginner,
        equipment: &["bodyweight"],
        description: "Standard push-up targeting chest, shoulders, and triceps.",
        instructions: "Place hands slightly wider than shoulder-width apart. Lower body until chest nearly touches the floor. Push back up to starting position.",
    },
    ExerciseData {
        name: "Dumbbell Bench Press",
        category: ExerciseCategory::Strength,
        muscle_group: "chest",
        difficulty: Difficulty::Intermediate,
        equipment: &["dumbbells", "bench"],
        description: "Chest press with dumbbells for balanced chest development.",
        instructions: "Lie on bench with dumbbells at chest level. Press weights upward until arms are extended. Lower weights back to starting position.",
    },
    ExerciseData {
        name: "Pull-up",
        category: ExerciseCategory::Strength,
        muscle_group: "back",
        difficulty: Difficulty::Intermediate,
        equipment: &["pull-up bar"],
        description: "Upper body pulling exercise for back and biceps.",
        instructions: "Grip pull-up bar with hands wider than shoulder width. Pull body up until chin is over the bar. Lower back to starting position with control.",
    },
    ExerciseData {
        name: "Dumbbell Row",
        category: ExerciseCategory::Strength,
        muscle_group: "back",
        difficulty: Difficulty::Beginner,
        equipment: &["dumbbells", "bench"],
        description: "Unilateral back exercise targeting lats and middle back.",
        instructions: "Place one knee and hand on bench. Hold dumbbell with free hand. Pull dumbbell to hip, keeping elbow close to body. Lower with control.",
    },
    ExerciseData {
        name: "Overhead Press",
        category: ExerciseCategory::Strength,
        muscle_group: "shoulders",
        difficulty: Difficulty::Intermediate,
        equipment: &["dumbbells", "barbell"],
        description: "Vertical pressing movement for shoulder development.",
        instructions: "Hold weights at shoulder level. Press weights overhead until arms are fully extended. Lower weights back to shoulder level.",
    },
    ExerciseData {
        name: "Bicep Curl",
        category: ExerciseCategory::Strength,
        muscle_group: "arms",
        difficulty: Difficulty::Beginner,
        equipment: &["dumbbells", "barbell"],
        description: "Isolation exercise for biceps.",
        instructions: "Hold weights with arms extended at sides. Curl weights towards shoulders while keeping elbows fixed. Lower with control.",
    },
    ExerciseData {
        name: "Tricep Dip",
        category: ExerciseCategory::Strength,
        muscle_group: "arms",
        difficulty: Difficulty::Intermediate,
        equipment: &["bench", "dip bars"],
        description: "Bodyweight exercise targeting triceps.",
        instructions: "Support body with hands on bench or dip bars. Lower body by bending elbows. Push back up to starting position.",
    },
    // Strength - lower body
    ExerciseData {
        name: "Bodyweight Squat",
        category: ExerciseCategory::Strength,
        muscle_group: "legs",
        difficulty: Difficulty::Beginner,
        equipment: &["bodyweight"],
        description: "Fundamental lower body exercise targeting quads, hamstrings, and glutes.",
        instructions: "Stand with feet shoulder-width apart. Bend knees and lower hips as if sitting in a chair. Return to standing position.",
    },
    ExerciseData {
        name: "Barbell Squat",
        category: ExerciseCategory::Strength,
        muscle_group: "legs",
        difficulty: Difficulty::Intermediate,
        equipment: &["barbell", "squat rack"],
        description: "Compound lower body movement with external load.",
        instructions: "Place barbell across upper back. Squat by bending knees and lowering hips. Return to standing position.",
    },
    ExerciseData {
        name: "Deadlift",
        category: ExerciseCategory::Strength,
        muscle_group: "legs",
        difficulty: Difficulty::Intermediate,
        equipment: &["barbell"],
        description: "Posterior chain exercise targeting hamstrings, glutes, and lower back.",
        instructions: "Stand with feet hip-width apart, barbell over mid-foot. Bend at hips and knees to grip bar. Lift bar by extending hips and knees. Return bar to floor with control.",
    },
    ExerciseData {
        name: "Lunge",
        category: ExerciseCategory::Strength,
        muscle_group: "legs",
        difficulty: Difficulty::Beginner,
        equipment: &["bodyweight", "dumbbells"],
        description: "Unilateral leg exercise for balanced lower body development.",
        instructions: "Step forward with one leg. Lower body until both knees are bent at 90 degrees. Push off front foot to return to starting position.",
    },
    ExerciseData {
        name: "Glute Bridge",
        category: ExerciseCategory::Strength,
        muscle_group: "legs",
        difficulty: Difficulty::Beginner,
        equipment: &["bodyweight", "barbell"],
        description: "Hip extension exercise targeting glutes and hamstrings.",
        instructions: "Lie on back with knees bent, feet flat on floor. Lift hips toward ceiling by squeezing glutes. Lower hips with control.",
    },
    // Core
    ExerciseData {
        name: "Plank",
        category: ExerciseCategory::Core,
        muscle_group: "core",
        difficulty: Difficulty::Beginner,
        equipment: &["bodyweight"],
        description: "Isometric core exercise for overall core strength and stability.",
        instructions: "Support body on forearms and toes. Maintain straight line from head to heels. Hold position.",
    },
    ExerciseData {
        name: "Russian Twist",
        category: ExerciseCategory::Core,
        muscle_group: "core",
        difficulty: Difficulty::Intermediate,
        equipment: &["bodyweight", "medicine ball"],
        description: "Rotational core exercise targeting obliques.",
        instructions: "Sit with knees bent, feet elevated. Lean back slightly. Rotate torso side to side, touching hands or weight to floor beside hips.",
    },
    ExerciseData {
        name: "Mountain Climber",
        category: ExerciseCategory::Core,
        muscle_group: "core",
        difficulty: Difficulty::Beginner,
        equipment: &["bodyweight"],
        description: "Dynamic core exercise with cardiovascular benefits.",
        instructions: "Start in push-up position. Rapidly alternate bringing knees toward chest, keeping hips level.",
    },
    // Cardio
    ExerciseData {
        name: "Running",
        category: ExerciseCategory::Cardio,
        muscle_group: "full body",
        difficulty: Difficulty::Adjustable,
        equipment: &["none"],
        description: "Basic cardiovascular exercise for endurance and calorie burning.",
        instructions: "Run at consistent pace, maintaining upright posture and rhythmic breathing.",
    },
    ExerciseData {
        name: "Cycling",
        category: ExerciseCategory::Cardio,
        muscle_group: "lower body",
        difficulty: Difficulty::Adjustable,
        equipment: &["bicycle", "stationary bike"],
        description: "Low-impact cardiovascular exercise focusing on lower body.",
        instructions: "Maintain comfortable cadence, adjusting resistance as needed for workout intensity.",
    },
    ExerciseData {
        name: "Jumping Jacks",
        category: ExerciseCategory::Cardio,
        muscle_group: "full body",
        difficulty: Difficulty::Beginner,
        equipment: &["bodyweight"],
        description: "Classic calisthenic exercise for heart rate elevation.",
        instructions: "Start standing with arms at sides. Jump while spreading legs and raising arms overhead. Jump back to starting position.",
    },
    ExerciseData {
        name: "Burpee",
        category: ExerciseCategory::Cardio,
        muscle_group: "full body",
        difficulty: Difficulty::Advanced,
        equipment: &["bodyweight"],
        description: "High-intensity full body exercise combining strength and cardio.",
        instructions: "From standing, drop into squat position and place hands on floor. Jump feet back to plank position. Perform push-up. Jump feet forward to squat position. Jump explosively with arms overhead.",
    },
    ExerciseData {
        name: "Jump Rope",
        category: ExerciseCategory::Cardio,
        muscle_group: "full body",
        difficulty: Difficulty::Beginner,
        equipment: &["jump rope"],
        description: "Coordination-based cardiovascular exercise.",
        instructions: "Swing rope over head and jump as it passes under feet. Maintain light, continuous jumps using balls of feet.",
    },
    // Flexibility and mobility
    ExerciseData {
        name: "Hamstring Stretch",
        category: ExerciseCategory::Flexibility,
        muscle_group: "legs",
        difficulty: Difficulty::Beginner,
        equipment: &["none"],
        description: "Static stretch for hamstring flexibility.",
        instructions: "Sit with one leg extended, other leg bent. Reach toward toes of extended leg. Hold stretch for 20-30 seconds.",
    },
    ExerciseData {
        name: "Shoulder Stretch",
        category: ExerciseCategory::Flexibility,
        muscle_group: "shoulders",
        difficulty: Difficulty::Beginner,
        equipment: &["none"],
        description: "Basic stretch for shoulder mobility.",
        instructions: "Bring one arm across chest. Use opposite arm to gently pull elbow toward chest. Hold for 20-30 seconds.",
    },
    ExerciseData {
        name: "Hip Flexor Stretch",
        category: ExerciseCategory::Flexibility,
        muscle_group: "hips",
        difficulty: Difficulty::Beginner,
        equipment: &["none"],
        description: "Static stretch for hip mobility and flexibility.",
        instructions: "Kneel with one knee on floor, other foot flat in front. Push hips forward slightly until stretch is felt in front of hip. Hold for 20-30 seconds.",
    },
    ExerciseData {
        name: "Sun Salutation",
        category: ExerciseCategory::Flexibility,
        muscle_group: "full body",
        difficulty: Difficulty::Intermediate,
        equipment: &["yoga mat"],
        description: "Yoga sequence for full-body mobility and flexibility.",
        instructions: "Flow through sequence of poses including mountain pose, forward fold, plank, upward dog, downward dog, and back to standing.",
    },
];

fn owned_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

/// Sample food records
#[must_use]
pub fn sample_foods() -> Vec<FoodItem> {
    FOODS
        .iter()
        .map(|food| FoodItem {
            name: food.name.to_owned(),
            category: food.category,
            calories: food.calories,
            protein_g: food.protein_g,
            carbs_g: food.carbs_g,
            fat_g: food.fat_g,
            serving_size: food.serving_size.to_owned(),
            tags: owned_set(food.tags),
        })
        .collect()
}

/// Sample exercise records
#[must_use]
pub fn sample_exercises() -> Vec<ExerciseItem> {
    EXERCISES
        .iter()
        .map(|exercise| ExerciseItem {
            name: exercise.name.to_owned(),
            category: exercise.category,
            muscle_group: exercise.muscle_group.to_owned(),
            difficulty: exercise.difficulty,
            equipment: owned_set(exercise.equipment),
            description: exercise.description.to_owned(),
            instructions: exercise.instructions.to_owned(),
        })
        .collect()
}
