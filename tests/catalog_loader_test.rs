// ABOUTME: Integration tests for loading food and exercise catalogs from JSON and YAML files
// ABOUTME: Covers format detection, parse failures, I/O failures, and duplicate records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitplan::catalog::loader::parse_records;
use fitplan::catalog::{load_document, load_exercises, load_foods, CatalogFormat};
use fitplan_core::errors::ErrorCode;
use fitplan_core::models::{Difficulty, FoodCategory, FoodItem, ProfileInput};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FOODS_JSON: &str = r#"[
  {"name": "Tempeh", "category": "protein", "calories": 192, "protein_g": 20.3,
   "carbs_g": 7.6, "fat_g": 10.8, "tags": ["vegan", "plant_based"]},
  {"name": "Rye Bread", "category": "carb", "calories": 259, "protein": 8.5,
   "carbs": 48.3, "fat": 3.3, "serving_size": "2 slices", "tags": ["whole_grain"]}
]"#;

const EXERCISES_YAML: &str = "
- name: Kettlebell Swing
  category: strength
  muscle_group: legs
  difficulty: intermediate
  equipment: [kettlebell]
  description: Hip hinge swing
- name: Bird Dog
  category: core
  muscle_group: core
  difficulty: beginner
";

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// FORMAT DETECTION
// ============================================================================

#[test]
fn test_format_from_extension() {
    assert_eq!(
        CatalogFormat::from_path(Path::new("foods.json")).unwrap(),
        CatalogFormat::Json
    );
    assert_eq!(
        CatalogFormat::from_path(Path::new("foods.YAML")).unwrap(),
        CatalogFormat::Yaml
    );
    assert_eq!(
        CatalogFormat::from_path(Path::new("foods.yml")).unwrap(),
        CatalogFormat::Yaml
    );
}

#[test]
fn test_unsupported_extension_rejected_before_reading() {
    // The file does not exist; the extension check must fail first
    for name in ["foods.csv", "foods.txt", "foods"] {
        let err = load_foods(Path::new(name)).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedFormat, "{name}");
    }
}

// ============================================================================
// LOADING
// ============================================================================

#[test]
fn test_load_foods_json() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "foods.json", FOODS_JSON);

    let catalog = load_foods(&path).unwrap();
    assert_eq!(catalog.len(), 2);

    let bread = catalog.get("Rye Bread").unwrap();
    assert_eq!(bread.category, FoodCategory::Carb);
    assert_eq!(bread.serving_size, "2 slices");
    assert!((bread.carbs_g - 48.3).abs() < f64::EPSILON);

    let tempeh = catalog.get("Tempeh").unwrap();
    assert_eq!(tempeh.serving_size, "100g");
    assert_eq!(catalog.filter_by_restrictions(["vegan"]).len(), 1);
}

#[test]
fn test_load_exercises_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "exercises.yml", EXERCISES_YAML);

    let catalog = load_exercises(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.get("Kettlebell Swing").unwrap().difficulty,
        Difficulty::Intermediate
    );

    // Bird Dog lists no equipment, so it is always usable
    let usable = catalog.by_equipment(Vec::<String>::new());
    assert_eq!(usable.len(), 1);
    assert_eq!(usable[0].name, "Bird Dog");
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let err = load_foods(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[test]
fn test_malformed_record_fails_whole_load() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "foods.json",
        r#"[{"name": "Mystery", "category": "dessert", "calories": 1,
             "protein_g": 0, "carbs_g": 0, "fat_g": 0}]"#,
    );
    let err = load_foods(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_duplicate_names_in_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "exercises.yaml",
        "- {name: Plank, category: core, muscle_group: core, difficulty: beginner}\n\
         - {name: Plank, category: core, muscle_group: core, difficulty: advanced}\n",
    );
    let err = load_exercises(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
}

#[test]
fn test_parse_records_from_string() {
    let items: Vec<FoodItem> = parse_records(FOODS_JSON, CatalogFormat::Json).unwrap();
    assert_eq!(items.len(), 2);

    let err = parse_records::<FoodItem>("name: not a list", CatalogFormat::Yaml).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_load_profile_document() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "me.yaml",
        "age: 30\ngender: female\nheight: 165\nweight: 60\ngoal: weight loss\n",
    );
    let input: ProfileInput = load_document(&path).unwrap();
    assert_eq!(input.age, Some(30));
    assert_eq!(input.height_cm, Some(165.0));
    assert_eq!(input.goal.as_deref(), Some("weight loss"));
    assert!(input.allergies.is_none());
}
