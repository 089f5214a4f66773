// ABOUTME: Food and exercise catalogs shared read-only by the composers
// ABOUTME: Exposes catalog types, the tag predicate combinator, sample data, and file loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalogs
//!
//! Catalogs are built once (from the sample data or a file) and never mutated
//! afterwards. Composers receive them behind an `Arc` and work on private
//! vectors of references filtered out of them.

/// Exercise catalog
pub mod exercise;
/// Food catalog
pub mod food;
/// JSON / YAML catalog loading
pub mod loader;
/// Tag predicate combinator
pub mod predicate;
/// Built-in sample records
mod seed;

pub use exercise::{equipment_predicate, is_usable, ExerciseCatalog};
pub use food::{apply_restrictions, NutritionCatalog};
pub use loader::{load_document, load_exercises, load_foods, CatalogFormat};
pub use predicate::{TagPredicate, Tagged};
