// ABOUTME: File loader for food and exercise catalogs in JSON or YAML
// ABOUTME: Picks a parser from the file extension and rejects anything else up front
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalog file loading
//!
//! A catalog file is a JSON array or YAML sequence of records in the
//! [`FoodItem`] / [`ExerciseItem`] schema. Loading is all-or-nothing: an
//! unsupported extension, an unreadable file or a single malformed record
//! fails the whole load.

use super::exercise::ExerciseCatalog;
use super::food::NutritionCatalog;
use fitplan_core::errors::{AppError, AppResult, ErrorCode};
use fitplan_core::models::{ExerciseItem, FoodItem};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

/// Supported catalog file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl CatalogFormat {
    /// Detect the format from a file extension (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for any other extension
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(AppError::unsupported_format(format!(
                "Unsupported file '{}': provide a .json, .yaml or .yml file",
                path.display()
            ))),
        }
    }
}

/// Parse one document of type `T` from `contents`
///
/// # Errors
///
/// Returns `InvalidFormat` when the text does not deserialize into `T`
pub fn parse_document<T: DeserializeOwned>(contents: &str, format: CatalogFormat) -> AppResult<T> {
    match format {
        CatalogFormat::Json => serde_json::from_str(contents).map_err(|e| {
            AppError::new(ErrorCode::InvalidFormat, format!("Invalid JSON document: {e}"))
                .with_source(e)
        }),
        CatalogFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| {
            AppError::new(ErrorCode::InvalidFormat, format!("Invalid YAML document: {e}"))
                .with_source(e)
        }),
    }
}

/// Parse a sequence of records from `contents`
///
/// # Errors
///
/// Returns `InvalidFormat` when the text is not a sequence of valid records
pub fn parse_records<T: DeserializeOwned>(contents: &str, format: CatalogFormat) -> AppResult<Vec<T>> {
    parse_document(contents, format)
}

/// Read one JSON or YAML document from `path`
///
/// # Errors
///
/// Returns `UnsupportedFormat`, `StorageError`, or `InvalidFormat`
pub fn load_document<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let format = CatalogFormat::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::new(
            ErrorCode::StorageError,
            format!("Failed to read '{}': {e}", path.display()),
        )
        .with_source(e)
    })?;
    parse_document(&contents, format)
}

/// Read records from a catalog file
///
/// # Errors
///
/// Returns `UnsupportedFormat`, `StorageError`, or `InvalidFormat`
pub fn load_records<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    load_document(path)
}

/// Load a food catalog from a JSON or YAML file
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or contains duplicate names
pub fn load_foods(path: &Path) -> AppResult<NutritionCatalog> {
    let records: Vec<FoodItem> = load_records(path)?;
    let catalog = NutritionCatalog::new(records)?;
    info!(path = %path.display(), items = catalog.len(), "Loaded food catalog");
    Ok(catalog)
}

/// Load an exercise catalog from a JSON or YAML file
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or contains duplicate names
pub fn load_exercises(path: &Path) -> AppResult<ExerciseCatalog> {
    let records: Vec<ExerciseItem> = load_records(path)?;
    let catalog = ExerciseCatalog::new(records)?;
    info!(path = %path.display(), items = catalog.len(), "Loaded exercise catalog");
    Ok(catalog)
}
