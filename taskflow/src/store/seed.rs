//! Seed datasets for the stores.
//!
//! The built-in datasets are embedded JSON (`data/tasks.json`,
//! `data/categories.json`), ordered newest-first to match the task
//! store's insertion order. An alternate task dataset can be loaded from
//! a file given on the command line.

use std::path::{Path, PathBuf};

use taskflow_model::{Category, Task};

const TASKS_JSON: &str = include_str!("../../data/tasks.json");
const CATEGORIES_JSON: &str = include_str!("../../data/categories.json");

/// Errors that can occur while loading seed data.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Failed to read a seed file.
    #[error("failed to read seed file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse a seed dataset.
    #[error("failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses the embedded task dataset.
///
/// # Errors
///
/// Returns [`SeedError::Parse`] if the embedded JSON is malformed.
pub fn builtin_tasks() -> Result<Vec<Task>, SeedError> {
    Ok(serde_json::from_str(TASKS_JSON)?)
}

/// Parses the embedded category dataset.
///
/// # Errors
///
/// Returns [`SeedError::Parse`] if the embedded JSON is malformed.
pub fn builtin_categories() -> Result<Vec<Category>, SeedError> {
    Ok(serde_json::from_str(CATEGORIES_JSON)?)
}

/// Loads a task dataset from a JSON file.
///
/// # Errors
///
/// Returns [`SeedError::ReadFile`] if the file cannot be read, or
/// [`SeedError::Parse`] if its contents are not a valid task list.
pub fn tasks_from_file(path: &Path) -> Result<Vec<Task>, SeedError> {
    let contents = std::fs::read_to_string(path).map_err(|e| SeedError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(serde_json::from_str(&contents)?)
}
