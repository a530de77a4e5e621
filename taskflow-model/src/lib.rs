//! Domain types for `TaskFlow`.

pub mod category;
pub mod task;

pub use category::{Category, CategoryDraft, CategoryId, CategoryPatch, DEFAULT_CATEGORY_COLOR};
pub use task::{Priority, Task, TaskDefaults, TaskDraft, TaskId, TaskPatch};

use thiserror::Error;

/// Maximum allowed task title length in characters.
pub const MAX_TITLE_LENGTH: usize = 256;

/// Errors returned when a record fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Task title is empty after trimming.
    #[error("task title cannot be empty")]
    TitleEmpty,
    /// Task title exceeds the maximum length.
    #[error("task title too long ({len} characters, max {MAX_TITLE_LENGTH})")]
    TitleTooLong {
        /// Character count of the rejected title.
        len: usize,
    },
    /// Category name is empty after trimming.
    #[error("category name cannot be empty")]
    NameEmpty,
    /// Category color is not a `#RRGGBB` hex string.
    #[error("invalid category color: {0}")]
    InvalidColor(String),
}
