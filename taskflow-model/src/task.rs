//! Task record, drafts, and partial updates.
//!
//! All task construction goes through [`Task::from_draft`], which assigns
//! the store-owned fields (id, creation timestamp) and applies the default
//! configuration in one place. Partial updates are expressed as a
//! [`TaskPatch`]: absent fields keep their current value, present fields
//! win wholesale.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{MAX_TITLE_LENGTH, ValidationError};

/// Unique identifier for a task, based on UUID v7 for time-ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Urgency level of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency (the default).
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Numeric weight used for ordering: high 3, medium 2, low 1.
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// A single to-do item.
///
/// `archived` excludes the task from every view and count without deleting
/// it. It is independent of `completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier (UUID v7, time-ordered).
    pub id: TaskId,
    /// Display title. Non-empty after trimming, at most 256 characters.
    pub title: String,
    /// Whether the task is done.
    pub completed: bool,
    /// Name of the category this task belongs to.
    pub category: String,
    /// Urgency level.
    pub priority: Priority,
    /// Optional calendar due date.
    pub due_date: Option<NaiveDate>,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// Excluded from all active views and counts when set.
    pub archived: bool,
}

impl Task {
    /// Builds a task from user input, assigning store-owned fields and
    /// applying `defaults` for anything the draft leaves out.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TitleEmpty`] or
    /// [`ValidationError::TitleTooLong`] if the title is invalid.
    pub fn from_draft(draft: TaskDraft, defaults: &TaskDefaults) -> Result<Self, ValidationError> {
        let title = normalize_title(&draft.title)?;
        Ok(Self {
            id: TaskId::new(),
            title,
            completed: false,
            category: draft
                .category
                .unwrap_or_else(|| defaults.category.clone()),
            priority: draft.priority.unwrap_or(defaults.priority),
            due_date: draft.due_date,
            created_at: Utc::now(),
            archived: false,
        })
    }
}

/// User input for creating a task. Absent fields fall back to
/// [`TaskDefaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Desired title (trimmed and validated on construction).
    pub title: String,
    /// Category name, or `None` for the default.
    pub category: Option<String>,
    /// Urgency, or `None` for the default.
    pub priority: Option<Priority>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Convenience constructor for a title-only draft.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Default values applied when a [`TaskDraft`] leaves a field out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDefaults {
    /// Category assigned when the draft names none.
    pub category: String,
    /// Priority assigned when the draft names none.
    pub priority: Priority,
}

impl Default for TaskDefaults {
    fn default() -> Self {
        Self {
            category: "work".to_string(),
            priority: Priority::Medium,
        }
    }
}

/// A partial update to a task. Fields left `None` keep their current
/// value; the doubly-optional `due_date` distinguishes "leave alone"
/// (`None`) from "clear the date" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement completion state.
    pub completed: Option<bool>,
    /// Replacement category name.
    pub category: Option<String>,
    /// Replacement priority.
    pub priority: Option<Priority>,
    /// Replacement due date (`Some(None)` clears it).
    pub due_date: Option<Option<NaiveDate>>,
    /// Replacement archived flag.
    pub archived: Option<bool>,
}

impl TaskPatch {
    /// A patch that only sets the archived flag.
    #[must_use]
    pub fn archived(flag: bool) -> Self {
        Self {
            archived: Some(flag),
            ..Self::default()
        }
    }

    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.completed.is_none()
            && self.category.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.archived.is_none()
    }

    /// Applies this patch to `task`, field by field.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the replacement title is invalid;
    /// the task is left untouched in that case.
    pub fn apply(self, task: &mut Task) -> Result<(), ValidationError> {
        let title = self.title.map(|t| normalize_title(&t)).transpose()?;
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(category) = self.category {
            task.category = category;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(archived) = self.archived {
            task.archived = archived;
        }
        Ok(())
    }
}

/// Trims a title and checks the emptiness and length invariants.
fn normalize_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::TitleEmpty);
    }
    let len = trimmed.chars().count();
    if len > MAX_TITLE_LENGTH {
        return Err(ValidationError::TitleTooLong { len });
    }
    Ok(trimmed.to_string())
}
