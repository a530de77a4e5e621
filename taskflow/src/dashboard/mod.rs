//! Dashboard view transform.
//!
//! Pure functions that turn the full task snapshot plus the user's
//! filter/sort selections into the ordered task list and progress
//! aggregates the dashboard renders. No side effects and no error
//! states: the transform degrades to empty output on empty input and is
//! re-run wholesale whenever any of its inputs change.

pub mod summary;
pub mod view;

pub use summary::{CategoryCounts, CategoryTally, Progress};
pub use view::{DashboardView, build_view};

use taskflow_model::Task;

/// Which ordering the task list uses within each completion partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first by creation time (the default).
    #[default]
    Created,
    /// Highest priority first.
    Priority,
    /// Earliest due date first; dateless tasks last.
    DueDate,
}

impl SortKey {
    /// Parses a sort key name, falling back to the default ordering for
    /// anything unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "priority" => Self::Priority,
            "dueDate" | "due_date" | "due-date" => Self::DueDate,
            _ => Self::Created,
        }
    }

    /// The next key in the cycle Created → Priority → DueDate → Created.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Created => Self::Priority,
            Self::Priority => Self::DueDate,
            Self::DueDate => Self::Created,
        }
    }

    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Priority => "priority",
            Self::DueDate => "due date",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The sidebar's category filter: every task, or one exact category name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelection {
    /// No category filter (the "all" sentinel).
    #[default]
    All,
    /// Only tasks whose category exactly equals this name.
    Named(String),
}

impl CategorySelection {
    /// Parses a selection name; `"all"` means no filter.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == "all" {
            Self::All
        } else {
            Self::Named(name.to_string())
        }
    }

    /// Whether `task` passes this filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => task.category == *name,
        }
    }

    /// Display label for the selection.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Named(name) => name,
        }
    }
}

/// The user-selected inputs to the dashboard transform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardQuery {
    /// Category filter.
    pub category: CategorySelection,
    /// Free-text search over titles and category names. Empty means no
    /// search filter.
    pub search: String,
    /// Ordering within each completion partition.
    pub sort: SortKey,
}
