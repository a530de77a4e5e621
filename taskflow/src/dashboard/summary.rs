//! Progress aggregates and live per-category counts.
//!
//! Counts are always recomputed from the current task collection — the
//! category records themselves carry no count field to drift out of
//! sync.

use taskflow_model::{Category, Task};

/// Completion aggregates over the non-archived task set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Completed, non-archived tasks.
    pub completed: usize,
    /// All non-archived tasks.
    pub total: usize,
}

impl Progress {
    /// Computes aggregates over `tasks`, ignoring archived entries.
    #[must_use]
    pub fn of_tasks(tasks: &[Task]) -> Self {
        let total = tasks.iter().filter(|t| !t.archived).count();
        let completed = tasks.iter().filter(|t| !t.archived && t.completed).count();
        Self { completed, total }
    }

    /// Non-archived tasks still open.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.total - self.completed
    }

    /// Completion percentage in `[0, 100]`; `0` when there are no tasks.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            // Counts are far below 2^52, so the casts are exact.
            self.completed as f64 / self.total as f64 * 100.0
        }
    }
}

/// One sidebar row: a category and its live task count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTally {
    /// Category name.
    pub name: String,
    /// Category display color (`#RRGGBB`).
    pub color: String,
    /// Non-archived tasks currently in this category.
    pub count: usize,
}

/// Live counts for the sidebar: the "all" pseudo-entry plus one tally
/// per listed category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    /// Total non-archived task count (the "all" entry).
    pub all: usize,
    /// Per-category tallies, in category listing order.
    pub categories: Vec<CategoryTally>,
}

impl CategoryCounts {
    /// Tallies `tasks` against the listed `categories`.
    #[must_use]
    pub fn tally(categories: &[Category], tasks: &[Task]) -> Self {
        let active: Vec<&Task> = tasks.iter().filter(|t| !t.archived).collect();
        let per_category = categories
            .iter()
            .map(|category| CategoryTally {
                name: category.name.clone(),
                color: category.color.clone(),
                count: active.iter().filter(|t| t.category == category.name).count(),
            })
            .collect();
        Self {
            all: active.len(),
            categories: per_category,
        }
    }
}
