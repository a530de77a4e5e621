//! Filtering and ordering of the visible task list.

use std::cmp::Ordering;

use taskflow_model::Task;

use super::{DashboardQuery, Progress, SortKey};

/// The dashboard's computed output: the visible, ordered task list plus
/// the progress aggregates over the full non-archived set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardView {
    /// Tasks passing the filters, ordered for display.
    pub tasks: Vec<Task>,
    /// Completion aggregates, ignoring the category and search filters.
    pub progress: Progress,
}

/// Runs the full transform over a task snapshot.
///
/// Archived tasks are dropped first; the category and search filters
/// then narrow the list; finally the list is ordered with completed-ness
/// as the primary key (incomplete first) and the selected sort key
/// within each partition. Progress is computed over every non-archived
/// task regardless of the filters.
#[must_use]
pub fn build_view(tasks: &[Task], query: &DashboardQuery) -> DashboardView {
    let needle = query.search.trim().to_lowercase();

    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|t| !t.archived)
        .filter(|t| query.category.matches(t))
        .filter(|t| needle.is_empty() || matches_search(t, &needle))
        .cloned()
        .collect();

    sort_tasks(&mut visible, query.sort);

    DashboardView {
        tasks: visible,
        progress: Progress::of_tasks(tasks),
    }
}

/// Case-insensitive substring match over title and category name.
fn matches_search(task: &Task, needle: &str) -> bool {
    task.title.to_lowercase().contains(needle) || task.category.to_lowercase().contains(needle)
}

/// Orders tasks in place: incomplete before completed, then the sort key
/// within each partition. The sort is stable, so ties keep input order.
fn sort_tasks(tasks: &mut [Task], key: SortKey) {
    tasks.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then_with(|| compare_by_key(a, b, key))
    });
}

fn compare_by_key(a: &Task, b: &Task, key: SortKey) -> Ordering {
    match key {
        SortKey::Priority => b.priority.weight().cmp(&a.priority.weight()),
        SortKey::DueDate => match (a.due_date, b.due_date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Created => b.created_at.cmp(&a.created_at),
    }
}
