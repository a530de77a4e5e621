//! Property-based tests for the dashboard transform.
//!
//! Uses proptest to verify, over arbitrary task collections and queries:
//! 1. Archived tasks never appear in output or in any count.
//! 2. Incomplete tasks precede completed tasks regardless of sort key.
//! 3. Priority ordering is non-increasing within each partition.
//! 4. Due-date ordering is non-decreasing within each partition, with
//!    dateless tasks after all dated ones.
//! 5. The progress percentage follows `100 * completed / total`, and is
//!    `0` for an empty non-archived set.

use chrono::{DateTime, NaiveDate, Utc};
use proptest::prelude::*;
use uuid::Uuid;

use taskflow::dashboard::{
    CategoryCounts, CategorySelection, DashboardQuery, SortKey, build_view,
};
use taskflow_model::{Category, CategoryDraft, Priority, Task, TaskId};

const CATEGORY_POOL: &[&str] = &["work", "personal", "shopping", "health", "finance"];

// --- Strategies ---

/// Strategy for generating arbitrary priorities.
fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
    ]
}

/// Strategy for generating optional due dates in a plausible range.
fn arb_due_date() -> impl Strategy<Value = Option<NaiveDate>> {
    prop_oneof![
        Just(None),
        (2020i32..2030, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
    ]
}

/// Strategy for generating creation timestamps.
fn arb_created_at() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..2_000_000_000).prop_map(|secs| {
        DateTime::from_timestamp(secs, 0).unwrap_or_else(|| DateTime::UNIX_EPOCH)
    })
}

/// Strategy for generating arbitrary tasks.
fn arb_task() -> impl Strategy<Value = Task> {
    (
        any::<u128>(),
        "[a-zA-Z0-9 ]{1,24}",
        any::<bool>(),
        prop::sample::select(CATEGORY_POOL),
        arb_priority(),
        arb_due_date(),
        arb_created_at(),
        any::<bool>(),
    )
        .prop_map(
            |(id, title, completed, category, priority, due_date, created_at, archived)| Task {
                id: TaskId::from_uuid(Uuid::from_u128(id)),
                title,
                completed,
                category: category.to_string(),
                priority,
                due_date,
                created_at,
                archived,
            },
        )
}

/// Strategy for generating task collections.
fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(arb_task(), 0..40)
}

/// Strategy for generating arbitrary sort keys.
fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Created),
        Just(SortKey::Priority),
        Just(SortKey::DueDate),
    ]
}

/// Strategy for generating arbitrary queries.
fn arb_query() -> impl Strategy<Value = DashboardQuery> {
    (
        prop_oneof![
            Just(CategorySelection::All),
            prop::sample::select(CATEGORY_POOL)
                .prop_map(|name| CategorySelection::Named(name.to_string())),
        ],
        "[a-zA-Z0-9 ]{0,6}",
        arb_sort_key(),
    )
        .prop_map(|(category, search, sort)| DashboardQuery {
            category,
            search,
            sort,
        })
}

// --- Property tests ---

proptest! {
    /// Archived tasks never appear in the visible list, the progress
    /// aggregates, or the category counts.
    #[test]
    fn archived_tasks_are_invisible(tasks in arb_tasks(), query in arb_query()) {
        let view = build_view(&tasks, &query);
        prop_assert!(view.tasks.iter().all(|t| !t.archived));

        let active = tasks.iter().filter(|t| !t.archived).count();
        prop_assert_eq!(view.progress.total, active);

        let categories: Vec<Category> = CATEGORY_POOL
            .iter()
            .map(|name| Category::from_draft(CategoryDraft::named(*name)).unwrap())
            .collect();
        let counts = CategoryCounts::tally(&categories, &tasks);
        prop_assert_eq!(counts.all, active);
        let summed: usize = counts.categories.iter().map(|c| c.count).sum();
        prop_assert_eq!(summed, active);
    }

    /// Incomplete tasks precede completed tasks for every sort key.
    #[test]
    fn incomplete_tasks_come_first(tasks in arb_tasks(), query in arb_query()) {
        let view = build_view(&tasks, &query);
        if let Some(first_completed) = view.tasks.iter().position(|t| t.completed) {
            prop_assert!(view.tasks[first_completed..].iter().all(|t| t.completed));
        }
    }

    /// Priority sorting yields non-increasing weights within each
    /// completion partition.
    #[test]
    fn priority_sort_is_non_increasing(tasks in arb_tasks()) {
        let query = DashboardQuery { sort: SortKey::Priority, ..DashboardQuery::default() };
        let view = build_view(&tasks, &query);
        for pair in view.tasks.windows(2) {
            if pair[0].completed == pair[1].completed {
                prop_assert!(pair[0].priority.weight() >= pair[1].priority.weight());
            }
        }
    }

    /// Due-date sorting yields non-decreasing dates within each
    /// partition, with dateless tasks after all dated ones.
    #[test]
    fn due_date_sort_is_non_decreasing(tasks in arb_tasks()) {
        let query = DashboardQuery { sort: SortKey::DueDate, ..DashboardQuery::default() };
        let view = build_view(&tasks, &query);
        for pair in view.tasks.windows(2) {
            if pair[0].completed == pair[1].completed {
                match (pair[0].due_date, pair[1].due_date) {
                    (Some(a), Some(b)) => prop_assert!(a <= b),
                    (None, Some(_)) => prop_assert!(false, "dateless task before dated task"),
                    _ => {}
                }
            }
        }
    }

    /// Created sorting yields non-increasing timestamps within each
    /// partition (newest first).
    #[test]
    fn created_sort_is_newest_first(tasks in arb_tasks()) {
        let query = DashboardQuery { sort: SortKey::Created, ..DashboardQuery::default() };
        let view = build_view(&tasks, &query);
        for pair in view.tasks.windows(2) {
            if pair[0].completed == pair[1].completed {
                prop_assert!(pair[0].created_at >= pair[1].created_at);
            }
        }
    }

    /// The progress percentage is 0 for an empty set and
    /// `100 * completed / total` otherwise.
    #[test]
    fn percentage_follows_the_ratio(tasks in arb_tasks()) {
        let view = build_view(&tasks, &DashboardQuery::default());
        let progress = view.progress;
        if progress.total == 0 {
            prop_assert!((progress.percentage() - 0.0).abs() < f64::EPSILON);
        } else {
            #[allow(clippy::cast_precision_loss)]
            let expected = progress.completed as f64 / progress.total as f64 * 100.0;
            prop_assert!((progress.percentage() - expected).abs() < f64::EPSILON);
            prop_assert!((0.0..=100.0).contains(&progress.percentage()));
        }
    }

    /// Every visible task actually passes the filters (and came from
    /// the input collection).
    #[test]
    fn output_is_a_filtered_subset(tasks in arb_tasks(), query in arb_query()) {
        let view = build_view(&tasks, &query);
        let needle = query.search.trim().to_lowercase();
        for task in &view.tasks {
            prop_assert!(tasks.iter().any(|t| t.id == task.id));
            prop_assert!(query.category.matches(task));
            if !needle.is_empty() {
                prop_assert!(
                    task.title.to_lowercase().contains(&needle)
                        || task.category.to_lowercase().contains(&needle)
                );
            }
        }
    }

    /// Search is case-insensitive: upper- and lowercase queries return
    /// the same tasks.
    #[test]
    fn search_is_case_insensitive(tasks in arb_tasks(), needle in "[a-zA-Z]{1,5}") {
        let lower = DashboardQuery {
            search: needle.to_lowercase(),
            ..DashboardQuery::default()
        };
        let upper = DashboardQuery {
            search: needle.to_uppercase(),
            ..DashboardQuery::default()
        };
        let a = build_view(&tasks, &lower);
        let b = build_view(&tasks, &upper);
        prop_assert_eq!(a.tasks, b.tasks);
    }

    /// Unrecognized sort names behave exactly like the default ordering.
    #[test]
    fn unknown_sort_names_use_default_order(tasks in arb_tasks(), name in "[a-z]{0,8}") {
        prop_assume!(!matches!(name.as_str(), "priority" | "created"));
        let fallback = DashboardQuery {
            sort: SortKey::from_name(&name),
            ..DashboardQuery::default()
        };
        let default = DashboardQuery::default();
        prop_assert_eq!(build_view(&tasks, &fallback), build_view(&tasks, &default));
    }
}
