//! Integration tests for the dashboard transform over live store data.
//!
//! Drives the stores through mutations and checks that the recomputed
//! view, progress aggregates, and category counts track the collection.
//!
//! Verification command: `cargo test --test dashboard_view`

use taskflow::dashboard::{
    CategoryCounts, CategorySelection, DashboardQuery, SortKey, build_view,
};
use taskflow::store::{CategoryStore, LatencyProfile, TaskStore, seed};
use taskflow_model::{Priority, TaskDefaults, TaskDraft, TaskPatch};

fn task_store() -> TaskStore {
    TaskStore::new(LatencyProfile::instant(), TaskDefaults::default())
}

async fn create(store: &TaskStore, title: &str, category: &str, priority: Priority) {
    store
        .create(TaskDraft {
            title: title.to_string(),
            category: Some(category.to_string()),
            priority: Some(priority),
            due_date: None,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn view_tracks_store_mutations() {
    let store = task_store();
    create(&store, "Draft report", "work", Priority::High).await;
    create(&store, "Buy groceries", "shopping", Priority::Low).await;

    let view = build_view(&store.get_all().await, &DashboardQuery::default());
    assert_eq!(view.tasks.len(), 2);
    assert_eq!(view.progress.total, 2);
    assert_eq!(view.progress.completed, 0);

    // Complete one, archive the other: progress and visibility follow.
    let all = store.get_all().await;
    store.toggle_complete(&all[0].id).await.unwrap();
    store.archive(&all[1].id).await.unwrap();

    let view = build_view(&store.get_all().await, &DashboardQuery::default());
    assert_eq!(view.tasks.len(), 1);
    assert_eq!(view.progress.total, 1);
    assert_eq!(view.progress.completed, 1);
    assert!((view.progress.percentage() - 100.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn priority_order_with_mixed_completion() {
    let store = task_store();
    create(&store, "A", "work", Priority::Low).await;
    create(&store, "B", "work", Priority::High).await;
    create(&store, "C", "work", Priority::Medium).await;
    let b_id = store
        .get_all()
        .await
        .iter()
        .find(|t| t.title == "B")
        .map(|t| t.id.clone())
        .unwrap();
    store.toggle_complete(&b_id).await.unwrap();

    let query = DashboardQuery {
        sort: SortKey::Priority,
        ..DashboardQuery::default()
    };
    let view = build_view(&store.get_all().await, &query);
    let titles: Vec<&str> = view.tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["C", "A", "B"]);
}

#[tokio::test]
async fn search_matches_category_and_title() {
    let store = task_store();
    create(&store, "Shop for a gift", "work", Priority::Medium).await;
    create(&store, "Pick up parcel", "shopping", Priority::Medium).await;
    create(&store, "Team retro", "work", Priority::Medium).await;

    let query = DashboardQuery {
        search: "shop".to_string(),
        ..DashboardQuery::default()
    };
    let view = build_view(&store.get_all().await, &query);
    let titles: Vec<&str> = view.tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"Shop for a gift"));
    assert!(titles.contains(&"Pick up parcel"));
}

#[tokio::test]
async fn category_counts_recompute_live() {
    let tasks = task_store();
    let categories = CategoryStore::with_seed(
        seed::builtin_categories().unwrap(),
        LatencyProfile::instant(),
    );

    create(&tasks, "One", "work", Priority::Medium).await;
    create(&tasks, "Two", "work", Priority::Medium).await;
    create(&tasks, "Three", "health", Priority::Medium).await;

    let counts = CategoryCounts::tally(&categories.get_all().await, &tasks.get_all().await);
    assert_eq!(counts.all, 3);
    let work = counts.categories.iter().find(|c| c.name == "work").unwrap();
    assert_eq!(work.count, 2);

    // Archive a work task: its count and the all-count drop together.
    let id = tasks
        .get_all()
        .await
        .iter()
        .find(|t| t.category == "work")
        .map(|t| t.id.clone())
        .unwrap();
    tasks.archive(&id).await.unwrap();

    let counts = CategoryCounts::tally(&categories.get_all().await, &tasks.get_all().await);
    assert_eq!(counts.all, 2);
    let work = counts.categories.iter().find(|c| c.name == "work").unwrap();
    assert_eq!(work.count, 1);
}

#[tokio::test]
async fn recategorizing_a_task_moves_its_count() {
    let tasks = task_store();
    let categories = CategoryStore::with_seed(
        seed::builtin_categories().unwrap(),
        LatencyProfile::instant(),
    );
    create(&tasks, "Mobile", "work", Priority::Medium).await;

    let id = tasks.get_all().await[0].id.clone();
    tasks
        .update(
            &id,
            TaskPatch {
                category: Some("personal".to_string()),
                ..TaskPatch::default()
            },
        )
        .await
        .unwrap();

    let counts = CategoryCounts::tally(&categories.get_all().await, &tasks.get_all().await);
    let work = counts.categories.iter().find(|c| c.name == "work").unwrap();
    let personal = counts
        .categories
        .iter()
        .find(|c| c.name == "personal")
        .unwrap();
    assert_eq!(work.count, 0);
    assert_eq!(personal.count, 1);
}

#[tokio::test]
async fn builtin_seed_renders_a_consistent_dashboard() {
    let tasks = seed::builtin_tasks().unwrap();
    let categories = seed::builtin_categories().unwrap();

    let view = build_view(&tasks, &DashboardQuery::default());
    let counts = CategoryCounts::tally(&categories, &tasks);

    // Every visible task is counted, and the all-count matches the
    // non-archived total.
    assert_eq!(counts.all, view.progress.total);
    assert_eq!(view.tasks.len(), view.progress.total);

    // Incomplete before completed under the default sort.
    let first_completed = view.tasks.iter().position(|t| t.completed);
    if let Some(boundary) = first_completed {
        assert!(view.tasks[boundary..].iter().all(|t| t.completed));
    }
}

#[tokio::test]
async fn unknown_sort_name_falls_back_to_created_order() {
    let store = task_store();
    create(&store, "Older", "work", Priority::Low).await;
    create(&store, "Newer", "work", Priority::High).await;

    let query = DashboardQuery {
        sort: SortKey::from_name("not-a-sort-key"),
        ..DashboardQuery::default()
    };
    let view = build_view(&store.get_all().await, &query);
    let titles: Vec<&str> = view.tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Newer", "Older"]);
}

#[tokio::test]
async fn filtered_category_view_only_contains_that_category() {
    let store = task_store();
    create(&store, "W1", "work", Priority::Medium).await;
    create(&store, "P1", "personal", Priority::Medium).await;

    let query = DashboardQuery {
        category: CategorySelection::Named("personal".to_string()),
        ..DashboardQuery::default()
    };
    let view = build_view(&store.get_all().await, &query);
    assert!(view.tasks.iter().all(|t| t.category == "personal"));
    // Aggregates still cover both tasks.
    assert_eq!(view.progress.total, 2);
}
