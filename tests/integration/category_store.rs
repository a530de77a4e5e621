//! Integration tests for the category store CRUD contract.
//!
//! Verification command: `cargo test --test category_store`

use taskflow::store::{CategoryStore, LatencyProfile, StoreError, seed};
use taskflow_model::{CategoryDraft, CategoryId, CategoryPatch, DEFAULT_CATEGORY_COLOR};

fn empty_store() -> CategoryStore {
    CategoryStore::new(LatencyProfile::instant())
}

fn seeded_store() -> CategoryStore {
    let categories = seed::builtin_categories().expect("built-in seed data must parse");
    CategoryStore::with_seed(categories, LatencyProfile::instant())
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let store = empty_store();
    let created = store
        .create(CategoryDraft {
            name: "Errands".to_string(),
            color: Some("#F59E0B".to_string()),
        })
        .await
        .unwrap();

    let fetched = store.get(&created.id).await.unwrap();
    assert_eq!(created, fetched);
    assert_eq!(fetched.name, "errands");
    assert_eq!(fetched.color, "#F59E0B");
}

#[tokio::test]
async fn create_lowercases_name_and_defaults_color() {
    let store = empty_store();
    let category = store.create(CategoryDraft::named("GARDEN")).await.unwrap();
    assert_eq!(category.name, "garden");
    assert_eq!(category.color, DEFAULT_CATEGORY_COLOR);
}

#[tokio::test]
async fn duplicate_names_are_rejected_across_case() {
    let store = seeded_store();
    let err = store.create(CategoryDraft::named("Work")).await.unwrap_err();
    assert_eq!(err, StoreError::CategoryNameTaken("work".to_string()));
}

#[tokio::test]
async fn update_and_delete_flow() {
    let store = empty_store();
    let category = store.create(CategoryDraft::named("temp")).await.unwrap();

    let renamed = store
        .update(
            &category.id,
            CategoryPatch {
                name: Some("Projects".to_string()),
                color: Some("#112233".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "projects");
    assert_eq!(renamed.color, "#112233");

    store.delete(&category.id).await.unwrap();
    assert!(store.get_all().await.is_empty());
}

#[tokio::test]
async fn operations_on_unknown_ids_are_not_found() {
    let store = seeded_store();
    let before = store.get_all().await;
    let missing = CategoryId::new();

    assert!(matches!(
        store.get(&missing).await,
        Err(StoreError::CategoryNotFound(_))
    ));
    assert!(matches!(
        store.update(&missing, CategoryPatch::default()).await,
        Err(StoreError::CategoryNotFound(_))
    ));
    assert!(matches!(
        store.delete(&missing).await,
        Err(StoreError::CategoryNotFound(_))
    ));
    assert_eq!(store.get_all().await, before);
}

#[tokio::test]
async fn invalid_color_fails_validation() {
    let store = empty_store();
    let err = store
        .create(CategoryDraft {
            name: "bad".to_string(),
            color: Some("rebeccapurple".to_string()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

#[tokio::test]
async fn builtin_seed_has_expected_shape() {
    let store = seeded_store();
    let all = store.get_all().await;
    assert!(all.iter().any(|c| c.name == "work"));
    for category in &all {
        assert_eq!(category.name, category.name.to_lowercase());
        assert!(category.color.starts_with('#'));
    }
}
