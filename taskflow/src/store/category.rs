//! In-memory category store.
//!
//! Same operational shape as the task store, over category records.
//! Names are lowercased on every write, and a duplicate name
//! (case-insensitive by construction) is rejected on create and rename
//! so that name-keyed task filters stay unambiguous.

use tokio::sync::RwLock;

use taskflow_model::{Category, CategoryDraft, CategoryId, CategoryPatch};

use super::{LatencyProfile, StoreError};

/// In-memory category collection with simulated latency.
pub struct CategoryStore {
    categories: RwLock<Vec<Category>>,
    latency: LatencyProfile,
}

impl CategoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(latency: LatencyProfile) -> Self {
        Self::with_seed(Vec::new(), latency)
    }

    /// Creates a store pre-populated with `seed`, kept in the given order.
    #[must_use]
    pub fn with_seed(seed: Vec<Category>, latency: LatencyProfile) -> Self {
        Self {
            categories: RwLock::new(seed),
            latency,
        }
    }

    /// Returns copies of all categories in insertion order.
    pub async fn get_all(&self) -> Vec<Category> {
        self.latency.before_read().await;
        self.categories.read().await.clone()
    }

    /// Returns a copy of a single category.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CategoryNotFound`] if no category has the
    /// given id.
    pub async fn get(&self, id: &CategoryId) -> Result<Category, StoreError> {
        self.latency.before_read().await;
        self.categories
            .read()
            .await
            .iter()
            .find(|c| c.id == *id)
            .cloned()
            .ok_or_else(|| StoreError::CategoryNotFound(id.clone()))
    }

    /// Creates a category from a draft, lowercasing the name and
    /// defaulting the color, and appends it to the collection.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name or malformed color,
    /// or [`StoreError::CategoryNameTaken`] for a duplicate name.
    pub async fn create(&self, draft: CategoryDraft) -> Result<Category, StoreError> {
        self.latency.before_write().await;
        let category = Category::from_draft(draft)?;
        let mut categories = self.categories.write().await;
        if categories.iter().any(|c| c.name == category.name) {
            return Err(StoreError::CategoryNameTaken(category.name));
        }
        categories.push(category.clone());
        drop(categories);
        tracing::debug!(id = %category.id, name = %category.name, "category created");
        Ok(category)
    }

    /// Merges a partial update onto an existing category and returns the
    /// updated copy.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CategoryNotFound`] if the id is absent, a
    /// validation error for a bad name or color, or
    /// [`StoreError::CategoryNameTaken`] if a rename collides with
    /// another category.
    pub async fn update(
        &self,
        id: &CategoryId,
        patch: CategoryPatch,
    ) -> Result<Category, StoreError> {
        self.latency.before_write().await;
        let mut categories = self.categories.write().await;

        if let Some(new_name) = patch.name.as_deref() {
            let normalized = new_name.trim().to_lowercase();
            if categories
                .iter()
                .any(|c| c.id != *id && c.name == normalized)
            {
                return Err(StoreError::CategoryNameTaken(normalized));
            }
        }

        let category = categories
            .iter_mut()
            .find(|c| c.id == *id)
            .ok_or_else(|| StoreError::CategoryNotFound(id.clone()))?;
        patch.apply(category)?;
        let updated = category.clone();
        drop(categories);
        tracing::debug!(id = %updated.id, "category updated");
        Ok(updated)
    }

    /// Removes a category entirely. Tasks keep their category name; they
    /// simply no longer match a listed category.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CategoryNotFound`] if no category has the
    /// given id.
    pub async fn delete(&self, id: &CategoryId) -> Result<(), StoreError> {
        self.latency.before_write().await;
        let mut categories = self.categories.write().await;
        let position = categories
            .iter()
            .position(|c| c.id == *id)
            .ok_or_else(|| StoreError::CategoryNotFound(id.clone()))?;
        categories.remove(position);
        drop(categories);
        tracing::debug!(%id, "category deleted");
        Ok(())
    }
}
