//! In-memory task store.
//!
//! Holds tasks in insertion order, newest first: `create` inserts at the
//! front, so `get_all` returns the most recent task first without
//! sorting. Hard deletes remove the record entirely; archiving is a
//! separate explicit flag flip via [`TaskPatch::archived`].

use tokio::sync::RwLock;

use taskflow_model::{Task, TaskDefaults, TaskDraft, TaskId, TaskPatch};

use super::{LatencyProfile, StoreError};

/// In-memory task collection with simulated latency.
pub struct TaskStore {
    tasks: RwLock<Vec<Task>>,
    latency: LatencyProfile,
    defaults: TaskDefaults,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(latency: LatencyProfile, defaults: TaskDefaults) -> Self {
        Self::with_seed(Vec::new(), latency, defaults)
    }

    /// Creates a store pre-populated with `seed`, kept in the given order.
    #[must_use]
    pub fn with_seed(seed: Vec<Task>, latency: LatencyProfile, defaults: TaskDefaults) -> Self {
        Self {
            tasks: RwLock::new(seed),
            latency,
            defaults,
        }
    }

    /// Returns copies of all tasks, unfiltered, in insertion order
    /// (newest first).
    pub async fn get_all(&self) -> Vec<Task> {
        self.latency.before_read().await;
        self.tasks.read().await.clone()
    }

    /// Returns a copy of a single task.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskNotFound`] if no task has the given id.
    pub async fn get(&self, id: &TaskId) -> Result<Task, StoreError> {
        self.latency.before_read().await;
        self.tasks
            .read()
            .await
            .iter()
            .find(|t| t.id == *id)
            .cloned()
            .ok_or_else(|| StoreError::TaskNotFound(id.clone()))
    }

    /// Creates a task from a draft and inserts it at the front of the
    /// collection. The store assigns the id and creation timestamp and
    /// fills unset fields from its default configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the draft title is empty or too long.
    pub async fn create(&self, draft: TaskDraft) -> Result<Task, StoreError> {
        self.latency.before_write().await;
        let task = Task::from_draft(draft, &self.defaults)?;
        let mut tasks = self.tasks.write().await;
        tasks.insert(0, task.clone());
        drop(tasks);
        tracing::debug!(id = %task.id, title = %task.title, "task created");
        Ok(task)
    }

    /// Merges a partial update onto an existing task, last write wins per
    /// field, and returns the updated copy.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskNotFound`] if the id is absent, or a
    /// validation error if the patch carries an invalid title (the task
    /// is left unchanged).
    pub async fn update(&self, id: &TaskId, patch: TaskPatch) -> Result<Task, StoreError> {
        self.latency.before_write().await;
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == *id)
            .ok_or_else(|| StoreError::TaskNotFound(id.clone()))?;
        patch.apply(task)?;
        let updated = task.clone();
        drop(tasks);
        tracing::debug!(id = %updated.id, "task updated");
        Ok(updated)
    }

    /// Removes a task entirely. The collection is unchanged on failure.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskNotFound`] if no task has the given id.
    pub async fn delete(&self, id: &TaskId) -> Result<(), StoreError> {
        self.latency.before_write().await;
        let mut tasks = self.tasks.write().await;
        let position = tasks
            .iter()
            .position(|t| t.id == *id)
            .ok_or_else(|| StoreError::TaskNotFound(id.clone()))?;
        tasks.remove(position);
        drop(tasks);
        tracing::debug!(%id, "task deleted");
        Ok(())
    }

    /// Flips a task's completion state and returns the updated copy.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskNotFound`] if no task has the given id.
    pub async fn toggle_complete(&self, id: &TaskId) -> Result<Task, StoreError> {
        self.latency.before_write().await;
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == *id)
            .ok_or_else(|| StoreError::TaskNotFound(id.clone()))?;
        task.completed = !task.completed;
        let updated = task.clone();
        drop(tasks);
        Ok(updated)
    }

    /// Sets the archived flag, hiding the task from all views and counts.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskNotFound`] if no task has the given id.
    pub async fn archive(&self, id: &TaskId) -> Result<Task, StoreError> {
        self.update(id, TaskPatch::archived(true)).await
    }

    /// Clears the archived flag, restoring the task to active views.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskNotFound`] if no task has the given id.
    pub async fn unarchive(&self, id: &TaskId) -> Result<Task, StoreError> {
        self.update(id, TaskPatch::archived(false)).await
    }
}
