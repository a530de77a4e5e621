//! In-memory data stores for tasks and categories.
//!
//! Both stores hold an ordered collection behind a [`tokio::sync::RwLock`]
//! and are constructed from caller-provided seed data, so tests can build
//! isolated instances. Every operation awaits a simulated latency and then
//! completes its read-modify-write under the lock before yielding, so
//! logically overlapping operations never interleave over a record. All
//! operations hand out owned copies, never references into store state.

pub mod category;
pub mod seed;
pub mod task;

pub use category::CategoryStore;
pub use seed::SeedError;
pub use task::TaskStore;

use std::time::Duration;

use thiserror::Error;

use taskflow_model::{CategoryId, TaskId, ValidationError};

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Task with the given ID was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// Category with the given ID was not found.
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),
    /// A category with the same name already exists.
    #[error("a category named '{0}' already exists")]
    CategoryNameTaken(String),
    /// The record failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Simulated per-operation latency.
///
/// Purely a UX affordance: any value ≥ 0 is conformant. Interactive runs
/// use small delays so the interface feels like it is talking to a
/// backend; tests use [`LatencyProfile::instant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    /// Delay before read operations complete.
    pub read: Duration,
    /// Delay before write operations complete.
    pub write: Duration,
}

impl LatencyProfile {
    /// No simulated latency. The profile tests run with.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            read: Duration::ZERO,
            write: Duration::ZERO,
        }
    }

    /// Interactive defaults (200 ms reads, 300 ms writes).
    #[must_use]
    pub const fn interactive() -> Self {
        Self {
            read: Duration::from_millis(200),
            write: Duration::from_millis(300),
        }
    }

    pub(crate) async fn before_read(self) {
        if !self.read.is_zero() {
            tokio::time::sleep(self.read).await;
        }
    }

    pub(crate) async fn before_write(self) {
        if !self.write.is_zero() {
            tokio::time::sleep(self.write).await;
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::interactive()
    }
}
