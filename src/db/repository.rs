//! Repository trait and error types for task storage.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Task, TaskStatus};

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by task storage backends.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("task {0} not found")]
    TaskNotFound(i64),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Abstract interface over the task store.
///
/// All methods are async so SQL-backed implementations can slot in without
/// touching callers; the in-memory implementation resolves immediately.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Check whether the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// List all tasks, ordered by id.
    async fn list_tasks(&self) -> RepositoryResult<Vec<Task>>;

    /// Fetch a single task by id.
    async fn get_task(&self, task_id: i64) -> RepositoryResult<Task>;

    /// Insert a task, assigning an id when the given one is non-positive.
    /// Returns the stored task.
    async fn insert_task(&self, task: Task) -> RepositoryResult<Task>;

    /// Transition a task's status and return the updated record.
    async fn set_task_status(&self, task_id: i64, status: TaskStatus) -> RepositoryResult<Task>;
}
