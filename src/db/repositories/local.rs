//! In-memory task repository.
//!
//! Stores tasks in a `BTreeMap` behind a `parking_lot::RwLock`, giving fast,
//! deterministic, isolated execution for tests and local development.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::db::repository::{RepositoryError, RepositoryResult, TaskRepository};
use crate::models::{Task, TaskStatus};

/// In-memory local repository.
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    tasks: BTreeMap<i64, Task>,
    next_task_id: i64,
    is_healthy: bool,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                tasks: BTreeMap::new(),
                next_task_id: 1,
                is_healthy: true,
            })),
        }
    }

    /// Create a repository pre-seeded with the demo task chain: a sequence
    /// of dependent lift operations with varying durations and wave limits.
    pub fn with_demo_tasks() -> Self {
        let repo = Self::new();
        let demo = [
            ("task 1", "4h", None, TaskStatus::Completed, 2.0),
            ("task 2", "4h", Some(1), TaskStatus::Completed, 2.0),
            ("task 3", "2h", Some(2), TaskStatus::Ready, 2.0),
            ("task 4", "3h", Some(3), TaskStatus::Blocked, 1.5),
            ("task 5", "4h", Some(4), TaskStatus::Blocked, 2.5),
        ];
        {
            let mut data = repo.data.write();
            for (name, duration, predecessor, status, limit) in demo {
                let id = data.next_task_id;
                data.next_task_id += 1;
                data.tasks.insert(
                    id,
                    Task {
                        id,
                        name: name.to_string(),
                        duration: duration.to_string(),
                        predecessor,
                        status,
                        wave_height_limit: limit,
                    },
                );
            }
        }
        repo
    }

    /// Toggle the simulated connection health, for testing failure paths.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Number of tasks stored.
    pub fn task_count(&self) -> usize {
        self.data.read().tasks.len()
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn list_tasks(&self) -> RepositoryResult<Vec<Task>> {
        Ok(self.data.read().tasks.values().cloned().collect())
    }

    async fn get_task(&self, task_id: i64) -> RepositoryResult<Task> {
        self.data
            .read()
            .tasks
            .get(&task_id)
            .cloned()
            .ok_or(RepositoryError::TaskNotFound(task_id))
    }

    async fn insert_task(&self, mut task: Task) -> RepositoryResult<Task> {
        let mut data = self.data.write();
        if task.id <= 0 {
            task.id = data.next_task_id;
        }
        data.next_task_id = data.next_task_id.max(task.id + 1);
        data.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn set_task_status(&self, task_id: i64, status: TaskStatus) -> RepositoryResult<Task> {
        let mut data = self.data.write();
        let task = data
            .tasks
            .get_mut(&task_id)
            .ok_or(RepositoryError::TaskNotFound(task_id))?;
        task.status = status;
        Ok(task.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_seed() {
        let repo = LocalRepository::with_demo_tasks();
        assert_eq!(repo.task_count(), 5);

        let tasks = repo.list_tasks().await.unwrap();
        assert_eq!(tasks[0].name, "task 1");
        assert_eq!(tasks[0].predecessor, None);
        assert_eq!(tasks[2].duration, "2h");
        assert_eq!(tasks[2].status, TaskStatus::Ready);
        assert_eq!(tasks[3].wave_height_limit, 1.5);
    }

    #[tokio::test]
    async fn test_insert_assigns_ids() {
        let repo = LocalRepository::new();
        let task = Task {
            id: 0,
            name: "ad-hoc".to_string(),
            duration: "1h".to_string(),
            predecessor: None,
            status: TaskStatus::Ready,
            wave_height_limit: 1.0,
        };
        let stored = repo.insert_task(task.clone()).await.unwrap();
        assert_eq!(stored.id, 1);
        let second = repo.insert_task(task).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_status_transition() {
        let repo = LocalRepository::with_demo_tasks();
        let updated = repo
            .set_task_status(3, TaskStatus::Started)
            .await
            .unwrap();
        assert_eq!(updated.status, TaskStatus::Started);
        assert_eq!(
            repo.get_task(3).await.unwrap().status,
            TaskStatus::Started
        );
    }

    #[tokio::test]
    async fn test_missing_task_errors() {
        let repo = LocalRepository::new();
        assert!(matches!(
            repo.get_task(42).await,
            Err(RepositoryError::TaskNotFound(42))
        ));
        assert!(matches!(
            repo.set_task_status(42, TaskStatus::Completed).await,
            Err(RepositoryError::TaskNotFound(42))
        ));
    }

    #[tokio::test]
    async fn test_health_toggle() {
        let repo = LocalRepository::new();
        assert!(repo.health_check().await.unwrap());
        repo.set_healthy(false);
        assert!(!repo.health_check().await.unwrap());
    }
}
