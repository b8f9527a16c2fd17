//! Task persistence via the repository pattern.
//!
//! The [`repository::TaskRepository`] trait abstracts the task store so
//! backends can be swapped; [`repositories::LocalRepository`] is the
//! in-memory implementation used for local development and tests.

pub mod repositories;
pub mod repository;

pub use repositories::LocalRepository;
pub use repository::{RepositoryError, RepositoryResult, TaskRepository};
