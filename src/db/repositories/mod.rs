//! Repository implementations.
//!
//! Currently a single backend: `local`, the in-memory implementation used
//! for unit tests and local development.

pub mod local;

pub use local::LocalRepository;
