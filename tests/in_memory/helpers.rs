//! Shared fixtures for in-memory integration tests.

use rstest::fixture;
use std::sync::Arc;
use taskboard::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};

/// Service type used by the integration tests.
pub type TestService = TaskService<InMemoryTaskRepository>;

/// Provides a service backed by a fresh, empty in-memory repository.
#[fixture]
pub fn service() -> TestService {
    TaskService::new(Arc::new(InMemoryTaskRepository::new()))
}
