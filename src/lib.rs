//! Taskboard: a REST service for managing to-do tasks.
//!
//! This crate provides task creation, lookup, status-filtered listing,
//! wholesale replacement, and deletion behind a small HTTP resource API.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task domain, persistence port and adapters, CRUD service
//! - [`http`]: axum routes mapping HTTP requests onto the task service

pub mod http;
pub mod task;
