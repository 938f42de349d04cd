//! Task management for Taskboard.
//!
//! This module implements the to-do task resource: creation with status
//! defaulting, lookup by identifier or status filter, wholesale content
//! replacement, and deletion. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
