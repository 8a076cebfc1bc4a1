//! Infrastructure layer for external integrations.
//!
//! This layer implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`memory`] - In-process store used for development and tests
//! - [`persistence`] - PostgreSQL repository implementations

pub mod memory;
pub mod persistence;
