//! Application layer for Iris.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (SeedService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation logic itself. All structural rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::SeedService;

pub use ports::HouseStore;

pub use error::ApplicationError;
