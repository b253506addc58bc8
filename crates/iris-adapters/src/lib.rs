//! Infrastructure adapters for Iris.
//!
//! This crate implements the ports defined in `iris-core::application::ports`.
//! It contains all I/O performed on behalf of the core.

pub mod store;

// Re-export commonly used adapters
pub use store::{InMemoryHouseStore, JsonFileHouseStore};
