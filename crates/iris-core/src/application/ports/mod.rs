//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `iris-adapters` implement these.
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `HouseStore`: persistence of built house trees

pub mod output;

pub use output::HouseStore;
