//! Iris Core - Hexagonal Architecture Implementation
//!
//! This crate turns untrusted JSON house descriptions into a typed
//! House → Room → Accessory tree, and defines the ports through which built
//! houses are persisted.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             iris-cli (CLI)              │
//! │   decodes JSON, reports FormatErrors    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (SeedService)               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (HouseStore)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     iris-adapters (Infrastructure)      │
//! │ (InMemoryHouseStore, JsonFileHouseStore)│
//! └─────────────────────────────────────────┘
//!
//!  Domain layer (pure): blueprints, entities, records
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use iris_core::domain::{Blueprint, HouseBlueprint};
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), iris_core::domain::FormatError> {
//! let input = json!({"name": "Lighthouse", "rooms": []});
//! let house = HouseBlueprint::new().build(&input).await?;
//! assert!(house.rooms.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        HouseStore, SeedService,
        services::seed_service::{SeedOptions, SeedReport},
    };
    pub use crate::domain::{
        Accessory, AccessoryBlueprint, AccessoryType, Blueprint, FormatError, House,
        HouseBlueprint, HouseRecord, Room, RoomBlueprint,
    };
    pub use crate::error::{IrisError, IrisResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
