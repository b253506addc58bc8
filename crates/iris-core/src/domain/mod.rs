//! Core domain layer for Iris.
//!
//! Pure logic only: entities, the blueprint pipeline that builds them from
//! untyped JSON, and the record shapes stores persist.
//!
//! - **No I/O**: no filesystem, network, or environment access
//! - **No logging**: blueprints report through [`FormatError`] alone
//! - **Fresh trees**: every build returns newly allocated entities
//!
pub mod blueprints;
pub mod entities;
pub mod error;
pub mod records;
pub mod value_objects;

// Re-exports for convenience
pub use blueprints::{
    AccessoryBlueprint, Blueprint, BlueprintResult, HouseBlueprint, RoomBlueprint,
};
pub use entities::{Accessory, House, Room};
pub use error::FormatError;
pub use records::{AccessoryRecord, HouseRecord, RoomRecord};
pub use value_objects::AccessoryType;
