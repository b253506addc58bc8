//! Driven (output) ports - implemented by infrastructure.
//!
//! The `iris-adapters` crate provides implementations.

use crate::domain::{House, HouseRecord};
use crate::error::IrisResult;

/// Port for persisting built house trees.
///
/// Implemented by:
/// - `iris_adapters::store::JsonFileHouseStore` (production)
/// - `iris_adapters::store::InMemoryHouseStore` (testing, dry runs)
///
/// House names are unique within a store. Inserting stores the whole tree
/// (house, rooms and accessories) as one unit.
#[cfg_attr(test, mockall::automock)]
pub trait HouseStore: Send + Sync {
    /// Persist a built house, assigning identifiers through the tree.
    fn insert(&self, house: House) -> IrisResult<HouseRecord>;

    /// Get a stored house by name.
    fn get(&self, name: &str) -> IrisResult<HouseRecord>;

    /// List all stored houses.
    fn list(&self) -> IrisResult<Vec<HouseRecord>>;

    /// Remove every stored house, returning how many were removed.
    fn purge(&self) -> IrisResult<usize>;

    /// Purge and insert as one write, returning the removed count and the
    /// new record. A failed write leaves the previous contents in place.
    fn replace_all(&self, house: House) -> IrisResult<(usize, HouseRecord)>;
}
