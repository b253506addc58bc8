//! In-memory house store.

use std::sync::{Arc, RwLock};

use chrono::Utc;
use iris_core::{
    application::{ApplicationError, ports::HouseStore},
    domain::{House, HouseRecord},
    error::IrisResult,
};
use tracing::debug;

/// Thread-safe in-memory house store.
///
/// Houses are listed in insertion order. Contents vanish with the process,
/// which makes this store suitable for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHouseStore {
    inner: Arc<RwLock<Vec<HouseRecord>>>,
}

impl InMemoryHouseStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored houses.
    pub fn len(&self) -> usize {
        self.inner.read().map(|houses| houses.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HouseStore for InMemoryHouseStore {
    fn insert(&self, house: House) -> IrisResult<HouseRecord> {
        let mut houses = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if houses.iter().any(|h| h.name == house.name) {
            return Err(ApplicationError::DuplicateHouse { name: house.name }.into());
        }

        let record = HouseRecord::from_house(house, Utc::now());
        debug!(house = %record.name, id = %record.id, "House stored in memory");
        houses.push(record.clone());
        Ok(record)
    }

    fn get(&self, name: &str) -> IrisResult<HouseRecord> {
        let houses = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        houses.iter().find(|h| h.name == name).cloned().ok_or_else(|| {
            ApplicationError::HouseNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    fn list(&self) -> IrisResult<Vec<HouseRecord>> {
        let houses = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(houses.clone())
    }

    fn purge(&self) -> IrisResult<usize> {
        let mut houses = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let removed = houses.len();
        houses.clear();
        Ok(removed)
    }

    fn replace_all(&self, house: House) -> IrisResult<(usize, HouseRecord)> {
        let mut houses = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let record = HouseRecord::from_house(house, Utc::now());
        let removed = std::mem::replace(&mut *houses, vec![record.clone()]).len();
        debug!(removed, house = %record.name, "Memory store replaced");
        Ok((removed, record))
    }
}
