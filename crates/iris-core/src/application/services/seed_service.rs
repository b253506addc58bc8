//! Seed Service - main application orchestrator.
//!
//! This service coordinates the seeding workflow:
//! 1. Build the house tree from an already-decoded JSON document
//! 2. Hand the tree to the store, replacing its contents when purging
//!
//! Nothing is purged or written unless the whole document is valid.

use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::HouseStore,
    domain::{Blueprint, House, HouseBlueprint, HouseRecord},
    error::IrisResult,
};

/// Options for [`SeedService::seed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOptions {
    /// Remove every stored house before inserting the new one.
    pub purge: bool,
}

/// Outcome of a successful seed.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedReport {
    pub record: HouseRecord,
    /// Number of houses removed first, when purging was requested.
    pub purged: Option<usize>,
}

/// Validates blueprints and stores the resulting houses.
pub struct SeedService {
    store: Box<dyn HouseStore>,
    blueprint: HouseBlueprint,
}

impl SeedService {
    /// Create a new seed service backed by `store`.
    pub fn new(store: Box<dyn HouseStore>) -> Self {
        Self {
            store,
            blueprint: HouseBlueprint::new(),
        }
    }

    /// Build the house described by `input` without storing it.
    #[instrument(skip_all)]
    pub async fn validate(&self, input: &Value) -> IrisResult<House> {
        let house = self.blueprint.build(input).await?;
        debug!(
            house = %house.name,
            rooms = house.rooms.len(),
            accessories = house.accessory_count(),
            "Blueprint valid"
        );
        Ok(house)
    }

    /// Build the house described by `input` and persist it.
    #[instrument(skip_all)]
    pub async fn seed(&self, input: &Value, options: SeedOptions) -> IrisResult<SeedReport> {
        let house = self.validate(input).await?;

        let (record, purged) = if options.purge {
            let (removed, record) = self.store.replace_all(house)?;
            info!(removed, "Store purged");
            (record, Some(removed))
        } else {
            (self.store.insert(house)?, None)
        };
        info!(house = %record.name, id = %record.id, "House seeded");

        Ok(SeedReport { record, purged })
    }

    /// Remove every stored house.
    pub fn purge(&self) -> IrisResult<usize> {
        let removed = self.store.purge()?;
        info!(removed, "Store purged");
        Ok(removed)
    }

    /// Fetch one stored house by name.
    pub fn get(&self, name: &str) -> IrisResult<HouseRecord> {
        self.store.get(name)
    }

    /// List stored houses.
    pub fn list(&self) -> IrisResult<Vec<HouseRecord>> {
        self.store.list()
    }
}
