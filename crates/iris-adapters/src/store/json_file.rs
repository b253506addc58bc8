//! House store backed by a single JSON document on disk.

use std::{
    io,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use chrono::Utc;
use iris_core::{
    application::{ApplicationError, ports::HouseStore},
    domain::{House, HouseRecord},
    error::{IrisError, IrisResult},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// On-disk layout of the store file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    houses: Vec<HouseRecord>,
}

/// Production house store using `std::fs`.
///
/// Every operation reads the whole file and, when mutating, rewrites it. A
/// missing file reads as an empty store; parent directories are created on
/// first write. Rewrites go to a sibling `.tmp` file that is renamed over the
/// store, so a failed write never truncates it.
#[derive(Debug)]
pub struct JsonFileHouseStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileHouseStore {
    /// Create a store that reads and writes `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> IrisResult<StoreDocument> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                IrisError::from(ApplicationError::CorruptStore {
                    reason: format!("{}: {}", self.path.display(), e),
                })
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(StoreDocument::default()),
            Err(e) => Err(map_io_error(&self.path, e, "read store")),
        }
    }

    fn guard(&self) -> IrisResult<MutexGuard<'_, ()>> {
        Ok(self
            .lock
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }

    fn save(&self, document: &StoreDocument) -> IrisResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| map_io_error(parent, e, "create directory"))?;
        }

        let contents =
            serde_json::to_string_pretty(document).map_err(|e| ApplicationError::CorruptStore {
                reason: e.to_string(),
            })?;

        let staging = self.staging_path();
        std::fs::write(&staging, contents).map_err(|e| map_io_error(&staging, e, "write store"))?;
        std::fs::rename(&staging, &self.path)
            .map_err(|e| map_io_error(&self.path, e, "replace store"))
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl HouseStore for JsonFileHouseStore {
    fn insert(&self, house: House) -> IrisResult<HouseRecord> {
        let _guard = self.guard()?;
        let mut document = self.load()?;

        if document.houses.iter().any(|h| h.name == house.name) {
            return Err(ApplicationError::DuplicateHouse { name: house.name }.into());
        }

        let record = HouseRecord::from_house(house, Utc::now());
        document.houses.push(record.clone());
        self.save(&document)?;

        info!(
            house = %record.name,
            path = %self.path.display(),
            "House written to store"
        );
        Ok(record)
    }

    fn get(&self, name: &str) -> IrisResult<HouseRecord> {
        let _guard = self.guard()?;
        self.load()?
            .houses
            .into_iter()
            .find(|h| h.name == name)
            .ok_or_else(|| {
                ApplicationError::HouseNotFound {
                    name: name.to_string(),
                }
                .into()
            })
    }

    fn list(&self) -> IrisResult<Vec<HouseRecord>> {
        let _guard = self.guard()?;
        Ok(self.load()?.houses)
    }

    fn purge(&self) -> IrisResult<usize> {
        let _guard = self.guard()?;
        let removed = self.load()?.houses.len();

        self.save(&StoreDocument::default())?;
        debug!(removed, path = %self.path.display(), "Store file reset");
        Ok(removed)
    }

    fn replace_all(&self, house: House) -> IrisResult<(usize, HouseRecord)> {
        let _guard = self.guard()?;
        let removed = self.load()?.houses.len();

        let record = HouseRecord::from_house(house, Utc::now());
        self.save(&StoreDocument {
            houses: vec![record.clone()],
        })?;

        info!(
            removed,
            house = %record.name,
            path = %self.path.display(),
            "Store replaced"
        );
        Ok((removed, record))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> IrisError {
    ApplicationError::StoreIo {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
