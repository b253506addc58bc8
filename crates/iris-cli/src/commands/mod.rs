//! Command handlers, one module per subcommand.
//!
//! Handlers own the I/O around the core: reading blueprint files, picking
//! the store adapter, and rendering results through [`OutputManager`].
//!
//! [`OutputManager`]: crate::output::OutputManager

pub mod completions;
pub mod config;
pub mod list;
pub mod purge;
pub mod seed;
pub mod show;
pub mod validate;

use std::path::Path;

use iris_adapters::{InMemoryHouseStore, JsonFileHouseStore};
use iris_core::application::HouseStore;
use serde_json::Value;
use tracing::debug;

use crate::{
    config::{AppConfig, StoreBackend},
    error::{CliError, CliResult, IntoCli},
};

/// Build the store adapter selected by configuration.
pub fn open_store(config: &AppConfig) -> Box<dyn HouseStore> {
    match config.store.backend {
        StoreBackend::File => {
            let path = config.store_path();
            debug!(path = %path.display(), "Using JSON file store");
            Box::new(JsonFileHouseStore::new(path))
        }
        StoreBackend::Memory => {
            debug!("Using in-memory store");
            Box::new(InMemoryHouseStore::new())
        }
    }
}

/// Read and decode a blueprint file.
///
/// Only JSON syntax is checked here; structure is the blueprints' job.
pub fn read_blueprint(path: &Path) -> CliResult<Value> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CliError::SeedFileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(e).with_cli_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let value = serde_json::from_str(&text).map_err(|source| CliError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = text.len(), "Blueprint file decoded");
    Ok(value)
}
