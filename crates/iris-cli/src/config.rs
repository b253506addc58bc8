//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `IRIS_<SECTION>__<KEY>`, e.g. `IRIS_STORE__BACKEND`
//! 3. Config file (`--config`, else [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)
//!
//! Environment files are read before any of this; see [`load_environment`].

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where seeded houses are kept.
    pub store: StoreConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Store file for the `file` backend; see [`AppConfig::store_path`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Which `HouseStore` adapter the CLI uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// JSON document on disk.
    #[default]
    File,
    /// Process memory; nothing survives the command.
    Memory,
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and environment.
    ///
    /// A file passed explicitly via `--config` must exist; the default
    /// location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => config::File::from(path.as_path()).required(true),
            None => config::File::from(Self::config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("IRIS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.iris.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "iris", "iris")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".iris.toml"))
    }

    /// Store file used by the `file` backend.
    pub fn store_path(&self) -> PathBuf {
        self.store.path.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("com", "iris", "iris")
                .map(|d| d.data_dir().join("houses.json"))
                .unwrap_or_else(|| PathBuf::from("houses.json"))
        })
    }
}

/// Load environment variables from a `.env` file in the working directory.
///
/// `IRIS_ENV=development` selects `.env.dev`; anything else, including an
/// unset variable, selects `.env.prod`.  Either falls back to `.env`.
/// Missing files are not an error: deployments may provide real
/// environment variables instead.
///
/// Returns the file that was loaded, if any.
pub fn load_environment() -> Option<PathBuf> {
    let preferred = env_file_for(std::env::var("IRIS_ENV").ok().as_deref());
    dotenvy::from_filename(preferred)
        .or_else(|_| dotenvy::dotenv())
        .ok()
}

fn env_file_for(environment: Option<&str>) -> &'static str {
    match environment {
        Some("development") => ".env.dev",
        _ => ".env.prod",
    }
}

/// Human-readable description of where houses are stored.
pub fn describe_store(config: &AppConfig) -> String {
    match config.store.backend {
        StoreBackend::File => config.store_path().display().to_string(),
        StoreBackend::Memory => "memory (not persisted)".into(),
    }
}
