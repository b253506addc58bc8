//! Application layer errors.
//!
//! These errors represent failures in orchestration and persistence, not in
//! blueprint validation. Validation errors are `FormatError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while storing or orchestrating built houses.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A house with the same name is already stored.
    #[error("A house named '{name}' already exists")]
    DuplicateHouse { name: String },

    /// No stored house has the requested name.
    #[error("No house named '{name}'")]
    HouseNotFound { name: String },

    /// The backing file could not be read or written.
    #[error("Store error at {path}: {reason}")]
    StoreIo { path: PathBuf, reason: String },

    /// Stored data could not be (de)serialized.
    #[error("Store data is corrupt: {reason}")]
    CorruptStore { reason: String },

    /// Store access failed (lock poisoned).
    #[error("House store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DuplicateHouse { name } => vec![
                format!("'{}' is already seeded", name),
                "Use --purge to clear the store before seeding".into(),
                "Or rename the house in the seed file".into(),
            ],
            Self::HouseNotFound { .. } => vec!["Try: iris list to see stored houses".into()],
            Self::StoreIo { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::CorruptStore { .. } => vec![
                "The store file is not valid JSON".into(),
                "Run: iris purge to reset it".into(),
            ],
            Self::StoreLockError => vec![
                "The house store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateHouse { .. } => ErrorCategory::Conflict,
            Self::HouseNotFound { .. } => ErrorCategory::NotFound,
            Self::StoreIo { .. } | Self::CorruptStore { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
