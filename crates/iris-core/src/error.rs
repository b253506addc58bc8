//! Unified error handling for Iris Core.
//!
//! This module provides a unified error type that wraps blueprint and
//! application errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::FormatError;

/// Root error type for Iris Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IrisError {
    /// The input document violated a structural constraint.
    #[error("Invalid blueprint: {0}")]
    Blueprint(#[from] FormatError),

    /// Errors from the application layer (persistence, orchestration).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl IrisError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Blueprint(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Blueprint(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type IrisResult<T> = Result<T, IrisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blueprint_errors_display_with_prefix() {
        let err: IrisError = FormatError::NotASequence {
            field: "accessories",
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid blueprint: accessories field is missing or not an array"
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn duplicate_house_is_a_conflict() {
        let err: IrisError = ApplicationError::DuplicateHouse {
            name: "Lighthouse".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.suggestions().iter().any(|s| s.contains("--purge")));
    }

    #[test]
    fn missing_house_is_not_found() {
        let err: IrisError = ApplicationError::HouseNotFound {
            name: "Nowhere".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.to_string(), "No house named 'Nowhere'");
    }
}
