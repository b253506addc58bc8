// ============================================================================
// domain/error.rs - BLUEPRINT FORMAT ERRORS
// ============================================================================

use thiserror::Error;

/// The single error kind raised by the blueprint pipeline.
///
/// Each variant names exactly one violated structural constraint. Errors
/// raised by nested blueprints reach the caller unchanged: a room that fails
/// because of one of its accessories reports the accessory's error, not a
/// wrapped one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input for an entity was not a JSON object.
    #[error("{entity} input isn't an object")]
    NotAnObject { entity: &'static str },

    /// A required text field was absent, empty or not a string.
    #[error("{field} field is missing or invalid")]
    InvalidField { field: &'static str },

    /// A sequence field was absent (where required) or not an array.
    #[error("{field} field is missing or not an array")]
    NotASequence { field: &'static str },

    /// The accessory `type` was text but not one of the known kinds.
    #[error("type field has unknown accessory type '{value}'")]
    UnknownAccessoryType { value: String },
}

impl FormatError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotAnObject { entity } => vec![
                format!("Each {} must be written as a JSON object", entity.to_lowercase()),
                "Example: { \"name\": \"Kitchen\", \"accessories\": [] }".into(),
            ],
            Self::InvalidField { field } => vec![
                format!("Add a non-empty string value for '{field}'"),
            ],
            Self::NotASequence { field } => vec![
                format!("'{field}' must be a JSON array (use [] when empty)"),
            ],
            Self::UnknownAccessoryType { value } => vec![
                format!("'{value}' is not a supported accessory type"),
                format!(
                    "Supported types: {}",
                    crate::domain::AccessoryType::ALL
                        .iter()
                        .map(|t| t.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ],
        }
    }
}
