//! Domain value objects.
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::FormatError;

// ── AccessoryType ────────────────────────────────────────────────────────────

/// The kind of device an accessory represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessoryType {
    #[default]
    Unknown,
    Light,
    Dimmer,
    Switch,
    Shade,
}

impl AccessoryType {
    pub const ALL: [AccessoryType; 5] = [
        Self::Unknown,
        Self::Light,
        Self::Dimmer,
        Self::Switch,
        Self::Shade,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Light => "light",
            Self::Dimmer => "dimmer",
            Self::Switch => "switch",
            Self::Shade => "shade",
        }
    }
}

impl fmt::Display for AccessoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the stored spellings.
impl FromStr for AccessoryType {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FormatError::UnknownAccessoryType { value: s.into() })
    }
}
