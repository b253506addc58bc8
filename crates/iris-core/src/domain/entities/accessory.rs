use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::AccessoryType;

/// A device managed by an external integration.
///
/// `provider_key` names the integration; nothing here checks that it exists.
/// `configuration` is opaque to the core and defaults to an empty object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessory {
    pub name: String,
    pub accessory_type: AccessoryType,
    pub provider_key: String,
    pub configuration: Value,
}
