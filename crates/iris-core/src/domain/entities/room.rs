use serde::{Deserialize, Serialize};

use super::Accessory;

/// A room inside a house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub accessories: Vec<Accessory>,
}
