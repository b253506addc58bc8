//! Persisted forms of the entity tree.
//!
//! A record is what a store keeps once a built [`House`] is handed over:
//! every level gains an identifier and timestamps. Identifiers cascade from
//! the house down to its accessories in a single call, mirroring how the
//! tree is inserted as one unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::{Accessory, AccessoryType, House, Room};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseRecord {
    pub id: Uuid,
    pub name: String,
    pub rooms: Vec<RoomRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    pub id: Uuid,
    pub name: String,
    pub accessories: Vec<AccessoryRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryRecord {
    pub id: Uuid,
    pub name: String,
    pub accessory_type: AccessoryType,
    pub provider_key: String,
    pub configuration: Value,
    /// Last state reported by the provider; never set at seed time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_state: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HouseRecord {
    /// Assign fresh identifiers to `house` and everything it owns.
    pub fn from_house(house: House, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: house.name,
            rooms: house
                .rooms
                .into_iter()
                .map(|room| RoomRecord::from_room(room, now))
                .collect(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The entity tree without identifiers or timestamps.
    pub fn to_house(&self) -> House {
        House {
            name: self.name.clone(),
            rooms: self
                .rooms
                .iter()
                .map(|room| Room {
                    name: room.name.clone(),
                    accessories: room
                        .accessories
                        .iter()
                        .map(|a| Accessory {
                            name: a.name.clone(),
                            accessory_type: a.accessory_type,
                            provider_key: a.provider_key.clone(),
                            configuration: a.configuration.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn accessory_count(&self) -> usize {
        self.rooms.iter().map(|r| r.accessories.len()).sum()
    }
}

impl RoomRecord {
    fn from_room(room: Room, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: room.name,
            accessories: room
                .accessories
                .into_iter()
                .map(|accessory| AccessoryRecord::from_accessory(accessory, now))
                .collect(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl AccessoryRecord {
    fn from_accessory(accessory: Accessory, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: accessory.name,
            accessory_type: accessory.accessory_type,
            provider_key: accessory.provider_key,
            configuration: accessory.configuration,
            current_state: None,
            created_at: now,
            updated_at: now,
        }
    }
}
