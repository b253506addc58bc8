use serde::{Deserialize, Serialize};

use super::Room;

/// A house and the rooms it owns.
///
/// Invariant: `name` is never empty. `rooms` may be empty but is always
/// present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub name: String,
    pub rooms: Vec<Room>,
}

impl House {
    /// Number of accessories across every room.
    pub fn accessory_count(&self) -> usize {
        self.rooms.iter().map(|r| r.accessories.len()).sum()
    }
}
