use serde_json::Value;

use super::{
    AccessoryBlueprint, Blueprint, BlueprintResult, build_each,
    fields::{require_object, require_sequence, require_text},
};
use crate::domain::Room;

/// Builds a [`Room`] and every accessory inside it.
///
/// Unlike a house's `rooms`, the `accessories` array is mandatory; an empty
/// array is fine but omitting it is a format error.
#[derive(Debug, Clone, Default)]
pub struct RoomBlueprint {
    accessories: AccessoryBlueprint,
}

impl RoomBlueprint {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Blueprint for RoomBlueprint {
    type Output = Room;

    async fn build(&self, input: &Value) -> BlueprintResult<Room> {
        let object = require_object(input, "Room")?;

        let name = require_text(object, "name")?;
        let accessories = require_sequence(object, "accessories")?;

        Ok(Room {
            name,
            accessories: build_each(&self.accessories, accessories).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccessoryType, error::FormatError};
    use serde_json::json;

    async fn build(input: Value) -> BlueprintResult<Room> {
        RoomBlueprint::new().build(&input).await
    }

    #[tokio::test]
    async fn builds_room_with_accessories_in_order() {
        let room = build(json!({
            "name": "Kitchen",
            "accessories": [
                {"type": "light", "provider": "hue", "name": "Ceiling"},
                {"type": "shade", "provider": "somfy", "name": "Window"},
                {"type": "switch", "provider": "hue", "name": "Counter"}
            ]
        }))
        .await
        .unwrap();

        let names: Vec<_> = room.accessories.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Ceiling", "Window", "Counter"]);
        assert_eq!(room.accessories[1].accessory_type, AccessoryType::Shade);
    }

    #[tokio::test]
    async fn empty_accessories_are_allowed() {
        let room = build(json!({"name": "Hall", "accessories": []})).await.unwrap();
        assert!(room.accessories.is_empty());
    }

    #[tokio::test]
    async fn missing_accessories_is_an_error() {
        let err = build(json!({"name": "Hall"})).await.unwrap_err();
        assert_eq!(err, FormatError::NotASequence { field: "accessories" });
        assert!(err.to_string().contains("accessories"));
    }

    #[tokio::test]
    async fn non_array_accessories_is_an_error() {
        for accessories in [json!(null), json!({}), json!("lamp")] {
            assert_eq!(
                build(json!({"name": "Hall", "accessories": accessories})).await,
                Err(FormatError::NotASequence { field: "accessories" })
            );
        }
    }

    #[tokio::test]
    async fn name_is_checked_before_accessories() {
        assert_eq!(
            build(json!({})).await,
            Err(FormatError::InvalidField { field: "name" })
        );
    }

    #[tokio::test]
    async fn accessory_error_fails_the_room_unchanged() {
        let result = build(json!({
            "name": "Office",
            "accessories": [
                {"type": "light", "provider": "hue", "name": "Desk"},
                {"type": "light", "name": "Broken"}
            ]
        }))
        .await;

        assert_eq!(result, Err(FormatError::InvalidField { field: "provider" }));
    }

    #[tokio::test]
    async fn rejects_non_object_input() {
        assert_eq!(
            build(json!(["Kitchen"])).await,
            Err(FormatError::NotAnObject { entity: "Room" })
        );
    }
}
