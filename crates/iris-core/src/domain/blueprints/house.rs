use serde_json::Value;

use super::{
    Blueprint, BlueprintResult, RoomBlueprint, build_each,
    fields::{require_object, require_text, sequence_or_default},
};
use crate::domain::House;

/// Entry point of the pipeline: builds a [`House`] and its whole tree.
///
/// `rooms` may be omitted, in which case the house has no rooms. A `rooms`
/// value that is present but not an array is still rejected.
#[derive(Debug, Clone, Default)]
pub struct HouseBlueprint {
    rooms: RoomBlueprint,
}

impl HouseBlueprint {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Blueprint for HouseBlueprint {
    type Output = House;

    async fn build(&self, input: &Value) -> BlueprintResult<House> {
        let object = require_object(input, "House")?;

        let name = require_text(object, "name")?;
        let rooms = sequence_or_default(object, "rooms")?;

        Ok(House {
            name,
            rooms: build_each(&self.rooms, rooms).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::FormatError;
    use serde_json::json;

    async fn build(input: Value) -> BlueprintResult<House> {
        HouseBlueprint::new().build(&input).await
    }

    #[tokio::test]
    async fn missing_rooms_default_to_empty() {
        let house = build(json!({"name": "Lighthouse"})).await.unwrap();
        assert_eq!(house.name, "Lighthouse");
        assert!(house.rooms.is_empty());
    }

    #[tokio::test]
    async fn null_rooms_default_to_empty() {
        let house = build(json!({"name": "Lighthouse", "rooms": null}))
            .await
            .unwrap();
        assert!(house.rooms.is_empty());
    }

    #[tokio::test]
    async fn present_non_array_rooms_are_rejected() {
        for rooms in [json!({}), json!("kitchen"), json!(3), json!(true)] {
            assert_eq!(
                build(json!({"name": "X", "rooms": rooms})).await,
                Err(FormatError::NotASequence { field: "rooms" })
            );
        }
    }

    #[tokio::test]
    async fn name_is_required() {
        assert_eq!(
            build(json!({"rooms": []})).await,
            Err(FormatError::InvalidField { field: "name" })
        );
        assert_eq!(
            build(json!({"name": ""})).await,
            Err(FormatError::InvalidField { field: "name" })
        );
    }

    #[tokio::test]
    async fn rejects_non_object_input() {
        for input in [json!(null), json!([]), json!("house")] {
            assert_eq!(
                build(input).await,
                Err(FormatError::NotAnObject { entity: "House" })
            );
        }
    }

    #[tokio::test]
    async fn rooms_keep_input_order() {
        let house = build(json!({
            "name": "Cabin",
            "rooms": [
                {"name": "A", "accessories": []},
                {"name": "B", "accessories": [{"type": "light", "provider": "hue", "name": "L"}]},
                {"name": "C", "accessories": []}
            ]
        }))
        .await
        .unwrap();

        let names: Vec<_> = house.rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(house.accessory_count(), 1);
    }

    #[tokio::test]
    async fn invalid_room_aborts_the_house() {
        let result = build(json!({
            "name": "Cabin",
            "rooms": [
                {"name": "A", "accessories": []},
                {"name": "B"},
                {"name": "C", "accessories": []}
            ]
        }))
        .await;

        assert_eq!(result, Err(FormatError::NotASequence { field: "accessories" }));
    }
}
