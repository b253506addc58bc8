//! Integration tests for iris-core: whole-document blueprint builds.

use iris_core::prelude::*;
use serde_json::{Value, json};

async fn build_house(input: Value) -> Result<House, FormatError> {
    HouseBlueprint::new().build(&input).await
}

#[tokio::test]
async fn house_without_rooms_builds_empty() {
    let house = build_house(json!({"name": "Lighthouse"})).await.unwrap();

    assert_eq!(
        house,
        House {
            name: "Lighthouse".into(),
            rooms: vec![],
        }
    );
}

#[tokio::test]
async fn room_without_accessories_fails_the_house() {
    let err = build_house(json!({"name": "Lighthouse", "rooms": [{"name": "Kitchen"}]}))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "accessories field is missing or not an array");
}

#[tokio::test]
async fn nested_tree_builds() {
    let house = build_house(json!({
        "name": "Lighthouse",
        "rooms": [{
            "name": "Kitchen",
            "accessories": [{"type": "light", "provider": "hue", "name": "Ceiling"}]
        }]
    }))
    .await
    .unwrap();

    let ceiling = &house.rooms[0].accessories[0];
    assert_eq!(house.rooms[0].name, "Kitchen");
    assert_eq!(ceiling.name, "Ceiling");
    assert_eq!(ceiling.accessory_type, AccessoryType::Light);
    assert_eq!(ceiling.provider_key, "hue");
    assert_eq!(ceiling.configuration, json!({}));
}

#[tokio::test]
async fn house_without_name_fails() {
    let err = build_house(json!({"rooms": []})).await.unwrap_err();

    assert_eq!(err.to_string(), "name field is missing or invalid");
}

#[tokio::test]
async fn innermost_error_reaches_the_caller() {
    let err = build_house(json!({
        "name": "X",
        "rooms": [{"name": "Y", "accessories": [{"provider": "hue", "name": "Lamp"}]}]
    }))
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "type field is missing or invalid");
}

#[tokio::test]
async fn building_twice_yields_equal_independent_trees() {
    let input = json!({
        "name": "Cabin",
        "rooms": [{
            "name": "Loft",
            "accessories": [{
                "type": "dimmer",
                "provider": "lutron",
                "name": "Reading",
                "configuration": {"level": 40}
            }]
        }]
    });
    let blueprint = HouseBlueprint::new();

    let first = blueprint.build(&input).await.unwrap();
    let mut second = blueprint.build(&input).await.unwrap();
    assert_eq!(first, second);

    second.rooms[0].accessories[0].name = "Changed".into();
    assert_eq!(first.rooms[0].accessories[0].name, "Reading");
    assert_eq!(input["rooms"][0]["accessories"][0]["name"], "Reading");
}

#[tokio::test]
async fn one_bad_accessory_means_no_house() {
    let result = build_house(json!({
        "name": "Manor",
        "rooms": [
            {"name": "A", "accessories": [{"type": "light", "provider": "hue", "name": "1"}]},
            {"name": "B", "accessories": [{"type": "light", "provider": "hue"}]},
            {"name": "C", "accessories": [{"type": "shade", "provider": "somfy", "name": "3"}]}
        ]
    }))
    .await;

    assert_eq!(result, Err(FormatError::InvalidField { field: "name" }));
}

#[tokio::test]
async fn room_and_accessory_blueprints_are_usable_alone() {
    let room = RoomBlueprint::new()
        .build(&json!({"name": "Porch", "accessories": []}))
        .await
        .unwrap();
    assert_eq!(room.name, "Porch");

    let accessory = AccessoryBlueprint::new()
        .build(&json!({"type": "switch", "provider": "zwave", "name": "Porch light"}))
        .await
        .unwrap();
    assert_eq!(accessory.accessory_type, AccessoryType::Switch);
}
