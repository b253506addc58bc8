use serde_json::Value;

use super::{
    Blueprint, BlueprintResult,
    fields::{object_or_default, require_object, require_text},
};
use crate::domain::{Accessory, AccessoryType};

/// Builds an [`Accessory`] from a flat JSON object.
///
/// Required fields are checked in the order `type`, `provider`, `name`; the
/// first violation is reported. A `type` outside [`AccessoryType`] is
/// rejected once the required fields are present.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessoryBlueprint;

impl AccessoryBlueprint {
    pub fn new() -> Self {
        Self
    }
}

impl Blueprint for AccessoryBlueprint {
    type Output = Accessory;

    async fn build(&self, input: &Value) -> BlueprintResult<Accessory> {
        let object = require_object(input, "Accessory")?;

        let kind = require_text(object, "type")?;
        let provider_key = require_text(object, "provider")?;
        let name = require_text(object, "name")?;

        Ok(Accessory {
            name,
            accessory_type: kind.parse::<AccessoryType>()?,
            provider_key,
            configuration: object_or_default(object, "configuration"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::FormatError;
    use serde_json::json;

    async fn build(input: Value) -> BlueprintResult<Accessory> {
        AccessoryBlueprint::new().build(&input).await
    }

    #[tokio::test]
    async fn builds_complete_accessory() {
        let accessory = build(json!({
            "type": "dimmer",
            "provider": "lutron",
            "name": "Sconce",
            "configuration": {"zone": 4}
        }))
        .await
        .unwrap();

        assert_eq!(accessory.name, "Sconce");
        assert_eq!(accessory.accessory_type, AccessoryType::Dimmer);
        assert_eq!(accessory.provider_key, "lutron");
        assert_eq!(accessory.configuration, json!({"zone": 4}));
    }

    #[tokio::test]
    async fn configuration_defaults_to_empty_object() {
        for input in [
            json!({"type": "light", "provider": "hue", "name": "Lamp"}),
            json!({"type": "light", "provider": "hue", "name": "Lamp", "configuration": null}),
        ] {
            let accessory = build(input).await.unwrap();
            assert_eq!(accessory.configuration, json!({}));
        }
    }

    #[tokio::test]
    async fn truthy_non_object_configuration_is_kept() {
        let accessory = build(json!({
            "type": "switch",
            "provider": "zwave",
            "name": "Porch",
            "configuration": "str"
        }))
        .await
        .unwrap();

        assert_eq!(accessory.configuration, json!("str"));
    }

    #[tokio::test]
    async fn falsy_type_is_an_invalid_field() {
        for kind in [json!(""), json!(null), json!(0)] {
            assert_eq!(
                build(json!({"type": kind, "provider": "hue", "name": "Lamp"})).await,
                Err(FormatError::InvalidField { field: "type" })
            );
        }
    }

    #[tokio::test]
    async fn rejects_non_object_input() {
        assert_eq!(
            build(json!("lamp")).await,
            Err(FormatError::NotAnObject { entity: "Accessory" })
        );
    }

    #[tokio::test]
    async fn required_fields_checked_in_order() {
        assert_eq!(
            build(json!({})).await,
            Err(FormatError::InvalidField { field: "type" })
        );
        assert_eq!(
            build(json!({"type": "light"})).await,
            Err(FormatError::InvalidField { field: "provider" })
        );
        assert_eq!(
            build(json!({"type": "light", "provider": "hue"})).await,
            Err(FormatError::InvalidField { field: "name" })
        );
        assert_eq!(
            build(json!({"type": "light", "provider": "", "name": 5})).await,
            Err(FormatError::InvalidField { field: "provider" })
        );
    }

    #[tokio::test]
    async fn unknown_type_is_rejected_after_required_fields() {
        assert_eq!(
            build(json!({"type": "fan", "name": "Fan"})).await,
            Err(FormatError::InvalidField { field: "provider" })
        );
        assert_eq!(
            build(json!({"type": "fan", "provider": "hue", "name": "Fan"})).await,
            Err(FormatError::UnknownAccessoryType { value: "fan".into() })
        );
    }
}
