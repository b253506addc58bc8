//! Blueprints: validate untyped JSON and construct domain entities.
//!
//! Each blueprint owns exactly one entity type and delegates nested
//! collections to the blueprint one level down:
//!
//! ```text
//! HouseBlueprint ──rooms──▶ RoomBlueprint ──accessories──▶ AccessoryBlueprint
//! ```
//!
//! Blueprints are stateless. Building never touches I/O and never logs; a
//! call either returns a fully valid entity tree or the first
//! [`FormatError`] observed.
//!
//! Sibling elements of a collection are built concurrently on the caller's
//! task and joined positionally, so output order always equals input order.
//! When one sibling fails, the join resolves with that error and the
//! remaining sibling futures are dropped.

use std::future::Future;

use futures::future::try_join_all;
use serde_json::Value;

use crate::domain::error::FormatError;

mod accessory;
mod fields;
mod house;
mod room;

pub use accessory::AccessoryBlueprint;
pub use house::HouseBlueprint;
pub use room::RoomBlueprint;

pub type BlueprintResult<T> = Result<T, FormatError>;

/// Capability shared by every blueprint: build one `Output` from untyped
/// input.
pub trait Blueprint {
    type Output;

    fn build(&self, input: &Value) -> impl Future<Output = BlueprintResult<Self::Output>> + Send;
}

/// Build every element of `inputs` with `blueprint`, preserving order.
///
/// Resolves with the first error as soon as it is observed.
pub async fn build_each<B>(blueprint: &B, inputs: &[Value]) -> BlueprintResult<Vec<B::Output>>
where
    B: Blueprint + Sync,
{
    try_join_all(inputs.iter().map(|input| blueprint.build(input))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    /// Sleeps for `delay_ms` before echoing `id`; fails when `fail` is set.
    struct DelayedEcho;

    impl Blueprint for DelayedEcho {
        type Output = u64;

        async fn build(&self, input: &Value) -> BlueprintResult<u64> {
            let delay = input["delay_ms"].as_u64().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            if input["fail"].as_bool().unwrap_or(false) {
                return Err(FormatError::InvalidField { field: "fail" });
            }
            Ok(input["id"].as_u64().unwrap_or_default())
        }
    }

    #[tokio::test]
    async fn output_order_matches_input_order() {
        let inputs = vec![
            json!({"id": 1, "delay_ms": 30}),
            json!({"id": 2, "delay_ms": 0}),
            json!({"id": 3, "delay_ms": 15}),
        ];

        let built = build_each(&DelayedEcho, &inputs).await.unwrap();

        assert_eq!(built, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn first_failure_settles_without_waiting_for_siblings() {
        let inputs = vec![
            json!({"id": 1, "delay_ms": 60_000}),
            json!({"id": 2, "fail": true}),
            json!({"id": 3, "delay_ms": 60_000}),
        ];

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            build_each(&DelayedEcho, &inputs),
        )
        .await
        .expect("join should settle on the first failure");

        assert_eq!(result, Err(FormatError::InvalidField { field: "fail" }));
    }

    #[tokio::test]
    async fn empty_collection_builds_empty_output() {
        let built = build_each(&DelayedEcho, &[]).await.unwrap();
        assert!(built.is_empty());
    }
}
