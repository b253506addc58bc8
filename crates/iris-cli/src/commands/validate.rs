//! Implementation of the `iris validate` command.

use iris_core::prelude::*;
use serde_json::json;

use crate::{
    cli::{OutputFormat, ValidateArgs},
    error::CliResult,
    output::OutputManager,
};

use super::{read_blueprint, seed::print_tree};

/// Build the blueprint and report, without opening any store.
pub async fn execute(args: ValidateArgs, output: OutputManager) -> CliResult<()> {
    let input = read_blueprint(&args.source)?;

    let house = HouseBlueprint::new().build(&input).await.map_err(IrisError::from)?;

    if output.format() == OutputFormat::Json {
        output.json(&json!({
            "valid": true,
            "name": house.name,
            "rooms": house.rooms.len(),
            "accessories": house.accessory_count(),
        }))?;
        return Ok(());
    }

    output.success(&format!(
        "{} is a valid blueprint for '{}'",
        args.source.display(),
        house.name
    ))?;
    print_tree(&output, &house)?;
    Ok(())
}
