//! Implementation of the `iris seed` command.

use iris_core::prelude::*;
use serde_json::json;
use tracing::info;

use crate::{
    cli::{OutputFormat, SeedArgs, global::GlobalArgs},
    config::{AppConfig, describe_store},
    error::CliResult,
    output::OutputManager,
};

use super::{open_store, read_blueprint};

pub async fn execute(
    args: SeedArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let input = read_blueprint(&args.source)?;
    let service = SeedService::new(open_store(&config));

    if args.dry_run {
        let house = service.validate(&input).await?;
        info!(house = %house.name, "Dry run, store untouched");

        if output.format() == OutputFormat::Json {
            output.json(&json!({"dryRun": true, "house": house}))?;
            return Ok(());
        }
        output.info(&format!(
            "Dry run: '{}' is valid ({} rooms, {} accessories), nothing written",
            house.name,
            house.rooms.len(),
            house.accessory_count()
        ))?;
        if global.verbose > 0 {
            print_tree(&output, &house)?;
        }
        return Ok(());
    }

    let report = service
        .seed(&input, SeedOptions { purge: args.purge })
        .await?;

    if output.format() == OutputFormat::Json {
        output.json(&json!({"purged": report.purged, "house": report.record}))?;
        return Ok(());
    }

    if let Some(removed) = report.purged {
        output.warning(&format!("Purged {removed} stored house(s)"))?;
    }
    output.success(&format!(
        "Seeded '{}' ({} rooms, {} accessories) into {}",
        report.record.name,
        report.record.room_count(),
        report.record.accessory_count(),
        describe_store(&config)
    ))?;
    if global.verbose > 0 {
        output.print(&format!("  id: {}", report.record.id))?;
        print_tree(&output, &report.record.to_house())?;
    }

    Ok(())
}

/// Print the built tree, one line per entity.
pub(crate) fn print_tree(output: &OutputManager, house: &House) -> std::io::Result<()> {
    output.header(&house.name)?;
    for room in &house.rooms {
        output.tree_line(1, &room.name)?;
        for a in &room.accessories {
            output.tree_line(
                2,
                &format!("{} [{} via {}]", a.name, a.accessory_type, a.provider_key),
            )?;
        }
    }
    Ok(())
}
