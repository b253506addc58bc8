//! Implementation of the `iris show` command.

use iris_core::prelude::*;

use crate::{
    cli::{OutputFormat, ShowArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::{open_store, seed::print_tree};

pub fn execute(args: ShowArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = SeedService::new(open_store(&config));
    let record = service.get(&args.name)?;

    if output.format() == OutputFormat::Json {
        output.json(&record)?;
        return Ok(());
    }

    print_tree(&output, &record.to_house())?;
    output.print(&format!(
        "  id: {}  seeded {}",
        record.id,
        record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ))?;
    Ok(())
}
