//! Implementation of the `iris list` command.

use iris_core::prelude::*;

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::open_store;

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = SeedService::new(open_store(&config));
    let houses = service.list()?;

    match args.format {
        ListFormat::Table => {
            if houses.is_empty() {
                output.info("No houses stored. Seed one with: iris seed <FILE>")?;
                return Ok(());
            }
            output.header("Stored Houses:")?;
            for house in &houses {
                output.print(&format!(
                    "  {} ({} rooms, {} accessories) seeded {}",
                    house.name,
                    house.room_count(),
                    house.accessory_count(),
                    house.created_at.format("%Y-%m-%d %H:%M:%S UTC")
                ))?;
            }
        }

        // Parseable even in quiet mode and non-TTY pipes.
        ListFormat::Json => output.json(&houses)?,

        ListFormat::List => {
            for house in &houses {
                output.print(&house.name)?;
            }
        }
    }

    Ok(())
}
