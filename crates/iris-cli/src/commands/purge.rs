//! Implementation of the `iris purge` command.

use iris_core::prelude::*;

use crate::{
    config::{AppConfig, describe_store},
    error::CliResult,
    output::OutputManager,
};

use super::open_store;

pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = SeedService::new(open_store(&config));
    let removed = service.purge()?;

    output.success(&format!(
        "Removed {removed} house(s) from {}",
        describe_store(&config)
    ))?;
    Ok(())
}
