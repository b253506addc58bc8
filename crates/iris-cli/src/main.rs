//! # Iris CLI
//!
//! Validates JSON house blueprints and seeds the house store.
//!
//! ## Startup sequence
//!
//! 1. Load the environment file (`.env.dev` / `.env.prod` / `.env`).
//! 2. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 3. Initialise the tracing subscriber (logging).
//! 4. Load configuration (file + env + defaults).
//! 5. Build the [`OutputManager`].
//! 6. Dispatch to the appropriate command handler.
//! 7. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                          |
//! |------|----------------------------------|
//! |  0   | Success                          |
//! |  1   | Internal / system error          |
//! |  2   | Invalid blueprint or input       |
//! |  3   | Resource not found               |
//! |  4   | Configuration error              |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // ── 1. Environment file ───────────────────────────────────────────────
    // Must run before clap so `env = "..."` arguments see its values.
    let env_file = config::load_environment();

    // ── 2. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and must exit 0.
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };
    let verbose = cli.global.verbose > 0;
    let colored_errors =
        !cli.global.no_color && std::io::IsTerminal::is_terminal(&std::io::stderr());

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    // Held until exit so the file writer flushes.
    let _log_guard = match init_logging(&cli.global) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::from(1);
        }
    };

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        env_file = ?env_file,
        "CLI started"
    );

    // ── 4. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref())
        .with_cli_context(|| "Failed to load configuration")
    {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, verbose, colored_errors),
    };

    // ── 5. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 6. Dispatch + 7. Error handling ──────────────────────────────────
    match run(cli, config, output).await {
        Ok(()) => {
            info!("Iris completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, colored_errors),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
async fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Seed(cmd) => commands::seed::execute(cmd, cli.global, config, output).await,
        Commands::Validate(cmd) => commands::validate::execute(cmd, output).await,
        Commands::Purge => commands::purge::execute(config, output),
        Commands::List(cmd) => commands::list::execute(cmd, config, output),
        Commands::Show(cmd) => commands::show::execute(cmd, config, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool, colored: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives stdout redirection.
    eprint!("{}", err.render(verbose, colored));

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
