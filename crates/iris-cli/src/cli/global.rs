//! Flags shared by every `iris` subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so they may appear
//! before or after the subcommand name.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity. Log events go to stderr:
    (none)  - warnings and errors
    -v      - info, and the built house tree after seeding
    -vv     - debug (field checks, store paths)
    -vvv    - trace"
    )]
    pub verbose: u8,

    /// Only errors are printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Plain output without ANSI colour. `NO_COLOR=1` has the same effect.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file read instead of the default config location.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read configuration from FILE"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed on stdout"
    )]
    pub output_format: OutputFormat,

    /// Also write JSON log lines to this file.
    #[arg(
        long = "log-file",
        global = true,
        value_name = "FILE",
        env = "IRIS_LOG_FILE",
        help = "Write JSON logs to FILE"
    )]
    pub log_file: Option<PathBuf>,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Coloured status lines and trees.
    Human,
    /// Same text, never coloured.
    Plain,
    /// One JSON document per command.
    Json,
}
