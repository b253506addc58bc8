//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "iris",
    bin_name = "iris",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate and seed Iris house blueprints",
    long_about = "Iris reads a JSON house blueprint (house, rooms, accessories), \
                  validates its structure and stores the resulting house.",
    after_help = "EXAMPLES:\n\
        \x20 iris validate house.json\n\
        \x20 iris seed house.json --purge\n\
        \x20 iris list --format json\n\
        \x20 iris show Lighthouse\n\
        \x20 iris completions bash > /usr/share/bash-completion/completions/iris",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a blueprint and store the house it describes.
    #[command(
        visible_alias = "s",
        about = "Seed the store from a blueprint file",
        after_help = "EXAMPLES:\n\
            \x20 iris seed house.json\n\
            \x20 iris seed house.json --purge\n\
            \x20 iris -v seed house.json --dry-run"
    )]
    Seed(SeedArgs),

    /// Validate a blueprint without storing anything.
    #[command(
        visible_alias = "check",
        about = "Validate a blueprint file",
        after_help = "EXAMPLES:\n\
            \x20 iris validate house.json\n\
            \x20 iris validate house.json --output-format json"
    )]
    Validate(ValidateArgs),

    /// Remove every stored house.
    #[command(about = "Purge the house store")]
    Purge,

    /// List stored houses.
    #[command(
        visible_alias = "ls",
        about = "List stored houses",
        after_help = "EXAMPLES:\n\
            \x20 iris list\n\
            \x20 iris list --format json"
    )]
    List(ListArgs),

    /// Print one stored house as a tree.
    #[command(
        about = "Show a stored house",
        after_help = "EXAMPLES:\n\
            \x20 iris show Lighthouse\n\
            \x20 iris show Lighthouse --output-format json"
    )]
    Show(ShowArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 iris completions bash > ~/.local/share/bash-completion/completions/iris\n\
            \x20 iris completions zsh  > ~/.zfunc/_iris\n\
            \x20 iris completions fish > ~/.config/fish/completions/iris.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Iris configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 iris config get store.backend\n\
            \x20 iris config list\n\
            \x20 iris config path"
    )]
    Config(ConfigCommands),
}

// ── seed ──────────────────────────────────────────────────────────────────────

/// Arguments for `iris seed`.
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Blueprint file to read.
    #[arg(value_name = "FILE", help = "JSON blueprint file")]
    pub source: PathBuf,

    /// Remove every stored house before seeding.
    #[arg(short = 'p', long = "purge", help = "Purge the store before seeding")]
    pub purge: bool,

    /// Validate and describe, but do not write.
    #[arg(long = "dry-run", help = "Validate without writing to the store")]
    pub dry_run: bool,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `iris validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Blueprint file to read.
    #[arg(value_name = "FILE", help = "JSON blueprint file")]
    pub source: PathBuf,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `iris list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array of stored records.
    Json,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `iris show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Name of a stored house.
    #[arg(value_name = "NAME", help = "House name, as given in the blueprint")]
    pub name: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `iris completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `iris config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `store.backend`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_seed_command() {
        let cli = Cli::parse_from(["iris", "seed", "house.json", "--purge"]);
        match cli.command {
            Commands::Seed(args) => {
                assert_eq!(args.source, PathBuf::from("house.json"));
                assert!(args.purge);
                assert!(!args.dry_run);
            }
            other => panic!("expected Seed command, got {other:?}"),
        }
    }

    #[test]
    fn check_alias_maps_to_validate() {
        let cli = Cli::parse_from(["iris", "check", "house.json"]);
        assert!(matches!(cli.command, Commands::Validate(_)));
    }

    #[test]
    fn parse_show_command() {
        let cli = Cli::parse_from(["iris", "show", "Lighthouse"]);
        match cli.command {
            Commands::Show(args) => assert_eq!(args.name, "Lighthouse"),
            other => panic!("expected Show command, got {other:?}"),
        }
    }

    #[test]
    fn seed_requires_a_file() {
        assert!(Cli::try_parse_from(["iris", "seed"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["iris", "list", "-vv", "--output-format", "json"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["iris", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
