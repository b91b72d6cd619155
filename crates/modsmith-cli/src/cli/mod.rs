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
    name    = "modsmith",
    bin_name = "modsmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2692} Fabric mod project scaffolding",
    long_about = "Modsmith turns a declarative mod script into a ready-to-build \
                  Fabric mod project: Gradle build, fabric.mod.json, models, \
                  textures, translations and an entry point class.",
    after_help = "EXAMPLES:\n\
        \x20 modsmith compile my_mod.toml\n\
        \x20 modsmith compile my_mod.toml -o ../my-mod --dry-run\n\
        \x20 modsmith versions --format csv\n\
        \x20 modsmith completions bash > /usr/share/bash-completion/completions/modsmith",
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
    /// Generate a mod project from a mod script.
    #[command(
        visible_alias = "c",
        about = "Generate a mod project from a script",
        after_help = "EXAMPLES:\n\
            \x20 modsmith compile my_mod.toml\n\
            \x20 modsmith compile my_mod.toml --output ./out\n\
            \x20 modsmith compile my_mod.toml --dry-run"
    )]
    Compile(CompileArgs),

    /// List supported Minecraft versions.
    #[command(
        visible_alias = "ls",
        about = "List supported Minecraft versions",
        after_help = "EXAMPLES:\n\
            \x20 modsmith versions\n\
            \x20 modsmith versions --format json"
    )]
    Versions(VersionsArgs),

    /// Initialise a Modsmith configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 modsmith init\n\
            \x20 modsmith init --force\n\
            \x20 modsmith --config ./modsmith.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 modsmith completions bash > ~/.local/share/bash-completion/completions/modsmith\n\
            \x20 modsmith completions zsh  > ~/.zfunc/_modsmith\n\
            \x20 modsmith completions fish > ~/.config/fish/completions/modsmith.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Modsmith configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 modsmith config get defaults.output_dir\n\
            \x20 modsmith config set defaults.license Apache-2.0\n\
            \x20 modsmith config list"
    )]
    Config(ConfigCommands),
}

// ── compile ───────────────────────────────────────────────────────────────────

/// Arguments for `modsmith compile`.
#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Path to the mod script (TOML).
    #[arg(value_name = "SCRIPT", help = "Mod script to compile")]
    pub script: PathBuf,

    /// Override the output directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: defaults.output_dir from config)"
    )]
    pub output: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── versions ──────────────────────────────────────────────────────────────────

/// Arguments for `modsmith versions`.
#[derive(Debug, Args)]
pub struct VersionsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `versions` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One version per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `modsmith init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `modsmith completions`.
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

/// Subcommands for `modsmith config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.output_dir`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_compile_command() {
        let cli = Cli::parse_from(["modsmith", "compile", "mod.toml", "-o", "out", "--dry-run"]);
        match cli.command {
            Commands::Compile(args) => {
                assert_eq!(args.script, PathBuf::from("mod.toml"));
                assert_eq!(args.output, Some(PathBuf::from("out")));
                assert!(args.dry_run);
            }
            other => panic!("expected Compile, got {other:?}"),
        }
    }

    #[test]
    fn compile_alias() {
        let cli = Cli::parse_from(["modsmith", "c", "mod.toml"]);
        assert!(matches!(cli.command, Commands::Compile(_)));
    }

    #[test]
    fn versions_default_format_is_table() {
        let cli = Cli::parse_from(["modsmith", "versions"]);
        match cli.command {
            Commands::Versions(args) => assert_eq!(args.format, ListFormat::Table),
            other => panic!("expected Versions, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["modsmith", "versions", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["modsmith", "--quiet", "--verbose", "versions"]);
        assert!(result.is_err());
    }

    #[test]
    fn compile_requires_script() {
        assert!(Cli::try_parse_from(["modsmith", "compile"]).is_err());
    }
}
