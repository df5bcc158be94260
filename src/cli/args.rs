//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Designer - Browse and preview design catalogs.
#[derive(Debug, Parser)]
#[command(name = "designer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .designer/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true, env = "DESIGNER_PROJECT")]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List pages (default if no command specified)
    List(ListArgs),

    /// Resolve every catalog and report modules that fail
    Check(CheckArgs),

    /// Prepare one page and print its rendered output
    Preview(PreviewArgs),

    /// Show resolved configuration
    Config(ConfigArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Only pages whose path contains this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `preview` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PreviewArgs {
    /// Page path, e.g. `Button/Primary`
    pub page: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_preview_with_globals() {
        let cli = Cli::parse_from(["designer", "--quiet", "preview", "Button/Primary", "--json"]);
        assert!(cli.quiet);
        match cli.command {
            Some(Commands::Preview(args)) => {
                assert_eq!(args.page, "Button/Primary");
                assert!(args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_list_search() {
        let cli = Cli::parse_from(["designer", "list", "-s", "butt"]);
        match cli.command {
            Some(Commands::List(args)) => assert_eq!(args.search.as_deref(), Some("butt")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn command_is_optional() {
        let cli = Cli::parse_from(["designer"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
