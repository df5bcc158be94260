//! Designer CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use designer::cli::{Cli, CommandDispatcher};
use designer::config::find_project_root;
use designer::ui::{OutputMode, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// `--debug` forces DEBUG; otherwise `RUST_LOG` applies, defaulting to WARN.
/// Logs go to stderr so command output stays parseable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("designer=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("designer=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn output_mode(cli: &Cli) -> OutputMode {
    match (cli.quiet, cli.verbose) {
        (true, _) => OutputMode::Quiet,
        (false, true) => OutputMode::Verbose,
        (false, false) => OutputMode::Normal,
    }
}

/// `--project`, else the nearest ancestor with `.designer`, else the cwd.
fn project_root(cli: &Cli) -> PathBuf {
    if let Some(root) = &cli.project {
        return root.clone();
    }
    let cwd = std::env::current_dir().unwrap_or_default();
    find_project_root(&cwd).unwrap_or(cwd)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    tracing::debug!(?cli, "Designer starting");

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = TerminalUI::new(output_mode(&cli));
    let dispatcher =
        CommandDispatcher::new(project_root(&cli)).with_config_override(cli.config.clone());

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
