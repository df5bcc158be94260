//! Check command implementation.
//!
//! The `designer check` command resolves and prepares every page, then
//! reports module, loader and hook failures.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::error::{DesignerError, LoaderError, Result};
use crate::registry::{BuildReport, Registry};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::{block_on, Workspace};

/// A page whose preparation failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFailure {
    /// Page path.
    pub page: String,
    /// Rendered error.
    pub message: String,
}

/// Everything `check` found.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    /// Resolution summary.
    pub build: BuildReport,
    /// Pages whose preparation failed.
    pub pages: Vec<PageFailure>,
    /// Loaders whose failure is cached.
    pub loaders: Vec<LoaderError>,
}

impl CheckReport {
    /// Whether nothing failed.
    pub fn is_clean(&self) -> bool {
        self.build.is_clean() && self.pages.is_empty() && self.loaders.is_empty()
    }
}

/// Prepare every page of `registry` and collect failures.
pub async fn check_registry(registry: &Registry<String>, build: BuildReport) -> CheckReport {
    let mut report = CheckReport {
        build,
        ..CheckReport::default()
    };

    for page in registry.pages() {
        let Some(variant) = registry.variant(page.design, page.variant) else {
            continue;
        };
        if let Err(err) = variant.prepare().await {
            report.pages.push(PageFailure {
                page: page.path.clone(),
                message: err.to_string(),
            });
        }
    }

    report.loaders = registry
        .loaded()
        .entries()
        .into_iter()
        .filter_map(|entry| entry.outcome.error().cloned())
        .collect();

    report
}

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: None,
            args,
        }
    }

    /// Use a single config file instead of the merged layers.
    pub fn with_config(mut self, config: Option<&Path>) -> Self {
        self.config = config.map(Path::to_path_buf);
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(workspace) = Workspace::open(&self.project_root, self.config.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(2));
        };

        let report = block_on(check_registry(
            &workspace.registry,
            workspace.report.clone(),
        ))?;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| DesignerError::Other(e.into()))?;
            ui.message(&json);
        } else {
            for failure in &report.build.failures {
                ui.error(&format!("{}: {}", failure.module, failure.message));
            }
            for failure in &report.pages {
                ui.error(&format!("{}: {}", failure.page, failure.message));
            }
            for failure in &report.loaders {
                ui.warning(&failure.to_string());
            }

            if report.is_clean() {
                ui.success(&format!(
                    "{} designs, {} variants ready",
                    report.build.designs, report.build.variants
                ));
            }
        }

        if report.is_clean() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
