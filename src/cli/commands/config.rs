//! Config command implementation.
//!
//! The `designer config` command shows resolved configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{load_config, ConfigPaths};
use crate::error::{DesignerError, Result};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, args: ConfigArgs) -> Self {
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

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.project_root, self.config.as_deref()) {
            Ok(c) => c,
            Err(DesignerError::ConfigNotFound { .. }) => {
                ui.error("No configuration found. Create .designer/config.yml first.");
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        // Apply config default_output when no CLI flag was explicitly set
        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(config.settings.default_output.into());
        }

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&config).map_err(|e| DesignerError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        // Show config file path(s)
        let sources = match &self.config {
            Some(path) => vec![path.clone()],
            None => ConfigPaths::discover(&self.project_root)
                .all_existing()
                .into_iter()
                .cloned()
                .collect(),
        };
        for path in &sources {
            ui.message(&format!("# {}", path.display()));
        }
        ui.message("");

        let yaml = serde_yaml::to_string(&config).map_err(|e| DesignerError::Other(e.into()))?;
        ui.message(&yaml);

        Ok(CommandResult::success())
    }
}
