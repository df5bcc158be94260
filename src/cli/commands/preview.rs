//! Preview command implementation.
//!
//! The `designer preview <page>` command prepares one page and prints what
//! its component renders.

use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cache::{CacheEntry, LoadOutcome};
use crate::cli::args::PreviewArgs;
use crate::design::Parameters;
use crate::error::{DesignerError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::{block_on, Workspace};

/// A prepared page.
#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    /// Page path.
    pub page: String,
    /// Rendered output.
    pub output: String,
    /// Merged parameters of the variant.
    pub parameters: Parameters,
    /// Cached entry of each loader the variant uses.
    pub loaded: IndexMap<String, CacheEntry>,
}

/// The preview command implementation.
pub struct PreviewCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: PreviewArgs,
}

impl PreviewCommand {
    /// Create a new preview command.
    pub fn new(project_root: &Path, args: PreviewArgs) -> Self {
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
    pub fn args(&self) -> &PreviewArgs {
        &self.args
    }

    fn show(&self, preview: &Preview, ui: &mut dyn UserInterface) {
        let theme = ui.theme().clone();
        ui.show_header(&preview.page);
        ui.message(&preview.output);

        if !ui.output_mode().shows_details() {
            return;
        }

        ui.message("");
        ui.message(&format!("  {}", theme.key.apply_to("Parameters:")));
        for (key, value) in &preview.parameters {
            ui.message(&format!("    {}: {}", key, theme.dim.apply_to(value)));
        }
        if !preview.loaded.is_empty() {
            ui.message(&format!("  {}", theme.key.apply_to("Loaded:")));
            for (name, entry) in &preview.loaded {
                let shown = match &entry.outcome {
                    LoadOutcome::Loaded(value) => value.to_string(),
                    LoadOutcome::Failed(err) => err.message.clone(),
                };
                let age = format!("(cached {}s ago)", entry.age().num_seconds());
                ui.message(&format!(
                    "    {}: {} {}",
                    name,
                    theme.dim.apply_to(shown),
                    theme.dim.apply_to(age)
                ));
            }
        }
    }
}

impl Command for PreviewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(workspace) = Workspace::open(&self.project_root, self.config.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(2));
        };

        let (page, variant) = match workspace.registry.find_page(&self.args.page) {
            Ok(found) => found,
            Err(err @ DesignerError::UnknownPage { .. }) => {
                ui.error(&err.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(err) => return Err(err),
        };

        let component = match block_on(variant.prepare())? {
            Ok(component) => component,
            Err(err) => {
                ui.error(&err.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        let context = variant.context();
        let loaded = context
            .loaders()
            .keys()
            .filter_map(|name| Some((name.clone(), context.loaded().entry(name)?)))
            .collect();
        let preview = Preview {
            page: page.path,
            output: component.render(),
            parameters: context.parameters().clone(),
            loaded,
        };

        for (name, entry) in &preview.loaded {
            if let Some(err) = entry.outcome.error() {
                ui.warning(&format!("{}: {}", name, err.message));
            }
        }

        if self.args.json {
            let json = serde_json::to_string_pretty(&preview)
                .map_err(|e| DesignerError::Other(e.into()))?;
            ui.message(&json);
        } else {
            self.show(&preview, ui);
        }

        Ok(CommandResult::success())
    }
}
