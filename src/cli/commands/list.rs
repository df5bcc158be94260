//! List command implementation.
//!
//! The `designer list` command shows every page as a tree.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::error::{DesignerError, Result};
use crate::registry::Page;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::workspace::Workspace;

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, args: ListArgs) -> Self {
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
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(workspace) = Workspace::open(&self.project_root, self.config.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(2));
        };

        let pages = match &self.args.search {
            Some(query) => workspace.registry.search(query),
            None => workspace.registry.pages(),
        };

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&pages).map_err(|e| DesignerError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        for failure in &workspace.report.failures {
            ui.warning(&format!("Skipped '{}': {}", failure.module, failure.message));
        }

        if pages.is_empty() {
            ui.message("No pages found.");
            return Ok(CommandResult::success());
        }

        let theme = ui.theme().clone();
        for line in tree_lines(&pages) {
            let indent = "  ".repeat(line.depth + 1);
            let text = if line.leaf {
                theme.highlight.apply_to(line.label).to_string()
            } else {
                theme.folder.apply_to(line.label).to_string()
            };
            ui.message(&format!("{}{}", indent, text));
        }

        Ok(CommandResult::success())
    }
}

struct TreeLine<'a> {
    depth: usize,
    label: &'a str,
    leaf: bool,
}

/// Lay pages out as an indented tree, printing each folder once per run of
/// consecutive pages sharing it.
fn tree_lines(pages: &[Page]) -> Vec<TreeLine<'_>> {
    let mut lines = Vec::new();
    let mut open: Vec<&str> = Vec::new();

    for page in pages {
        let segments: Vec<&str> = page.segments().collect();
        let Some((leaf, folders)) = segments.split_last() else {
            continue;
        };

        let shared = open
            .iter()
            .zip(folders)
            .take_while(|(a, b)| a == b)
            .count();
        open.truncate(shared);
        for folder in &folders[shared..] {
            lines.push(TreeLine {
                depth: open.len(),
                label: *folder,
                leaf: false,
            });
            open.push(*folder);
        }

        lines.push(TreeLine {
            depth: open.len(),
            label: *leaf,
            leaf: true,
        });
    }

    lines
}
