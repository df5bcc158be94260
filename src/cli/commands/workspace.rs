//! Loading a project into a ready-to-use registry.

use std::future::Future;
use std::path::{Path, PathBuf};

use crate::catalog::{discover, interpolate};
use crate::config::{config_dir, load_config, validate, DesignerConfig};
use crate::error::{DesignerError, Result};
use crate::registry::{BuildReport, Registry};
use crate::ui::{OutputMode, UserInterface};

/// A project's merged config and the registry built from its catalogs.
#[derive(Debug)]
pub struct Workspace {
    /// Merged configuration.
    pub config: DesignerConfig,
    /// Registry holding every resolved design.
    pub registry: Registry<String>,
    /// Outcome of the build.
    pub report: BuildReport,
}

impl Workspace {
    /// Load config, validate it and build the registry.
    ///
    /// Catalog paths resolve against `.designer/`, or against the directory
    /// of `config_override` when one is given.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if no project config exists, and any
    /// config or catalog parse/validation error.
    pub fn load(project_root: &Path, config_override: Option<&Path>) -> Result<Self> {
        let config = load_config(project_root, config_override)?;
        let base = catalog_base(project_root, config_override);
        validate(&config, &base)?;

        let modules = discover(&config, &base)?;

        let mut registry = Registry::new().with_failed_loaders(config.settings.failed_loaders);
        registry.add_parameters(config.parameters.clone());
        registry.add_decorator(interpolate());
        let report = registry.build(|| modules);

        Ok(Self {
            config,
            registry,
            report,
        })
    }

    /// Like [`Workspace::load`], but reports a missing config on `ui` and
    /// applies the configured output mode.
    ///
    /// Returns `Ok(None)` when there is no config; the caller should exit
    /// with code 2.
    pub fn open(
        project_root: &Path,
        config_override: Option<&Path>,
        ui: &mut dyn UserInterface,
    ) -> Result<Option<Self>> {
        let workspace = match Self::load(project_root, config_override) {
            Ok(workspace) => workspace,
            Err(DesignerError::ConfigNotFound { path }) => {
                ui.error(&format!(
                    "No configuration found at {}. Create .designer/config.yml first.",
                    path.display()
                ));
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        // Config default_output applies only when no CLI flag was set
        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(workspace.config.settings.default_output.into());
        }

        Ok(Some(workspace))
    }
}

/// Drive a future to completion on a single-threaded runtime.
///
/// Commands are synchronous; preparation is not.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

fn catalog_base(project_root: &Path, config_override: Option<&Path>) -> PathBuf {
    config_override
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config_dir(project_root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn project(config: &str, catalog: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".designer");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        fs::write(dir.join("designs.yml"), catalog).unwrap();
        temp
    }

    #[test]
    fn load_builds_registry_from_catalogs() {
        let temp = project(
            "catalogs: [designs.yml]\n",
            r#"
designs:
  - name: button
    title: Button
    render: "<Button/>"
    variants:
      Primary: {}
      Secondary: {}
"#,
        );

        let workspace = Workspace::load(temp.path(), None).unwrap();

        assert!(workspace.report.is_clean());
        assert_eq!(workspace.report.variants, 2);
        let paths: Vec<_> = workspace
            .registry
            .pages()
            .into_iter()
            .map(|p| p.path)
            .collect();
        assert_eq!(paths, vec!["Button/Primary", "Button/Secondary"]);
    }

    #[test]
    fn load_applies_config_parameters_globally() {
        let temp = project(
            "catalogs: [designs.yml]\nparameters:\n  brand: acme\n",
            "designs: []\n",
        );

        let workspace = Workspace::load(temp.path(), None).unwrap();

        assert_eq!(
            workspace.registry.parameters().get("brand"),
            Some(&serde_json::json!("acme"))
        );
        assert_eq!(workspace.registry.decorators().len(), 1);
    }

    #[test]
    fn load_rejects_missing_catalog() {
        let temp = project("catalogs: [missing.yml]\n", "designs: []\n");

        let err = Workspace::load(temp.path(), None).unwrap_err();

        assert!(matches!(err, DesignerError::ConfigValidationError { .. }));
    }

    #[test]
    fn open_reports_missing_config() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let workspace = Workspace::open(temp.path(), None, &mut ui).unwrap();

        assert!(workspace.is_none());
        assert!(ui.has_error("No configuration found"));
    }

    #[test]
    fn open_applies_default_output() {
        let temp = project(
            "catalogs: [designs.yml]\nsettings:\n  default_output: quiet\n",
            "designs: []\n",
        );
        let mut ui = MockUI::new();

        Workspace::open(temp.path(), None, &mut ui).unwrap();

        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
