//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! various locations in the correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::DesignerConfig;
use crate::error::{DesignerError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration directory, in the project and in `$HOME`.
pub const CONFIG_DIR: &str = ".designer";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.designer/config.yml`)
/// 2. Project config (`.designer/config.yml`)
/// 3. Local overrides (`.designer/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User's global config: ~/.designer/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .designer/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .designer/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: Self::find_user_global(),
            project: existing(config_dir(project_root).join("config.yml")),
            project_local: existing(config_dir(project_root).join("config.local.yml")),
        }
    }

    fn find_user_global() -> Option<PathBuf> {
        existing(dirs::home_dir()?.join(CONFIG_DIR).join("config.yml"))
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Check if any project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// The `.designer` directory of a project.
pub fn config_dir(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR)
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.designer` directory (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DesignerError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DesignerError::Io(e)
        }
    })
}

/// Load a single config file and parse it into [`DesignerConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<DesignerConfig> {
    parse_config(&read(path)?, path)
}

/// Parse YAML content into [`DesignerConfig`].
///
/// An empty document yields the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<DesignerConfig> {
    if content.trim().is_empty() {
        return Ok(DesignerConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| DesignerError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as raw YAML Value (for merging).
///
/// An empty file loads as an empty mapping so it does not erase the layers
/// beneath it.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(&read(path)?).map_err(|e| DesignerError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if value.is_null() {
        Ok(serde_yaml::Value::Mapping(Default::default()))
    } else {
        Ok(value)
    }
}

/// Load and merge all config files for a project.
///
/// # Errors
///
/// Returns `ConfigNotFound` if no project config exists.
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<DesignerConfig> {
    let paths = ConfigPaths::discover(project_root);
    load_from_paths(project_root, &paths)
}

/// Merge the config files named by `paths`.
pub fn load_from_paths(project_root: &Path, paths: &ConfigPaths) -> Result<DesignerConfig> {
    let project_config = config_dir(project_root).join("config.yml");
    if !paths.has_project_config() {
        return Err(DesignerError::ConfigNotFound {
            path: project_config,
        });
    }

    let configs = paths
        .all_existing()
        .into_iter()
        .map(|path| load_config_value(path))
        .collect::<Result<Vec<_>>>()?;

    let merged = merge_configs(&configs);

    serde_yaml::from_value(merged).map_err(|e| DesignerError::ConfigParseError {
        path: project_config,
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<DesignerConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{FailedLoaderPolicy, OutputMode};
    use serde_json::json;
    use tempfile::TempDir;

    fn project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        temp
    }

    fn project_paths(root: &Path) -> ConfigPaths {
        ConfigPaths {
            user_global: None,
            ..ConfigPaths::discover(root)
        }
    }

    #[test]
    fn discover_finds_project_config() {
        let temp = project("catalogs: [designs.yml]");
        let paths = ConfigPaths::discover(temp.path());
        assert!(paths.has_project_config());
        assert!(paths.project_local.is_none());
    }

    #[test]
    fn discover_finds_local_overrides() {
        let temp = project("");
        fs::write(temp.path().join(CONFIG_DIR).join("config.local.yml"), "").unwrap();

        let paths = ConfigPaths::discover(temp.path());
        assert!(paths.project_local.is_some());
    }

    #[test]
    fn discover_returns_none_for_missing_configs() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::discover(temp.path());
        assert!(!paths.has_project_config());
    }

    #[test]
    fn all_existing_returns_project_before_local() {
        let temp = project("");
        fs::write(temp.path().join(CONFIG_DIR).join("config.local.yml"), "").unwrap();

        let paths = project_paths(temp.path());
        let all = paths.all_existing();
        assert_eq!(all.len(), 2);
        assert!(all[0].ends_with("config.yml"));
        assert!(all[1].ends_with("config.local.yml"));
    }

    #[test]
    fn find_project_root_finds_designer_dir() {
        let temp = TempDir::new().unwrap();
        let subdir = temp.path().join("src").join("components");
        fs::create_dir_all(&subdir).unwrap();
        fs::create_dir_all(temp.path().join(CONFIG_DIR)).unwrap();

        assert_eq!(find_project_root(&subdir), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_prefers_designer_over_git() {
        let temp = TempDir::new().unwrap();
        let subdir = temp.path().join("packages").join("ui");
        fs::create_dir_all(&subdir).unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();
        fs::create_dir_all(subdir.join(CONFIG_DIR)).unwrap();

        assert_eq!(find_project_root(&subdir), Some(subdir));
    }

    #[test]
    fn load_config_file_returns_not_found_error() {
        let result = load_config_file(Path::new("/nonexistent/config.yml"));
        assert!(matches!(result, Err(DesignerError::ConfigNotFound { .. })));
    }

    #[test]
    fn parse_config_returns_parse_error_for_invalid_yaml() {
        let result = parse_config("invalid: yaml: content: [", Path::new("test.yml"));
        assert!(matches!(result, Err(DesignerError::ConfigParseError { .. })));
    }

    #[test]
    fn parse_config_handles_empty_file() {
        let config = parse_config("", Path::new("config.yml")).unwrap();
        assert_eq!(config, DesignerConfig::default());
    }

    #[test]
    fn merged_config_applies_local_overrides() {
        let temp = project(
            r#"
settings:
  default_output: verbose
parameters:
  theme: light
  locale: en
catalogs: [designs.yml]
"#,
        );
        fs::write(
            temp.path().join(CONFIG_DIR).join("config.local.yml"),
            r#"
settings:
  failed_loaders: retry
parameters:
  theme: dark
"#,
        )
        .unwrap();

        let config = load_from_paths(temp.path(), &project_paths(temp.path())).unwrap();

        assert_eq!(config.settings.default_output, OutputMode::Verbose);
        assert_eq!(config.settings.failed_loaders, FailedLoaderPolicy::Retry);
        assert_eq!(config.parameters["theme"], json!("dark"));
        assert_eq!(config.parameters["locale"], json!("en"));
        assert_eq!(config.catalogs, vec![PathBuf::from("designs.yml")]);
    }

    #[test]
    fn empty_local_file_keeps_project_values() {
        let temp = project("parameters:\n  theme: light\n");
        fs::write(temp.path().join(CONFIG_DIR).join("config.local.yml"), "").unwrap();

        let config = load_from_paths(temp.path(), &project_paths(temp.path())).unwrap();
        assert_eq!(config.parameters["theme"], json!("light"));
    }

    #[test]
    fn merged_config_requires_project_config() {
        let temp = TempDir::new().unwrap();
        let result = load_merged_config(temp.path());
        assert!(matches!(result, Err(DesignerError::ConfigNotFound { .. })));
    }

    #[test]
    fn override_path_skips_merge() {
        let temp = project("parameters:\n  theme: light\n");
        let custom = temp.path().join("custom.yml");
        fs::write(&custom, "parameters:\n  theme: custom\n").unwrap();

        let config = load_config(temp.path(), Some(&custom)).unwrap();
        assert_eq!(config.parameters["theme"], json!("custom"));
    }
}
