//! Reading catalogs and turning them into design modules.

use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::schema::{Catalog, DesignSpec, VariantSpec};
use crate::config::schema::DesignerConfig;
use crate::design::{Component, DesignMeta, DesignModule, VariantEntry};
use crate::error::{DesignerError, Result};
use crate::prepare::{loader, Loader};

/// Load one catalog file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DesignerError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DesignerError::Io(e)
        }
    })?;

    if content.trim().is_empty() {
        return Ok(Catalog::default());
    }

    serde_yaml::from_str(&content).map_err(|e| DesignerError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// A loader that reads a JSON or YAML fixture file.
///
/// The file is read when the loader runs, not when the catalog is loaded.
pub fn fixture_loader(path: PathBuf) -> Loader<String> {
    loader(move |_context| {
        let path = path.clone();
        async move {
            let content = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read fixture {}", path.display()))?;
            let value: Value = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse fixture {}", path.display()))?;
            Ok(value)
        }
    })
}

fn template(render: Option<String>) -> Option<Component<String>> {
    render.map(Component::constant)
}

fn variant_entry(name: &str, spec: VariantSpec, base_dir: &Path) -> VariantEntry<String> {
    let mut entry = VariantEntry::new();
    entry.component = template(spec.render);
    entry.title = spec.title;
    entry.config.parameters = spec.parameters;
    for (loader_name, file) in spec.loaders {
        entry = entry.with_loader(loader_name, fixture_loader(base_dir.join(file)));
    }
    debug!(variant = %name, "Loaded catalog variant");
    entry
}

/// Convert one catalog design into a design module.
///
/// Fixture paths are resolved against `base_dir`.
pub fn design_module(spec: DesignSpec, base_dir: &Path) -> DesignModule<String> {
    let mut meta = DesignMeta::new();
    meta.title = spec.title;
    meta.component = template(spec.render);
    meta.config.parameters = spec.parameters;
    for (loader_name, file) in spec.loaders {
        meta = meta.with_loader(loader_name, fixture_loader(base_dir.join(file)));
    }

    let mut module = DesignModule::new(spec.name).with_meta(meta);
    for (name, decl) in spec.variants {
        let entry = variant_entry(&name, decl.into_spec(), base_dir);
        module = module.with_export(name, entry);
    }
    module
}

/// Convert a whole catalog.
pub fn catalog_modules(catalog: Catalog, base_dir: &Path) -> Vec<DesignModule<String>> {
    catalog
        .designs
        .into_iter()
        .map(|spec| design_module(spec, base_dir))
        .collect()
}

/// Load every catalog listed in the config.
///
/// Catalog paths are relative to `config_dir`; fixture paths are relative
/// to the catalog that names them.
pub fn discover(config: &DesignerConfig, config_dir: &Path) -> Result<Vec<DesignModule<String>>> {
    let mut modules = Vec::new();
    for relative in &config.catalogs {
        let path = config_dir.join(relative);
        let base_dir = path.parent().unwrap_or(config_dir).to_path_buf();
        let catalog = load_catalog(&path)?;
        debug!(catalog = %path.display(), designs = catalog.designs.len(), "Loaded catalog");
        modules.extend(catalog_modules(catalog, &base_dir));
    }
    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::LoaderCache;
    use crate::design::{candidates, Parameters};
    use crate::prepare::{LoaderSet, SubContext};
    use serde_json::json;
    use tempfile::TempDir;

    fn empty_context() -> SubContext<String> {
        SubContext::new(
            LoaderCache::new(),
            Parameters::new(),
            LoaderSet::new(),
            Vec::new(),
        )
    }

    #[test]
    fn load_catalog_returns_not_found() {
        let result = load_catalog(Path::new("/nonexistent/designs.yml"));
        assert!(matches!(result, Err(DesignerError::ConfigNotFound { .. })));
    }

    #[test]
    fn load_catalog_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("designs.yml");
        fs::write(&path, "designs: [").unwrap();

        let result = load_catalog(&path);
        assert!(matches!(result, Err(DesignerError::ConfigParseError { .. })));
    }

    #[test]
    fn empty_catalog_file_has_no_designs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("designs.yml");
        fs::write(&path, "").unwrap();

        assert!(load_catalog(&path).unwrap().designs.is_empty());
    }

    #[test]
    fn design_without_variants_becomes_meta_only_module() {
        let catalog: Catalog = serde_yaml::from_str(
            "designs:\n  - name: card\n    title: Card\n    render: \"<Card/>\"\n",
        )
        .unwrap();
        let modules = catalog_modules(catalog, Path::new("."));

        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].title(), "Card");
        let found = candidates(&modules[0]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "default");
    }

    #[test]
    fn variants_become_exports_in_order() {
        let catalog: Catalog = serde_yaml::from_str(
            r#"
designs:
  - name: button
    render: "<Button/>"
    variants:
      Primary: "<Button primary/>"
      Ghost:
        title: Subtle/Ghost
"#,
        )
        .unwrap();
        let module = catalog_modules(catalog, Path::new(".")).remove(0);

        let names: Vec<_> = module.exports.keys().cloned().collect();
        assert_eq!(names, vec!["Primary", "Ghost"]);
        assert_eq!(module.title(), "button");
    }

    #[tokio::test]
    async fn fixture_loader_reads_json_and_yaml() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("user.json"), r#"{"name": "Ada"}"#).unwrap();
        fs::write(temp.path().join("theme.yml"), "mode: dark\n").unwrap();

        let user = fixture_loader(temp.path().join("user.json"));
        let theme = fixture_loader(temp.path().join("theme.yml"));

        assert_eq!(user(empty_context()).await.unwrap(), json!({"name": "Ada"}));
        assert_eq!(theme(empty_context()).await.unwrap(), json!({"mode": "dark"}));
    }

    #[tokio::test]
    async fn fixture_loader_fails_for_missing_file() {
        let temp = TempDir::new().unwrap();
        let missing = fixture_loader(temp.path().join("missing.json"));

        let err = missing(empty_context()).await.unwrap_err();
        assert!(format!("{:#}", err).contains("missing.json"));
    }

    #[test]
    fn discover_resolves_catalogs_under_config_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("catalogs")).unwrap();
        fs::write(
            temp.path().join("catalogs").join("forms.yml"),
            "designs:\n  - name: input\n    render: \"<Input/>\"\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("designs.yml"),
            "designs:\n  - name: button\n    render: \"<Button/>\"\n",
        )
        .unwrap();

        let config = DesignerConfig {
            catalogs: vec![PathBuf::from("designs.yml"), PathBuf::from("catalogs/forms.yml")],
            ..Default::default()
        };
        let modules = discover(&config, temp.path()).unwrap();
        let names: Vec<_> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["button", "input"]);
    }
}
