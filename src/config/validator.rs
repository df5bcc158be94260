//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - Catalog paths must not be empty
//! - Catalog files must exist under `.designer/`
//! - A catalog must not be listed twice

use crate::config::schema::DesignerConfig;
use crate::error::{DesignerError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Catalog path if error is catalog-specific
    pub catalog: Option<PathBuf>,
}

/// Validate a configuration and return all errors.
///
/// `config_dir` is the `.designer` directory catalog paths are relative to.
/// All errors are collected rather than stopping at the first one.
pub fn validate_config(config: &DesignerConfig, config_dir: &Path) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for catalog in &config.catalogs {
        if catalog.as_os_str().is_empty() {
            errors.push(ValidationError {
                rule: "empty-catalog-path".to_string(),
                message: "Catalog paths must not be empty".to_string(),
                catalog: None,
            });
            continue;
        }

        if !seen.insert(catalog) {
            errors.push(ValidationError {
                rule: "duplicate-catalog".to_string(),
                message: format!("Catalog '{}' is listed more than once", catalog.display()),
                catalog: Some(catalog.clone()),
            });
            continue;
        }

        if !config_dir.join(catalog).is_file() {
            errors.push(ValidationError {
                rule: "missing-catalog".to_string(),
                message: format!(
                    "Catalog '{}' does not exist in {}",
                    catalog.display(),
                    config_dir.display()
                ),
                catalog: Some(catalog.clone()),
            });
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &DesignerConfig, config_dir: &Path) -> Result<()> {
    let errors = validate_config(config, config_dir);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(DesignerError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
