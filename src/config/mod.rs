//! Configuration loading, parsing, and validation for Designer.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use designer::config::{load_merged_config, validate, config_dir};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".designer");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("designs.yml"), "designs: []").unwrap();
//! fs::write(dir.join("config.yml"), "catalogs: [designs.yml]").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config, &config_dir(temp.path())).unwrap();
//! assert_eq!(config.catalogs.len(), 1);
//! ```
//!
//! # Configuration File Locations
//!
//! Designer discovers and merges configuration in this order:
//! 1. User global config (`~/.designer/config.yml`)
//! 2. Project config (`.designer/config.yml`)
//! 3. Local overrides (`.designer/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Schema re-exports
pub use schema::{DesignerConfig, FailedLoaderPolicy, OutputMode, Settings};

// Loader re-exports
pub use loader::{
    config_dir, find_project_root, load_config, load_config_file, load_config_value,
    load_from_paths, load_merged_config, parse_config, ConfigPaths, CONFIG_DIR,
};

// Merger re-exports
pub use merger::{deep_merge, merge_configs, merge_into};

// Validator re-exports
pub use validator::{validate, validate_config, ValidationError};
