//! Configuration schema definitions for Designer.
//!
//! This module contains the struct definitions that map to the
//! `.designer/config.yml` file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::design::Parameters;

/// Root configuration structure for `.designer/config.yml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerConfig {
    /// Global settings
    pub settings: Settings,

    /// Global default parameters, merged under every design and variant
    #[serde(skip_serializing_if = "Parameters::is_empty")]
    pub parameters: Parameters,

    /// Catalog files, relative to `.designer/`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub catalogs: Vec<PathBuf>,
}

/// Global settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,

    /// How cached loader failures are treated: keep, retry
    pub failed_loaders: FailedLoaderPolicy,
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

/// What a cached loader failure means on the next preparation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailedLoaderPolicy {
    /// The failure stays cached until the registry is reinitialized.
    #[default]
    Keep,
    /// The failure counts as a miss and the loader runs again.
    Retry,
}
