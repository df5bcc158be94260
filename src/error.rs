//! Error types for designer operations.
//!
//! This module defines [`DesignerError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Resolution failures are fatal to one design module, never to the whole build
//! - Loader failures are captured as [`LoaderError`] and stored in the loader cache
//! - Prepare hook failures are returned to whoever called `prepare()`
//! - Use `anyhow::Error` (via `DesignerError::Other`) for unexpected errors

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for designer operations.
#[derive(Debug, Error)]
pub enum DesignerError {
    /// A variant candidate could not be mapped to a renderable component.
    #[error("No component found for '{candidate}' in design module '{module}'")]
    Resolution { module: String, candidate: String },

    /// A loader failed. Only ever stored in the loader cache.
    #[error(transparent)]
    Loader(#[from] LoaderError),

    /// The prepare hook of a variant failed.
    #[error("Prepare hook for '{variant}' failed: {message}")]
    PrepareHook { variant: String, message: String },

    /// `prepare()` was called while a preparation of the same variant was running.
    #[error("Preparation of '{variant}' is already in progress")]
    PreparationInProgress { variant: String },

    /// No page matches the requested path.
    #[error("Unknown page: {path}")]
    UnknownPage { path: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration or catalog file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A loader failure, as stored in the loader cache.
///
/// Cloneable so that every reader of the cache slot observes the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Loader '{loader}' failed: {message}")]
pub struct LoaderError {
    /// Name of the loader that failed.
    pub loader: String,
    /// Rendered error chain of the failure.
    pub message: String,
}

impl LoaderError {
    /// Capture an `anyhow` failure raised by the named loader.
    pub fn capture(loader: &str, err: &anyhow::Error) -> Self {
        Self {
            loader: loader.to_string(),
            message: format!("{:#}", err),
        }
    }
}

/// Result type alias for designer operations.
pub type Result<T> = std::result::Result<T, DesignerError>;
