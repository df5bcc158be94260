//! Designer - a registry of previewable design components.
//!
//! Design modules declare variants of a component together with parameters,
//! data loaders, decorators and a prepare hook. The registry resolves them,
//! merges configuration across the global, design and variant layers, and
//! prepares variants on demand with a shared loader cache.
//!
//! # Modules
//!
//! - [`cache`] - Loader result cache shared by every variant
//! - [`catalog`] - YAML catalogs of text-template designs
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`design`] - Components, decorators and design modules
//! - [`error`] - Error types and result aliases
//! - [`prepare`] - Sub-contexts, decorator composition and preparation
//! - [`registry`] - Resolution, page paths and search
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use designer::design::{Component, DesignMeta, DesignModule, VariantEntry};
//! use designer::registry::Registry;
//!
//! let module = DesignModule::new("button.design")
//!     .with_meta(DesignMeta::titled("Button").with_component(Component::constant("<Button/>")))
//!     .with_export("Primary", VariantEntry::new())
//!     .with_export("Secondary", VariantEntry::new());
//!
//! let mut registry = Registry::new();
//! let report = registry.build(|| vec![module]);
//! assert!(report.is_clean());
//!
//! let paths: Vec<_> = registry.pages().into_iter().map(|page| page.path).collect();
//! assert_eq!(paths, ["Button/Primary", "Button/Secondary"]);
//! ```

pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod design;
pub mod error;
pub mod prepare;
pub mod registry;
pub mod ui;

pub use error::{DesignerError, LoaderError, Result};
