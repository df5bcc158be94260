//! Design registry for Designer.
//!
//! This module turns discovered design modules into resolved, previewable
//! variants:
//!
//! - [`merge`] - per-variant configuration from global, design and variant layers
//! - [`resolved`] - resolved designs and variants bound to their preparation
//! - [`pages`] - the flat page list a selector shows
//! - [`Registry`] - owns global configuration, the loader cache and the snapshot
//!
//! # Lifecycle
//!
//! 1. Configure: [`Registry::add_decorator`], [`Registry::add_parameters`],
//!    [`Registry::add_loaders`]
//! 2. [`Registry::build`] with a discovery function (structure only)
//! 3. [`ResolvedVariant::prepare`] for the selected variant
//!
//! Rebuilding replaces the snapshot and keeps the loader cache;
//! [`Registry::initialize`] discards both.
//!
//! # Example
//!
//! ```
//! use designer::design::{Component, DesignMeta, DesignModule};
//! use designer::registry::Registry;
//!
//! let mut registry = Registry::new();
//! let report = registry.build(|| {
//!     let meta = DesignMeta::titled("Button").with_component(Component::constant("<Button>"));
//!     vec![DesignModule::new("button.design").with_meta(meta)]
//! });
//!
//! assert!(report.is_clean());
//! assert_eq!(registry.pages()[0].path, "Button");
//! ```

pub mod merge;
pub mod pages;
pub mod resolved;
pub mod resolver;

pub use merge::{merge_layers, MergedConfig};
pub use pages::{page_path, Page};
pub use resolved::{resolve_design, ResolvedDesign, ResolvedVariant};
pub use resolver::{BuildReport, ModuleFailure, Registry};
