//! Design modules and their normalization into variant candidates.
//!
//! A design module is the raw unit handed to the registry by a discovery
//! function. This module provides:
//!
//! - [`Component`] and [`Decorated`] - renderable units and decorator results
//! - [`DesignModule`], [`DesignMeta`], [`VariantEntry`], [`Export`] - module shape
//! - [`candidates`] and [`resolve_component`] - the manifest normalizer
//!
//! # Example
//!
//! ```
//! use designer::design::{candidates, Component, DesignMeta, DesignModule};
//!
//! let module = DesignModule::new("button.design")
//!     .with_meta(DesignMeta::titled("Button").with_component(Component::constant("<Button>")));
//!
//! let found = candidates(&module);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].name(), "default");
//! ```

pub mod component;
pub mod manifest;
pub mod module;

pub use component::{decorator, Component, Decorated, Decorator};
pub use manifest::{candidates, resolve_component, CandidateSource, VariantCandidate};
pub use module::{DesignMeta, DesignModule, Export, LayerConfig, Parameters, VariantEntry};
