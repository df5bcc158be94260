//! Deferred, on-demand preparation of resolved variants.
//!
//! This module provides:
//!
//! - [`SubContext`] - the configuration captured per variant at build time
//! - [`Loader`] and [`PrepareHook`] - asynchronous user callbacks
//! - [`compose`] - folds a decorator chain into one component
//! - [`Preparation`] - the per-variant pipeline and its state machine
//!
//! # Example
//!
//! ```
//! use designer::cache::{FailedLoaderPolicy, LoaderCache};
//! use designer::design::{Component, Parameters};
//! use designer::prepare::{loader, LoaderSet, Preparation, SubContext};
//! use serde_json::json;
//!
//! let cache = LoaderCache::new();
//! let mut loaders = LoaderSet::new();
//! loaders.insert("user".to_string(), loader(|_ctx| async { Ok(json!({"name": "Ada"})) }));
//!
//! let context = SubContext::new(cache.clone(), Parameters::new(), loaders, Vec::new());
//! let preparation = Preparation::new(
//!     "Profile",
//!     Component::constant("<Profile>".to_string()),
//!     context,
//!     None,
//!     FailedLoaderPolicy::Keep,
//! );
//!
//! let component = futures::executor::block_on(preparation.run()).unwrap();
//! assert_eq!(component.render(), "<Profile>");
//! assert_eq!(cache.value("user"), Some(json!({"name": "Ada"})));
//! ```

pub mod compose;
pub mod context;
pub mod pipeline;

pub use compose::compose;
pub use context::{loader, prepare_hook, Loader, LoaderSet, PrepareHook, SubContext};
pub use pipeline::{Preparation, PreparationState};
