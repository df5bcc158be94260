//! Loader result caching.
//!
//! This module provides the process-wide memoization store for named loader
//! results. The store is shared by every variant of a registry and survives
//! registry rebuilds; only [`Registry::initialize`](crate::registry::Registry::initialize)
//! discards it.
//!
//! # Hit Policy
//!
//! - Any stored success is a hit, whatever the value (`null`, `false`, `0` included)
//! - A stored failure is a hit under [`FailedLoaderPolicy::Keep`] and a miss under
//!   [`FailedLoaderPolicy::Retry`]

pub mod entry;
pub mod store;

pub use entry::{CacheEntry, LoadOutcome};
pub use store::LoaderCache;

pub use crate::config::schema::FailedLoaderPolicy;
