//! Shared loader cache.

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::entry::{CacheEntry, LoadOutcome};
use crate::config::schema::FailedLoaderPolicy;
use crate::error::LoaderError;

/// Memoization store for loader results, keyed by loader name.
///
/// This is a handle: clones share the same storage, so every variant that
/// captured it at build time reads and writes the same slots. The lock is
/// only held for single reads and writes, never across an await.
#[derive(Clone, Default)]
pub struct LoaderCache {
    inner: Arc<RwLock<IndexMap<String, CacheEntry>>>,
}

impl LoaderCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, CacheEntry>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, CacheEntry>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the stored outcome for a loader.
    pub fn get(&self, name: &str) -> Option<LoadOutcome> {
        self.read().get(name).map(|entry| entry.outcome.clone())
    }

    /// Get the full entry for a loader.
    pub fn entry(&self, name: &str) -> Option<CacheEntry> {
        self.read().get(name).cloned()
    }

    /// Get the loaded value for a loader, if it succeeded.
    pub fn value(&self, name: &str) -> Option<Value> {
        self.read()
            .get(name)
            .and_then(|entry| entry.outcome.value().cloned())
    }

    /// Whether the loader should be skipped under the given policy.
    pub fn is_cached(&self, name: &str, policy: FailedLoaderPolicy) -> bool {
        match self.read().get(name) {
            None => false,
            Some(entry) if entry.outcome.is_failure() => policy == FailedLoaderPolicy::Keep,
            Some(_) => true,
        }
    }

    /// Store a successful result. Last writer wins.
    pub fn store_success(&self, name: &str, value: Value) {
        self.insert(CacheEntry::new(name, LoadOutcome::Loaded(value)));
    }

    /// Store a captured failure in place of a result. Last writer wins.
    pub fn store_failure(&self, error: LoaderError) {
        let name = error.loader.clone();
        self.insert(CacheEntry::new(name, LoadOutcome::Failed(error)));
    }

    fn insert(&self, entry: CacheEntry) {
        self.write().insert(entry.name.clone(), entry);
    }

    /// Snapshot of all entries, in first-stored order.
    pub fn entries(&self) -> Vec<CacheEntry> {
        self.read().values().cloned().collect()
    }

    /// Names of all stored loaders.
    pub fn names(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Remove all entries. Returns how many were removed.
    pub fn clear(&self) -> usize {
        let mut map = self.write();
        let count = map.len();
        map.clear();
        count
    }

    /// Whether both handles share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for LoaderCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderCache")
            .field("names", &self.names())
            .finish()
    }
}
