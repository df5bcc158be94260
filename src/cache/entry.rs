//! Cache entry types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::LoaderError;

/// What a loader produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "status", content = "result")]
pub enum LoadOutcome {
    /// The loader resolved with a value.
    Loaded(Value),
    /// The loader failed; the error stands in for the result.
    Failed(LoaderError),
}

impl LoadOutcome {
    /// Whether this outcome is a captured failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, LoadOutcome::Failed(_))
    }

    /// The loaded value, if the loader succeeded.
    pub fn value(&self) -> Option<&Value> {
        match self {
            LoadOutcome::Loaded(value) => Some(value),
            LoadOutcome::Failed(_) => None,
        }
    }

    /// The captured error, if the loader failed.
    pub fn error(&self) -> Option<&LoaderError> {
        match self {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::Failed(err) => Some(err),
        }
    }
}

/// A cached loader result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheEntry {
    /// Loader name (the cache key).
    pub name: String,
    /// Stored outcome.
    pub outcome: LoadOutcome,
    /// When the outcome was stored.
    pub cached_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Create an entry stamped with the current time.
    pub fn new(name: impl Into<String>, outcome: LoadOutcome) -> Self {
        Self {
            name: name.into(),
            outcome,
            cached_at: Utc::now(),
        }
    }

    /// Get the age of this entry.
    pub fn age(&self) -> chrono::Duration {
        Utc::now().signed_duration_since(self.cached_at)
    }
}
