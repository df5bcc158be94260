//! Deferred preparation of one variant.
//!
//! A run executes, in order:
//!
//! 1. Every loader of the variant not already cached, one at a time. Failures
//!    are stored in the cache and never fail the run.
//! 2. The decorator chain, starting from the raw component. The result replaces
//!    the published component.
//! 3. The prepare hook, if any. Its failure fails the run.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, warn};

use super::compose::compose;
use super::context::{PrepareHook, SubContext};
use crate::cache::FailedLoaderPolicy;
use crate::design::Component;
use crate::error::{DesignerError, LoaderError, Result};

/// Where a variant is in its preparation lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreparationState {
    /// Never prepared, or the last run was abandoned.
    #[default]
    Unprepared,
    /// A run is in flight.
    Preparing,
    /// The last run completed.
    Ready,
    /// The last run failed with this message.
    Failed(String),
}

impl PreparationState {
    /// Whether the published component is the decorated one from a completed run.
    pub fn is_ready(&self) -> bool {
        matches!(self, PreparationState::Ready)
    }
}

impl fmt::Display for PreparationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreparationState::Unprepared => write!(f, "unprepared"),
            PreparationState::Preparing => write!(f, "preparing"),
            PreparationState::Ready => write!(f, "ready"),
            PreparationState::Failed(message) => write!(f, "failed: {}", message),
        }
    }
}

struct Slot<V> {
    state: PreparationState,
    component: Component<V>,
}

/// The preparation pipeline bound to one resolved variant.
///
/// Clones share state: preparing through one clone is visible through all.
pub struct Preparation<V> {
    label: String,
    raw: Component<V>,
    context: SubContext<V>,
    hook: Option<PrepareHook<V>>,
    policy: FailedLoaderPolicy,
    slot: Arc<Mutex<Slot<V>>>,
}

impl<V> Preparation<V> {
    /// Bind a pipeline. `label` names the variant in errors and logs.
    pub fn new(
        label: impl Into<String>,
        raw: Component<V>,
        context: SubContext<V>,
        hook: Option<PrepareHook<V>>,
        policy: FailedLoaderPolicy,
    ) -> Self {
        let slot = Slot {
            state: PreparationState::Unprepared,
            component: raw.clone(),
        };
        Self {
            label: label.into(),
            raw,
            context,
            hook,
            policy,
            slot: Arc::new(Mutex::new(slot)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot<V>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Context captured at build time.
    pub fn context(&self) -> &SubContext<V> {
        &self.context
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PreparationState {
        self.lock().state.clone()
    }

    /// The published component: raw until a run has decorated it.
    pub fn component(&self) -> Component<V> {
        self.lock().component.clone()
    }

    /// Whether any loader, decorator or prepare hook applies.
    pub fn requires_preparation(&self) -> bool {
        !self.context.loaders().is_empty()
            || !self.context.decorators().is_empty()
            || self.hook.is_some()
    }
}

impl<V> Preparation<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Run the pipeline and return the decorated component.
    ///
    /// # Errors
    ///
    /// - [`DesignerError::PreparationInProgress`] if a run is already in flight
    /// - [`DesignerError::PrepareHook`] if the prepare hook fails
    pub async fn run(&self) -> Result<Component<V>> {
        let guard = self.begin()?;

        self.run_loaders().await;

        let composed = compose(self.raw.clone(), &self.context);
        self.lock().component = composed.clone();

        if let Some(hook) = &self.hook {
            if let Err(err) = hook(self.context.clone()).await {
                let message = format!("{:#}", err);
                error!(variant = %self.label, error = %message, "Prepare hook failed");
                guard.finish(PreparationState::Failed(message.clone()));
                return Err(DesignerError::PrepareHook {
                    variant: self.label.clone(),
                    message,
                });
            }
        }

        guard.finish(PreparationState::Ready);
        debug!(variant = %self.label, "Variant prepared");
        Ok(composed)
    }

    fn begin(&self) -> Result<RunGuard<'_, V>> {
        let mut slot = self.lock();
        if slot.state == PreparationState::Preparing {
            return Err(DesignerError::PreparationInProgress {
                variant: self.label.clone(),
            });
        }
        slot.state = PreparationState::Preparing;
        Ok(RunGuard {
            slot: &self.slot,
            finished: false,
        })
    }

    async fn run_loaders(&self) {
        let cache = self.context.loaded();
        for (name, loader) in self.context.loaders() {
            if cache.is_cached(name, self.policy) {
                debug!(loader = %name, "Loader result cached");
                continue;
            }

            info!(loader = %name, variant = %self.label, "Running loader");
            match loader(self.context.clone()).await {
                Ok(value) => cache.store_success(name, value),
                Err(err) => {
                    let failure = LoaderError::capture(name, &err);
                    warn!(loader = %name, error = %failure.message, "Loader failed, caching error");
                    cache.store_failure(failure);
                }
            }
        }
    }
}

impl<V> Clone for Preparation<V> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            raw: self.raw.clone(),
            context: self.context.clone(),
            hook: self.hook.clone(),
            policy: self.policy,
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<V> fmt::Debug for Preparation<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preparation")
            .field("label", &self.label)
            .field("state", &self.lock().state)
            .field("context", &self.context)
            .field("hook", &self.hook.is_some())
            .field("policy", &self.policy)
            .finish()
    }
}

/// Marks a run in flight. A run dropped before finishing returns the
/// variant to `Unprepared`.
struct RunGuard<'a, V> {
    slot: &'a Mutex<Slot<V>>,
    finished: bool,
}

impl<V> RunGuard<'_, V> {
    fn finish(mut self, state: PreparationState) {
        self.set(state);
        self.finished = true;
    }

    fn set(&self, state: PreparationState) {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .state = state;
    }
}

impl<V> Drop for RunGuard<'_, V> {
    fn drop(&mut self) {
        if !self.finished {
            self.set(PreparationState::Unprepared);
        }
    }
}
