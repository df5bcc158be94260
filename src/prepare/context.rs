//! The sub-context handed to loaders, decorators and prepare hooks.

use futures::future::{BoxFuture, FutureExt};
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::cache::LoaderCache;
use crate::design::{Decorator, Parameters};

/// A named asynchronous side-effect producer. Its result is cached by name.
pub type Loader<V> =
    Arc<dyn Fn(SubContext<V>) -> BoxFuture<'static, anyhow::Result<Value>> + Send + Sync>;

/// Loaders keyed by name, in declaration order.
pub type LoaderSet<V> = IndexMap<String, Loader<V>>;

/// The last step of a preparation. Failures reach the `prepare()` caller.
pub type PrepareHook<V> =
    Arc<dyn Fn(SubContext<V>) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

/// Build a [`Loader`] from an async closure.
pub fn loader<V, F, Fut>(f: F) -> Loader<V>
where
    F: Fn(SubContext<V>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<Value>> + Send + 'static,
{
    Arc::new(move |context| f(context).boxed())
}

/// Build a [`PrepareHook`] from an async closure.
pub fn prepare_hook<V, F, Fut>(f: F) -> PrepareHook<V>
where
    F: Fn(SubContext<V>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    Arc::new(move |context| f(context).boxed())
}

/// Configuration captured for one variant at build time.
///
/// Immutable except for the shared loader cache. Every preparation run of the
/// variant sees exactly this context, whatever happened to the registry's
/// global configuration since.
pub struct SubContext<V> {
    loaded: LoaderCache,
    parameters: Arc<Parameters>,
    loaders: Arc<LoaderSet<V>>,
    decorators: Arc<[Decorator<V>]>,
}

impl<V> SubContext<V> {
    /// Capture a context.
    pub fn new(
        loaded: LoaderCache,
        parameters: Parameters,
        loaders: LoaderSet<V>,
        decorators: Vec<Decorator<V>>,
    ) -> Self {
        Self {
            loaded,
            parameters: Arc::new(parameters),
            loaders: Arc::new(loaders),
            decorators: decorators.into(),
        }
    }

    /// The shared loader cache.
    pub fn loaded(&self) -> &LoaderCache {
        &self.loaded
    }

    /// Merged parameters.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// A single merged parameter.
    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    /// Merged loaders, in execution order.
    pub fn loaders(&self) -> &LoaderSet<V> {
        &self.loaders
    }

    /// Decorator chain, innermost first.
    pub fn decorators(&self) -> &[Decorator<V>] {
        &self.decorators
    }
}

impl<V> Clone for SubContext<V> {
    fn clone(&self) -> Self {
        Self {
            loaded: self.loaded.clone(),
            parameters: Arc::clone(&self.parameters),
            loaders: Arc::clone(&self.loaders),
            decorators: Arc::clone(&self.decorators),
        }
    }
}

impl<V> fmt::Debug for SubContext<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubContext")
            .field("loaded", &self.loaded)
            .field("parameters", &self.parameters)
            .field("loaders", &self.loaders.keys().collect::<Vec<_>>())
            .field("decorators", &self.decorators.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn loader_helper_boxes_async_closure() {
        let user: Loader<String> = loader(|_ctx| async { Ok(json!({"id": 1})) });
        let ctx = SubContext::new(
            LoaderCache::new(),
            Parameters::new(),
            LoaderSet::new(),
            Vec::new(),
        );
        assert_eq!(user(ctx).await.unwrap(), json!({"id": 1}));
    }

    #[tokio::test]
    async fn loader_reads_earlier_results_through_cache() {
        let cache = LoaderCache::new();
        cache.store_success("session", json!("token-1"));

        let profile: Loader<String> = loader(|ctx: SubContext<String>| async move {
            let token = ctx.loaded().value("session").unwrap_or(Value::Null);
            Ok(json!({ "token": token }))
        });
        let ctx = SubContext::new(cache, Parameters::new(), LoaderSet::new(), Vec::new());

        assert_eq!(profile(ctx).await.unwrap(), json!({"token": "token-1"}));
    }

    #[test]
    fn clones_share_captured_state() {
        let mut parameters = Parameters::new();
        parameters.insert("theme".into(), json!("dark"));
        let ctx: SubContext<String> =
            SubContext::new(LoaderCache::new(), parameters, LoaderSet::new(), Vec::new());
        let clone = ctx.clone();

        assert!(ctx.loaded().ptr_eq(clone.loaded()));
        assert_eq!(clone.parameter("theme"), Some(&json!("dark")));
        assert!(std::ptr::eq(ctx.parameters(), clone.parameters()));
    }
}
