//! Renderable units and decorator results.

use std::fmt;
use std::sync::Arc;

use crate::prepare::SubContext;

/// A renderable unit: a shared, zero-argument factory producing an element.
///
/// Cloning is cheap; clones share the same factory.
pub struct Component<V> {
    factory: Arc<dyn Fn() -> V + Send + Sync>,
}

impl<V> Component<V> {
    /// Wrap a factory function.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        Self {
            factory: Arc::new(factory),
        }
    }

    /// Produce an element.
    pub fn render(&self) -> V {
        (self.factory)()
    }

    /// Whether both handles share the same factory.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.factory, &other.factory)
    }
}

impl<V> Component<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// A factory that returns the same element on every call.
    pub fn constant(element: V) -> Self {
        Self::new(move || element.clone())
    }
}

impl<V> Clone for Component<V> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<V> fmt::Debug for Component<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("factory", &Arc::as_ptr(&self.factory).cast::<()>())
            .finish()
    }
}

/// What a decorator hands back.
///
/// Decorators may return an already-built element or a new factory. The
/// composer resolves the shape once, so downstream code only ever sees a
/// [`Component`].
#[derive(Debug, Clone)]
pub enum Decorated<V> {
    /// An already-instantiated element.
    Concrete(V),
    /// A component to use as-is.
    Factory(Component<V>),
}

impl<V> Decorated<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Normalize into a component. Concrete elements are wrapped into a
    /// factory that returns that same element on every call.
    pub fn into_component(self) -> Component<V> {
        match self {
            Decorated::Concrete(element) => Component::constant(element),
            Decorated::Factory(component) => component,
        }
    }
}

impl<V> From<Component<V>> for Decorated<V> {
    fn from(component: Component<V>) -> Self {
        Decorated::Factory(component)
    }
}

/// A wrapping transform applied to a variant's component during preparation.
pub type Decorator<V> = Arc<dyn Fn(Component<V>, &SubContext<V>) -> Decorated<V> + Send + Sync>;

/// Build a [`Decorator`] from a closure.
pub fn decorator<V, F>(f: F) -> Decorator<V>
where
    F: Fn(Component<V>, &SubContext<V>) -> Decorated<V> + Send + Sync + 'static,
{
    Arc::new(f)
}
