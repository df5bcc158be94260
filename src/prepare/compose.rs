//! Decorator composition.

use super::context::SubContext;
use crate::design::Component;

/// Fold the context's decorator chain over a component.
///
/// The head of the chain wraps the raw component, the tail is the outermost
/// wrapper. Every decorator result is normalized to a [`Component`] before it
/// is handed to the next decorator.
pub fn compose<V>(component: Component<V>, context: &SubContext<V>) -> Component<V>
where
    V: Clone + Send + Sync + 'static,
{
    context
        .decorators()
        .iter()
        .fold(component, |current, decorator| {
            decorator(current, context).into_component()
        })
}
