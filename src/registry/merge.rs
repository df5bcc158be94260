//! Per-variant configuration merging.
//!
//! Three layers contribute to a variant: global, design and variant.
//! Parameters and loaders are a shallow right-biased union (variant wins);
//! decorators are concatenated variant first, so the variant's own
//! decorators end up closest to the raw component.

use indexmap::IndexMap;

use crate::design::{Decorator, LayerConfig, Parameters};
use crate::prepare::{LoaderSet, PrepareHook};

/// The effective configuration of one variant.
pub struct MergedConfig<V> {
    /// Merged parameters.
    pub parameters: Parameters,
    /// Merged loaders, in first-declared order.
    pub loaders: LoaderSet<V>,
    /// Decorator chain, innermost first.
    pub decorators: Vec<Decorator<V>>,
    /// Variant hook, else design hook.
    pub prepare: Option<PrepareHook<V>>,
}

/// Shallow right-biased union of mappings.
///
/// A key overridden by a later layer keeps the position of its first
/// occurrence.
pub fn right_biased<'a, T, I>(layers: I) -> IndexMap<String, T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a IndexMap<String, T>>,
{
    let mut merged = IndexMap::new();
    for layer in layers {
        for (key, value) in layer {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Merge the global, design and variant layers of one variant.
pub fn merge_layers<V>(
    global: &LayerConfig<V>,
    design: Option<&LayerConfig<V>>,
    variant: Option<&LayerConfig<V>>,
) -> MergedConfig<V> {
    let layers: Vec<&LayerConfig<V>> = std::iter::once(global)
        .chain(design)
        .chain(variant)
        .collect();

    let parameters = right_biased(layers.iter().map(|layer| &layer.parameters));
    let loaders = right_biased(layers.iter().map(|layer| &layer.loaders));

    let decorators = layers
        .iter()
        .rev()
        .flat_map(|layer| layer.decorators.iter().cloned())
        .collect();

    let prepare = variant
        .and_then(|layer| layer.prepare.clone())
        .or_else(|| design.and_then(|layer| layer.prepare.clone()));

    MergedConfig {
        parameters,
        loaders,
        decorators,
        prepare,
    }
}
