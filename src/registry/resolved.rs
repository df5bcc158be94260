//! Resolved designs and variants.
//!
//! Resolution turns one raw [`DesignModule`] into a [`ResolvedDesign`]: the
//! manifest normalizer extracts candidates, the merger computes each
//! candidate's effective configuration, and the result is bound to a
//! [`Preparation`] for deferred decoration and loading.

use tracing::debug;

use super::merge::merge_layers;
use crate::cache::{FailedLoaderPolicy, LoaderCache};
use crate::design::{
    candidates, resolve_component, Component, DesignModule, LayerConfig, Parameters,
};
use crate::error::Result;
use crate::prepare::{Preparation, PreparationState, SubContext};

/// A previewable variant.
///
/// Cheap to clone; clones share preparation state.
#[derive(Debug)]
pub struct ResolvedVariant<V> {
    name: String,
    title: String,
    preparation: Preparation<V>,
}

impl<V> ResolvedVariant<V> {
    /// Candidate name (export key, or `default`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Merged parameters.
    pub fn parameters(&self) -> &Parameters {
        self.preparation.context().parameters()
    }

    /// Context captured at build time.
    pub fn context(&self) -> &SubContext<V> {
        self.preparation.context()
    }

    /// The published component. Raw until a preparation has decorated it.
    pub fn component(&self) -> Component<V> {
        self.preparation.component()
    }

    /// Current preparation state.
    pub fn state(&self) -> PreparationState {
        self.preparation.state()
    }

    /// Whether any loader, decorator or prepare hook applies.
    pub fn requires_preparation(&self) -> bool {
        self.preparation.requires_preparation()
    }
}

impl<V> ResolvedVariant<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Run loaders, decorate and invoke the prepare hook.
    ///
    /// May be called again after it completes or fails.
    pub async fn prepare(&self) -> Result<Component<V>> {
        self.preparation.run().await
    }
}

impl<V> Clone for ResolvedVariant<V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            title: self.title.clone(),
            preparation: self.preparation.clone(),
        }
    }
}

/// One resolved design module.
#[derive(Debug)]
pub struct ResolvedDesign<V> {
    name: String,
    title: String,
    variants: Vec<ResolvedVariant<V>>,
}

impl<V> ResolvedDesign<V> {
    /// Module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Design title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Variants in export order.
    pub fn variants(&self) -> &[ResolvedVariant<V>] {
        &self.variants
    }

    /// Look a variant up by candidate name.
    pub fn variant(&self, name: &str) -> Option<&ResolvedVariant<V>> {
        self.variants.iter().find(|variant| variant.name == name)
    }

    /// Whether the design has more than one variant.
    pub fn has_variants(&self) -> bool {
        self.variants.len() > 1
    }
}

impl<V> Clone for ResolvedDesign<V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            title: self.title.clone(),
            variants: self.variants.clone(),
        }
    }
}

/// Resolve one module against the global layer.
///
/// # Errors
///
/// Returns [`DesignerError::Resolution`](crate::error::DesignerError::Resolution)
/// if any candidate has no component; the module then contributes nothing.
pub fn resolve_design<V>(
    module: &DesignModule<V>,
    global: &LayerConfig<V>,
    loaded: &LoaderCache,
    policy: FailedLoaderPolicy,
) -> Result<ResolvedDesign<V>>
where
    V: Clone + Send + Sync + 'static,
{
    let title = module.title().to_string();
    let design_layer = module.meta.as_ref().map(|meta| &meta.config);

    let mut variants = Vec::new();
    for candidate in candidates(module) {
        let component = resolve_component(module, &candidate)?;
        let merged = merge_layers(global, design_layer, candidate.config());

        let context = SubContext::new(
            loaded.clone(),
            merged.parameters,
            merged.loaders,
            merged.decorators,
        );
        let label = format!("{}/{}", title, candidate.name());
        debug!(variant = %label, "Resolved variant");

        variants.push(ResolvedVariant {
            name: candidate.name().to_string(),
            title: candidate.title().to_string(),
            preparation: Preparation::new(label, component, context, merged.prepare, policy),
        });
    }

    Ok(ResolvedDesign {
        name: module.name.clone(),
        title,
        variants,
    })
}
