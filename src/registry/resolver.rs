//! The design registry.
//!
//! Owns the global configuration layer, the shared loader cache and the
//! current snapshot of resolved designs.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::pages::{pages, Page};
use super::resolved::{resolve_design, ResolvedDesign, ResolvedVariant};
use crate::cache::{FailedLoaderPolicy, LoaderCache};
use crate::design::{Decorator, DesignModule, LayerConfig, Parameters};
use crate::error::{DesignerError, Result};
use crate::prepare::LoaderSet;

/// A design module that could not be resolved during a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleFailure {
    /// Name of the module.
    pub module: String,
    /// Why resolution failed.
    pub message: String,
}

/// Summary of a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Number of designs published.
    pub designs: usize,
    /// Number of variants published.
    pub variants: usize,
    /// Modules that contributed nothing.
    pub failures: Vec<ModuleFailure>,
}

impl BuildReport {
    /// Whether every module resolved.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Registry of previewable designs.
///
/// Independent instances do not share state; create one per test.
pub struct Registry<V> {
    global: LayerConfig<V>,
    loaded: LoaderCache,
    designs: Vec<ResolvedDesign<V>>,
    failed_loaders: FailedLoaderPolicy,
}

impl<V> Registry<V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            global: LayerConfig::default(),
            loaded: LoaderCache::new(),
            designs: Vec::new(),
            failed_loaders: FailedLoaderPolicy::default(),
        }
    }

    /// Set how cached loader failures are treated by future builds.
    pub fn with_failed_loaders(mut self, policy: FailedLoaderPolicy) -> Self {
        self.failed_loaders = policy;
        self
    }

    /// Reset global configuration, the loader cache and the design snapshot.
    ///
    /// Variants from earlier builds keep the cache handle they captured;
    /// new builds use a fresh one.
    pub fn initialize(&mut self) {
        self.global = LayerConfig::default();
        self.loaded = LoaderCache::new();
        self.designs.clear();
    }

    /// Append a global decorator. Global decorators wrap outermost.
    pub fn add_decorator(&mut self, decorator: Decorator<V>) {
        self.global.decorators.push(decorator);
    }

    /// Replace the global parameters.
    pub fn add_parameters(&mut self, parameters: Parameters) {
        self.global.parameters = parameters;
    }

    /// Replace the global loaders.
    pub fn add_loaders(&mut self, loaders: LoaderSet<V>) {
        self.global.loaders = loaders;
    }

    /// Global parameters.
    pub fn parameters(&self) -> &Parameters {
        &self.global.parameters
    }

    /// Global loaders.
    pub fn loaders(&self) -> &LoaderSet<V> {
        &self.global.loaders
    }

    /// Global decorators, in the order they were added.
    pub fn decorators(&self) -> &[Decorator<V>] {
        &self.global.decorators
    }

    /// The shared loader cache.
    pub fn loaded(&self) -> &LoaderCache {
        &self.loaded
    }

    /// Policy applied to cached loader failures.
    pub fn failed_loaders(&self) -> FailedLoaderPolicy {
        self.failed_loaders
    }

    /// The current snapshot of resolved designs.
    pub fn designs(&self) -> &[ResolvedDesign<V>] {
        &self.designs
    }

    /// Look a variant up by position.
    pub fn variant(&self, design: usize, variant: usize) -> Option<&ResolvedVariant<V>> {
        self.designs.get(design)?.variants().get(variant)
    }

    /// All selectable pages.
    pub fn pages(&self) -> Vec<Page> {
        pages(&self.designs)
    }

    /// Pages whose path contains `query`. Queries shorter than two
    /// characters match everything.
    pub fn search(&self, query: &str) -> Vec<Page> {
        let all = self.pages();
        if query.chars().count() < 2 {
            return all;
        }
        all.into_iter().filter(|page| page.matches(query)).collect()
    }

    /// Find a page by exact path.
    ///
    /// # Errors
    ///
    /// Returns [`DesignerError::UnknownPage`] if no page has this path.
    pub fn find_page(&self, path: &str) -> Result<(Page, &ResolvedVariant<V>)> {
        let unknown = || DesignerError::UnknownPage {
            path: path.to_string(),
        };
        let page = self
            .pages()
            .into_iter()
            .find(|page| page.path == path)
            .ok_or_else(unknown)?;
        let variant = self.variant(page.design, page.variant).ok_or_else(unknown)?;
        Ok((page, variant))
    }
}

impl<V> Registry<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Resolve the discovered modules and publish them, replacing the
    /// previous snapshot. The loader cache is left alone.
    ///
    /// Nothing user-supplied runs here beyond discovery: loaders, decorators
    /// and hooks wait for [`ResolvedVariant::prepare`]. A module that fails
    /// to resolve is skipped and reported.
    pub fn build<F, I>(&mut self, discover: F) -> BuildReport
    where
        F: FnOnce() -> I,
        I: IntoIterator<Item = DesignModule<V>>,
    {
        let mut report = BuildReport::default();
        let mut designs = Vec::new();

        for module in discover() {
            debug!(module = %module.name, "Resolving design module");
            match resolve_design(&module, &self.global, &self.loaded, self.failed_loaders) {
                Ok(design) => {
                    report.variants += design.variants().len();
                    designs.push(design);
                }
                Err(err) => {
                    warn!(module = %module.name, error = %err, "Skipping design module");
                    report.failures.push(ModuleFailure {
                        module: module.name.clone(),
                        message: err.to_string(),
                    });
                }
            }
        }

        report.designs = designs.len();
        self.designs = designs;
        info!(
            designs = report.designs,
            variants = report.variants,
            failures = report.failures.len(),
            "Registry built"
        );
        report
    }
}

impl<V> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for Registry<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("global", &self.global)
            .field("loaded", &self.loaded)
            .field("designs", &self.designs.len())
            .field("failed_loaders", &self.failed_loaders)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{decorator, Component, Decorated, DesignMeta, VariantEntry};
    use crate::prepare::{loader, SubContext};
    use serde_json::json;

    fn text(s: &str) -> Component<String> {
        Component::constant(s.to_string())
    }

    fn button() -> DesignModule<String> {
        DesignModule::new("button.design")
            .with_meta(DesignMeta::titled("Button"))
            .with_export("Primary", text("<Button primary>"))
            .with_export("Secondary", text("<Button secondary>"))
    }

    fn card() -> DesignModule<String> {
        DesignModule::new("card.design")
            .with_meta(DesignMeta::titled("Card").with_component(text("<Card>")))
    }

    #[test]
    fn new_registry_is_empty() {
        let registry: Registry<String> = Registry::new();
        assert!(registry.designs().is_empty());
        assert!(registry.loaded().is_empty());
        assert!(registry.parameters().is_empty());
        assert_eq!(registry.failed_loaders(), FailedLoaderPolicy::Keep);
    }

    #[test]
    fn build_publishes_designs() {
        let mut registry = Registry::new();
        let report = registry.build(|| vec![button(), card()]);

        assert!(report.is_clean());
        assert_eq!(report.designs, 2);
        assert_eq!(report.variants, 3);
        assert_eq!(registry.designs()[0].title(), "Button");
    }

    #[test]
    fn rebuild_replaces_designs_but_keeps_cache() {
        let mut registry = Registry::new();
        registry.build(|| vec![button(), card()]);
        registry.loaded().store_success("user", json!(1));

        registry.build(|| vec![card()]);
        assert_eq!(registry.designs().len(), 1);
        assert_eq!(registry.loaded().value("user"), Some(json!(1)));
    }

    #[test]
    fn initialize_resets_everything() {
        let mut registry = Registry::new();
        registry.add_parameters([("a".to_string(), json!(1))].into_iter().collect());
        registry.add_decorator(decorator(|c: Component<String>, _: &SubContext<String>| {
            Decorated::Factory(c)
        }));
        registry.build(|| vec![card()]);
        registry.loaded().store_success("user", json!(1));

        let previous = registry.loaded().clone();
        registry.initialize();

        assert!(registry.designs().is_empty());
        assert!(registry.parameters().is_empty());
        assert!(registry.decorators().is_empty());
        assert!(registry.loaded().is_empty());
        assert!(!registry.loaded().ptr_eq(&previous));
    }

    #[test]
    fn add_parameters_and_loaders_replace_wholesale() {
        let mut registry: Registry<String> = Registry::new();
        registry.add_parameters([("a".to_string(), json!(1))].into_iter().collect());
        registry.add_parameters([("b".to_string(), json!(2))].into_iter().collect());
        assert_eq!(registry.parameters().len(), 1);
        assert!(registry.parameters().contains_key("b"));

        let mut first = LoaderSet::new();
        first.insert("user".to_string(), loader(|_ctx| async { Ok(json!(1)) }));
        let mut second = LoaderSet::new();
        second.insert("theme".to_string(), loader(|_ctx| async { Ok(json!(2)) }));
        registry.add_loaders(first);
        registry.add_loaders(second);
        let names: Vec<_> = registry.loaders().keys().cloned().collect();
        assert_eq!(names, vec!["theme"]);
    }

    #[test]
    fn add_decorator_appends() {
        let mut registry: Registry<String> = Registry::new();
        let identity = decorator(|c: Component<String>, _: &SubContext<String>| {
            Decorated::Factory(c)
        });
        registry.add_decorator(identity.clone());
        registry.add_decorator(identity);
        assert_eq!(registry.decorators().len(), 2);
    }

    #[test]
    fn failing_module_is_isolated() {
        let broken = DesignModule::new("broken.design").with_export("Empty", VariantEntry::new());

        let mut registry = Registry::new();
        let report = registry.build(|| vec![button(), broken, card()]);

        assert!(!report.is_clean());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].module, "broken.design");
        assert_eq!(report.designs, 2);
        assert_eq!(registry.designs().len(), 2);
    }

    #[test]
    fn pages_follow_title_rules() {
        let mut registry = Registry::new();
        registry.build(|| vec![button(), card()]);

        let paths: Vec<_> = registry.pages().into_iter().map(|p| p.path).collect();
        assert_eq!(paths, vec!["Button/Primary", "Button/Secondary", "Card"]);
    }

    #[test]
    fn find_page_returns_variant() {
        let mut registry = Registry::new();
        registry.build(|| vec![button(), card()]);

        let (page, variant) = registry.find_page("Button/Secondary").unwrap();
        assert_eq!(page.design, 0);
        assert_eq!(variant.name(), "Secondary");

        let err = registry.find_page("Nope").unwrap_err();
        assert!(matches!(err, DesignerError::UnknownPage { .. }));
    }

    #[test]
    fn search_filters_by_path() {
        let mut registry = Registry::new();
        registry.build(|| vec![button(), card()]);

        assert_eq!(registry.search("prim").len(), 1);
        assert_eq!(registry.search("c").len(), 3);
        assert!(registry.search("zzz").is_empty());
    }

    #[test]
    fn variant_lookup_out_of_range() {
        let mut registry = Registry::new();
        registry.build(|| vec![card()]);
        assert!(registry.variant(0, 0).is_some());
        assert!(registry.variant(0, 1).is_none());
        assert!(registry.variant(3, 0).is_none());
    }
}
