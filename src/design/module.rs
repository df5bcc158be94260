//! The shape of a raw design module.
//!
//! A module has an optional default entry ([`DesignMeta`]) and zero or more
//! named exports, each of which is a variant candidate. Modules are read-only
//! to the registry.

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

use super::component::{Component, Decorator};
use crate::prepare::{Loader, LoaderSet, PrepareHook};

/// Parameter mapping. Insertion-ordered; keys are unique.
pub type Parameters = IndexMap<String, Value>;

/// Parameters, loaders, decorators and prepare hook declared at one layer.
pub struct LayerConfig<V> {
    /// Parameters declared at this layer.
    pub parameters: Parameters,
    /// Loaders declared at this layer, keyed by name.
    pub loaders: LoaderSet<V>,
    /// Decorators declared at this layer, innermost first.
    pub decorators: Vec<Decorator<V>>,
    /// Prepare hook declared at this layer.
    pub prepare: Option<PrepareHook<V>>,
}

impl<V> Default for LayerConfig<V> {
    fn default() -> Self {
        Self {
            parameters: Parameters::new(),
            loaders: LoaderSet::new(),
            decorators: Vec::new(),
            prepare: None,
        }
    }
}

impl<V> Clone for LayerConfig<V> {
    fn clone(&self) -> Self {
        Self {
            parameters: self.parameters.clone(),
            loaders: self.loaders.clone(),
            decorators: self.decorators.clone(),
            prepare: self.prepare.clone(),
        }
    }
}

impl<V> fmt::Debug for LayerConfig<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerConfig")
            .field("parameters", &self.parameters)
            .field("loaders", &self.loaders.keys().collect::<Vec<_>>())
            .field("decorators", &self.decorators.len())
            .field("prepare", &self.prepare.is_some())
            .finish()
    }
}

/// The default entry of a design module.
pub struct DesignMeta<V> {
    /// Design title.
    pub title: Option<String>,
    /// Fallback component for candidates that declare none.
    pub component: Option<Component<V>>,
    /// Design-level configuration.
    pub config: LayerConfig<V>,
}

impl<V> DesignMeta<V> {
    /// Create an empty default entry.
    pub fn new() -> Self {
        Self {
            title: None,
            component: None,
            config: LayerConfig::default(),
        }
    }

    /// Create a default entry with a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::new()
        }
    }

    /// Set the fallback component.
    pub fn with_component(mut self, component: Component<V>) -> Self {
        self.component = Some(component);
        self
    }

    /// Add one design-level parameter.
    pub fn with_parameter(mut self, key: impl Into<String>, value: Value) -> Self {
        self.config.parameters.insert(key.into(), value);
        self
    }

    /// Add one design-level loader.
    pub fn with_loader(mut self, name: impl Into<String>, loader: Loader<V>) -> Self {
        self.config.loaders.insert(name.into(), loader);
        self
    }

    /// Append a design-level decorator.
    pub fn with_decorator(mut self, decorator: Decorator<V>) -> Self {
        self.config.decorators.push(decorator);
        self
    }

    /// Set the design-level prepare hook.
    pub fn with_prepare(mut self, hook: PrepareHook<V>) -> Self {
        self.config.prepare = Some(hook);
        self
    }
}

impl<V> Default for DesignMeta<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for DesignMeta<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesignMeta")
            .field("title", &self.title)
            .field("component", &self.component.is_some())
            .field("config", &self.config)
            .finish()
    }
}

/// A named export carrying its own configuration.
pub struct VariantEntry<V> {
    /// Component for this variant.
    pub component: Option<Component<V>>,
    /// Display title; defaults to the export name.
    pub title: Option<String>,
    /// Variant-level configuration.
    pub config: LayerConfig<V>,
}

impl<V> VariantEntry<V> {
    /// Create an entry without a component; it falls back to the design's.
    pub fn new() -> Self {
        Self {
            component: None,
            title: None,
            config: LayerConfig::default(),
        }
    }

    /// Create an entry for a component.
    pub fn of(component: Component<V>) -> Self {
        Self {
            component: Some(component),
            ..Self::new()
        }
    }

    /// Set the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add one variant-level parameter.
    pub fn with_parameter(mut self, key: impl Into<String>, value: Value) -> Self {
        self.config.parameters.insert(key.into(), value);
        self
    }

    /// Add one variant-level loader.
    pub fn with_loader(mut self, name: impl Into<String>, loader: Loader<V>) -> Self {
        self.config.loaders.insert(name.into(), loader);
        self
    }

    /// Append a variant-level decorator.
    pub fn with_decorator(mut self, decorator: Decorator<V>) -> Self {
        self.config.decorators.push(decorator);
        self
    }

    /// Set the variant-level prepare hook.
    pub fn with_prepare(mut self, hook: PrepareHook<V>) -> Self {
        self.config.prepare = Some(hook);
        self
    }
}

impl<V> Default for VariantEntry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for VariantEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantEntry")
            .field("title", &self.title)
            .field("component", &self.component.is_some())
            .field("config", &self.config)
            .finish()
    }
}

/// A named export of a design module.
pub enum Export<V> {
    /// A bare component.
    Component(Component<V>),
    /// A component with its own title and configuration.
    Entry(VariantEntry<V>),
}

impl<V> From<Component<V>> for Export<V> {
    fn from(component: Component<V>) -> Self {
        Export::Component(component)
    }
}

impl<V> From<VariantEntry<V>> for Export<V> {
    fn from(entry: VariantEntry<V>) -> Self {
        Export::Entry(entry)
    }
}

impl<V> fmt::Debug for Export<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Export::Component(component) => f.debug_tuple("Component").field(component).finish(),
            Export::Entry(entry) => f.debug_tuple("Entry").field(entry).finish(),
        }
    }
}

/// A raw design module as supplied by a discovery function.
#[derive(Debug)]
pub struct DesignModule<V> {
    /// Identifies the module in errors; title fallback.
    pub name: String,
    /// The default entry, if any.
    pub meta: Option<DesignMeta<V>>,
    /// Named exports in declaration order.
    pub exports: IndexMap<String, Export<V>>,
}

impl<V> DesignModule<V> {
    /// Create an empty module.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: None,
            exports: IndexMap::new(),
        }
    }

    /// Set the default entry.
    pub fn with_meta(mut self, meta: DesignMeta<V>) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Add a named export.
    pub fn with_export(mut self, name: impl Into<String>, export: impl Into<Export<V>>) -> Self {
        self.exports.insert(name.into(), export.into());
        self
    }

    /// Design title: the default entry's title, else the module name.
    pub fn title(&self) -> &str {
        self.meta
            .as_ref()
            .and_then(|meta| meta.title.as_deref())
            .unwrap_or(&self.name)
    }
}
