//! Manifest normalization: design module to variant candidates.
//!
//! Every named export except `default` becomes a candidate. A module without
//! such exports yields one synthetic candidate named `default` that wraps the
//! module's fallback component.

use super::component::Component;
use super::module::{DesignModule, Export, LayerConfig, VariantEntry};
use crate::error::{DesignerError, Result};

/// Name of the synthetic candidate and of the ignored default export.
pub const DEFAULT_CANDIDATE: &str = "default";

/// Where a candidate's component comes from.
#[derive(Debug)]
pub enum CandidateSource<'a, V> {
    /// A named export of the module.
    Export(&'a Export<V>),
    /// The module's fallback component (synthetic `default` candidate).
    Fallback,
}

/// A variant candidate extracted from a design module.
#[derive(Debug)]
pub struct VariantCandidate<'a, V> {
    name: &'a str,
    source: CandidateSource<'a, V>,
}

impl<'a, V> VariantCandidate<'a, V> {
    /// Candidate name (export key, or `default`).
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Where the component comes from.
    pub fn source(&self) -> &CandidateSource<'a, V> {
        &self.source
    }

    /// Declared title, else the candidate name.
    pub fn title(&self) -> &'a str {
        self.entry()
            .and_then(|entry| entry.title.as_deref())
            .unwrap_or(self.name)
    }

    /// Variant-level configuration, if the candidate declares any.
    pub fn config(&self) -> Option<&'a LayerConfig<V>> {
        self.entry().map(|entry| &entry.config)
    }

    fn entry(&self) -> Option<&'a VariantEntry<V>> {
        match self.source {
            CandidateSource::Export(export) => match export {
                Export::Entry(entry) => Some(entry),
                Export::Component(_) => None,
            },
            CandidateSource::Fallback => None,
        }
    }
}

/// Extract the variant candidates of a module, in export order.
pub fn candidates<V>(module: &DesignModule<V>) -> Vec<VariantCandidate<'_, V>> {
    let mut found: Vec<_> = module
        .exports
        .iter()
        .filter(|(name, _)| name.as_str() != DEFAULT_CANDIDATE)
        .map(|(name, export)| VariantCandidate {
            name: name.as_str(),
            source: CandidateSource::Export(export),
        })
        .collect();

    if found.is_empty() {
        found.push(VariantCandidate {
            name: DEFAULT_CANDIDATE,
            source: CandidateSource::Fallback,
        });
    }

    found
}

/// Resolve a candidate to a component.
///
/// Checked in order: a bare component export, the entry's own component, the
/// module's fallback component.
///
/// # Errors
///
/// Returns [`DesignerError::Resolution`] naming the module when none applies.
pub fn resolve_component<V>(
    module: &DesignModule<V>,
    candidate: &VariantCandidate<'_, V>,
) -> Result<Component<V>> {
    let own = match candidate.source {
        CandidateSource::Export(export) => match export {
            Export::Component(component) => Some(component),
            Export::Entry(entry) => entry.component.as_ref(),
        },
        CandidateSource::Fallback => None,
    };

    own.or_else(|| module.meta.as_ref().and_then(|meta| meta.component.as_ref()))
        .cloned()
        .ok_or_else(|| DesignerError::Resolution {
            module: module.name.clone(),
            candidate: candidate.name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::module::DesignMeta;

    fn text(s: &'static str) -> Component<&'static str> {
        Component::constant(s)
    }

    #[test]
    fn named_exports_become_candidates() {
        let module = DesignModule::new("button")
            .with_export("Primary", text("primary"))
            .with_export("Secondary", VariantEntry::of(text("secondary")));

        let names: Vec<_> = candidates(&module).iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Primary", "Secondary"]);
    }

    #[test]
    fn default_export_is_not_a_candidate() {
        let module = DesignModule::new("button")
            .with_export("default", text("meta"))
            .with_export("Primary", text("primary"));

        let names: Vec<_> = candidates(&module).iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Primary"]);
    }

    #[test]
    fn module_with_only_default_yields_single_default_candidate() {
        let module = DesignModule::new("button")
            .with_meta(DesignMeta::titled("Button").with_component(text("button")));

        let found = candidates(&module);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "default");
        assert!(matches!(found[0].source(), CandidateSource::Fallback));

        let component = resolve_component(&module, &found[0]).unwrap();
        assert_eq!(component.render(), "button");
    }

    #[test]
    fn title_uses_declared_title_then_name() {
        let module = DesignModule::new("m")
            .with_export("plain", text("a"))
            .with_export("titled", VariantEntry::of(text("b")).with_title("Fancy/Title"));

        let found = candidates(&module);
        assert_eq!(found[0].title(), "plain");
        assert_eq!(found[1].title(), "Fancy/Title");
    }

    #[test]
    fn bare_component_resolves_directly() {
        let primary = text("primary");
        let module = DesignModule::new("m")
            .with_meta(DesignMeta::new().with_component(text("fallback")))
            .with_export("Primary", primary.clone());

        let found = candidates(&module);
        let resolved = resolve_component(&module, &found[0]).unwrap();
        assert!(resolved.ptr_eq(&primary));
    }

    #[test]
    fn entry_without_component_falls_back_to_module_component() {
        let module = DesignModule::new("m")
            .with_meta(DesignMeta::new().with_component(text("fallback")))
            .with_export("Loading", VariantEntry::new().with_title("Loading state"));

        let found = candidates(&module);
        let resolved = resolve_component(&module, &found[0]).unwrap();
        assert_eq!(resolved.render(), "fallback");
    }

    #[test]
    fn unresolvable_candidate_names_the_module() {
        let module: DesignModule<&'static str> =
            DesignModule::new("broken.design").with_export("Empty", VariantEntry::new());

        let found = candidates(&module);
        let err = resolve_component(&module, &found[0]).unwrap_err();
        match err {
            DesignerError::Resolution { module, candidate } => {
                assert_eq!(module, "broken.design");
                assert_eq!(candidate, "Empty");
            }
            other => panic!("expected resolution error, got {other:?}"),
        }
    }

    #[test]
    fn module_without_meta_or_exports_fails_resolution() {
        let module: DesignModule<&'static str> = DesignModule::new("empty.design");
        let found = candidates(&module);
        assert!(resolve_component(&module, &found[0]).is_err());
    }
}
