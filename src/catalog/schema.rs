//! Catalog file schema.
//!
//! ```yaml
//! designs:
//!   - name: button
//!     title: Button
//!     parameters:
//!       label: Save
//!     render: "<Button>${label}</Button>"
//!     variants:
//!       Primary:
//!         parameters:
//!           label: Continue
//!       Disabled: "<Button disabled>${label}</Button>"
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::design::Parameters;

/// Root of a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Designs in declaration order.
    pub designs: Vec<DesignSpec>,
}

/// One design declared in a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSpec {
    /// Unique name; identifies the design in errors.
    pub name: String,

    /// Display title; defaults to the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Design-level parameters.
    #[serde(default, skip_serializing_if = "Parameters::is_empty")]
    pub parameters: Parameters,

    /// Fixture loaders: loader name to a JSON or YAML file, relative to the catalog.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub loaders: IndexMap<String, PathBuf>,

    /// Fallback template for variants that declare none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<String>,

    /// Variants by name, in declaration order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub variants: IndexMap<String, VariantDecl>,
}

/// A variant declaration: a bare template or a full spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantDecl {
    /// Shorthand for a variant with only a template.
    Render(String),
    /// A variant with its own configuration.
    Spec(VariantSpec),
}

impl VariantDecl {
    /// Expand the shorthand form.
    pub fn into_spec(self) -> VariantSpec {
        match self {
            VariantDecl::Render(render) => VariantSpec {
                render: Some(render),
                ..VariantSpec::default()
            },
            VariantDecl::Spec(spec) => spec,
        }
    }
}

/// One variant of a design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantSpec {
    /// Display title; defaults to the variant name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Variant-level parameters.
    #[serde(skip_serializing_if = "Parameters::is_empty")]
    pub parameters: Parameters,

    /// Variant-level fixture loaders.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub loaders: IndexMap<String, PathBuf>,

    /// Template; defaults to the design's.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<String>,
}
