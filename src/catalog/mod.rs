//! Static design catalogs.
//!
//! A catalog is a YAML file declaring designs whose components are text
//! templates. Catalogs are the discovery source of the `designer` binary:
//! they become [`DesignModule`](crate::design::DesignModule)s of `String`
//! and go through the same registry as code-defined designs.
//!
//! - [`schema`] - the catalog file format
//! - [`loader`] - reading catalogs and converting them to modules
//! - [`render`] - `${...}` templates and the interpolating decorator

pub mod loader;
pub mod render;
pub mod schema;

pub use loader::{catalog_modules, design_module, discover, fixture_loader, load_catalog};
pub use render::{interpolate, parse_template, render_template, Segment};
pub use schema::{Catalog, DesignSpec, VariantDecl, VariantSpec};
