//! Flattening resolved designs into selectable pages.

use serde::Serialize;

use super::resolved::ResolvedDesign;

/// One selectable entry of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Slash-separated path, used for tree display and lookup.
    pub path: String,
    /// Index of the design in the registry.
    pub design: usize,
    /// Index of the variant within its design.
    pub variant: usize,
    /// Whether the design has more than one variant.
    pub has_variants: bool,
}

impl Page {
    /// Path segments, ignoring empty ones.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|part| !part.trim().is_empty())
    }

    /// Case-insensitive substring match on the path.
    pub fn matches(&self, query: &str) -> bool {
        self.path.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Compute the page path of a variant.
///
/// The variant title is split on `/`. For a design with several variants the
/// design title is inserted before the last segment; otherwise it replaces
/// the last segment. Empty segments are dropped.
pub fn page_path(design_title: &str, variant_title: &str, has_variants: bool) -> String {
    let mut segments: Vec<&str> = variant_title.split('/').collect();
    let last = segments.len() - 1;
    if has_variants {
        segments.insert(last, design_title);
    } else {
        segments[last] = design_title;
    }
    segments.retain(|part| !part.trim().is_empty());
    segments.join("/")
}

/// Flatten designs into pages, in design then variant order.
pub fn pages<V>(designs: &[ResolvedDesign<V>]) -> Vec<Page> {
    designs
        .iter()
        .enumerate()
        .flat_map(|(design_index, design)| {
            let has_variants = design.has_variants();
            design
                .variants()
                .iter()
                .enumerate()
                .map(move |(variant_index, variant)| Page {
                    path: page_path(design.title(), variant.title(), has_variants),
                    design: design_index,
                    variant: variant_index,
                    has_variants,
                })
        })
        .collect()
}
