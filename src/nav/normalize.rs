//! Path-to-group normalization for navigation entries.
//!
//! Rewrites flat catalog paths into nested overview/schema groups.
//! The pass is idempotent and fail-open: already-nested entries, paths
//! outside the catalog pattern, and slugs missing from the catalog all
//! copy through unchanged at their original position.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::catalog::NetworkCatalog;
use crate::nav::manifest::{NestedGroup, PageEntry};

/// Matches `.../catalog/<chain>/<slug>` with an optional `/overview`
/// suffix anchored at the end of the path.
static NETWORK_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/catalog/([^/]+)/([^/]+?)(?:/overview)?$").expect("valid regex"));

/// Result of one normalization pass over a group's entries.
#[derive(Debug, Clone)]
pub struct NormalizeOutcome {
    /// The new entry sequence, same length and order as the input.
    pub pages: Vec<PageEntry>,
    /// Leaf entries converted to nested groups.
    pub converted: usize,
    /// Entries that were already nested.
    pub already_nested: usize,
    /// Leaf entries left unconverted (pattern mismatch or unknown slug).
    pub unconverted: usize,
}

impl NormalizeOutcome {
    /// True when the pass changed nothing.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.converted == 0
    }
}

/// Normalizes one group's page entries against the catalog.
///
/// Entry order is preserved; only recognized flat paths with a
/// catalogued slug are replaced. Running the pass twice yields the
/// same sequence as running it once.
#[must_use]
pub fn normalize_pages(pages: &[PageEntry], catalog: &NetworkCatalog) -> NormalizeOutcome {
    let mut out = Vec::with_capacity(pages.len());
    let mut converted = 0;
    let mut already_nested = 0;
    let mut unconverted = 0;

    for entry in pages {
        match entry {
            PageEntry::Nested(_) => {
                already_nested += 1;
                out.push(entry.clone());
            }
            PageEntry::Leaf(path) => match convert_leaf(path, catalog) {
                Some(nested) => {
                    converted += 1;
                    out.push(PageEntry::Nested(nested));
                }
                None => {
                    unconverted += 1;
                    warn!(path, "left unconverted");
                    out.push(entry.clone());
                }
            },
            PageEntry::Other(_) => {
                unconverted += 1;
                out.push(entry.clone());
            }
        }
    }

    NormalizeOutcome {
        pages: out,
        converted,
        already_nested,
        unconverted,
    }
}

/// Converts a flat path into a nested group, if it matches the catalog
/// pattern and its slug has a display name.
fn convert_leaf(path: &str, catalog: &NetworkCatalog) -> Option<NestedGroup> {
    let caps = NETWORK_PATH.captures(path)?;
    let slug_match = caps.get(2)?;
    let slug = slug_match.as_str();
    let label = catalog.get(slug)?;

    // Everything before "/<slug>" is the canonical base, chain included.
    let base = &path[..slug_match.start() - 1];
    Some(NestedGroup::for_network(label, base, slug))
}
