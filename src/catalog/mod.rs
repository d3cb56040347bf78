//! Network catalog: slug → display name lookup.
//!
//! Built once per run by scanning a catalog directory of per-network
//! subdirectories, then treated as read-only. The builder never writes
//! to any source document.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::Result;
use crate::mdx::frontmatter::extract_field;

/// Trailing qualifiers stripped from extracted display names, longest
/// first so the longer phrase wins.
const NAME_SUFFIXES: &[&str] = &["data indexing and API access", "data indexing"];

/// Read-only mapping from network slug to human-readable display name.
///
/// Iteration order is the sorted subdirectory order from the scan, so
/// summaries and logs are deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct NetworkCatalog {
    names: IndexMap<String, String>,
}

impl NetworkCatalog {
    /// Builds a catalog by scanning the immediate subdirectories of
    /// `catalog_dir`.
    ///
    /// A subdirectory contributes an entry when it contains an
    /// `overview.mdx` whose front matter yields a `description` (or,
    /// failing that, a `title`). Subdirectories without one are skipped
    /// silently — a slug absent from the catalog simply stays flat in
    /// the navigation.
    ///
    /// # Errors
    ///
    /// Returns an error only when the catalog directory itself cannot
    /// be read; individual unreadable pages are skipped.
    pub fn scan(catalog_dir: &Path) -> Result<Self> {
        let mut slugs: Vec<String> = Vec::new();
        for entry in fs::read_dir(catalog_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                slugs.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        slugs.sort();

        let mut names = IndexMap::new();
        for slug in slugs {
            let overview = catalog_dir.join(&slug).join("overview.mdx");
            let Ok(content) = fs::read_to_string(&overview) else {
                debug!(slug, "no readable overview page, excluded from catalog");
                continue;
            };

            match display_name(&content) {
                Some(name) => {
                    names.insert(slug, name);
                }
                None => {
                    debug!(slug, "no title/description front matter, excluded from catalog");
                }
            }
        }

        Ok(Self { names })
    }

    /// Looks up the display name for a slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&str> {
        self.names.get(slug).map(String::as_str)
    }

    /// Number of catalogued networks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the scan found no usable networks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates entries in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[cfg(test)]
    pub(crate) fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            names: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Extracts and normalizes the display name from an overview page.
fn display_name(content: &str) -> Option<String> {
    let raw = extract_field(content, "description").or_else(|| extract_field(content, "title"))?;
    Some(strip_suffixes(&raw))
}

/// Drops known trailing qualifiers from an extracted name.
fn strip_suffixes(name: &str) -> String {
    let mut out = name.trim();
    for suffix in NAME_SUFFIXES {
        if let Some(stripped) = out.strip_suffix(suffix) {
            out = stripped.trim_end();
        }
    }
    out.to_string()
}
