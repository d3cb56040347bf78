//! On-disk navigation manifest (`docs.json`) model.
//!
//! Models only the node fields the maintenance passes touch; every node
//! carries a flattened pass-through map so theme config, icons, hrefs
//! and other unmodeled keys survive a load/store cycle byte-for-byte
//! (`serde_json` is built with `preserve_order`). The root keeps the
//! whole document as a raw map and splices the edited navigation tree
//! back into its original slot on store, so top-level keys written
//! before `navigation` ($schema, name, theme config) keep their
//! position.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ManifestError, Result, StewardError};

/// Root of the navigation manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    /// The navigation tree.
    pub navigation: Navigation,
    /// The full document in on-disk key order, `navigation` included.
    doc: Map<String, Value>,
}

/// Top-level navigation node holding per-language trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Navigation {
    /// Language subtrees, ordered as on disk.
    pub languages: Vec<Language>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// One language subtree, keyed by its language tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    /// Language tag, e.g. `"en"`.
    pub language: String,
    /// Ordered tabs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tabs: Option<Vec<Tab>>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A tab, keyed by display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    /// Display name.
    pub tab: String,
    /// Ordered dropdowns, when the tab has any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropdowns: Option<Vec<Dropdown>>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A dropdown, keyed by display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dropdown {
    /// Display name.
    pub dropdown: String,
    /// Ordered groups, when the dropdown has any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Group>>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A page group, keyed by display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Display name.
    pub group: String,
    /// Ordered page entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<PageEntry>>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// One entry in a group's page list.
///
/// The normalizer converts `Leaf` entries into `Nested` ones; anything
/// it does not recognize is carried as `Other` and never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageEntry {
    /// A nested overview/schema pair under one label.
    Nested(NestedGroup),
    /// A flat path reference to a single document.
    Leaf(String),
    /// Any other shape, passed through unchanged.
    Other(Value),
}

impl PageEntry {
    /// Display label, present only for nested entries.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Nested(nested) => Some(&nested.group),
            Self::Leaf(_) | Self::Other(_) => None,
        }
    }
}

/// A nested navigation entry grouping related documents under a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedGroup {
    /// Display label shown in the sidebar.
    pub group: String,
    /// Ordered document paths, overview first.
    pub pages: Vec<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl NestedGroup {
    /// Builds the canonical overview/schema pair for a slug.
    #[must_use]
    pub fn for_network(label: &str, base: &str, slug: &str) -> Self {
        Self {
            group: label.to_string(),
            pages: vec![
                format!("{base}/{slug}/overview"),
                format!("{base}/{slug}/schema"),
            ],
            rest: Map::new(),
        }
    }
}

/// Addresses one group inside the manifest tree.
#[derive(Debug, Clone)]
pub struct GroupTarget {
    /// Language tag.
    pub language: String,
    /// Tab display name.
    pub tab: String,
    /// Dropdown display name.
    pub dropdown: String,
    /// Group display name.
    pub group: String,
}

impl Manifest {
    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Fails on unreadable files or any shape the model cannot hold;
    /// nothing has been written at that point, so the on-disk manifest
    /// is left intact.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|message| {
            StewardError::Manifest(ManifestError::Parse {
                path: path.to_path_buf(),
                message,
            })
        })
    }

    fn from_json(content: &str) -> std::result::Result<Self, String> {
        let doc: Map<String, Value> = serde_json::from_str(content).map_err(|e| e.to_string())?;
        let nav = doc
            .get("navigation")
            .ok_or_else(|| "missing \"navigation\" key".to_string())?;
        let navigation: Navigation =
            serde_json::from_value(nav.clone()).map_err(|e| e.to_string())?;
        Ok(Self { navigation, doc })
    }

    /// Serializes the full tree back to disk.
    ///
    /// Fixed 2-space indentation, top-level key order as loaded,
    /// trailing newline: the output is stable under repeated load/store
    /// cycles.
    ///
    /// # Errors
    ///
    /// Fails when serialization or the final write fails.
    pub fn store(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    fn to_json(&self) -> Result<String> {
        let mut doc = self.doc.clone();
        // Replacing an existing key keeps its position in the map.
        doc.insert(
            "navigation".to_string(),
            serde_json::to_value(&self.navigation)?,
        );
        let mut out = serde_json::to_string_pretty(&doc)?;
        out.push('\n');
        Ok(out)
    }

    /// Resolves a [`GroupTarget`] to a mutable group node.
    ///
    /// # Errors
    ///
    /// Any missing step in the path is a fatal manifest error: silently
    /// writing the file back unchanged would mask an operator typo.
    pub fn group_mut(&mut self, target: &GroupTarget) -> Result<&mut Group> {
        let language = self
            .navigation
            .languages
            .iter_mut()
            .find(|l| l.language == target.language)
            .ok_or_else(|| not_found("language", &target.language))?;

        let tab = language
            .tabs
            .as_mut()
            .into_iter()
            .flatten()
            .find(|t| t.tab == target.tab)
            .ok_or_else(|| not_found("tab", &target.tab))?;

        let dropdown = tab
            .dropdowns
            .as_mut()
            .into_iter()
            .flatten()
            .find(|d| d.dropdown == target.dropdown)
            .ok_or_else(|| not_found("dropdown", &target.dropdown))?;

        dropdown
            .groups
            .as_mut()
            .into_iter()
            .flatten()
            .find(|g| g.group == target.group)
            .ok_or_else(|| not_found("group", &target.group))
    }
}

fn not_found(kind: &'static str, name: &str) -> StewardError {
    StewardError::Manifest(ManifestError::TargetNotFound {
        kind,
        name: name.to_string(),
    })
}
