//! Alphabetical re-sorting of nested navigation entries.
//!
//! Only meaningful once a group is fully normalized: flat entries have
//! no label to sort by, so their presence aborts the pass before any
//! write happens.

use crate::error::{ManifestError, Result, StewardError};
use crate::nav::manifest::PageEntry;

/// Sorts a fully-nested entry sequence by label, case-insensitively.
///
/// The sort is stable: entries with identical labels keep their prior
/// relative order.
///
/// # Errors
///
/// Returns a manifest error when any entry is not nested; `group_name`
/// only feeds the error message.
pub fn sort_groups_by_label(pages: &[PageEntry], group_name: &str) -> Result<Vec<PageEntry>> {
    let flat = pages
        .iter()
        .filter(|entry| entry.label().is_none())
        .count();
    if flat > 0 {
        return Err(StewardError::Manifest(ManifestError::UnsortableGroup {
            group: group_name.to_string(),
            flat,
        }));
    }

    let mut sorted = pages.to_vec();
    sorted.sort_by_key(|entry| entry.label().unwrap_or_default().to_lowercase());
    Ok(sorted)
}
