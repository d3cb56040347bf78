//! Navigation manifest command handlers.
//!
//! Both commands read the whole manifest, transform the addressed
//! group in memory, and rewrite the file wholesale. Any failure before
//! the write leaves the manifest untouched.

use tracing::info;

use crate::catalog::NetworkCatalog;
use crate::cli::args::{NavNormalizeArgs, NavSortArgs, TargetArgs};
use crate::error::Result;
use crate::nav::manifest::{GroupTarget, Manifest};
use crate::nav::{normalize_pages, sort_groups_by_label};

impl From<&TargetArgs> for GroupTarget {
    fn from(args: &TargetArgs) -> Self {
        Self {
            language: args.language.clone(),
            tab: args.tab.clone(),
            dropdown: args.dropdown.clone(),
            group: args.group.clone(),
        }
    }
}

/// Execute `nav normalize`.
///
/// Builds the network catalog, converts flat catalog paths in the
/// addressed group into nested overview/schema entries, and persists
/// the manifest. Unconvertible entries stay in place and are counted.
///
/// # Errors
///
/// Returns an error when the catalog directory is unreadable, the
/// manifest cannot be parsed, the target group does not exist, or the
/// final write fails.
pub fn normalize(args: &NavNormalizeArgs) -> Result<()> {
    let catalog = NetworkCatalog::scan(&args.catalog)?;
    info!(networks = catalog.len(), "catalog built");

    let mut manifest = Manifest::load(&args.manifest)?;
    let target = GroupTarget::from(&args.target);
    let group = manifest.group_mut(&target)?;

    let pages = group.pages.take().unwrap_or_default();
    let outcome = normalize_pages(&pages, &catalog);
    let total = outcome.pages.len();
    let noop = outcome.is_noop();
    group.pages = Some(outcome.pages);

    if args.dry_run {
        println!("dry run: manifest not written");
    } else if noop {
        info!("nothing to convert, manifest left untouched");
    } else {
        manifest.store(&args.manifest)?;
    }

    println!("Converted:        {}", outcome.converted);
    println!("Already nested:   {}", outcome.already_nested);
    println!("Left unconverted: {}", outcome.unconverted);
    println!("Total entries:    {total}");

    Ok(())
}

/// Execute `nav sort`.
///
/// Sorts the addressed group's nested entries alphabetically by label
/// (stable, case-insensitive). A group still holding flat entries
/// aborts before any write.
///
/// # Errors
///
/// Returns an error on manifest parse failure, a missing target, an
/// unsortable group, or a failed write.
pub fn sort(args: &NavSortArgs) -> Result<()> {
    let mut manifest = Manifest::load(&args.manifest)?;
    let target = GroupTarget::from(&args.target);
    let group = manifest.group_mut(&target)?;

    // A group without a pages key has nothing to sort; leave the key out.
    let Some(pages) = group.pages.take() else {
        println!("Sorted 0 entries in \"{}\"", target.group);
        return Ok(());
    };
    let sorted = sort_groups_by_label(&pages, &target.group)?;
    let changed = sorted != pages;
    let total = sorted.len();
    group.pages = Some(sorted);

    if args.dry_run {
        println!("dry run: manifest not written");
    } else if changed {
        manifest.store(&args.manifest)?;
    } else {
        info!("already sorted, manifest left untouched");
    }

    println!("Sorted {total} entries in \"{}\"", target.group);

    Ok(())
}
