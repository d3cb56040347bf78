//! Catalog page generation command handler.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::cli::args::PagesGenerateArgs;
use crate::error::{PageError, Result, StewardError};
use crate::mdx::tags::{repair_tag_balance, standard_pairs};
use crate::pages::extract::{extract_network_facts, extract_schema_sections};
use crate::pages::templates::{render_overview, render_schema};

/// Execute `pages generate`.
///
/// For each slug, parses the flat `<slug>.mdx` page and writes the
/// nested `<slug>/overview.mdx` + `<slug>/schema.mdx` pair. When the
/// catalog is swept, slugs with an unusable flat page are reported and
/// skipped and the run exits zero; a slug the operator named explicitly
/// must resolve, so its missing page or title is fatal.
///
/// # Errors
///
/// Returns an error when the catalog directory cannot be listed, or
/// when an explicitly requested slug has no flat page or no extractable
/// title.
pub fn generate(args: &PagesGenerateArgs) -> Result<()> {
    let explicit = !args.slugs.is_empty();
    let slugs = if explicit {
        args.slugs.clone()
    } else {
        discover_slugs(&args.catalog)?
    };

    let mut generated = 0;
    let mut skipped = 0;
    let mut errored = 0;

    for slug in &slugs {
        match process_slug(args, slug, explicit) {
            Ok(SlugStatus::Generated) => generated += 1,
            Ok(SlugStatus::Skipped(reason)) => {
                skipped += 1;
                info!(slug, reason, "skipped");
            }
            Err(e) if explicit => return Err(e),
            Err(e) => {
                errored += 1;
                eprintln!("ERROR: {slug}: {e}");
            }
        }
    }

    println!("Generated: {generated}");
    println!("Skipped:   {skipped}");
    println!("Errored:   {errored}");

    Ok(())
}

enum SlugStatus {
    Generated,
    Skipped(&'static str),
}

/// Lists flat `<slug>.mdx` pages in the catalog directory, sorted.
fn discover_slugs(catalog: &Path) -> Result<Vec<String>> {
    let mut slugs = Vec::new();
    for entry in fs::read_dir(catalog)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "mdx")
            && let Some(stem) = path.file_stem()
        {
            slugs.push(stem.to_string_lossy().into_owned());
        }
    }
    slugs.sort();
    Ok(slugs)
}

/// Generates the nested page pair for one slug.
fn process_slug(args: &PagesGenerateArgs, slug: &str, explicit: bool) -> Result<SlugStatus> {
    let flat_page = args.catalog.join(format!("{slug}.mdx"));
    let out_dir = args.catalog.join(slug);
    let overview_path = out_dir.join("overview.mdx");

    if overview_path.exists() && !args.force {
        return Ok(SlugStatus::Skipped("already generated"));
    }

    let content = fs::read_to_string(&flat_page).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StewardError::Page(PageError::SourceMissing {
                path: flat_page.clone(),
            })
        } else {
            StewardError::Io(e)
        }
    })?;
    let Some(facts) = extract_network_facts(&content, slug) else {
        if explicit {
            return Err(PageError::MissingField {
                path: flat_page,
                field: "title",
            }
            .into());
        }
        warn!(slug, "no extractable title, page left as-is");
        return Ok(SlugStatus::Skipped("no extractable title"));
    };
    let sections = extract_schema_sections(&content);

    let pairs = standard_pairs();
    let (overview, _) = repair_tag_balance(&render_overview(&facts, args.family), &pairs);
    let (schema, _) = repair_tag_balance(&render_schema(&facts, &sections, args.family), &pairs);

    fs::create_dir_all(&out_dir)?;
    fs::write(&overview_path, overview)?;
    fs::write(out_dir.join("schema.mdx"), schema)?;

    info!(slug, name = facts.name, "generated");
    Ok(SlugStatus::Generated)
}
