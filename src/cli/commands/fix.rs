//! MDX repair command handler.
//!
//! Batches over many files: per-file failures are reported and the run
//! continues, exiting zero. Each file is rewritten wholesale only when
//! a repair actually changed it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cli::args::FixTagsArgs;
use crate::error::Result;
use crate::mdx::tags::{
    escape_bare_lt_digit, normalize_text_fences, repair_tag_balance, standard_pairs, tag_balance,
};

/// Execute `fix tags`.
///
/// In repair mode, balances paired markers, normalizes stray
/// ```` ```text ```` fences, and escapes bare `<digit` sequences. With
/// `--check`, reports per-file tag balance without writing anything.
///
/// # Errors
///
/// Returns an error only when file discovery fails outright; unreadable
/// or unwritable files are reported per-file and skipped.
pub fn tags(args: &FixTagsArgs) -> Result<()> {
    let files = collect_mdx_files(&args.paths)?;
    info!(files = files.len(), "scanning");

    let mut changed = 0;
    let mut clean = 0;
    let mut errored = 0;
    let mut unbalanced = 0;

    for file in &files {
        let outcome = if args.check {
            check_file(file)
        } else {
            repair_file(file)
        };
        match outcome {
            Ok(FileStatus::Changed) => changed += 1,
            Ok(FileStatus::Unbalanced) => unbalanced += 1,
            Ok(FileStatus::Clean) => clean += 1,
            Err(e) => {
                errored += 1;
                eprintln!("ERROR: {}: {e}", file.display());
            }
        }
    }

    if args.check {
        println!("Balanced:   {clean}");
        println!("Unbalanced: {unbalanced}");
    } else {
        println!("Repaired:  {changed}");
        println!("Untouched: {clean}");
    }
    println!("Errored:   {errored}");

    Ok(())
}

enum FileStatus {
    Changed,
    Clean,
    Unbalanced,
}

/// Expands files and directories into a sorted list of MDX files.
fn collect_mdx_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let pattern = path.join("**/*.mdx");
            for entry in glob::glob(&pattern.to_string_lossy())
                .map_err(|e| std::io::Error::other(e.to_string()))?
            {
                match entry {
                    Ok(file) => files.push(file),
                    Err(e) => eprintln!("ERROR: {e}"),
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Repairs one file in place, when anything changed.
fn repair_file(path: &Path) -> std::io::Result<FileStatus> {
    let original = fs::read_to_string(path)?;

    let (balanced, stats) = repair_tag_balance(&original, &standard_pairs());
    let content = escape_bare_lt_digit(&normalize_text_fences(&balanced));

    if content == original {
        debug!(path = %path.display(), "clean");
        return Ok(FileStatus::Clean);
    }

    fs::write(path, content)?;
    info!(
        path = %path.display(),
        appended = stats.appended,
        dropped = stats.dropped,
        "repaired"
    );
    Ok(FileStatus::Changed)
}

/// Reports tag balance for one file without modifying it.
fn check_file(path: &Path) -> std::io::Result<FileStatus> {
    let content = fs::read_to_string(path)?;

    let mut balanced = true;
    for pair in standard_pairs() {
        let counts = tag_balance(&content, &pair);
        if !counts.is_balanced() {
            balanced = false;
            println!(
                "{}: {} {} opening, {} closing",
                path.display(),
                pair.label,
                counts.openers,
                counts.closers
            );
        }
    }

    Ok(if balanced {
        FileStatus::Clean
    } else {
        FileStatus::Unbalanced
    })
}
