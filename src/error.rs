//! Error types for `docsteward`
//!
//! Every fatal failure maps to a Unix-style exit code. Batch commands
//! report per-item failures on stderr and keep going; only errors that
//! reach `main` terminate the run.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `docsteward` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Manifest error (unparseable JSON, unexpected tree shape, bad target)
    pub const MANIFEST_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Page generation error (missing source page, missing front matter)
    pub const PAGE_ERROR: i32 = 5;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `docsteward` operations.
///
/// Aggregates all domain-specific errors and provides a unified
/// interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum StewardError {
    /// Navigation manifest error
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Catalog page generation error
    #[error(transparent)]
    Page(#[from] PageError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StewardError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Manifest(_) | Self::Json(_) => ExitCode::MANIFEST_ERROR,
            Self::Page(_) => ExitCode::PAGE_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Manifest Errors
// ============================================================================

/// Navigation manifest errors.
///
/// All of these are fatal: the manifest is rewritten wholesale, so no
/// write happens once any of them is raised.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest could not be parsed into the expected tree shape
    #[error("cannot parse manifest {path}: {message}")]
    Parse {
        /// Path to the manifest file
        path: PathBuf,
        /// Error message from the parser
        message: String,
    },

    /// A requested navigation node does not exist
    #[error("{kind} \"{name}\" not found in manifest")]
    TargetNotFound {
        /// Node kind ("language", "tab", "dropdown", "group")
        kind: &'static str,
        /// The name that was looked up
        name: String,
    },

    /// A group queued for sorting still contains flat path entries
    #[error("group \"{group}\" contains {flat} non-nested entries; normalize before sorting")]
    UnsortableGroup {
        /// Display name of the offending group
        group: String,
        /// Number of entries without a sortable label
        flat: usize,
    },
}

// ============================================================================
// Page Generation Errors
// ============================================================================

/// Catalog page generation errors.
#[derive(Debug, Error)]
pub enum PageError {
    /// The flat source page for a slug does not exist
    #[error("source page not found: {path}")]
    SourceMissing {
        /// Expected path of the flat page
        path: PathBuf,
    },

    /// A required front matter field could not be extracted
    #[error("cannot extract '{field}' from {path}")]
    MissingField {
        /// Path to the page that was scanned
        path: PathBuf,
        /// Front matter field that was expected
        field: &'static str,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `docsteward` operations.
pub type Result<T> = std::result::Result<T, StewardError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::MANIFEST_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::PAGE_ERROR, 5);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
    }

    #[test]
    fn test_manifest_error_exit_code() {
        let err: StewardError = ManifestError::TargetNotFound {
            kind: "dropdown",
            name: "EVM Data".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::MANIFEST_ERROR);
    }

    #[test]
    fn test_page_error_exit_code() {
        let err: StewardError = PageError::SourceMissing {
            path: PathBuf::from("/x/y.mdx"),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::PAGE_ERROR);
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: StewardError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_unsortable_group_display() {
        let err = ManifestError::UnsortableGroup {
            group: "Supported Networks".to_string(),
            flat: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("Supported Networks"));
        assert!(msg.contains('3'));
    }
}
