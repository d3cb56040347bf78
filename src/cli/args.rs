//! CLI argument definitions
//!
//! All Clap derive structs for `docsteward` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::pages::ChainFamily;

// ============================================================================
// Root CLI
// ============================================================================

/// Maintenance toolkit for Mintlify documentation content and navigation.
#[derive(Parser, Debug)]
#[command(name = "docsteward", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "DOCSTEWARD_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Restructure the navigation manifest.
    Nav(NavCommand),

    /// Regenerate per-network catalog pages.
    Pages(PagesCommand),

    /// Repair common MDX defects.
    Fix(FixCommand),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),
}

// ============================================================================
// Nav Command
// ============================================================================

/// Navigation manifest commands.
#[derive(Args, Debug)]
pub struct NavCommand {
    /// Nav subcommand.
    #[command(subcommand)]
    pub subcommand: NavSubcommand,
}

/// Nav subcommands.
#[derive(Subcommand, Debug)]
pub enum NavSubcommand {
    /// Convert flat network paths into nested overview/schema groups.
    Normalize(NavNormalizeArgs),

    /// Sort a fully-nested group alphabetically by label.
    Sort(NavSortArgs),
}

/// Arguments for `nav normalize`.
#[derive(Args, Debug)]
pub struct NavNormalizeArgs {
    /// Path to the navigation manifest.
    #[arg(short, long, default_value = "docs.json", env = "DOCSTEWARD_MANIFEST")]
    pub manifest: PathBuf,

    /// Catalog directory holding per-network subdirectories.
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Navigation target.
    #[command(flatten)]
    pub target: TargetArgs,

    /// Report what would change without writing the manifest.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `nav sort`.
#[derive(Args, Debug)]
pub struct NavSortArgs {
    /// Path to the navigation manifest.
    #[arg(short, long, default_value = "docs.json", env = "DOCSTEWARD_MANIFEST")]
    pub manifest: PathBuf,

    /// Navigation target.
    #[command(flatten)]
    pub target: TargetArgs,

    /// Report what would change without writing the manifest.
    #[arg(long)]
    pub dry_run: bool,
}

/// Addresses one group in the navigation tree.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Language tag.
    #[arg(long, default_value = "en")]
    pub language: String,

    /// Tab display name.
    #[arg(long)]
    pub tab: String,

    /// Dropdown display name.
    #[arg(long)]
    pub dropdown: String,

    /// Group display name.
    #[arg(long)]
    pub group: String,
}

// ============================================================================
// Pages Command
// ============================================================================

/// Catalog page commands.
#[derive(Args, Debug)]
pub struct PagesCommand {
    /// Pages subcommand.
    #[command(subcommand)]
    pub subcommand: PagesSubcommand,
}

/// Pages subcommands.
#[derive(Subcommand, Debug)]
pub enum PagesSubcommand {
    /// Generate nested overview/schema pages from flat catalog pages.
    Generate(PagesGenerateArgs),
}

/// Arguments for `pages generate`.
#[derive(Args, Debug)]
pub struct PagesGenerateArgs {
    /// Catalog directory holding the flat `<slug>.mdx` pages.
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Chain family, selects templates and SDK snippets.
    #[arg(short, long)]
    pub family: ChainFamily,

    /// Slugs to process; all flat pages in the catalog when empty.
    pub slugs: Vec<String>,

    /// Regenerate pages even when a nested overview already exists.
    #[arg(long)]
    pub force: bool,
}

// ============================================================================
// Fix Command
// ============================================================================

/// MDX repair commands.
#[derive(Args, Debug)]
pub struct FixCommand {
    /// Fix subcommand.
    #[command(subcommand)]
    pub subcommand: FixSubcommand,
}

/// Fix subcommands.
#[derive(Subcommand, Debug)]
pub enum FixSubcommand {
    /// Balance paired markers and clean up fence/JSX glitches.
    Tags(FixTagsArgs),
}

/// Arguments for `fix tags`.
#[derive(Args, Debug)]
pub struct FixTagsArgs {
    /// Files or directories to process (directories are searched for
    /// `**/*.mdx`).
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Report tag balance per file without writing anything.
    #[arg(long)]
    pub check: bool,
}

// ============================================================================
// Completions
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_normalize_parses() {
        let cli = Cli::try_parse_from([
            "docsteward",
            "nav",
            "normalize",
            "--catalog",
            "en/data/catalog/evm",
            "--tab",
            "Data",
            "--dropdown",
            "EVM Data",
            "--group",
            "Supported Networks",
        ]);
        assert!(cli.is_ok(), "Failed to parse: {cli:?}");
    }

    #[test]
    fn test_default_manifest_and_language() {
        let cli = Cli::try_parse_from([
            "docsteward",
            "nav",
            "normalize",
            "--catalog",
            "cat",
            "--tab",
            "T",
            "--dropdown",
            "D",
            "--group",
            "G",
        ])
        .unwrap();

        let Commands::Nav(cmd) = cli.command else {
            panic!("expected nav command");
        };
        let NavSubcommand::Normalize(args) = cmd.subcommand else {
            panic!("expected normalize");
        };
        assert_eq!(args.manifest, PathBuf::from("docs.json"));
        assert_eq!(args.target.language, "en");
        assert!(!args.dry_run);
    }

    #[test]
    fn test_nav_sort_requires_target() {
        let result = Cli::try_parse_from(["docsteward", "nav", "sort"]);
        assert!(result.is_err(), "expected error for missing target");
    }

    #[test]
    fn test_pages_generate_families_parse() {
        for family in ["evm", "substrate", "solana", "starknet", "tron", "fuel"] {
            let cli = Cli::try_parse_from([
                "docsteward",
                "pages",
                "generate",
                "--catalog",
                "cat",
                "--family",
                family,
            ]);
            assert!(cli.is_ok(), "Failed to parse family={family}");
        }
    }

    #[test]
    fn test_pages_generate_with_slugs() {
        let cli = Cli::try_parse_from([
            "docsteward",
            "pages",
            "generate",
            "--catalog",
            "cat",
            "--family",
            "evm",
            "arbitrum-one",
            "base-mainnet",
        ])
        .unwrap();

        let Commands::Pages(cmd) = cli.command else {
            panic!("expected pages command");
        };
        let PagesSubcommand::Generate(args) = cmd.subcommand;
        assert_eq!(args.slugs, vec!["arbitrum-one", "base-mainnet"]);
    }

    #[test]
    fn test_fix_tags_requires_paths() {
        let result = Cli::try_parse_from(["docsteward", "fix", "tags"]);
        assert!(result.is_err(), "expected error for missing paths");
    }

    #[test]
    fn test_fix_tags_check_flag() {
        let cli = Cli::try_parse_from(["docsteward", "fix", "tags", "--check", "docs/"]).unwrap();
        let Commands::Fix(cmd) = cli.command else {
            panic!("expected fix command");
        };
        let FixSubcommand::Tags(args) = cmd.subcommand;
        assert!(args.check);
    }

    #[test]
    fn test_completions_shells_parse() {
        for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
            let cli = Cli::try_parse_from(["docsteward", "completions", shell]);
            assert!(cli.is_ok(), "Failed to parse shell={shell}");
        }
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["docsteward", "-vvv", "fix", "tags", "a.mdx"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_help_output() {
        let result = Cli::try_parse_from(["docsteward", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
