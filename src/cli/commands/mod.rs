//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod fix;
pub mod nav;
pub mod pages;

use crate::cli::args::{Cli, Commands, FixSubcommand, NavSubcommand, PagesSubcommand};
use crate::error::StewardError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), StewardError> {
    match cli.command {
        Commands::Nav(cmd) => match cmd.subcommand {
            NavSubcommand::Normalize(args) => nav::normalize(&args),
            NavSubcommand::Sort(args) => nav::sort(&args),
        },
        Commands::Pages(cmd) => match cmd.subcommand {
            PagesSubcommand::Generate(args) => pages::generate(&args),
        },
        Commands::Fix(cmd) => match cmd.subcommand {
            FixSubcommand::Tags(args) => fix::tags(&args),
        },
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
    }
}
