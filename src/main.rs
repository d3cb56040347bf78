//! `docsteward` — Maintenance toolkit for Mintlify documentation

use clap::Parser;

use docsteward::cli::args::Cli;
use docsteward::cli::commands;
use docsteward::error::ExitCode;
use docsteward::observability::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(LogFormat::Human, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
