//! Command-line entry point for the `renamer` binary.
use anyhow::Result;
use clap::Parser;

use renamer_cli::cli::Cli;
use renamer_cli::{commands, logging};

/// Names the log file; shared by the subscriber and the logger.
const COMMAND: &str = "rename";

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose, COMMAND);
    let log = logging::Logger::new(COMMAND);
    commands::rename::run(&args, &log)
}
