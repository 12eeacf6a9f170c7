//! The rename command: validate, walk, report.
use std::io::{self, Write};

use anyhow::{Context as _, Result};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::RenameError;
use crate::fs::{Filesystem, SystemFs};
use crate::logging::{Log, Logger};
use crate::rename::{Pipeline, Walker};
use crate::report::{Reporter, Stats};

/// Run the rename command against the real filesystem, reporting to stdout.
///
/// Rows that fail are reported and counted but do not make the command fail.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a directory cannot be
/// listed, or the report cannot be written.
pub fn run(cli: &Cli, log: &Logger) -> Result<()> {
    let config = Config::from_cli(cli).map_err(RenameError::from)?;

    log.stage(&format!("Renaming {}", config.dir.display()));
    if config.dry_run() {
        log.dry_run("nothing will be renamed, pass --act to apply");
    }

    let stats = execute(&config, &SystemFs, log, io::stdout().lock())?;
    log.info(&format!("{} entries processed", stats.total()));

    if stats.failed > 0 {
        log.warn(&format!("{} entries could not be renamed", stats.failed));
    }
    if let Some(path) = log.log_path() {
        log.debug(&format!("log written to {}", path.display()));
    }
    Ok(())
}

/// Walk `config.dir` over `fs`, writing the tables and the summary to `out`.
///
/// # Errors
///
/// Returns an error if a directory cannot be listed or `out` rejects a write.
pub fn execute<W: Write>(
    config: &Config,
    fs: &dyn Filesystem,
    log: &dyn Log,
    out: W,
) -> Result<Stats> {
    let pipeline = Pipeline::from_config(config);
    log.debug(&format!("rules: {}", pipeline.names().join(", ")));

    let mut reporter = Reporter::new(out, config.width, config.dry_run());
    Walker::new(config, &pipeline, fs, log)
        .walk(&mut reporter)
        .map_err(RenameError::from)?;
    reporter.finish().context("failed to write summary")?;
    Ok(reporter.stats())
}
