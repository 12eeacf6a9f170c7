//! Per-run outcome accounting and the tabular report.
//!
//! One [`Reporter`] is built per invocation. It owns the [`Stats`] counters and
//! the rows of the directory currently being processed, writes one table per
//! directory, and a closing summary line at the end of the run.
mod duration;
mod table;

pub use duration::humanize;
pub use table::{TableLayout, trim_middle};

use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use crate::rename::Outcome;

/// Counters for every reported row.
///
/// ```
/// use renamer_cli::report::Stats;
///
/// let stats = Stats { moved: 2, unaltered: 0, failed: 1 };
/// assert_eq!(stats.summary(), "2 moved, 1 failed");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Entries renamed, or that would be in a dry run.
    pub moved: u32,
    /// Entries whose name was already final.
    pub unaltered: u32,
    /// Entries left untouched because of an error.
    pub failed: u32,
}

impl Stats {
    /// Count one outcome.
    pub const fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Moved => self.moved += 1,
            Outcome::Unaltered => self.unaltered += 1,
            Outcome::Failed { .. } => self.failed += 1,
        }
    }

    /// Total number of rows counted.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.moved + self.unaltered + self.failed
    }

    /// Non-zero counters, e.g. `"3 moved, 1 failed"`, or `"nothing to do"`.
    #[must_use]
    pub fn summary(&self) -> String {
        let parts: Vec<String> = [
            (self.moved, "moved"),
            (self.unaltered, "unaltered"),
            (self.failed, "failed"),
        ]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, label)| format!("{n} {label}"))
        .collect();
        if parts.is_empty() {
            "nothing to do".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Collects rows for the current directory and writes report tables to `out`.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
    layout: TableLayout,
    dry_run: bool,
    rows: Vec<(String, String)>,
    stats: Stats,
    started: Instant,
}

impl<W: Write> Reporter<W> {
    /// Start a report of `width` columns; the elapsed-time clock starts now.
    #[must_use]
    pub fn new(out: W, width: usize, dry_run: bool) -> Self {
        Self {
            out,
            layout: TableLayout::new(width),
            dry_run,
            rows: Vec::new(),
            stats: Stats::default(),
            started: Instant::now(),
        }
    }

    /// Record one row. Unaltered rows show no destination; failed rows show
    /// the reason instead.
    pub fn add(&mut self, source: &str, dest: &str, outcome: &Outcome) {
        self.stats.record(outcome);
        let shown = match outcome {
            Outcome::Moved => dest.to_string(),
            Outcome::Unaltered => String::new(),
            Outcome::Failed { reason } => reason.clone(),
        };
        self.rows.push((source.to_string(), shown));
    }

    /// Write the table for `dir` and start a new one. Does nothing when no
    /// rows were added.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn flush(&mut self, dir: &Path) -> io::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let table = self
            .layout
            .render(&dir.display().to_string(), &self.rows);
        self.rows.clear();
        self.out.write_all(table.as_bytes())?;
        self.out.flush()
    }

    /// Write the summary line using the time elapsed since [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn finish(&mut self) -> io::Result<()> {
        self.finish_with(self.started.elapsed())
    }

    /// Write the summary line for an explicit elapsed time.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn finish_with(&mut self, elapsed: Duration) -> io::Result<()> {
        let mode = if self.dry_run { "Test" } else { "Real" };
        let msg = format!("{mode}: {} in {}.", self.stats.summary(), humanize(elapsed));
        self.out.write_all(self.layout.footer(&msg).as_bytes())?;
        self.out.flush()
    }

    /// Counters accumulated so far.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    /// Consume the reporter and return the output sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}
