//! Directory traversal driving the pipeline, resolver and mover.
use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use std::path::Path;

use super::{Entry, Mover, Outcome, Pipeline, RenamePlan, Resolver};
use crate::config::Config;
use crate::error::{EntryError, WalkError};
use crate::fs::{EntryKind, Filesystem};
use crate::logging::Log;
use crate::report::Reporter;

/// A row waiting to be applied once the whole listing is planned.
#[derive(Debug)]
enum Pending {
    Plan(RenamePlan),
    Failed { name: String, reason: String },
}

/// Walks one directory tree and reports a table per directory.
///
/// Each directory is processed as list, plan every entry, then apply every
/// plan. With recursion enabled a subdirectory is walked while its parent is
/// being planned, so its contents are renamed before the subdirectory itself.
pub struct Walker<'a> {
    config: &'a Config,
    pipeline: &'a Pipeline,
    fs: &'a dyn Filesystem,
    log: &'a dyn Log,
}

impl fmt::Debug for Walker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walker")
            .field("config", &self.config)
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}

impl<'a> Walker<'a> {
    /// Create a walker.
    #[must_use]
    pub fn new(
        config: &'a Config,
        pipeline: &'a Pipeline,
        fs: &'a dyn Filesystem,
        log: &'a dyn Log,
    ) -> Self {
        Self {
            config,
            pipeline,
            fs,
            log,
        }
    }

    /// Walk the configured directory.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::ListDirectory`] if any directory in the walk cannot
    /// be listed, and [`WalkError::Output`] if the report cannot be written.
    /// Per-entry problems are reported as failed rows instead.
    pub fn walk<W: Write>(&self, reporter: &mut Reporter<W>) -> Result<(), WalkError> {
        self.walk_dir(&self.config.dir, reporter)
    }

    fn walk_dir<W: Write>(&self, dir: &Path, reporter: &mut Reporter<W>) -> Result<(), WalkError> {
        self.log.debug(&format!("listing {}", dir.display()));
        let mut paths = match self.fs.list_dir(dir) {
            Ok(paths) => paths,
            Err(source) => {
                self.log
                    .error(&format!("cannot list {}: {source}", dir.display()));
                return Err(WalkError::ListDirectory {
                    path: dir.to_path_buf(),
                    source,
                });
            }
        };
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let resolver = Resolver::new(self.fs, self.config.policy);
        let mut claimed = HashSet::new();
        let mut pending = Vec::with_capacity(paths.len());

        for path in paths {
            let info = match self.fs.inspect(&path) {
                Ok(info) => info,
                Err(e) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    pending.push(Pending::Failed {
                        name,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            if self.config.recursive && info.kind == EntryKind::Directory && !info.symlink {
                self.walk_dir(&path, reporter)?;
            }

            let entry = match Entry::new(path, &info) {
                Ok(entry) => entry,
                Err(e) => {
                    pending.push(Pending::Failed {
                        name: display_name(&e),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            let Some(proposed) = self.pipeline.run(&entry) else {
                self.log.debug(&format!("omitted {}", entry.original_name));
                continue;
            };
            match resolver.resolve(&entry, &proposed, &claimed) {
                Ok(name) => {
                    let dest = if name == entry.original_name {
                        entry.source_path.clone()
                    } else {
                        entry.source_path.with_file_name(&name)
                    };
                    self.log
                        .debug(&format!("planned {} -> {name}", entry.original_name));
                    claimed.insert(name);
                    pending.push(Pending::Plan(RenamePlan {
                        source: entry.source_path,
                        dest,
                    }));
                }
                Err(e) => pending.push(Pending::Failed {
                    name: entry.original_name,
                    reason: e.to_string(),
                }),
            }
        }

        self.apply(pending, reporter);
        reporter.flush(dir)?;
        Ok(())
    }

    fn apply<W: Write>(&self, pending: Vec<Pending>, reporter: &mut Reporter<W>) {
        let mover = Mover::new(self.fs, self.config.policy.path_limit);
        let dry_run = self.config.dry_run();
        for row in pending {
            match row {
                Pending::Plan(plan) => {
                    let (source, dest) = (plan.source_name(), plan.dest_name());
                    let outcome = mover.apply(&plan, dry_run);
                    match &outcome {
                        Outcome::Moved if dry_run => {
                            self.log.dry_run(&format!("would rename {source} -> {dest}"));
                        }
                        Outcome::Moved => self.log.debug(&format!("renamed {source} -> {dest}")),
                        Outcome::Unaltered => {}
                        Outcome::Failed { reason } => {
                            self.log.warn(&format!("cannot rename {source}: {reason}"));
                        }
                    }
                    reporter.add(&source, &dest, &outcome);
                }
                Pending::Failed { name, reason } => {
                    self.log.warn(&format!("cannot rename {name}: {reason}"));
                    reporter.add(&name, "", &Outcome::Failed { reason });
                }
            }
        }
    }
}

/// Name shown in the source column for an entry that could not be read.
fn display_name(err: &EntryError) -> String {
    match err {
        EntryError::NotUnicode { name } => name.clone(),
        EntryError::NoName { path } => path.display().to_string(),
    }
}
