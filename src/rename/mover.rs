//! Performs or simulates a single rename.
use std::fmt;

use super::{Outcome, RenamePlan};
use crate::error::MoveError;
use crate::fs::Filesystem;

/// Applies [`RenamePlan`]s and classifies the result.
///
/// Failures never escape: each one becomes [`Outcome::Failed`] so the walk
/// continues with the next entry.
pub struct Mover<'a> {
    fs: &'a dyn Filesystem,
    path_limit: usize,
}

impl fmt::Debug for Mover<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mover")
            .field("path_limit", &self.path_limit)
            .finish_non_exhaustive()
    }
}

impl<'a> Mover<'a> {
    /// Create a mover that refuses destinations longer than `path_limit` bytes.
    #[must_use]
    pub fn new(fs: &'a dyn Filesystem, path_limit: usize) -> Self {
        Self { fs, path_limit }
    }

    /// Apply `plan`, or only validate it when `dry_run` is set.
    ///
    /// The path-length ceiling is checked in both modes.
    #[must_use]
    pub fn apply(&self, plan: &RenamePlan, dry_run: bool) -> Outcome {
        if plan.is_noop() {
            return Outcome::Unaltered;
        }
        match self.execute(plan, dry_run) {
            Ok(()) => Outcome::Moved,
            Err(e) => Outcome::Failed {
                reason: e.to_string(),
            },
        }
    }

    fn execute(&self, plan: &RenamePlan, dry_run: bool) -> Result<(), MoveError> {
        let len = plan.dest.as_os_str().len();
        if len > self.path_limit {
            return Err(MoveError::PathTooLong {
                len,
                limit: self.path_limit,
            });
        }
        if dry_run {
            return Ok(());
        }
        if self.fs.exists(&plan.dest) {
            return Err(MoveError::DestinationExists {
                path: plan.dest.clone(),
            });
        }
        self.fs.rename(&plan.source, &plan.dest)?;
        Ok(())
    }
}
