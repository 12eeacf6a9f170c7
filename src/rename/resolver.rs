//! Numeric-suffix collision resolution.
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use super::Entry;
use super::name::{char_len, split_extension, take_chars};
use crate::config::Policy;
use crate::error::ResolveError;
use crate::fs::Filesystem;

/// Makes a proposed name unique inside the entry's directory.
///
/// A name is taken when something exists under it on disk or an earlier plan
/// of the same directory pass already claimed it. The resolver never
/// overwrites: when every suffix is taken it gives up with
/// [`ResolveError::Exhausted`].
pub struct Resolver<'a> {
    fs: &'a dyn Filesystem,
    policy: Policy,
}

impl fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<'a> Resolver<'a> {
    /// Create a resolver over `fs` bounded by `policy`.
    #[must_use]
    pub fn new(fs: &'a dyn Filesystem, policy: Policy) -> Self {
        Self { fs, policy }
    }

    /// Finalize `proposed` for `entry`.
    ///
    /// Keeping the original name is never a collision. A proposed name that
    /// contains a path separator is refused. A free proposed name
    /// is returned as is. Otherwise `stem{n}{ext}` is tried for `n` in
    /// `0..attempts`, with the stem shortened so the result stays within the
    /// name limit, and blanked when it is a single character.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotAName`] for a name that would leave the
    /// directory and [`ResolveError::Exhausted`] when every candidate is taken.
    pub fn resolve(
        &self,
        entry: &Entry,
        proposed: &str,
        claimed: &HashSet<String>,
    ) -> Result<String, ResolveError> {
        if proposed == entry.original_name {
            return Ok(proposed.to_string());
        }
        if proposed.chars().any(std::path::is_separator) {
            return Err(ResolveError::NotAName {
                name: proposed.to_string(),
            });
        }
        let dir = entry.source_path.parent().unwrap_or_else(|| Path::new(""));
        let taken = |name: &str| claimed.contains(name) || self.fs.exists(&dir.join(name));

        if !taken(proposed) {
            return Ok(proposed.to_string());
        }

        let (stem, ext) = if entry.keeps_extension() {
            split_extension(proposed)
        } else {
            (proposed, "")
        };
        let width = self.policy.suffix_width();
        let limit = self.policy.name_limit;
        let mut stem = if char_len(proposed) + width > limit {
            take_chars(stem, limit.saturating_sub(width + char_len(ext)))
        } else {
            stem
        };
        if char_len(stem) == 1 {
            stem = "";
        }

        for n in 0..self.policy.attempts {
            let candidate = format!("{stem}{n}{ext}");
            if candidate == entry.original_name || !taken(&candidate) {
                return Ok(candidate);
            }
        }
        Err(ResolveError::Exhausted {
            name: proposed.to_string(),
            attempts: self.policy.attempts,
        })
    }
}
