//! The renaming engine: entries, transforms, pipeline, collision resolution,
//! moves, and the directory walk that ties them together.
//!
//! Data flows one way:
//!
//! - **[`walker`]** lists a directory and builds an [`Entry`] per object
//! - **[`pipeline`]** runs the ordered [`transform`]s over the entry's name
//! - **[`resolver`]** makes the candidate unique against the live directory
//! - **[`mover`]** performs or simulates the [`RenamePlan`] and classifies the
//!   [`Outcome`]
pub mod mover;
pub mod name;
pub mod pipeline;
pub mod resolver;
pub mod transform;
pub mod walker;

pub use mover::Mover;
pub use pipeline::Pipeline;
pub use resolver::Resolver;
pub use transform::Transform;
pub use walker::Walker;

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::EntryError;
use crate::fs::{EntryInfo, EntryKind};

/// One filesystem object under consideration for a rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Absolute path of the object as listed.
    pub source_path: PathBuf,
    /// Base name before any transform ran.
    pub original_name: String,
    /// Kind of the object, symlinks followed.
    pub kind: EntryKind,
    /// Last modification time, if known.
    pub modified: Option<SystemTime>,
}

impl Entry {
    /// Build an entry from a listed path and its metadata.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::NotUnicode`] when the name is not valid UTF-8,
    /// so it is never rewritten through a lossy decoding, and
    /// [`EntryError::NoName`] when the path has no final component.
    pub fn new(source_path: PathBuf, info: &EntryInfo) -> Result<Self, EntryError> {
        let raw = source_path.file_name().ok_or_else(|| EntryError::NoName {
            path: source_path.clone(),
        })?;
        let original_name = raw
            .to_str()
            .ok_or_else(|| EntryError::NotUnicode {
                name: raw.to_string_lossy().into_owned(),
            })?
            .to_string();
        Ok(Self {
            source_path,
            original_name,
            kind: info.kind,
            modified: info.modified,
        })
    }

    /// Build a detached entry from a bare name, without touching the disk.
    ///
    /// # Examples
    ///
    /// ```
    /// use renamer_cli::fs::EntryKind;
    /// use renamer_cli::rename::Entry;
    ///
    /// let entry = Entry::named("Photo.JPG", EntryKind::File);
    /// assert!(entry.keeps_extension());
    /// ```
    #[must_use]
    pub fn named(name: &str, kind: EntryKind) -> Self {
        Self {
            source_path: PathBuf::from(name),
            original_name: name.to_string(),
            kind,
            modified: None,
        }
    }

    /// Whether the final extension dot survives the point guard.
    #[must_use]
    pub fn keeps_extension(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Source and finalized destination for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    /// Path the entry currently has.
    pub source: PathBuf,
    /// Path the entry should get.
    pub dest: PathBuf,
}

impl RenamePlan {
    /// Whether the plan leaves the entry where it is.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.source == self.dest
    }

    /// Base name of the source, for display.
    #[must_use]
    pub fn source_name(&self) -> String {
        base_name(&self.source)
    }

    /// Base name of the destination, for display.
    #[must_use]
    pub fn dest_name(&self) -> String {
        base_name(&self.dest)
    }
}

/// Result of applying one plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The entry was renamed (or would be, in a dry run).
    Moved,
    /// Source and destination are the same.
    Unaltered,
    /// The entry was left untouched because of an error.
    Failed {
        /// Human-readable error description.
        reason: String,
    },
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn entry_takes_name_from_path() {
        let info = EntryInfo {
            kind: EntryKind::Directory,
            symlink: false,
            modified: None,
        };
        let entry = Entry::new(PathBuf::from("/data/My Dir"), &info).unwrap();
        assert_eq!(entry.original_name, "My Dir");
        assert_eq!(entry.kind, EntryKind::Directory);
        assert!(!entry.keeps_extension());
    }

    #[test]
    fn root_path_has_no_name() {
        let info = EntryInfo {
            kind: EntryKind::Directory,
            symlink: false,
            modified: None,
        };
        let err = Entry::new(PathBuf::from("/"), &info).unwrap_err();
        assert!(matches!(err, EntryError::NoName { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_name_is_refused() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt as _;

        let info = EntryInfo {
            kind: EntryKind::File,
            symlink: false,
            modified: None,
        };
        let path = PathBuf::from("/d").join(OsStr::from_bytes(b"abcd\xffefgh"));
        let err = Entry::new(path, &info).unwrap_err();
        assert_eq!(
            err,
            EntryError::NotUnicode {
                name: "abcd\u{fffd}efgh".to_string(),
            }
        );
    }

    #[test]
    fn other_kinds_lose_extension_guard() {
        let entry = Entry::named("fifo.pipe", EntryKind::Other);
        assert!(!entry.keeps_extension());
    }

    #[test]
    fn plan_noop_and_names() {
        let plan = RenamePlan {
            source: PathBuf::from("/d/A.txt"),
            dest: PathBuf::from("/d/a.txt"),
        };
        assert!(!plan.is_noop());
        assert_eq!(plan.source_name(), "A.txt");
        assert_eq!(plan.dest_name(), "a.txt");

        let same = RenamePlan {
            source: PathBuf::from("/d/a.txt"),
            dest: PathBuf::from("/d/a.txt"),
        };
        assert!(same.is_noop());
    }
}
