//! Filesystem seam used by the walker, resolver and mover.
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// What kind of object an entry is, with symlinks followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file; keeps its extension through the pipeline.
    File,
    /// Directory.
    Directory,
    /// Anything else (socket, fifo, broken symlink, ...).
    Other,
}

/// Metadata the renamer needs about one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryInfo {
    /// Kind of the object, symlinks followed.
    pub kind: EntryKind,
    /// Whether the entry itself is a symlink.
    pub symlink: bool,
    /// Last modification time, if the platform reports one.
    pub modified: Option<SystemTime>,
}

/// Abstraction over the filesystem calls the renamer makes.
///
/// The real implementation is [`SystemFs`]; tests substitute a mock to
/// exercise failure paths.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem {
    /// List the full paths of every entry in `dir`, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Read the metadata of one entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry vanished or cannot be inspected.
    fn inspect(&self, path: &Path) -> io::Result<EntryInfo>;

    /// Whether anything, including a broken symlink, occupies `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Rename `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error (permissions, cross-device, race).
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// [`Filesystem`] backed by [`std::fs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFs;

impl Filesystem for SystemFs {
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        std::fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect()
    }

    fn inspect(&self, path: &Path) -> io::Result<EntryInfo> {
        let link = std::fs::symlink_metadata(path)?;
        let symlink = link.file_type().is_symlink();
        // A dangling symlink has no target metadata; describe the link itself.
        let meta = if symlink {
            std::fs::metadata(path).ok()
        } else {
            Some(link.clone())
        };
        let kind = match &meta {
            Some(m) if m.is_file() => EntryKind::File,
            Some(m) if m.is_dir() => EntryKind::Directory,
            _ => EntryKind::Other,
        };
        let modified = meta.as_ref().unwrap_or(&link).modified().ok();
        Ok(EntryInfo {
            kind,
            symlink,
            modified,
        })
    }

    fn exists(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path).is_ok()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }
}
