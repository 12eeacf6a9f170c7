//! Domain-specific error types for the renaming engine.
//!
//! Internal modules return typed errors (e.g., [`ConfigError`], [`WalkError`])
//! while the command handler at the CLI boundary converts them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! RenameError
//! ├── Config(ConfigError)    pre-flight validation, fatal at startup
//! └── Walk(WalkError)        unreadable directory or broken report output
//!
//! EntryError                 per entry, becomes a failed report row
//! ResolveError               per entry, becomes a failed report row
//! MoveError                  per entry, becomes a failed report row
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the renaming engine.
#[derive(Error, Debug)]
pub enum RenameError {
    /// Configuration was rejected before any filesystem mutation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The directory walk was aborted.
    #[error("Walk error: {0}")]
    Walk(#[from] WalkError),
}

/// Errors raised while validating the resolved command-line configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The requested directory does not exist.
    #[error("No such directory: {}", .path.display())]
    MissingDirectory {
        /// Directory as given on the command line.
        path: PathBuf,
    },

    /// The requested path exists but is not a directory.
    #[error("Not a directory: {}", .path.display())]
    NotADirectory {
        /// Path as given on the command line.
        path: PathBuf,
    },

    /// The report width is below the usable minimum.
    #[error("Width of the table should be at least {min} symbols: {width}")]
    WidthTooSmall {
        /// Requested width.
        width: usize,
        /// Smallest accepted width.
        min: usize,
    },

    /// A policy limit was set to zero.
    #[error("{name} must be greater than zero")]
    ZeroLimit {
        /// Name of the offending option.
        name: &'static str,
    },

    /// A literal that ends up inside new names contains a path separator.
    #[error("{option} must not contain a path separator: {value}")]
    PathSeparator {
        /// Name of the offending option.
        option: &'static str,
        /// Value as given on the command line.
        value: String,
    },

    /// The substitution pattern is empty.
    #[error("Substitution pattern must not be empty")]
    EmptySubstitution,

    /// The directory could not be made absolute.
    #[error("Cannot resolve directory {}: {source}", .path.display())]
    Canonicalize {
        /// Directory as given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Errors that abort a directory walk.
#[derive(Error, Debug)]
pub enum WalkError {
    /// A directory listing could not be read; fatal to the subtree.
    #[error("Cannot list directory {}: {source}", .path.display())]
    ListDirectory {
        /// Directory that could not be listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The report could not be written.
    #[error("Cannot write report: {0}")]
    Output(#[from] io::Error),
}

/// Errors raised while reading the name of a listed entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// The name is not valid UTF-8 and cannot go through the rules.
    #[error("Name is not valid UTF-8: {name}")]
    NotUnicode {
        /// Lossy rendering of the name, for display.
        name: String,
    },

    /// The listed path has no final component.
    #[error("No file name in {}", .path.display())]
    NoName {
        /// Path as listed.
        path: PathBuf,
    },
}

/// Errors raised by the collision resolver for a single entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Every numeric suffix was already taken.
    #[error("Unable to compose a new name: {name} ({attempts} attempts)")]
    Exhausted {
        /// Proposed name that kept colliding.
        name: String,
        /// Number of suffixes tried.
        attempts: usize,
    },

    /// The proposed name would leave the entry's directory.
    #[error("Not a single file name: {name}")]
    NotAName {
        /// Offending proposed name.
        name: String,
    },
}

/// Errors raised while moving a single entry.
#[derive(Error, Debug)]
pub enum MoveError {
    /// The destination path exceeds the absolute path-length ceiling.
    #[error("Destination path is {len} bytes, limit is {limit}")]
    PathTooLong {
        /// Length of the destination path in bytes.
        len: usize,
        /// Configured ceiling in bytes.
        limit: usize,
    },

    /// Something already occupies the destination.
    #[error("Destination already exists: {}", .path.display())]
    DestinationExists {
        /// Occupied destination path.
        path: PathBuf,
    },

    /// The rename system call failed.
    #[error("{source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}
