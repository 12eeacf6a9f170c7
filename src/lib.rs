//! Rule-based batch file renaming engine.
//!
//! Computes a filesystem-safe, transliterated, length-bounded name for every
//! entry of a directory, resolves collisions with numeric suffixes, and
//! performs (or simulates) the renames while printing a table per directory.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]**: validated run configuration and length/retry policy
//! - **[`fs`]**: the filesystem seam (`list`, `inspect`, `exists`, `rename`)
//! - **[`rename`]**: transforms, pipeline, resolver, mover and walker
//! - **[`report`]**: outcome counters and the fixed-width tables
//! - **[`commands`]**: the `rename` command wired to stdout and the logger
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod rename;
pub mod report;
