//! Command-line surface of the `renamer` binary.
use std::path::PathBuf;

use clap::Parser;

use crate::config::policy::{DEFAULT_ATTEMPTS, DEFAULT_NAME_LIMIT, DEFAULT_PATH_LIMIT};

/// Top-level CLI entry point for the batch renamer.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "renamer",
    about = "Renames files in a directory by normalization rules",
    version
)]
pub struct Cli {
    /// Really rename (default is a dry run)
    #[arg(short, long)]
    pub act: bool,

    /// Pass recursively into subdirectories
    #[arg(short, long)]
    pub rec: bool,

    /// Only truncate names longer than the name limit
    #[arg(short, long)]
    pub lim: bool,

    /// Prepend the modification date (YYYYMMDD-)
    #[arg(short, long = "mod")]
    pub modified: bool,

    /// Directory to rename
    #[arg(short, long)]
    pub dir: PathBuf,

    /// A string to substitute
    #[arg(short, long)]
    pub src: Option<String>,

    /// A string to replace with
    #[arg(short = 't', long, requires = "src")]
    pub dst: Option<String>,

    /// A string to prepend
    #[arg(short, long)]
    pub pre: Option<String>,

    /// Width of the report table
    #[arg(short, long)]
    pub wid: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Maximum file name length in characters
    #[arg(long, default_value_t = DEFAULT_NAME_LIMIT)]
    pub name_limit: usize,

    /// Maximum destination path length in bytes
    #[arg(long, default_value_t = DEFAULT_PATH_LIMIT)]
    pub path_limit: usize,

    /// Numeric suffixes to try when a name is taken
    #[arg(long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,
}
