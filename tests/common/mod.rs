// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed tree builder and a runner that drives
// the rename command end to end with an in-memory report sink.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use renamer_cli::config::{Config, Mode, Policy};
use renamer_cli::fs::SystemFs;
use renamer_cli::logging::Logger;
use renamer_cli::report::Stats;

/// A temporary directory tree that is removed on drop.
pub struct Tree {
    dir: tempfile::TempDir,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Root of the tree.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file at `rel` (parents included) holding `contents`.
    pub fn file(self, rel: &str, contents: &str) -> Self {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, contents).expect("write file");
        self
    }

    /// Create an empty directory at `rel`.
    pub fn dir(self, rel: &str) -> Self {
        std::fs::create_dir_all(self.root().join(rel)).expect("create dir");
        self
    }

    /// Absolute path of `rel`.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Whether `rel` exists.
    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    /// Contents of the file at `rel`.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path(rel)).expect("read file")
    }

    /// Sorted base names directly under `rel`.
    pub fn names(&self, rel: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path(rel))
            .expect("read dir")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// A configuration rooted at this tree: real run, no recursion, width 60.
    pub fn config(&self) -> Config {
        Config {
            dir: dunce::canonicalize(self.root()).expect("canonicalize"),
            act: true,
            recursive: false,
            mode: Mode::Rename,
            date_prefix: false,
            substitution: None,
            prefix: None,
            width: 60,
            policy: Policy::default(),
        }
    }
}

/// Run the rename command for `config`, returning counters and report text.
pub fn run(config: &Config) -> (Stats, String) {
    let log = Logger::with_log_file(None);
    let mut out = Vec::new();
    let stats = renamer_cli::commands::rename::execute(config, &SystemFs, &log, &mut out)
        .expect("rename command");
    (stats, String::from_utf8(out).expect("utf-8 report"))
}
