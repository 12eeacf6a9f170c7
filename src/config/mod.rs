//! Typed run configuration, resolved and validated once at startup.
pub mod policy;

pub use policy::Policy;

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::ConfigError;

/// Narrowest report table that still fits both columns.
pub const MIN_WIDTH: usize = 15;
/// Report width used when the terminal width cannot be detected.
pub const FALLBACK_WIDTH: usize = 79;

/// Which rule set composes the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Full normalization pipeline.
    Rename,
    /// Only names at or above the name limit are considered; they are truncated.
    LengthAudit,
}

/// A literal find/replace pair applied after the point guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Text to look for.
    pub find: String,
    /// Replacement; `None` means the placeholder separator.
    pub replace: Option<String>,
}

/// Resolved, validated configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory to process.
    pub dir: PathBuf,
    /// Really rename instead of simulating.
    pub act: bool,
    /// Recurse into subdirectories, children first.
    pub recursive: bool,
    /// Rule set selection.
    pub mode: Mode,
    /// Prepend a `YYYYMMDD-` modification date.
    pub date_prefix: bool,
    /// Optional find/replace pair.
    pub substitution: Option<Substitution>,
    /// Optional literal prefix.
    pub prefix: Option<String>,
    /// Total report table width.
    pub width: usize,
    /// Length and retry limits.
    pub policy: Policy,
}

impl Config {
    /// Build and validate the configuration from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the directory is missing or not a
    /// directory, the width is below [`MIN_WIDTH`], a policy limit is zero,
    /// the substitution pattern is empty, or the prefix or replacement text
    /// contains a path separator.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let dir = resolve_dir(&cli.dir)?;

        let width = cli.wid.unwrap_or_else(detect_width);
        if width < MIN_WIDTH {
            return Err(ConfigError::WidthTooSmall {
                width,
                min: MIN_WIDTH,
            });
        }

        let policy = Policy {
            name_limit: cli.name_limit,
            path_limit: cli.path_limit,
            attempts: cli.attempts,
        };
        policy.validate()?;

        if let Some(pre) = &cli.pre {
            reject_separators("--pre", pre)?;
        }
        if let Some(dst) = &cli.dst {
            reject_separators("--dst", dst)?;
        }

        let substitution = match &cli.src {
            Some(find) if find.is_empty() => return Err(ConfigError::EmptySubstitution),
            Some(find) => Some(Substitution {
                find: find.clone(),
                replace: cli.dst.clone(),
            }),
            None => None,
        };

        Ok(Self {
            dir,
            act: cli.act,
            recursive: cli.rec,
            mode: if cli.lim {
                Mode::LengthAudit
            } else {
                Mode::Rename
            },
            date_prefix: cli.modified,
            substitution,
            prefix: cli.pre.clone(),
            width,
            policy,
        })
    }

    /// `true` when no filesystem mutation may happen.
    #[must_use]
    pub const fn dry_run(&self) -> bool {
        !self.act
    }
}

/// Check that `dir` is an existing directory and make it absolute.
fn resolve_dir(dir: &Path) -> Result<PathBuf, ConfigError> {
    if !dir.exists() {
        return Err(ConfigError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(ConfigError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }
    dunce::canonicalize(dir).map_err(|source| ConfigError::Canonicalize {
        path: dir.to_path_buf(),
        source,
    })
}

/// Text spliced into new names must not turn them into paths.
fn reject_separators(option: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.chars().any(std::path::is_separator) {
        return Err(ConfigError::PathSeparator {
            option,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Current terminal width, or [`FALLBACK_WIDTH`] when stdout is not a terminal.
fn detect_width() -> usize {
    terminal_size::terminal_size().map_or(FALLBACK_WIDTH, |(terminal_size::Width(w), _)| {
        usize::from(w)
    })
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["renamer"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn resolves_existing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();
        let config = Config::from_cli(&parse(&["-d", dir, "-w", "80"])).unwrap();
        assert!(config.dir.is_absolute());
        assert_eq!(config.width, 80);
        assert_eq!(config.mode, Mode::Rename);
        assert!(config.dry_run());
    }

    #[test]
    fn missing_directory_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        let err = Config::from_cli(&parse(&["-d", missing.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDirectory { .. }));
    }

    #[test]
    fn file_is_not_a_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("file.txt");
        std::fs::write(&file, "").unwrap();
        let err = Config::from_cli(&parse(&["-d", file.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, ConfigError::NotADirectory { .. }));
    }

    #[test]
    fn narrow_width_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();
        let err = Config::from_cli(&parse(&["-d", dir, "-w", "14"])).unwrap_err();
        assert!(matches!(err, ConfigError::WidthTooSmall { width: 14, .. }));
        assert!(Config::from_cli(&parse(&["-d", dir, "-w", "15"])).is_ok());
    }

    #[test]
    fn empty_substitution_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();
        let err = Config::from_cli(&parse(&["-d", dir, "-s", ""])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptySubstitution));
    }

    #[test]
    fn lim_selects_length_audit() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();
        let config = Config::from_cli(&parse(&["-d", dir, "-l", "-a", "-w", "40"])).unwrap();
        assert_eq!(config.mode, Mode::LengthAudit);
        assert!(!config.dry_run());
    }

    #[test]
    fn substitution_pair_is_carried() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();
        let config = Config::from_cli(&parse(&["-d", dir, "-s", "a.b", "-t", "c"])).unwrap();
        assert_eq!(
            config.substitution,
            Some(Substitution {
                find: "a.b".to_string(),
                replace: Some("c".to_string()),
            })
        );
    }

    #[test]
    fn prefix_with_separator_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();
        for pre in ["sub/", "../up", "a/b"] {
            let err = Config::from_cli(&parse(&["-d", dir, "-p", pre])).unwrap_err();
            assert!(
                matches!(err, ConfigError::PathSeparator { option: "--pre", .. }),
                "{pre}"
            );
        }
        assert!(Config::from_cli(&parse(&["-d", dir, "-p", "..trip-"])).is_ok());
    }

    #[test]
    fn replacement_with_separator_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();
        let err = Config::from_cli(&parse(&["-d", dir, "-s", "x", "-t", "../x"])).unwrap_err();
        assert!(matches!(err, ConfigError::PathSeparator { option: "--dst", .. }));
    }

    #[test]
    fn zero_attempts_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();
        let err = Config::from_cli(&parse(&["-d", dir, "--attempts", "0"])).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroLimit { .. }));
    }

    #[test]
    fn detected_width_is_positive() {
        assert!(detect_width() > 0);
    }
}
