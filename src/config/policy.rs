//! Environment-specific limits applied to every produced name.
use crate::error::ConfigError;

/// Default maximum name length, in characters (eCryptfs on Synology).
pub const DEFAULT_NAME_LIMIT: usize = 143;
/// Default maximum destination path length, in bytes.
pub const DEFAULT_PATH_LIMIT: usize = 4096;
/// Default number of numeric suffixes tried on a collision.
pub const DEFAULT_ATTEMPTS: usize = 10;

/// Length and retry limits for one run.
///
/// # Examples
///
/// ```
/// use renamer_cli::config::Policy;
///
/// let policy = Policy::default();
/// assert_eq!(policy.name_limit, 143);
/// assert_eq!(policy.suffix_width(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Maximum file name length in characters.
    pub name_limit: usize,
    /// Maximum destination path length in bytes.
    pub path_limit: usize,
    /// Number of numeric suffixes (`0..attempts`) tried on a collision.
    pub attempts: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            name_limit: DEFAULT_NAME_LIMIT,
            path_limit: DEFAULT_PATH_LIMIT,
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}

impl Policy {
    /// Number of characters the largest collision suffix occupies.
    #[must_use]
    pub fn suffix_width(&self) -> usize {
        self.attempts.saturating_sub(1).to_string().len()
    }

    /// Reject limits that would make every name invalid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroLimit`] naming the first zero limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name_limit == 0 {
            return Err(ConfigError::ZeroLimit {
                name: "--name-limit",
            });
        }
        if self.path_limit == 0 {
            return Err(ConfigError::ZeroLimit {
                name: "--path-limit",
            });
        }
        if self.attempts == 0 {
            return Err(ConfigError::ZeroLimit { name: "--attempts" });
        }
        Ok(())
    }
}
