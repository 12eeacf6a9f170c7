//! The [`Log`] trait shared by every logging backend.

/// Abstraction over logging backends.
///
/// The walker and command code log through this trait so tests can pass an
/// isolated [`Logger`](super::logger::Logger) without touching the global
/// subscriber.
pub trait Log {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run notice.
    fn dry_run(&self, msg: &str);
}
