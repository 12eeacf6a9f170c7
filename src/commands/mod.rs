//! Top-level command orchestration.
pub mod rename;
