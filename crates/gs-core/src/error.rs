//! Core error type.
//!
//! Sub-crates define their own error enums (`GridError`, `ScanError`, …)
//! and either wrap `GsError` or stay independent; both patterns are fine —
//! prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `gs-core`.
#[derive(Debug, Error)]
pub enum GsError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `gs-core` operations.
pub type GsResult<T> = Result<T, GsError>;
