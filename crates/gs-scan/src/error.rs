//! Scan-subsystem error type.

use gs_grid::GridError;
use thiserror::Error;

/// Errors produced by `gs-scan`.
///
/// All are reported synchronously at the call site — none indicate
/// transient failure, so nothing is retried internally.  Cancellation is a
/// normal terminal phase, not an error.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no points to scan")]
    EmptyInput,

    #[error("scan already running — one active scan per driver")]
    AlreadyRunning,

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type ScanResult<T> = Result<T, ScanError>;
