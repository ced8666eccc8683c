//! Grid-subsystem error type.

use thiserror::Error;

/// Errors produced by `gs-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("no points to scan — a bounding region is undefined for an empty point set")]
    EmptyInput,

    #[error("grid step must be a positive distance in metres, got {0}")]
    InvalidStep(f64),
}

pub type GridResult<T> = Result<T, GridError>;
