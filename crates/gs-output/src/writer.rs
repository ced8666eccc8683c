//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DensityCellRow, OutputResult, ScanSummaryRow};

/// Backend-agnostic sink for scan output.
///
/// The observer drives writers through this trait so the scanner never
/// knows about any specific output format.
pub trait OutputWriter {
    /// Write a batch of density-field cells.
    fn write_cells(&mut self, rows: &[DensityCellRow]) -> OutputResult<()>;

    /// Write one scan summary row.
    fn write_summary(&mut self, row: &ScanSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
