//! `ScanOutputObserver<W>` — bridges `ScanObserver` to an `OutputWriter`.

use gs_core::{CellId, DensityPolicy, GeoPoint};
use gs_scan::{DensityField, DensitySample, ScanObserver};

use crate::row::{DensityCellRow, ScanSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`ScanObserver`] that streams density cells to any [`OutputWriter`]
/// backend as the scan progresses.
///
/// Errors from the writer are stored internally because `ScanObserver`
/// methods have no return value.  After the scan reaches a terminal phase,
/// check for errors with [`take_error`][Self::take_error].  A cancelled
/// scan still flushes the cells written so far.
pub struct ScanOutputObserver<W: OutputWriter> {
    writer:     W,
    policy:     DensityPolicy,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ScanOutputObserver<W> {
    /// Create an observer backed by `writer`.
    ///
    /// `policy` must be the one the scan runs with — it derives each cell's
    /// opacity column.
    pub fn new(writer: W, policy: DensityPolicy) -> Self {
        Self {
            writer,
            policy,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the scan ends.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the scan).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ScanObserver for ScanOutputObserver<W> {
    fn on_progress(
        &mut self,
        cell:       CellId,
        location:   GeoPoint,
        sample:     &DensitySample,
        _completed: usize,
        _total:     usize,
    ) {
        let row = cell_row(cell, location, sample, &self.policy);
        let result = self.writer.write_cells(&[row]);
        self.store_err(result);
    }

    fn on_complete(&mut self, field: &DensityField) {
        let result = self.writer.write_summary(&summary_row(field));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }

    fn on_cancelled(&mut self, _completed: usize, _total: usize) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

// ── Row assembly ──────────────────────────────────────────────────────────────

fn cell_row(
    cell:     CellId,
    location: GeoPoint,
    sample:   &DensitySample,
    policy:   &DensityPolicy,
) -> DensityCellRow {
    DensityCellRow {
        cell:         cell.0,
        lat:          location.lat,
        lon:          location.lon,
        count_tight:  sample.counts[0],
        count_medium: sample.counts[1],
        count_loose:  sample.counts[2],
        score:        sample.score,
        opacity:      policy.opacity(sample.score),
    }
}

fn summary_row(field: &DensityField) -> ScanSummaryRow {
    ScanSummaryRow {
        total_cells:     field.len() as u64,
        point_count:     field.point_count as u64,
        step_m:          field.grid.step_m(),
        radius_tight_m:  field.radii.tight,
        radius_medium_m: field.radii.medium,
        radius_loose_m:  field.radii.loose,
        elapsed_ms:      field.elapsed.as_millis() as u64,
    }
}

/// Dump a completed field to `writer` in one call — cells, summary, finish.
///
/// The streaming path for incremental scans is [`ScanOutputObserver`]; this
/// covers the one-shot [`scan_field`][gs_scan::scan_field] path.
pub fn write_field<W: OutputWriter>(writer: &mut W, field: &DensityField) -> crate::OutputResult<()> {
    let rows: Vec<DensityCellRow> = field
        .iter()
        .map(|(cell, loc, sample)| cell_row(cell, loc, sample, &field.policy))
        .collect();
    writer.write_cells(&rows)?;
    writer.write_summary(&summary_row(field))?;
    writer.finish()
}
