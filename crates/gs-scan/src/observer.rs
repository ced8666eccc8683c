//! Scan observer trait for progress reporting and completion callbacks.

use gs_core::{CellId, GeoPoint};

use crate::evaluate::DensitySample;
use crate::field::DensityField;

/// Callbacks invoked by [`Scanner`][crate::Scanner] at key points in the
/// scan loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Ordering guarantees
///
/// `on_progress` fires in grid order, exactly once per cell, with a
/// monotonically increasing `completed` count.  Exactly one of
/// `on_complete` / `on_cancelled` fires, exactly once, after which no
/// further callbacks occur.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { every: usize }
///
/// impl ScanObserver for ProgressPrinter {
///     fn on_progress(&mut self, _c: CellId, loc: GeoPoint, _s: &DensitySample,
///                    completed: usize, total: usize) {
///         if completed % self.every == 0 {
///             println!("{completed}/{total} at {loc}");
///         }
///     }
/// }
/// ```
pub trait ScanObserver {
    /// Called after each evaluated cell.
    ///
    /// `location` is where the "scanner marker" currently sits; `completed`
    /// counts evaluated cells including this one.
    fn on_progress(
        &mut self,
        _cell:      CellId,
        _location:  GeoPoint,
        _sample:    &DensitySample,
        _completed: usize,
        _total:     usize,
    ) {
    }

    /// Called once when the grid is exhausted, with the full density field.
    fn on_complete(&mut self, _field: &DensityField) {}

    /// Called once when a cancellation request is honoured.
    ///
    /// `completed` is the number of cells evaluated before the scan stopped.
    fn on_cancelled(&mut self, _completed: usize, _total: usize) {}
}

/// A [`ScanObserver`] that does nothing.  Use when you need to drive a scan
/// but don't want callbacks.
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}
