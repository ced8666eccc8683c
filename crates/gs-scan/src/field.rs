//! The completed density field.

use std::time::Duration;

use gs_core::{CellId, DensityPolicy, GeoPoint, RadiusSet};
use gs_grid::ScanGrid;

use crate::evaluate::DensitySample;

/// A completed scan: one [`DensitySample`] per grid cell, plus the
/// configuration the scan ran with.
///
/// Created fresh per scan invocation and fully owned by it — no cross-scan
/// sharing.  `samples` is index-aligned with `grid`.
#[derive(Clone, Debug)]
pub struct DensityField {
    /// The grid that was swept, in evaluation order.
    pub grid: ScanGrid,
    /// One sample per grid cell, index-aligned with `grid`.
    pub samples: Vec<DensitySample>,
    /// Coverage rings the scan ran with.
    pub radii: RadiusSet,
    /// Scoring/opacity constants the scan ran with.
    pub policy: DensityPolicy,
    /// Number of input points scanned against.
    pub point_count: usize,
    /// Wall-clock time from `start` to completion.
    pub elapsed: Duration,
}

impl DensityField {
    /// Number of cells in the field.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The sample for one cell, or `None` if the id is out of range.
    #[inline]
    pub fn sample(&self, cell: CellId) -> Option<&DensitySample> {
        self.samples.get(cell.index())
    }

    /// Render opacity for one cell, per the field's policy.
    pub fn opacity(&self, cell: CellId) -> Option<f64> {
        self.sample(cell).map(|s| self.policy.opacity(s.score))
    }

    /// Iterate `(CellId, location, sample)` in sweep order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, GeoPoint, &DensitySample)> + '_ {
        self.grid
            .iter()
            .zip(&self.samples)
            .map(|((cell, loc), sample)| (cell, loc, sample))
    }

    /// The cell with the highest density score, or `None` for an empty
    /// field.  Ties resolve to the earliest cell in sweep order.
    pub fn peak_cell(&self) -> Option<CellId> {
        let mut best: Option<(usize, f64)> = None;
        for (i, s) in self.samples.iter().enumerate() {
            if best.is_none_or(|(_, score)| s.score > score) {
                best = Some((i, s.score));
            }
        }
        best.map(|(i, _)| CellId(i as u32))
    }
}
