//! Deterministic scan-grid generation.
//!
//! # Sweep contract
//!
//! Rows march south → north at `step_m` spacing; each row runs west → east
//! at `step_m` spacing and resets to the western bound when the eastern
//! bound is exceeded (reset-per-row, not boustrophedon).  The sequence is
//! deterministic: identical `(points, step_m, pad_m)` reproduce an
//! identical grid — same length, same order — which is what makes scan
//! progress reporting and re-runs comparable.
//!
//! Cells are laid out with repeated great-circle offsets, so row latitudes
//! are exact multiples of `step_m` northward from the padded origin and
//! column spacing is `step_m` along each row's initial east bearing.
//!
//! # Limitations
//!
//! Regions touching a pole or spanning the ±180° meridian are outside the
//! sweep's accuracy guarantees.  The loop still terminates there (both
//! cursors must strictly advance), but cell placement is not meaningful.

use gs_core::{CellId, GeoPoint};

use crate::bbox::BoundingBox;
use crate::{GridError, GridResult};

/// An ordered, finite sequence of scan locations covering a padded
/// bounding region.
///
/// Owned by a single scan invocation; re-scans regenerate from scratch.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanGrid {
    cells: Vec<GeoPoint>,
    step_m: f64,
}

impl ScanGrid {
    /// Number of scan locations.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Linear spacing between adjacent cells, metres.  Doubles as the cell
    /// edge length when rendering the density field as rectangles.
    #[inline]
    pub fn step_m(&self) -> f64 {
        self.step_m
    }

    /// All scan locations in sweep order.
    #[inline]
    pub fn locations(&self) -> &[GeoPoint] {
        &self.cells
    }

    /// The location of one cell, or `None` if the id is out of range.
    #[inline]
    pub fn get(&self, cell: CellId) -> Option<GeoPoint> {
        self.cells.get(cell.index()).copied()
    }

    /// Iterate `(CellId, location)` pairs in sweep order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, GeoPoint)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &p)| (CellId(i as u32), p))
    }
}

/// Generate the scan grid for `points`, padded by `pad_m` metres per axis.
///
/// # Errors
///
/// - [`GridError::InvalidStep`] when `step_m` is not strictly positive
///   (NaN included).
/// - [`GridError::EmptyInput`] when `points` is empty.
pub fn generate_grid(points: &[GeoPoint], step_m: f64, pad_m: f64) -> GridResult<ScanGrid> {
    if !(step_m > 0.0) {
        return Err(GridError::InvalidStep(step_m));
    }
    let bbox = BoundingBox::from_points(points)?.padded(pad_m);

    let mut cells = Vec::new();
    let mut row_start = bbox.south_west();
    while row_start.lat <= bbox.north {
        let mut cell = row_start;
        while cell.lon <= bbox.east {
            cells.push(cell);
            let next = cell.destination(step_m, 90.0);
            if next.lon <= cell.lon {
                break; // wrapped at the antimeridian
            }
            cell = next;
        }
        let next_row = row_start.destination(step_m, 0.0);
        if next_row.lat <= row_start.lat {
            break; // clamped at the pole
        }
        row_start = next_row;
    }

    Ok(ScanGrid { cells, step_m })
}
