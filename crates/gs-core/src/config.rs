//! Scan configuration.

use crate::policy::{DensityPolicy, RadiusSet};

/// Everything a scan needs besides the input points.
///
/// Supplied once at scan start and immutable for that scan's duration.
/// Typically built from `Default` and adjusted field-by-field.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanConfig {
    /// Linear spacing between adjacent grid cells, metres.
    pub step_m: f64,

    /// Outward padding of the bounding region, metres of slack per axis.
    /// Must be at least `radii.loose` or boundary points are under-counted.
    pub pad_m: f64,

    /// The three coverage rings.
    pub radii: RadiusSet,

    /// Score reduction and opacity mapping constants.
    pub policy: DensityPolicy,

    /// Grid cells evaluated per driver step before yielding.  1 preserves
    /// the finest-grained progress reporting; larger batches trade callback
    /// frequency for loop overhead.
    pub batch: usize,
}

impl Default for ScanConfig {
    /// 10 m grid step, default rings, padding of `loose · √2`.
    fn default() -> Self {
        let radii = RadiusSet::default();
        Self {
            step_m: 10.0,
            pad_m:  radii.loose * std::f64::consts::SQRT_2,
            radii,
            policy: DensityPolicy::default(),
            batch:  1,
        }
    }
}
