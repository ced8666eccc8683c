//! Coverage radii and the density scoring/visual policy.
//!
//! The three radii define "tight", "medium", and "loose" coverage rings
//! around a scan location.  The policy reduces the three per-ring counts to
//! one density score and maps scores to a bounded fill opacity.  Every
//! constant that shapes the field is a named, overridable field here — no
//! inline literals in the evaluator.

use crate::error::{GsError, GsResult};

// ── RadiusSet ─────────────────────────────────────────────────────────────────

/// Three ascending coverage radii in metres.
///
/// Ascending order is what makes per-ring counts monotonic: any point inside
/// the tight radius is necessarily inside the medium and loose ones.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadiusSet {
    pub tight: f64,
    pub medium: f64,
    pub loose: f64,
}

impl RadiusSet {
    /// Construct a validated radius set.
    ///
    /// Fails with [`GsError::Config`] unless `0 < tight ≤ medium ≤ loose`.
    pub fn new(tight: f64, medium: f64, loose: f64) -> GsResult<Self> {
        if !(tight > 0.0 && tight <= medium && medium <= loose) {
            return Err(GsError::Config(format!(
                "radii must be positive and ascending, got ({tight}, {medium}, {loose})"
            )));
        }
        Ok(Self { tight, medium, loose })
    }

    /// The radii as an ascending array, index-aligned with per-ring counts.
    #[inline]
    pub fn as_array(self) -> [f64; 3] {
        [self.tight, self.medium, self.loose]
    }
}

impl Default for RadiusSet {
    /// 40 m / 60 m / 80 m.
    fn default() -> Self {
        Self { tight: 40.0, medium: 60.0, loose: 80.0 }
    }
}

// ── DensityPolicy ─────────────────────────────────────────────────────────────

/// Named constants for score reduction and the opacity mapping.
///
/// # Scoring
///
/// A point inside the tight ring contributes 1.0 to the score.  Points
/// caught only by a looser ring contribute with diminishing weight — they
/// are further from the scan centre, so they "cover" it less:
///
/// ```text
/// score = counts[0]
///       + (counts[1] - counts[0]) · medium_weight
///       + (counts[2] - counts[1]) · loose_weight
/// ```
///
/// # Opacity
///
/// `opacity(score) = min(score / score_cap, 1.0) · max_opacity` — total over
/// non-negative scores, saturating at `max_opacity` instead of erroring.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DensityPolicy {
    /// Weight of a point inside the medium ring but outside the tight one.
    pub medium_weight: f64,
    /// Weight of a point inside the loose ring but outside the medium one.
    pub loose_weight: f64,
    /// Score at which the opacity mapping saturates.
    pub score_cap: f64,
    /// Upper bound of the opacity range.
    pub max_opacity: f64,
}

impl DensityPolicy {
    /// Default weight for medium-only points: 4/6.
    pub const MEDIUM_WEIGHT: f64 = 4.0 / 6.0;
    /// Default weight for loose-only points: 4/8.
    pub const LOOSE_WEIGHT: f64 = 4.0 / 8.0;
    /// Default saturation score.
    pub const SCORE_CAP: f64 = 10.0;
    /// Default opacity ceiling.
    pub const MAX_OPACITY: f64 = 0.8;

    /// Reduce per-ring counts to a density score.
    ///
    /// `counts` must be monotonically non-decreasing (guaranteed by the
    /// evaluator for ascending radii).
    #[inline]
    pub fn score(&self, counts: [u32; 3]) -> f64 {
        let tight = counts[0] as f64;
        let medium_only = (counts[1] - counts[0]) as f64;
        let loose_only = (counts[2] - counts[1]) as f64;
        tight + medium_only * self.medium_weight + loose_only * self.loose_weight
    }

    /// Map a density score to a fill opacity in `[0, max_opacity]`.
    #[inline]
    pub fn opacity(&self, score: f64) -> f64 {
        (score / self.score_cap).clamp(0.0, 1.0) * self.max_opacity
    }
}

impl Default for DensityPolicy {
    fn default() -> Self {
        Self {
            medium_weight: Self::MEDIUM_WEIGHT,
            loose_weight:  Self::LOOSE_WEIGHT,
            score_cap:     Self::SCORE_CAP,
            max_opacity:   Self::MAX_OPACITY,
        }
    }
}
