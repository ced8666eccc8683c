//! Pure per-cell coverage evaluation.

use gs_core::{DensityPolicy, GeoPoint, RadiusSet};

/// Coverage measured at one scan location.
///
/// `counts[i]` is the number of input points within `radii.as_array()[i]`
/// metres.  Radii ascend, so counts are monotonically non-decreasing: any
/// point inside the tight ring is inside the medium and loose ones too.
/// Opacity is NOT stored here — it is a presentation concern derived from
/// `score` via [`DensityPolicy::opacity`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DensitySample {
    /// Points within each ring, tight → loose.
    pub counts: [u32; 3],
    /// Policy-reduced density score.
    pub score: f64,
}

/// Count the input points within each coverage ring of `location` and
/// reduce the counts to a density score.
///
/// Pure function of its arguments: it only reads the shared immutable
/// point set, so it is safe to call concurrently for different locations.
/// Ring membership is boundary-inclusive (`distance ≤ radius`).
pub fn evaluate(
    location: GeoPoint,
    points:   &[GeoPoint],
    radii:    RadiusSet,
    policy:   DensityPolicy,
) -> DensitySample {
    let mut counts = [0u32; 3];
    for &p in points {
        let d = location.distance_m(p);
        if d <= radii.tight {
            counts[0] += 1;
        }
        if d <= radii.medium {
            counts[1] += 1;
        }
        if d <= radii.loose {
            counts[2] += 1;
        }
    }
    DensitySample { counts, score: policy.score(counts) }
}
