//! Padded bounding region derived from an input point set.

use gs_core::GeoPoint;

use crate::{GridError, GridResult};

/// Axis-aligned lat/lon bounds, degrees.
///
/// Derived from the raw min/max over the input points, then expanded
/// outward with [`padded`][Self::padded] so points sitting on the raw
/// boundary are not under-counted by cells just outside it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub south: f64,
    pub west:  f64,
    pub north: f64,
    pub east:  f64,
}

impl BoundingBox {
    /// Raw min/max bounds over `points`.
    ///
    /// Fails with [`GridError::EmptyInput`] on an empty slice — no bounding
    /// region is definable.
    pub fn from_points(points: &[GeoPoint]) -> GridResult<Self> {
        let first = points.first().ok_or(GridError::EmptyInput)?;
        let mut bbox = Self {
            south: first.lat,
            west:  first.lon,
            north: first.lat,
            east:  first.lon,
        };
        for p in &points[1..] {
            bbox.south = bbox.south.min(p.lat);
            bbox.west  = bbox.west.min(p.lon);
            bbox.north = bbox.north.max(p.lat);
            bbox.east  = bbox.east.max(p.lon);
        }
        Ok(bbox)
    }

    /// Expand the box by `pad_m` metres of slack on each axis.
    ///
    /// The south-west corner moves `pad_m·√2` along bearing 225° and the
    /// north-east corner `pad_m·√2` along bearing 45°, so each side of the
    /// box gains `pad_m` metres.  `pad_m` must be non-negative.
    pub fn padded(self, pad_m: f64) -> Self {
        let diagonal = pad_m * std::f64::consts::SQRT_2;
        let sw = GeoPoint::new(self.south, self.west).destination(diagonal, 225.0);
        let ne = GeoPoint::new(self.north, self.east).destination(diagonal, 45.0);
        Self {
            south: sw.lat,
            west:  sw.lon,
            north: ne.lat,
            east:  ne.lon,
        }
    }

    /// Whether `p` lies inside the box (boundary inclusive).
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.south..=self.north).contains(&p.lat) && (self.west..=self.east).contains(&p.lon)
    }

    /// The sweep origin corner.
    #[inline]
    pub fn south_west(&self) -> GeoPoint {
        GeoPoint::new(self.south, self.west)
    }

    /// The sweep terminal corner.
    #[inline]
    pub fn north_east(&self) -> GeoPoint {
        GeoPoint::new(self.north, self.east)
    }
}
