//! Geographic coordinate type and geodesic primitives.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  The engine counts points
//! against 40–80 m radii on a 10 m grid, so metre-level quantization would
//! show up directly in cell counts; double precision keeps the geodesic
//! arithmetic well below that.
//!
//! All operations assume a spherical Earth of mean radius
//! [`EARTH_RADIUS_M`].  Coordinates at or near the poles, or spanning the
//! ±180° meridian, are outside the accuracy guarantees — results there are
//! finite but not trustworthy.

/// Mean Earth radius in metres, shared by all spherical formulas.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in decimal degrees.
///
/// Construction normalizes rather than rejects: longitude is wrapped into
/// `[-180, 180)` and latitude is clamped to `[-90, 90]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat: lat.clamp(-90.0, 90.0),
            lon: (lon + 180.0).rem_euclid(360.0) - 180.0,
        }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Accuracy: within the usual haversine error (< 0.5 % vs. the
    /// ellipsoid), which at the tens-to-hundreds-of-metres scale used here
    /// is centimetres.  A point's distance to itself is exactly 0.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Initial compass bearing from `self` toward `other`, in degrees
    /// `[0, 360)` (0° = north, clockwise).
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        y.atan2(x).to_degrees().rem_euclid(360.0)
    }

    /// The point reached by travelling `distance_m` metres along the great
    /// circle with the given initial bearing.
    ///
    /// Distance 0 returns `self` unchanged.  Negative bearings and bearings
    /// ≥ 360° are accepted (the trigonometry wraps them naturally).
    pub fn destination(self, distance_m: f64, bearing_deg: f64) -> GeoPoint {
        if distance_m == 0.0 {
            return self;
        }
        let delta = distance_m / EARTH_RADIUS_M;
        let theta = bearing_deg.to_radians();

        let lat1 = self.lat.to_radians();
        let lon1 = self.lon.to_radians();

        let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
        let lon2 = lon1
            + (theta.sin() * delta.sin() * lat1.cos())
                .atan2(delta.cos() - lat1.sin() * lat2.sin());

        GeoPoint::new(lat2.to_degrees(), lon2.to_degrees())
    }

    /// Approximate bounding-box check — much cheaper than `distance_m` for
    /// quick rejection before an exact distance test.
    #[inline]
    pub fn within_bbox(self, center: GeoPoint, half_deg: f64) -> bool {
        (self.lat - center.lat).abs() <= half_deg
            && (self.lon - center.lon).abs() <= half_deg
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
