//! JSON point-feed loader.
//!
//! # Feed format
//!
//! The point source answers location queries with a JSON array, one object
//! per point of interest:
//!
//! ```json
//! [
//!   { "id": 8231, "title": "Clock Tower", "latlng": [35.011, 135.768] },
//!   { "id": 8240, "title": "Fountain",    "latlng": [35.012, 135.770] }
//! ]
//! ```
//!
//! `latlng` is `[latitude, longitude]` in decimal degrees.  Objects may
//! carry additional fields (images, addresses, timestamps); they are
//! ignored — the scanner only needs the coordinate pairs.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use gs_core::GeoPoint;

use crate::{PointsError, PointsResult};

// ── Feed record ───────────────────────────────────────────────────────────────

/// One point of interest as delivered by the feed.
#[derive(Clone, Debug, Deserialize)]
pub struct PointRecord {
    /// Feed-assigned identifier (opaque to the scanner).
    pub id: i64,
    /// Human-readable name.
    pub title: String,
    /// `[latitude, longitude]`, decimal degrees.
    pub latlng: [f64; 2],
}

impl PointRecord {
    /// The record's coordinate as a normalized [`GeoPoint`].
    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latlng[0], self.latlng[1])
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load point records from a JSON file.
pub fn load_points_json(path: &Path) -> PointsResult<Vec<PointRecord>> {
    let file = std::fs::File::open(path).map_err(PointsError::Io)?;
    load_points_reader(file)
}

/// Like [`load_points_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading straight from
/// an HTTP response body.
pub fn load_points_reader<R: Read>(reader: R) -> PointsResult<Vec<PointRecord>> {
    serde_json::from_reader(reader).map_err(|e| PointsError::Parse(e.to_string()))
}

/// Extract the coordinate pairs from a batch of records, in feed order.
pub fn positions(records: &[PointRecord]) -> Vec<GeoPoint> {
    records.iter().map(PointRecord::position).collect()
}
