//! `gs-core` — foundational types for the gridscan coverage engine.
//!
//! This crate is a dependency of every other `gs-*` crate.  It intentionally
//! has no `gs-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`geo`]    | `GeoPoint`, haversine distance, bearing, destination   |
//! | [`ids`]    | `CellId`, `PointId`                                    |
//! | [`policy`] | `RadiusSet`, `DensityPolicy`                           |
//! | [`config`] | `ScanConfig`                                           |
//! | [`error`]  | `GsError`, `GsResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod policy;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ScanConfig;
pub use error::{GsError, GsResult};
pub use geo::{GeoPoint, EARTH_RADIUS_M};
pub use ids::{CellId, PointId};
pub use policy::{DensityPolicy, RadiusSet};
