//! `gs-points` — input point acquisition for the gridscan coverage engine.
//!
//! The scanner itself is feed-agnostic: it takes a `&[GeoPoint]`.  This
//! crate parses the JSON shape the point-source API actually returns and
//! reduces it to those coordinate pairs.
//!
//! | Module    | Contents                                    |
//! |-----------|---------------------------------------------|
//! | [`feed`]  | `PointRecord`, JSON loaders, `positions`    |
//! | [`error`] | `PointsError`, `PointsResult`               |

pub mod error;
pub mod feed;

#[cfg(test)]
mod tests;

pub use error::{PointsError, PointsResult};
pub use feed::{load_points_json, load_points_reader, positions, PointRecord};
