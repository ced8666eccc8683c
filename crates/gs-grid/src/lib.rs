//! `gs-grid` — scan lattice construction for the gridscan coverage engine.
//!
//! Turns an input point set into an ordered, finite sequence of scan
//! locations: derive the raw lat/lon bounds, pad them outward so boundary
//! points keep their full coverage rings, then sweep the padded region at a
//! fixed linear step.
//!
//! | Module   | Contents                                  |
//! |----------|-------------------------------------------|
//! | [`bbox`] | `BoundingBox` — raw bounds + padding      |
//! | [`grid`] | `ScanGrid`, `generate_grid`               |
//! | [`error`]| `GridError`, `GridResult`                 |

pub mod bbox;
pub mod error;
pub mod grid;

#[cfg(test)]
mod tests;

pub use bbox::BoundingBox;
pub use error::{GridError, GridResult};
pub use grid::{generate_grid, ScanGrid};
