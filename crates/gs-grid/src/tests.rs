//! Unit tests for bounding boxes and grid generation.

use gs_core::GeoPoint;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn cluster() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(35.000, 135.000),
        GeoPoint::new(35.002, 135.001),
        GeoPoint::new(34.999, 135.003),
        GeoPoint::new(35.001, 134.998),
    ]
}

#[cfg(test)]
mod bbox_tests {
    use super::*;
    use crate::{BoundingBox, GridError};

    #[test]
    fn empty_input_errors() {
        let result = BoundingBox::from_points(&[]);
        assert!(matches!(result, Err(GridError::EmptyInput)));
    }

    #[test]
    fn raw_bounds_are_min_max() {
        let bbox = BoundingBox::from_points(&cluster()).unwrap();
        assert_eq!(bbox.south, 34.999);
        assert_eq!(bbox.west, 134.998);
        assert_eq!(bbox.north, 35.002);
        assert_eq!(bbox.east, 135.003);
    }

    #[test]
    fn padding_expands_every_side() {
        let raw = BoundingBox::from_points(&cluster()).unwrap();
        let padded = raw.padded(100.0);
        assert!(padded.south < raw.south);
        assert!(padded.west < raw.west);
        assert!(padded.north > raw.north);
        assert!(padded.east > raw.east);
    }

    #[test]
    fn padding_gives_pad_metres_per_axis() {
        let raw = BoundingBox::from_points(&[GeoPoint::new(35.0, 135.0)]).unwrap();
        let padded = raw.padded(100.0);
        let south_slack = GeoPoint::new(padded.south, 135.0)
            .distance_m(GeoPoint::new(raw.south, 135.0));
        assert!((south_slack - 100.0).abs() < 0.5, "got {south_slack}");
    }

    #[test]
    fn padded_box_contains_all_points() {
        let points = cluster();
        let padded = BoundingBox::from_points(&points).unwrap().padded(113.14);
        for p in &points {
            assert!(padded.contains(*p), "{p} outside padded box");
        }
    }

    #[test]
    fn zero_pad_is_identity() {
        let raw = BoundingBox::from_points(&cluster()).unwrap();
        assert_eq!(raw.padded(0.0), raw);
    }
}

#[cfg(test)]
mod grid_tests {
    use super::*;
    use crate::{generate_grid, GridError};
    use gs_core::CellId;

    const STEP: f64 = 10.0;
    const PAD: f64 = 113.137; // 80 · √2

    #[test]
    fn empty_input_errors() {
        assert!(matches!(generate_grid(&[], STEP, PAD), Err(GridError::EmptyInput)));
    }

    #[test]
    fn non_positive_step_errors() {
        let points = cluster();
        assert!(matches!(generate_grid(&points, 0.0, PAD), Err(GridError::InvalidStep(_))));
        assert!(matches!(generate_grid(&points, -5.0, PAD), Err(GridError::InvalidStep(_))));
        assert!(matches!(generate_grid(&points, f64::NAN, PAD), Err(GridError::InvalidStep(_))));
    }

    #[test]
    fn deterministic_across_runs() {
        let points = cluster();
        let a = generate_grid(&points, STEP, PAD).unwrap();
        let b = generate_grid(&points, STEP, PAD).unwrap();
        assert_eq!(a.len(), b.len());
        assert_eq!(a.locations(), b.locations());
    }

    #[test]
    fn single_point_grid_length_bound() {
        // Padded span per axis ≈ 2 · 113.137 m → at most 24 rows × 24 cols
        // of 10 m steps, at least 22 × 22.
        let grid = generate_grid(&[GeoPoint::new(35.0, 135.0)], STEP, PAD).unwrap();
        assert!(grid.len() <= 24 * 24, "got {}", grid.len());
        assert!(grid.len() >= 22 * 22, "got {}", grid.len());
    }

    #[test]
    fn sweep_is_south_to_north_reset_per_row() {
        let grid = generate_grid(&[GeoPoint::new(35.0, 135.0)], STEP, PAD).unwrap();
        let cells = grid.locations();
        for pair in cells.windows(2) {
            let (cur, next) = (pair[0], pair[1]);
            if next.lon > cur.lon {
                // Same row: latitude steady (great-circle drift is sub-µm).
                assert!((next.lat - cur.lat).abs() < 1e-6);
            } else {
                // Row wrap: one step north, back to the western bound.
                assert!(next.lat > cur.lat);
                assert!(next.lon < cur.lon);
            }
        }
    }

    #[test]
    fn origin_is_south_west_corner() {
        let grid = generate_grid(&cluster(), STEP, PAD).unwrap();
        let first = grid.locations()[0];
        for &c in grid.locations() {
            assert!(c.lat >= first.lat - 1e-9);
            assert!(c.lon >= first.lon - 1e-9);
        }
    }

    #[test]
    fn some_cell_lands_near_each_input_point() {
        // With a 10 m step, the nearest cell to any interior point is at
        // most ~step/√2 away; allow a full step of slack.
        let points = cluster();
        let grid = generate_grid(&points, STEP, PAD).unwrap();
        for p in &points {
            let nearest = grid
                .locations()
                .iter()
                .map(|c| c.distance_m(*p))
                .fold(f64::INFINITY, f64::min);
            assert!(nearest <= STEP, "nearest cell to {p} is {nearest} m away");
        }
    }

    #[test]
    fn accessors() {
        let grid = generate_grid(&cluster(), STEP, PAD).unwrap();
        assert!(!grid.is_empty());
        assert_eq!(grid.step_m(), STEP);
        assert_eq!(grid.get(CellId(0)), Some(grid.locations()[0]));
        assert_eq!(grid.get(CellId(grid.len() as u32)), None);

        let ids: Vec<u32> = grid.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids.len(), grid.len());
        assert!(ids.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn coarser_step_means_fewer_cells() {
        let points = cluster();
        let fine = generate_grid(&points, 10.0, PAD).unwrap();
        let coarse = generate_grid(&points, 40.0, PAD).unwrap();
        assert!(coarse.len() < fine.len());
    }
}
