//! Integration tests for gs-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{DensityCellRow, ScanSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn cell_row(cell: u32) -> DensityCellRow {
        DensityCellRow {
            cell,
            lat: 35.0,
            lon: 135.0,
            count_tight: 1,
            count_medium: 2,
            count_loose: 3,
            score: 2.1,
            opacity: 0.168,
        }
    }

    fn summary_row() -> ScanSummaryRow {
        ScanSummaryRow {
            total_cells: 529,
            point_count: 12,
            step_m: 10.0,
            radius_tight_m: 40.0,
            radius_medium_m: 60.0,
            radius_loose_m: 80.0,
            elapsed_ms: 42,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("density_cells.csv").exists());
        assert!(dir.path().join("scan_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("density_cells.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["cell", "lat", "lon", "count_tight", "count_medium", "count_loose", "score", "opacity"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("scan_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["total_cells", "point_count", "step_m",
             "radius_tight_m", "radius_medium_m", "radius_loose_m", "elapsed_ms"]
        );
    }

    #[test]
    fn csv_cell_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_cells(&[cell_row(0), cell_row(1), cell_row(2)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("density_cells.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][0], "1");   // cell
        assert_eq!(&rows[1][3], "1");   // count_tight
        assert_eq!(&rows[1][5], "3");   // count_loose
    }

    #[test]
    fn csv_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&summary_row()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("scan_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "529"); // total_cells
        assert_eq!(&rows[0][1], "12");  // point_count
        assert_eq!(&rows[0][6], "42");  // elapsed_ms
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_cell_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_cells(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use gs_core::{GeoPoint, ScanConfig};
    use gs_scan::{scan_field, Scanner, StepOutcome};

    use crate::csv::CsvWriter;
    use crate::observer::{write_field, ScanOutputObserver};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn small_config() -> ScanConfig {
        ScanConfig { step_m: 20.0, ..Default::default() }
    }

    fn cell_count(dir: &TempDir) -> usize {
        let mut rdr = csv::Reader::from_path(dir.path().join("density_cells.csv")).unwrap();
        rdr.records().count()
    }

    #[test]
    fn streams_one_row_per_cell_plus_summary() {
        let dir = tmp();
        let points = vec![GeoPoint::new(35.0, 135.0)];
        let config = small_config();

        let mut scanner = Scanner::new(&points, config).unwrap();
        let total = scanner.total();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = ScanOutputObserver::new(writer, config.policy);
        scanner.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        assert_eq!(cell_count(&dir), total);

        let mut rdr = csv::Reader::from_path(dir.path().join("scan_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], &total.to_string());
        assert_eq!(&rows[0][1], "1"); // point_count
        assert_eq!(&rows[0][2], "20");
    }

    #[test]
    fn cancelled_scan_flushes_partial_field() {
        let dir = tmp();
        let points = vec![GeoPoint::new(35.0, 135.0)];
        let config = small_config();

        let mut scanner = Scanner::new(&points, config).unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = ScanOutputObserver::new(writer, config.policy);

        scanner.start().unwrap();
        for _ in 0..5 {
            scanner.step(&mut obs);
        }
        scanner.cancel();
        assert_eq!(scanner.step(&mut obs), StepOutcome::Cancelled);
        assert!(obs.take_error().is_none());

        assert_eq!(cell_count(&dir), 5);
        let mut rdr = csv::Reader::from_path(dir.path().join("scan_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 0); // no summary for a cancelled scan
    }

    #[test]
    fn write_field_one_shot_matches_streaming() {
        let dir = tmp();
        let points = vec![GeoPoint::new(35.0, 135.0), GeoPoint::new(35.0005, 135.0005)];
        let config = small_config();

        let field = scan_field(&points, &config).unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        write_field(&mut writer, &field).unwrap();

        assert_eq!(cell_count(&dir), field.len());
    }
}
