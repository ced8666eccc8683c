//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `density_cells.csv`
//! - `scan_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DensityCellRow, OutputResult, ScanSummaryRow};

/// Writes scan output to two CSV files.
pub struct CsvWriter {
    cells:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut cells = Writer::from_path(dir.join("density_cells.csv"))?;
        cells.write_record([
            "cell", "lat", "lon", "count_tight", "count_medium", "count_loose", "score", "opacity",
        ])?;

        let mut summaries = Writer::from_path(dir.join("scan_summaries.csv"))?;
        summaries.write_record([
            "total_cells", "point_count", "step_m",
            "radius_tight_m", "radius_medium_m", "radius_loose_m", "elapsed_ms",
        ])?;

        Ok(Self {
            cells,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_cells(&mut self, rows: &[DensityCellRow]) -> OutputResult<()> {
        for row in rows {
            self.cells.write_record(&[
                row.cell.to_string(),
                row.lat.to_string(),
                row.lon.to_string(),
                row.count_tight.to_string(),
                row.count_medium.to_string(),
                row.count_loose.to_string(),
                row.score.to_string(),
                row.opacity.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &ScanSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.total_cells.to_string(),
            row.point_count.to_string(),
            row.step_m.to_string(),
            row.radius_tight_m.to_string(),
            row.radius_medium_m.to_string(),
            row.radius_loose_m.to_string(),
            row.elapsed_ms.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.cells.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
