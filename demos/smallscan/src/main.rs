//! smallscan — smallest end-to-end example for the gridscan coverage engine.
//!
//! Scans a dozen points of interest in central Kyoto with the default
//! 40/60/80 m coverage rings and a 10 m grid step, streaming the density
//! field to CSV while printing progress.  Swap the embedded feed for a real
//! point-source response to scan live data.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use gs_core::{CellId, GeoPoint, ScanConfig};
use gs_output::{CsvWriter, OutputWriter, ScanOutputObserver};
use gs_points::{load_points_reader, positions};
use gs_scan::{DensityField, DensitySample, PointIndex, ScanObserver, Scanner};

// ── Constants ─────────────────────────────────────────────────────────────────

const STEP_M: f64 = 10.0;
const OUTPUT_DIR: &str = "output/smallscan";
const REPORT_EVERY_PCT: usize = 10;

// ── Embedded point feed ───────────────────────────────────────────────────────

// The same JSON shape the point-source API returns for a location query.
const POINTS_JSON: &str = r#"[
  { "id": 101, "title": "Sanjo Bridge East",    "latlng": [35.0096, 135.7726] },
  { "id": 102, "title": "Sanjo Bridge West",    "latlng": [35.0094, 135.7718] },
  { "id": 103, "title": "Takase Canal Marker",  "latlng": [35.0091, 135.7701] },
  { "id": 104, "title": "Kiyamachi Lantern",    "latlng": [35.0088, 135.7705] },
  { "id": 105, "title": "Pontocho Gate",        "latlng": [35.0086, 135.7710] },
  { "id": 106, "title": "Kamo Riverbank Stele", "latlng": [35.0083, 135.7719] },
  { "id": 107, "title": "Shrine Fox Statue",    "latlng": [35.0102, 135.7731] },
  { "id": 108, "title": "Old Post Office",      "latlng": [35.0105, 135.7712] },
  { "id": 109, "title": "Tea House Sign",       "latlng": [35.0099, 135.7694] },
  { "id": 110, "title": "Stone Garden Wall",    "latlng": [35.0079, 135.7695] },
  { "id": 111, "title": "Canal Footbridge",     "latlng": [35.0075, 135.7707] },
  { "id": 112, "title": "River Terrace Steps",  "latlng": [35.0078, 135.7724] }
]"#;

// ── Progress wrapper ──────────────────────────────────────────────────────────

/// Prints coarse progress while delegating every callback to the CSV
/// output observer.
struct ProgressObserver<W: OutputWriter> {
    inner: ScanOutputObserver<W>,
    cell_rows: usize,
    next_report_pct: usize,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: ScanOutputObserver<W>) -> Self {
        Self { inner, cell_rows: 0, next_report_pct: REPORT_EVERY_PCT }
    }
}

impl<W: OutputWriter> ScanObserver for ProgressObserver<W> {
    fn on_progress(
        &mut self,
        cell: CellId,
        location: GeoPoint,
        sample: &DensitySample,
        completed: usize,
        total: usize,
    ) {
        self.inner.on_progress(cell, location, sample, completed, total);
        self.cell_rows += 1;
        let pct = completed * 100 / total;
        if pct >= self.next_report_pct {
            println!("  {completed:>5}/{total} cells ({pct:>3}%) — marker at {location}");
            self.next_report_pct = pct + REPORT_EVERY_PCT;
        }
    }

    fn on_complete(&mut self, field: &DensityField) {
        self.inner.on_complete(field);
    }

    fn on_cancelled(&mut self, completed: usize, total: usize) {
        self.inner.on_cancelled(completed, total);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== smallscan — gridscan coverage engine ===");

    // 1. Load the point feed.
    let records = load_points_reader(Cursor::new(POINTS_JSON))?;
    let points = positions(&records);
    println!("Loaded {} points of interest", points.len());

    // 2. Configure the scan: 10 m grid, default rings and padding.
    let config = ScanConfig { step_m: STEP_M, ..Default::default() };
    println!(
        "Rings: {:.0}/{:.0}/{:.0} m  |  step: {:.0} m  |  pad: {:.1} m",
        config.radii.tight, config.radii.medium, config.radii.loose,
        config.step_m, config.pad_m,
    );

    // 3. Build the driver (grid + point index).
    let mut scanner = Scanner::new(&points, config)?;
    println!("Grid: {} scan locations", scanner.total());
    println!();

    // 4. Stream output to CSV while scanning.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = ProgressObserver::new(ScanOutputObserver::new(writer, config.policy));

    let t0 = Instant::now();
    scanner.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    let field = scanner.into_field().context("scan ended without a field")?;
    println!();
    println!("Scan complete in {:.3} s", elapsed.as_secs_f64());
    println!("  points scanned   : {}", field.point_count);
    println!("  grid locations   : {}", field.len());
    println!("  density_cells.csv: {} rows", obs.cell_rows);

    // 6. Where is coverage densest?
    let index = PointIndex::build(&points);
    if let Some(peak) = field.peak_cell() {
        let loc = field.grid.get(peak).context("peak cell out of range")?;
        let sample = field.sample(peak).context("peak sample out of range")?;
        let nearest = index
            .nearest(loc)
            .map(|id| records[id.index()].title.as_str())
            .unwrap_or("?");
        println!();
        println!(
            "Peak density at {loc}: counts {:?}, score {:.2}, opacity {:.2} (nearest: \"{nearest}\")",
            sample.counts,
            sample.score,
            field.policy.opacity(sample.score),
        );
    }

    Ok(())
}
