//! `gs-output` — density-field export for the gridscan coverage engine.
//!
//! The CSV backend creates two files in the output directory:
//!
//! | File                 | Contents                                   |
//! |----------------------|--------------------------------------------|
//! | `density_cells.csv`  | one row per grid cell (counts, score, opacity) |
//! | `scan_summaries.csv` | one row per scan (totals, config, elapsed) |
//!
//! Backends implement [`OutputWriter`] and are driven either incrementally
//! by [`ScanOutputObserver`] (which implements `gs_scan::ScanObserver`) or
//! in one shot by [`write_field`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use gs_output::{CsvWriter, ScanOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ScanOutputObserver::new(writer, config.policy);
//! scanner.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::{write_field, ScanOutputObserver};
pub use row::{DensityCellRow, ScanSummaryRow};
pub use writer::OutputWriter;
