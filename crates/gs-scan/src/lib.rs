//! `gs-scan` — coverage evaluation and the scan driver for the gridscan
//! coverage engine.
//!
//! # Scan loop
//!
//! ```text
//! Scanner::new   — validate input, build grid + point index      (Idle)
//! start          — Idle → Running, elapsed clock starts
//! step ×N        — per call: honour a pending cancel, else evaluate one
//!                  batch of cells (on_progress per cell), yield
//!                  on grid exhaustion → Completed, on_complete(field)
//!                  on cancel         → Cancelled, on_cancelled
//! ```
//!
//! The evaluation hot path is pure and reads only immutable shared state,
//! so independent scans need no locking — one `Scanner` per scan.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`scan_field`] evaluates cells on Rayon's thread pool. |
//! | `serde`    | Serde derives on sample/field types.                   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gs_core::ScanConfig;
//! use gs_scan::{NoopObserver, Scanner};
//!
//! let mut scanner = Scanner::new(&points, ScanConfig::default())?;
//! scanner.run(&mut NoopObserver)?;
//! let field = scanner.into_field().unwrap();
//! println!("{} cells", field.len());
//! ```

pub mod driver;
pub mod error;
pub mod evaluate;
pub mod field;
pub mod index;
pub mod observer;


pub use driver::{scan_field, ScanPhase, Scanner, StepOutcome};
pub use error::{ScanError, ScanResult};
pub use evaluate::{evaluate, DensitySample};
pub use field::DensityField;
pub use index::PointIndex;
pub use observer::{NoopObserver, ScanObserver};
