//! The `Scanner` driver and its incremental step loop.

use std::time::Instant;

use gs_core::{CellId, DensityPolicy, GeoPoint, RadiusSet, ScanConfig};
use gs_grid::{generate_grid, ScanGrid};

use crate::evaluate::DensitySample;
use crate::field::DensityField;
use crate::index::PointIndex;
use crate::observer::ScanObserver;
use crate::{ScanError, ScanResult};

// ── Lifecycle ─────────────────────────────────────────────────────────────────

/// Driver lifecycle: `Idle → Running → {Completed, Cancelled}`.
///
/// Both end states are terminal; a re-scan constructs a fresh [`Scanner`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Running,
    Completed,
    Cancelled,
}

/// What one [`Scanner::step`] call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not started yet; nothing was evaluated.
    Idle,
    /// A batch was evaluated and more cells remain.
    Progressed { completed: usize, total: usize },
    /// The grid is exhausted (this step or a previous one).
    Completed,
    /// Cancellation was honoured (this step or a previous one).
    Cancelled,
}

// ── Scanner ───────────────────────────────────────────────────────────────────

/// Incremental, cancellable scan driver.
///
/// Holds all scan state explicitly — grid, cursor, accumulated samples —
/// and exposes the sweep as a scheduler-agnostic [`step`][Self::step]
/// operation.  The host decides when steps happen: a UI calls one step per
/// event-loop turn, a batch job loops [`run`][Self::run].  The driver never
/// evaluates more than one batch between yield points, so a large grid
/// cannot freeze the host.
///
/// The input points are borrowed read-only for the scan's duration; the
/// hot path mutates nothing shared, so independent scans on independent
/// `Scanner` instances need no synchronization.
///
/// # Example
///
/// ```rust,ignore
/// let mut scanner = Scanner::new(&points, ScanConfig::default())?;
/// scanner.start()?;
/// loop {
///     match scanner.step(&mut observer) {
///         StepOutcome::Progressed { .. } => host.yield_to_event_loop(),
///         _ => break,
///     }
/// }
/// ```
pub struct Scanner<'p> {
    grid: ScanGrid,
    points: &'p [GeoPoint],
    index: PointIndex,
    radii: RadiusSet,
    policy: DensityPolicy,
    /// Cells evaluated per step; at least 1 or no step would make progress.
    batch: usize,
    /// Next cell to evaluate; also the completed-cell count.
    cursor: usize,
    samples: Vec<DensitySample>,
    phase: ScanPhase,
    cancel_requested: bool,
    started_at: Option<Instant>,
    field: Option<DensityField>,
}

impl<'p> Scanner<'p> {
    // ── Construction ──────────────────────────────────────────────────────

    /// Build the grid and point index for a scan over `points`.
    ///
    /// Fails fast with [`ScanError::EmptyInput`] on an empty point set and
    /// propagates grid-generation errors synchronously — the driver never
    /// enters `Running` on bad input.
    pub fn new(points: &'p [GeoPoint], config: ScanConfig) -> ScanResult<Self> {
        if points.is_empty() {
            return Err(ScanError::EmptyInput);
        }
        let grid = generate_grid(points, config.step_m, config.pad_m)?;
        let samples = Vec::with_capacity(grid.len());
        Ok(Self {
            grid,
            points,
            index: PointIndex::build(points),
            radii: config.radii,
            policy: config.policy,
            batch: config.batch.max(1),
            cursor: 0,
            samples,
            phase: ScanPhase::Idle,
            cancel_requested: false,
            started_at: None,
            field: None,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Transition `Idle → Running` and start the elapsed-time clock.
    ///
    /// Any other phase fails with [`ScanError::AlreadyRunning`]: the driver
    /// is single-shot and supports at most one active scan.
    pub fn start(&mut self) -> ScanResult<()> {
        if self.phase != ScanPhase::Idle {
            return Err(ScanError::AlreadyRunning);
        }
        self.phase = ScanPhase::Running;
        self.started_at = Some(Instant::now());
        Ok(())
    }

    /// Evaluate at most one batch of cells, then return to the caller.
    ///
    /// This is the yield point: cancellation is checked on entry (between
    /// units, never mid-cell), `on_progress` fires once per evaluated cell,
    /// and exhausting the grid fires `on_complete` exactly once with the
    /// full field.  Calling `step` outside `Running` reports the current
    /// phase without callbacks.
    pub fn step<O: ScanObserver>(&mut self, observer: &mut O) -> StepOutcome {
        match self.phase {
            ScanPhase::Idle => return StepOutcome::Idle,
            ScanPhase::Completed => return StepOutcome::Completed,
            ScanPhase::Cancelled => return StepOutcome::Cancelled,
            ScanPhase::Running => {}
        }

        if self.cancel_requested {
            self.phase = ScanPhase::Cancelled;
            observer.on_cancelled(self.cursor, self.grid.len());
            return StepOutcome::Cancelled;
        }

        let total = self.grid.len();
        let end = (self.cursor + self.batch).min(total);
        while self.cursor < end {
            let cell = CellId(self.cursor as u32);
            let location = self.grid.locations()[self.cursor];
            let sample = self.index.evaluate(location, self.radii, self.policy);
            self.samples.push(sample);
            self.cursor += 1;
            observer.on_progress(cell, location, &sample, self.cursor, total);
        }

        if self.cursor == total {
            self.phase = ScanPhase::Completed;
            let field = DensityField {
                grid: self.grid.clone(),
                samples: std::mem::take(&mut self.samples),
                radii: self.radii,
                policy: self.policy,
                point_count: self.points.len(),
                elapsed: self.started_at.map(|t| t.elapsed()).unwrap_or_default(),
            };
            observer.on_complete(&field);
            self.field = Some(field);
            StepOutcome::Completed
        } else {
            StepOutcome::Progressed { completed: self.cursor, total }
        }
    }

    /// Request cooperative cancellation.
    ///
    /// Takes effect at the next [`step`][Self::step] call — the in-flight
    /// batch always finishes.  Idempotent: cancelling an idle, completed,
    /// or already-cancelled scan is a no-op, not an error.
    pub fn cancel(&mut self) {
        if self.phase == ScanPhase::Running {
            self.cancel_requested = true;
        }
    }

    /// Start and drive the scan to a terminal phase in one call.
    ///
    /// Convenience for tests and batch use.  Hosts with an event loop
    /// should call [`start`][Self::start] once and then
    /// [`step`][Self::step] between turns instead — the full sweep is
    /// O(cells · points) and would block for its entire duration here.
    pub fn run<O: ScanObserver>(&mut self, observer: &mut O) -> ScanResult<()> {
        self.start()?;
        loop {
            match self.step(observer) {
                StepOutcome::Progressed { .. } => continue,
                _ => return Ok(()),
            }
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Current lifecycle phase.
    #[inline]
    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    /// Cells evaluated so far.
    #[inline]
    pub fn completed(&self) -> usize {
        self.cursor
    }

    /// Total cells in the grid.
    #[inline]
    pub fn total(&self) -> usize {
        self.grid.len()
    }

    /// Completed fraction in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.grid.is_empty() {
            return 1.0;
        }
        self.cursor as f64 / self.grid.len() as f64
    }

    /// The completed field, once the phase is `Completed`.
    #[inline]
    pub fn field(&self) -> Option<&DensityField> {
        self.field.as_ref()
    }

    /// Consume the driver and take ownership of the completed field.
    pub fn into_field(self) -> Option<DensityField> {
        self.field
    }
}

// ── One-shot evaluation ───────────────────────────────────────────────────────

/// Evaluate the whole field in one call, without driver ceremony.
///
/// With the `parallel` Cargo feature the per-cell evaluation fans out on
/// Rayon's thread pool; cells are collected back in grid order, so the
/// result is identical to the sequential path.
pub fn scan_field(points: &[GeoPoint], config: &ScanConfig) -> ScanResult<DensityField> {
    if points.is_empty() {
        return Err(ScanError::EmptyInput);
    }
    let grid = generate_grid(points, config.step_m, config.pad_m)?;
    let index = PointIndex::build(points);
    let started = Instant::now();

    #[cfg(not(feature = "parallel"))]
    let samples: Vec<DensitySample> = grid
        .locations()
        .iter()
        .map(|&loc| index.evaluate(loc, config.radii, config.policy))
        .collect();

    #[cfg(feature = "parallel")]
    let samples: Vec<DensitySample> = {
        use rayon::prelude::*;
        grid.locations()
            .par_iter()
            .map(|&loc| index.evaluate(loc, config.radii, config.policy))
            .collect()
    };

    Ok(DensityField {
        grid,
        samples,
        radii: config.radii,
        policy: config.policy,
        point_count: points.len(),
        elapsed: started.elapsed(),
    })
}
