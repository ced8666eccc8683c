//! Flat row types shared by all backend writers.

/// One density-field cell, ready for tabular output.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityCellRow {
    /// Cell index in sweep order.
    pub cell: u32,
    pub lat: f64,
    pub lon: f64,
    /// Points within the tight ring.
    pub count_tight: u32,
    /// Points within the medium ring.
    pub count_medium: u32,
    /// Points within the loose ring.
    pub count_loose: u32,
    /// Policy-reduced density score.
    pub score: f64,
    /// Render opacity derived from the score.
    pub opacity: f64,
}

/// One row summarizing a completed (or cancelled) scan.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanSummaryRow {
    /// Grid cells written.
    pub total_cells: u64,
    /// Input points scanned against.
    pub point_count: u64,
    /// Grid step, metres.
    pub step_m: f64,
    pub radius_tight_m: f64,
    pub radius_medium_m: f64,
    pub radius_loose_m: f64,
    /// Wall-clock scan duration, milliseconds.
    pub elapsed_ms: u64,
}
