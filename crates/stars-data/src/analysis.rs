//! Full star-history pipeline.
//!
//! Loads the CSV, builds dated pairs, converts them to weekdays, differences
//! them and sums the deltas per weekday, returning an [`AnalysisResult`]
//! ready for formatting.

use std::path::Path;

use chrono::Utc;
use stars_core::error::{Result, StarsError};
use stars_core::models::{DatedPair, LargestChange, WeekdayPair, WeekdayTotals};
use tracing::{debug, info};

use crate::aggregator::WeekdayAggregator;
use crate::analyzer::{build_pairs, compute_differences, find_largest_change, to_weekday_pairs};
use crate::reader::{extract_row, load_lines};

// ── Public types ──────────────────────────────────────────────────────────────

/// Which lines of the file hold the dates and the cumulative star counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    pub date_row: usize,
    pub star_row: usize,
}

impl Default for RowLayout {
    fn default() -> Self {
        Self {
            date_row: 0,
            star_row: 1,
        }
    }
}

/// Metadata produced alongside the analysis result.
#[derive(Debug, Clone)]
pub struct AnalysisMetadata {
    /// RFC 3339 timestamp when this result was generated.
    pub generated_at: String,
    /// Number of physical lines read from the input.
    pub lines_read: usize,
    /// Number of (date, stars) observations.
    pub observations: usize,
    /// Wall-clock seconds spent reading the input file.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent parsing, differencing and aggregating.
    pub transform_time_seconds: f64,
}

/// The complete output of [`analyze_stars`].
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Parsed cumulative observations, in file order.
    pub pairs: Vec<DatedPair>,
    /// Per-position star deltas keyed by weekday.
    pub weekday_differences: Vec<WeekdayPair>,
    /// Deltas summed per weekday.
    pub totals: WeekdayTotals,
    /// Biggest step-to-step change, `None` with fewer than two observations.
    pub largest_change: Option<LargestChange>,
    pub metadata: AnalysisMetadata,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the full pipeline on the file at `path`.
///
/// Any failure aborts the run; no partial result is returned.
pub fn analyze_stars(path: &Path, layout: RowLayout) -> Result<AnalysisResult> {
    let load_start = std::time::Instant::now();
    let lines = load_lines(path)?;
    let load_time = load_start.elapsed().as_secs_f64();

    let mut result = analyze_lines(&lines, layout)?;
    result.metadata.load_time_seconds = load_time;

    info!(
        "Analysed {} observations from {} in {:.3}s",
        result.metadata.observations,
        path.display(),
        load_time + result.metadata.transform_time_seconds
    );
    Ok(result)
}

/// Run every stage after loading on already-read lines.
pub fn analyze_lines(lines: &[String], layout: RowLayout) -> Result<AnalysisResult> {
    let transform_start = std::time::Instant::now();

    // ── Step 1: Rows ──────────────────────────────────────────────────────────
    let dates = extract_row(lines, layout.date_row)?;
    let stars = extract_row(lines, layout.star_row)?;

    // ── Step 2: Pairs ─────────────────────────────────────────────────────────
    let pairs = build_pairs(&dates, &stars)?;
    debug!("Built {} dated pairs", pairs.len());

    // ── Step 3: Weekdays and deltas ───────────────────────────────────────────
    let weekday_pairs = to_weekday_pairs(&pairs)?;
    let weekday_differences = compute_differences(&weekday_pairs);

    // ── Step 4: Totals ────────────────────────────────────────────────────────
    let totals = WeekdayAggregator::aggregate_by_weekday(&weekday_differences);

    // ── Step 5: Largest change ────────────────────────────────────────────────
    let largest_change = largest_dated_change(&pairs)?;

    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        lines_read: lines.len(),
        observations: pairs.len(),
        load_time_seconds: 0.0,
        transform_time_seconds: transform_start.elapsed().as_secs_f64(),
    };

    Ok(AnalysisResult {
        pairs,
        weekday_differences,
        totals,
        largest_change,
        metadata,
    })
}

// ── Private helpers ───────────────────────────────────────────────────────────

/// Largest change over date-keyed deltas so the result keeps its date.
fn largest_dated_change(pairs: &[DatedPair]) -> Result<Option<LargestChange>> {
    let differences = compute_differences(pairs);
    let Some((position, pair)) = find_largest_change(&differences) else {
        return Ok(None);
    };
    let date = pair.date.ok_or(StarsError::MissingDate { position })?;
    Ok(Some(LargestChange {
        position,
        date,
        delta: pair.stars,
    }))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
