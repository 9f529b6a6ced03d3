//! Star-delta aggregation by weekday.

use stars_core::models::{WeekdayPair, WeekdayTotals};

/// Stateless helper that sums star deltas into weekday buckets.
pub struct WeekdayAggregator;

impl WeekdayAggregator {
    /// Add every pair's delta to the bucket of its weekday.
    ///
    /// Pure sum, so the order of `pairs` does not affect the result.
    pub fn aggregate_by_weekday(pairs: &[WeekdayPair]) -> WeekdayTotals {
        pairs
            .iter()
            .fold(WeekdayTotals::default(), |mut totals, pair| {
                totals.add(pair.weekday, pair.stars);
                totals
            })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
