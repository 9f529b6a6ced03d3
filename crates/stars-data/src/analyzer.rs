//! Pair building, weekday conversion and star differencing.

use chrono::NaiveDate;
use stars_core::error::{Result, StarsError};
use stars_core::models::{DatedPair, StarObservation, WeekdayPair};
use stars_core::time_utils::parse_us_date;

// ── Pair inputs ───────────────────────────────────────────────────────────────

/// A value that can become the date half of a [`DatedPair`].
///
/// Raw strings are parsed as `M/D/YYYY`; already-parsed dates and the absent
/// baseline date pass through unchanged.
pub trait IntoPairDate {
    fn into_pair_date(self) -> Result<Option<NaiveDate>>;
}

impl IntoPairDate for &str {
    fn into_pair_date(self) -> Result<Option<NaiveDate>> {
        parse_us_date(self).map(Some)
    }
}

impl IntoPairDate for NaiveDate {
    fn into_pair_date(self) -> Result<Option<NaiveDate>> {
        Ok(Some(self))
    }
}

impl IntoPairDate for Option<NaiveDate> {
    fn into_pair_date(self) -> Result<Option<NaiveDate>> {
        Ok(self)
    }
}

/// A value that can become the star half of a [`DatedPair`].
pub trait IntoStarCount {
    fn into_star_count(self) -> Result<i64>;
}

/// Raw cells must hold a non-negative integer.
impl IntoStarCount for &str {
    fn into_star_count(self) -> Result<i64> {
        match self.trim().parse::<i64>() {
            Ok(stars) if stars >= 0 => Ok(stars),
            _ => Err(StarsError::NumericFormat {
                value: self.to_string(),
            }),
        }
    }
}

impl IntoStarCount for i64 {
    fn into_star_count(self) -> Result<i64> {
        Ok(self)
    }
}

// ── Pair building ─────────────────────────────────────────────────────────────

/// Build one `(date, stars)` pair.
///
/// Calling it again with the resulting date and count returns an equal pair.
pub fn create_pair(date: impl IntoPairDate, star: impl IntoStarCount) -> Result<DatedPair> {
    Ok(DatedPair {
        date: date.into_pair_date()?,
        stars: star.into_star_count()?,
    })
}

/// Zip the date row with the star row, position by position.
pub fn build_pairs(dates: &[String], stars: &[String]) -> Result<Vec<DatedPair>> {
    if dates.len() != stars.len() {
        return Err(StarsError::LengthMismatch {
            dates: dates.len(),
            stars: stars.len(),
        });
    }

    dates
        .iter()
        .zip(stars)
        .map(|(date, star)| create_pair(date.as_str(), star.as_str()))
        .collect()
}

// ── Transforms ────────────────────────────────────────────────────────────────

/// Replace every pair's date with its weekday, keeping order and star values.
pub fn to_weekday_pairs(pairs: &[DatedPair]) -> Result<Vec<WeekdayPair>> {
    pairs
        .iter()
        .enumerate()
        .map(|(position, pair)| pair.to_weekday_pair(position))
        .collect()
}

/// Star change at every position relative to the one before it.
///
/// The first observation is diffed against a zero baseline, so its delta is
/// its own count. Output length equals input length.
pub fn compute_differences<P: StarObservation>(pairs: &[P]) -> Vec<P> {
    let baseline = DatedPair::baseline().stars;
    let previous = std::iter::once(baseline).chain(pairs.iter().map(|p| p.stars()));

    pairs
        .iter()
        .zip(previous)
        .map(|(pair, prev)| pair.with_stars(pair.stars() - prev))
        .collect()
}

/// Position and value of the greatest delta, skipping position 0.
///
/// Ties go to the earliest position. Returns `None` when there are fewer than
/// two observations.
pub fn find_largest_change<P: StarObservation>(differences: &[P]) -> Option<(usize, P)> {
    let mut best: Option<(usize, &P)> = None;
    for (position, pair) in differences.iter().enumerate().skip(1) {
        match best {
            Some((_, current)) if pair.stars() <= current.stars() => {}
            _ => best = Some((position, pair)),
        }
    }
    best.map(|(position, pair)| (position, pair.clone()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
