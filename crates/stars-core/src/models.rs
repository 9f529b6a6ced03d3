use chrono::{NaiveDate, Weekday};

use crate::error::{Result, StarsError};
use crate::time_utils::{weekday_of, weekday_ordinal, WEEKDAYS};

/// Anything that carries a star count or star delta at a position in the
/// series.
///
/// Implemented by both [`DatedPair`] and [`WeekdayPair`] so that
/// differencing works on either key.
pub trait StarObservation: Clone {
    /// Star count (raw pairs) or star delta (difference pairs).
    fn stars(&self) -> i64;

    /// Copy of `self` with the same key and a different star value.
    fn with_stars(&self, stars: i64) -> Self;
}

// ── DatedPair ─────────────────────────────────────────────────────────────────

/// A calendar date paired with a star count or delta.
///
/// `date` is `None` only for the zero baseline that precedes the first
/// observation; every pair built from input data carries a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatedPair {
    pub date: Option<NaiveDate>,
    pub stars: i64,
}

impl DatedPair {
    pub fn new(date: NaiveDate, stars: i64) -> Self {
        Self {
            date: Some(date),
            stars,
        }
    }

    /// The implicit `(no date, 0)` pair diffed against the first observation.
    pub fn baseline() -> Self {
        Self {
            date: None,
            stars: 0,
        }
    }

    /// Replace the date with its weekday.
    ///
    /// `position` is only used to report which pair lacked a date.
    pub fn to_weekday_pair(&self, position: usize) -> Result<WeekdayPair> {
        match self.date {
            Some(date) => Ok(WeekdayPair {
                weekday: weekday_of(date),
                stars: self.stars,
            }),
            None => Err(StarsError::MissingDate { position }),
        }
    }
}

impl StarObservation for DatedPair {
    fn stars(&self) -> i64 {
        self.stars
    }

    fn with_stars(&self, stars: i64) -> Self {
        Self {
            date: self.date,
            stars,
        }
    }
}

// ── WeekdayPair ───────────────────────────────────────────────────────────────

/// A weekday paired with a star count or delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayPair {
    pub weekday: Weekday,
    pub stars: i64,
}

impl StarObservation for WeekdayPair {
    fn stars(&self) -> i64 {
        self.stars
    }

    fn with_stars(&self, stars: i64) -> Self {
        Self {
            weekday: self.weekday,
            stars,
        }
    }
}

// ── WeekdayTotals ─────────────────────────────────────────────────────────────

/// Accumulated star deltas per weekday, all seven starting at zero.
///
/// Buckets are `i128` so summing any number of `i64` deltas cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekdayTotals {
    buckets: [i128; 7],
}

impl WeekdayTotals {
    /// Add `delta` to the bucket for `weekday`.
    pub fn add(&mut self, weekday: Weekday, delta: i64) {
        self.buckets[weekday_ordinal(weekday)] += i128::from(delta);
    }

    pub fn get(&self, weekday: Weekday) -> i128 {
        self.buckets[weekday_ordinal(weekday)]
    }

    /// Sum over all seven weekdays.
    pub fn total(&self) -> i128 {
        self.buckets.iter().sum()
    }

    /// `(weekday, total)` pairs from Monday to Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, i128)> + '_ {
        WEEKDAYS.iter().map(move |w| (*w, self.get(*w)))
    }
}

// ── LargestChange ─────────────────────────────────────────────────────────────

/// The single biggest step-to-step change found in a star series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LargestChange {
    /// 0-based position of the observation in the series.
    pub position: usize,
    pub date: NaiveDate,
    pub delta: i64,
}

impl LargestChange {
    pub fn weekday(&self) -> Weekday {
        weekday_of(self.date)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
