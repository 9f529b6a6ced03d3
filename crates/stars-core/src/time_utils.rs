use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{Result, StarsError};

/// All seven weekdays in ISO order, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

// ── Date parsing ──────────────────────────────────────────────────────────────

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Parse a US-style `M/D/YYYY` date string into a [`NaiveDate`].
///
/// Each of the three slash-separated tokens is trimmed and parsed as an
/// integer; leading zeros are accepted (`"03/07/2021"`). Years must lie in
/// `1..=9999`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use stars_core::time_utils::parse_us_date;
///
/// assert_eq!(
///     parse_us_date("3/14/2021").unwrap(),
///     NaiveDate::from_ymd_opt(2021, 3, 14).unwrap()
/// );
/// assert!(parse_us_date("2021-03-14").is_err());
/// ```
pub fn parse_us_date(value: &str) -> Result<NaiveDate> {
    let units: Vec<&str> = value.split('/').map(str::trim).collect();
    let [month, day, year] = units.as_slice() else {
        return Err(StarsError::date_format(
            value,
            format!("expected M/D/YYYY, found {} field(s)", units.len()),
        ));
    };

    let month: u32 = month
        .parse()
        .map_err(|_| StarsError::date_format(value, format!("month {month:?} is not a number")))?;
    let day: u32 = day
        .parse()
        .map_err(|_| StarsError::date_format(value, format!("day {day:?} is not a number")))?;
    let year: i32 = year
        .parse()
        .map_err(|_| StarsError::date_format(value, format!("year {year:?} is not a number")))?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(StarsError::date_format(value, "year out of range"));
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| StarsError::date_format(value, "not a calendar date"))
}

// ── Weekday helpers ───────────────────────────────────────────────────────────

/// ISO-style ordinal of `weekday`: Monday = 0 … Sunday = 6.
pub fn weekday_ordinal(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}

/// Weekday of a calendar date.
pub fn weekday_of(date: NaiveDate) -> Weekday {
    date.weekday()
}

/// Full English name of `weekday`, e.g. `"Wednesday"`.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
