//! Plain-text and JSON rendering of the weekday report.

use serde::Serialize;

use crate::error::Result;
use crate::models::{LargestChange, WeekdayTotals};
use crate::time_utils::weekday_name;

/// First line of the text report.
pub const REPORT_HEADER: &str = "=== WEEKDAY -> STARS GAINED  ===";

// ── Text ──────────────────────────────────────────────────────────────────────

/// One `"<WeekdayName>: <total>"` line per weekday, Monday first.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use stars_core::formatting::render_report;
/// use stars_core::models::WeekdayTotals;
///
/// let mut totals = WeekdayTotals::default();
/// totals.add(Weekday::Tue, 10);
/// let lines = render_report(&totals);
/// assert_eq!(lines[0], "Monday: 0");
/// assert_eq!(lines[1], "Tuesday: 10");
/// assert_eq!(lines.len(), 7);
/// ```
pub fn render_report(totals: &WeekdayTotals) -> Vec<String> {
    totals
        .iter()
        .map(|(weekday, total)| format!("{}: {}", weekday_name(weekday), total))
        .collect()
}

/// Header followed by the seven weekday lines, each newline-terminated.
pub fn render_text(totals: &WeekdayTotals) -> String {
    let mut out = String::with_capacity(160);
    out.push_str(REPORT_HEADER);
    out.push('\n');
    for line in render_report(totals) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// `Largest change: <delta> on <YYYY-MM-DD> (<WeekdayName>)`, or
/// `Largest change: none` when the series has no candidate.
pub fn render_largest_change(change: Option<&LargestChange>) -> String {
    match change {
        Some(c) => format!(
            "Largest change: {} on {} ({})",
            c.delta,
            c.date.format("%Y-%m-%d"),
            weekday_name(c.weekday())
        ),
        None => "Largest change: none".to_string(),
    }
}

// ── JSON ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct WeekdayRow {
    weekday: &'static str,
    total: i128,
}

#[derive(Debug, Serialize)]
struct LargestChangeRow {
    position: usize,
    date: String,
    weekday: &'static str,
    delta: i64,
}

#[derive(Debug, Serialize)]
struct ReportDocument {
    weekdays: Vec<WeekdayRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    largest_change: Option<Option<LargestChangeRow>>,
}

/// Pretty-printed JSON form of the report.
///
/// `largest` is `None` when the largest change was not requested; the key is
/// then omitted. `Some(None)` renders as `"largest_change": null`.
pub fn render_json(
    totals: &WeekdayTotals,
    largest: Option<Option<&LargestChange>>,
) -> Result<String> {
    let doc = ReportDocument {
        weekdays: totals
            .iter()
            .map(|(weekday, total)| WeekdayRow {
                weekday: weekday_name(weekday),
                total,
            })
            .collect(),
        largest_change: largest.map(|change| {
            change.map(|c| LargestChangeRow {
                position: c.position,
                date: c.date.format("%Y-%m-%d").to_string(),
                weekday: weekday_name(c.weekday()),
                delta: c.delta,
            })
        }),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};

    fn sample_totals() -> WeekdayTotals {
        let mut totals = WeekdayTotals::default();
        totals.add(Weekday::Mon, 100);
        totals.add(Weekday::Tue, 10);
        totals.add(Weekday::Wed, 15);
        totals
    }

    fn sample_change() -> LargestChange {
        LargestChange {
            position: 2,
            date: NaiveDate::from_ymd_opt(2021, 1, 6).unwrap(),
            delta: 15,
        }
    }

    // ── render_report / render_text ───────────────────────────────────────────

    #[test]
    fn test_render_report_lines() {
        let lines = render_report(&sample_totals());
        assert_eq!(
            lines,
            vec![
                "Monday: 100",
                "Tuesday: 10",
                "Wednesday: 15",
                "Thursday: 0",
                "Friday: 0",
                "Saturday: 0",
                "Sunday: 0",
            ]
        );
    }

    #[test]
    fn test_render_report_negative_total() {
        let mut totals = WeekdayTotals::default();
        totals.add(Weekday::Fri, -7);
        assert_eq!(render_report(&totals)[4], "Friday: -7");
    }

    #[test]
    fn test_render_text_has_header_first() {
        let text = render_text(&sample_totals());
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("=== WEEKDAY -> STARS GAINED  ==="));
        assert_eq!(lines.next(), Some("Monday: 100"));
        assert_eq!(text.lines().count(), 8);
        assert!(text.ends_with("Sunday: 0\n"));
    }

    // ── render_largest_change ─────────────────────────────────────────────────

    #[test]
    fn test_render_largest_change_some() {
        let change = sample_change();
        assert_eq!(
            render_largest_change(Some(&change)),
            "Largest change: 15 on 2021-01-06 (Wednesday)"
        );
    }

    #[test]
    fn test_render_largest_change_none() {
        assert_eq!(render_largest_change(None), "Largest change: none");
    }

    // ── render_json ───────────────────────────────────────────────────────────

    #[test]
    fn test_render_json_without_largest() {
        let json = render_json(&sample_totals(), None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let weekdays = value["weekdays"].as_array().unwrap();
        assert_eq!(weekdays.len(), 7);
        assert_eq!(weekdays[0]["weekday"], "Monday");
        assert_eq!(weekdays[0]["total"], 100);
        assert_eq!(weekdays[6]["weekday"], "Sunday");
        assert!(value.get("largest_change").is_none());
    }

    #[test]
    fn test_render_json_with_largest() {
        let change = sample_change();
        let json = render_json(&sample_totals(), Some(Some(&change))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["largest_change"]["date"], "2021-01-06");
        assert_eq!(value["largest_change"]["weekday"], "Wednesday");
        assert_eq!(value["largest_change"]["delta"], 15);
        assert_eq!(value["largest_change"]["position"], 2);
    }

    #[test]
    fn test_render_json_largest_requested_but_absent() {
        let json = render_json(&sample_totals(), Some(None)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["largest_change"].is_null());
        assert!(value.get("largest_change").is_some());
    }
}
