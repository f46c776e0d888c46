//! Date utility functions
//!
//! Due dates are stored as ISO `YYYY-MM-DD` strings. This module parses the
//! shapes users and older caches produce, and formats dates for display.

use std::fmt::Write;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Weekday};

/// Storage format for due dates
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, ISO_DATE_FORMAT)
}

/// Parse a plain date or a full ISO timestamp down to its calendar date.
///
/// Accepts `2025-01-15`, `2025-01-15T14:30:00Z`, `2025-01-15T14:30:00.000Z`
/// and `2025-01-15T14:30:00`.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = parse_date(raw) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Normalize user input to the stored `YYYY-MM-DD` form.
pub fn normalize_iso_date(raw: &str) -> Result<String> {
    parse_iso_date(raw)
        .map(format_ymd)
        .ok_or_else(|| anyhow!("Invalid date '{}', expected YYYY-MM-DD", raw))
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(ISO_DATE_FORMAT).to_string()
}

/// Current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format current local date to YYYY-MM-DD string
pub fn format_today() -> String {
    format_ymd(today())
}

/// Render a stored date with a chrono format string; unparsable input is
/// returned unchanged.
pub fn format_display_date(raw: &str, format: &str) -> String {
    parse_iso_date(raw)
        .and_then(|date| render_date(date, format))
        .unwrap_or_else(|| raw.to_string())
}

/// Render `date` with `format`, `None` when the format asks for fields a
/// calendar date does not carry (times, offsets) or is malformed.
pub fn render_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

/// Human-readable due date relative to today ("today", "next Friday", ...)
pub fn format_human_date(date_str: &str) -> String {
    format_human_date_from(date_str, today())
}

/// Same as [`format_human_date`] with an explicit reference day.
pub fn format_human_date_from(date_str: &str, today: NaiveDate) -> String {
    let Some(input_date) = parse_iso_date(date_str) else {
        return date_str.to_string();
    };

    let days_diff = (input_date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(input_date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(input_date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            if input_date.year() == today.year() {
                input_date.format("%b %d").to_string()
            } else {
                input_date.format("%b %d, %Y").to_string()
            }
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
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
