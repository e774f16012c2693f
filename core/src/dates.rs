//! Calendar helpers for trip dates.
//!
//! The API stores dates as `YYYY-MM-DD` strings. Everything here is pure; the
//! `display_*` variants take the stored strings and degrade to raw text when
//! a date does not parse.

use chrono::{Datelike, NaiveDate};

/// Wire format for trip dates.
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), API_DATE_FORMAT).ok()
}

pub fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

/// Whole days from `start` to `end`. Negative when `end` precedes `start`.
pub fn duration_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// "1 Day" or "N Days".
pub fn trip_duration(start: NaiveDate, end: NaiveDate) -> String {
    let days = duration_days(start, end);
    let unit = if days == 1 { "Day" } else { "Days" };
    format!("{days} {unit}")
}

/// "21 March 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// "21 March 2024 → 21 April 2024"
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} → {}", format_long_date(start), format_long_date(end))
}

/// "19th April 2024"
pub fn format_ordinal_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    };
    format!("{day}{suffix} {}", date.format("%B %Y"))
}

/// Range display for stored date strings, falling back to the raw strings.
pub fn display_date_range(start: &str, end: &str) -> String {
    match (parse_api_date(start), parse_api_date(end)) {
        (Some(s), Some(e)) => format_date_range(s, e),
        _ => format!("{start} → {end}"),
    }
}

/// Duration display for stored date strings; empty if either is malformed.
pub fn display_duration(start: &str, end: &str) -> String {
    match (parse_api_date(start), parse_api_date(end)) {
        (Some(s), Some(e)) => trip_duration(s, e),
        _ => String::new(),
    }
}
