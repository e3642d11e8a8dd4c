//! Date normalisation.
//!
//! Spreadsheets hand dates over either as real date-time cells or as text,
//! often with a time-of-day tail (`"2024-03-05 08:30:00"`). Both shapes map to
//! the same [`DateKey`] for the same calendar day.

use crate::types::{Cell, DateKey};
use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Strict `YYYY-MM-DD`, optionally followed by `THH:MM[:SS[.fff]]`. chrono's
/// `%Y-%m-%d` alone also takes unpadded fields and signed or short years.
static ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})(?:T(\d{2}:\d{2}(?::\d{2}(?:\.\d+)?)?))?$")
        .expect("iso date pattern is a valid regex")
});

/// Normalise a cell into a day key. Returns `None` if it is not a date.
pub fn normalize(cell: &Cell) -> Option<DateKey> {
    match cell {
        Cell::Temporal(dt) => Some(DateKey::from_date(dt.date())),
        Cell::Text(s) => parse_text(s),
        Cell::Number(_) | Cell::Empty => None,
    }
}

/// Parse the first whitespace-delimited token as an ISO-8601 date.
pub fn parse_text(raw: &str) -> Option<DateKey> {
    let token = raw.split_whitespace().next()?;
    let caps = ISO_DATE.captures(token)?;
    if let Some(time) = caps.get(2) {
        NaiveTime::parse_from_str(time.as_str(), "%H:%M:%S%.f")
            .or_else(|_| NaiveTime::parse_from_str(time.as_str(), "%H:%M"))
            .ok()?;
    }
    NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d")
        .ok()
        .map(DateKey::from_date)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
