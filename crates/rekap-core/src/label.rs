//! Package label normalisation.
//!
//! Free-text labels like `"Paket 2 Jam (B2G3)"` collapse into one of ten
//! [`CanonicalLabel`] buckets. The match is deliberately loose: any text with
//! a digit 1–5 followed by `JAM` counts, whatever surrounds it.

use crate::types::{CanonicalLabel, Cell};
use once_cell::sync::Lazy;
use regex::Regex;

static HOURS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([1-5])\s*JAM").expect("hour pattern is a valid regex"));

const PROMO_MARKER: &str = "B2G3";

/// Classify a raw label string. Returns `None` for unrecognised labels.
pub fn normalize(raw: &str) -> Option<CanonicalLabel> {
    let upper = raw.to_uppercase();
    let digit = HOURS.captures(&upper)?.get(1)?.as_str();
    let hours = digit.parse::<u8>().ok()?;
    CanonicalLabel::new(hours, upper.contains(PROMO_MARKER))
}

/// Only text cells carry labels.
pub fn normalize_cell(cell: &Cell) -> Option<CanonicalLabel> {
    match cell {
        Cell::Text(s) => normalize(s),
        Cell::Number(_) | Cell::Temporal(_) | Cell::Empty => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
