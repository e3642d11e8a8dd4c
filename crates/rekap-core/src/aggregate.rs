//! Aggregation — folds extracted rows into per-day, per-package totals.
//!
//! Rows that fail any normalisation step are skipped, never zero-filled. Only
//! addition happens per bucket, so the result does not depend on row order.

use crate::types::{CanonicalLabel, Cell, DateKey, RawRow};
use crate::{date, label};
use std::collections::BTreeMap;

/// Totals keyed by day, then by package. Both levels iterate in report order.
pub type AggregationTable = BTreeMap<DateKey, BTreeMap<CanonicalLabel, u64>>;

/// Outcome of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    Totals(AggregationTable),
    /// Every row was dropped, or there were none.
    NoData,
}

impl Summary {
    pub fn totals(&self) -> Option<&AggregationTable> {
        match self {
            Summary::Totals(table) => Some(table),
            Summary::NoData => None,
        }
    }
}

/// Coerce a quantity cell: parse as float, truncate toward zero.
///
/// Non-numeric, non-finite and negative values are rejected.
pub fn quantity(cell: &Cell) -> Option<u64> {
    let value = match cell {
        Cell::Number(n) => *n,
        Cell::Text(s) => s.trim().parse::<f64>().ok()?,
        Cell::Temporal(_) | Cell::Empty => return None,
    };
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value.trunc() as u64)
}

/// Fold `rows` into a [`Summary`].
pub fn aggregate<I>(rows: I) -> Summary
where
    I: IntoIterator<Item = RawRow>,
{
    let mut table = AggregationTable::new();
    let mut seen = 0usize;
    let mut kept = 0usize;

    for row in rows {
        seen += 1;
        let Some(package) = label::normalize_cell(&row.label) else {
            continue;
        };
        let Some(qty) = quantity(&row.quantity) else {
            continue;
        };
        let Some(day) = date::normalize(&row.date) else {
            continue;
        };
        let total = table.entry(day).or_default().entry(package).or_insert(0);
        *total = total.saturating_add(qty);
        kept += 1;
    }

    tracing::debug!(seen, kept, dropped = seen - kept, days = table.len(), "aggregated rows");

    if table.is_empty() {
        Summary::NoData
    } else {
        Summary::Totals(table)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
