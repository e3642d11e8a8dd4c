//! Report rendering.
//!
//! Output shape, one block per day in chronological order:
//!
//! ```text
//! 5 mar
//! - 2 jam : 3
//! - b2g3 2 jam : 2
//!
//! ```

use crate::aggregate::Summary;
use std::fmt::Write;

/// Rendered in place of a report when no row survived aggregation.
pub const NO_DATA: &str = "⚠️ Tidak ada data yang bisa direkap.";

pub fn render(summary: &Summary) -> String {
    let Summary::Totals(table) = summary else {
        return NO_DATA.to_string();
    };

    let mut out = String::new();
    // BTreeMap keys are DateKey (year, month index, day) and CanonicalLabel,
    // whose orderings are chronological and lexicographic respectively.
    for (day, totals) in table {
        let _ = writeln!(out, "{day}");
        for (package, total) in totals {
            let _ = writeln!(out, "- {package} : {total}");
        }
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
