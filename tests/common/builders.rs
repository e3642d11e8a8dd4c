//! Test builders — ergonomic constructors for `Sheet` and `RawRow`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use rekap_core::{Cell, RawRow, Sheet};

/// The canonical header row most fixtures use.
pub const HEADER: [&str; 4] = ["Tanggal", "Lokasi", "Paket", "Jumlah"];

// ---------------------------------------------------------------------------
// SheetBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for unheadered [`Sheet`] fixtures.
///
/// # Example
///
/// ```rust
/// let sheet = SheetBuilder::new("Maret")
///     .banner("LAPORAN PENJUALAN")
///     .blank()
///     .header(&HEADER)
///     .row("2024-03-05", "Kios A", "2 JAM", 3.0)
///     .build();
/// ```
pub struct SheetBuilder {
    name: String,
    rows: Vec<Vec<Cell>>,
}

impl SheetBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn banner(mut self, title: &str) -> Self {
        self.rows.push(vec![Cell::from(title)]);
        self
    }

    pub fn blank(mut self) -> Self {
        self.rows.push(Vec::new());
        self
    }

    pub fn header(mut self, names: &[&str]) -> Self {
        self.rows.push(names.iter().map(|n| Cell::from(*n)).collect());
        self
    }

    pub fn row(
        mut self,
        date: impl Into<Cell>,
        location: impl Into<Cell>,
        label: impl Into<Cell>,
        quantity: impl Into<Cell>,
    ) -> Self {
        self.rows.push(vec![
            date.into(),
            location.into(),
            label.into(),
            quantity.into(),
        ]);
        self
    }

    pub fn cells(mut self, cells: Vec<Cell>) -> Self {
        self.rows.push(cells);
        self
    }

    pub fn build(self) -> Sheet {
        Sheet::new(self.name, self.rows)
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A midnight date-time cell, as a spreadsheet date cell reads.
pub fn date_cell(y: i32, m: u32, d: u32) -> Cell {
    Cell::Temporal(
        chrono::NaiveDate::from_ymd_opt(y, m, d)
            .expect("valid test date")
            .and_hms_opt(0, 0, 0)
            .expect("midnight"),
    )
}

/// One text-dated row at location "X".
pub fn raw(date: &str, label: &str, quantity: f64) -> RawRow {
    RawRow::new(date, "X", label, quantity)
}

/// `n` rows spread over a year, cycling through every package bucket plus an
/// unrecognised label.
pub fn build_rows(n: usize) -> Vec<RawRow> {
    const LABELS: [&str; 6] = ["1 JAM", "2 jam", "B2G3 3 JAM", "4JAM promo", "5 Jam", "lainnya"];
    (0..n)
        .map(|i| {
            let month = i % 12 + 1;
            let day = i % 28 + 1;
            RawRow::new(
                format!("2024-{month:02}-{day:02}"),
                format!("kios-{}", i % 3),
                LABELS[i % LABELS.len()],
                (i % 7) as f64,
            )
        })
        .collect()
}
