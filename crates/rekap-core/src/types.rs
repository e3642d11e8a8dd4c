//! Core types for rekap-core.
//!
//! This module defines the values that flow between the engine stages: the
//! [`Cell`] union every workbook value is converted into, the unheadered
//! [`Sheet`] grid, the extracted [`RawRow`], and the two normalised keys
//! ([`CanonicalLabel`], [`DateKey`]) the aggregation table is indexed by.

use chrono::NaiveDateTime;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A single spreadsheet value.
///
/// Workbook adapters convert their native cell type into `Cell` once; the
/// normalizers then match on the variant they accept and reject the rest.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    /// A true date/time value, as opposed to text that looks like one.
    Temporal(NaiveDateTime),
    Empty,
}

impl Cell {
    /// `true` for [`Cell::Empty`] and for text that is blank after trimming.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) | Cell::Temporal(_) => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Number(n as f64)
    }
}

impl From<NaiveDateTime> for Cell {
    fn from(dt: NaiveDateTime) -> Self {
        Cell::Temporal(dt)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Empty)
    }
}

/// Renders the way a header cell reads once it becomes a column name:
/// whole numbers lose their `.0`, date-times use `YYYY-MM-DD HH:MM:SS`.
impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{n:.0}"),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Temporal(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Cell::Empty => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Sheet
// ---------------------------------------------------------------------------

/// One worksheet read with no header assumption: every row, top to bottom.
///
/// Rows may be ragged; a missing trailing cell reads as [`Cell::Empty`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// RawRow
// ---------------------------------------------------------------------------

/// The four mapped cells of one body row, still unnormalised.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub date: Cell,
    /// Carried through extraction; the report does not group by it.
    pub location: Cell,
    pub label: Cell,
    pub quantity: Cell,
}

impl RawRow {
    pub fn new(
        date: impl Into<Cell>,
        location: impl Into<Cell>,
        label: impl Into<Cell>,
        quantity: impl Into<Cell>,
    ) -> Self {
        Self {
            date: date.into(),
            location: location.into(),
            label: label.into(),
            quantity: quantity.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// CanonicalLabel
// ---------------------------------------------------------------------------

/// A package bucket: hour count 1–5, optionally under the B2G3 promo.
///
/// Field order makes the derived `Ord` match the lexicographic order of the
/// rendered strings: `"1 jam" < … < "5 jam" < "b2g3 1 jam" < …`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalLabel {
    promo: bool,
    hours: u8,
}

impl CanonicalLabel {
    /// Returns `None` unless `hours` is in `1..=5`.
    pub fn new(hours: u8, promo: bool) -> Option<Self> {
        (1..=5).contains(&hours).then_some(Self { promo, hours })
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn is_promo(&self) -> bool {
        self.promo
    }
}

impl std::fmt::Display for CanonicalLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.promo {
            write!(f, "b2g3 {} jam", self.hours)
        } else {
            write!(f, "{} jam", self.hours)
        }
    }
}

// ---------------------------------------------------------------------------
// DateKey
// ---------------------------------------------------------------------------

const MONTH_TOKENS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Calendar day a report block is keyed by.
///
/// The month is held as its calendar index (1–12) so the derived ordering is
/// chronological; [`DateKey::month`] yields the three-letter token for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    year: i32,
    month: u32,
    day: u32,
}

impl DateKey {
    pub fn from_date(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    /// Validates the triple as a real calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        chrono::NaiveDate::from_ymd_opt(year, month, day).map(Self::from_date)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Lowercase English abbreviation, e.g. `"mar"`.
    pub fn month(&self) -> &'static str {
        MONTH_TOKENS[(self.month - 1) as usize]
    }

    pub fn month_index(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

/// `"{day} {month}"`, the report block header.
impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.day, self.month())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
