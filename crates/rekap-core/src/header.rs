//! Header detection and column mapping.
//!
//! Report sheets often open with a title banner or a blank line before the
//! real table header. [`locate`] scans the first rows for the one that names
//! the date, package and quantity columns; [`HeadedSheet`] re-reads the sheet
//! with that row as header; [`ColumnMapping::resolve`] binds each role to the
//! first column whose name mentions it.

use crate::error::ReportError;
use crate::types::{Cell, Sheet};
use std::collections::HashMap;

/// Rows scanned for a header when the config does not say otherwise.
pub const DEFAULT_SCAN_ROWS: usize = 5;

/// Keywords that must all appear in the header row.
const REQUIRED: [&str; 3] = ["tanggal", "paket", "jumlah"];

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Canonical column role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Date,
    Location,
    Label,
    Quantity,
}

impl Role {
    /// Resolution order; a column takes the first role it matches.
    pub const ALL: [Role; 4] = [Role::Date, Role::Location, Role::Label, Role::Quantity];

    /// Substring a column name must contain to take this role.
    pub fn keyword(self) -> &'static str {
        match self {
            Role::Date => "tanggal",
            Role::Location => "lokasi",
            Role::Label => "paket",
            Role::Quantity => "jumlah",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

// ---------------------------------------------------------------------------
// Header row detection
// ---------------------------------------------------------------------------

/// Index of the first row among the first `scan_rows` that mentions every
/// required keyword, compared case-insensitively as substrings.
pub fn locate(sheet: &Sheet, scan_rows: usize) -> Result<usize, ReportError> {
    sheet
        .rows
        .iter()
        .take(scan_rows)
        .position(|row| {
            let lowered: Vec<String> = row.iter().map(|c| c.to_string().to_lowercase()).collect();
            REQUIRED
                .iter()
                .all(|kw| lowered.iter().any(|cell| cell.contains(kw)))
        })
        .ok_or(ReportError::HeaderNotFound {
            scanned: scan_rows.min(sheet.len()),
        })
}

// ---------------------------------------------------------------------------
// HeadedSheet
// ---------------------------------------------------------------------------

/// A sheet re-read with one row promoted to column names.
///
/// Borrows the body rows; building one never copies cell data.
#[derive(Debug, Clone)]
pub struct HeadedSheet<'a> {
    pub columns: Vec<String>,
    pub body: &'a [Vec<Cell>],
}

impl<'a> HeadedSheet<'a> {
    /// Promote `header_row` to column names. Names are trimmed and
    /// lower-cased; blanks become `unnamed: {index}` and repeats get a
    /// `.1`, `.2`, … suffix.
    pub fn new(sheet: &'a Sheet, header_row: usize) -> Self {
        let Some(header) = sheet.rows.get(header_row) else {
            return Self {
                columns: Vec::new(),
                body: &[],
            };
        };

        let width = sheet.rows[header_row..]
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0);

        let mut seen: HashMap<String, usize> = HashMap::new();
        let columns = (0..width)
            .map(|idx| {
                let name = header
                    .get(idx)
                    .map(|c| c.to_string().trim().to_lowercase())
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| format!("unnamed: {idx}"));
                let count = seen.entry(name.clone()).or_insert(0);
                let unique = if *count == 0 {
                    name
                } else {
                    format!("{name}.{count}")
                };
                *count += 1;
                unique
            })
            .collect();

        Self {
            columns,
            body: &sheet.rows[header_row + 1..],
        }
    }
}

// ---------------------------------------------------------------------------
// ColumnMapping
// ---------------------------------------------------------------------------

/// A resolved column: position in the row plus the name it was read as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub index: usize,
    pub name: String,
}

/// Role → column binding for one sheet. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    date: ColumnRef,
    location: ColumnRef,
    label: ColumnRef,
    quantity: ColumnRef,
}

impl ColumnMapping {
    /// Bind every role to the first column whose name contains its keyword.
    pub fn resolve(columns: &[String]) -> Result<Self, ReportError> {
        let mut found: HashMap<Role, ColumnRef> = HashMap::new();

        for (index, raw) in columns.iter().enumerate() {
            let name = raw.trim().to_lowercase();
            let Some(role) = Role::ALL.into_iter().find(|r| name.contains(r.keyword())) else {
                continue;
            };
            found.entry(role).or_insert(ColumnRef {
                index,
                name: raw.clone(),
            });
        }

        let mut take = |role: Role| found.remove(&role);
        match (
            take(Role::Date),
            take(Role::Location),
            take(Role::Label),
            take(Role::Quantity),
        ) {
            (Some(date), Some(location), Some(label), Some(quantity)) => Ok(Self {
                date,
                location,
                label,
                quantity,
            }),
            (date, location, label, quantity) => {
                let missing = [
                    (Role::Date, date.is_none()),
                    (Role::Location, location.is_none()),
                    (Role::Label, label.is_none()),
                    (Role::Quantity, quantity.is_none()),
                ]
                .into_iter()
                .filter(|(_, absent)| *absent)
                .map(|(role, _)| role.keyword())
                .collect();
                Err(ReportError::IncompleteColumns {
                    columns: columns.to_vec(),
                    missing,
                })
            }
        }
    }

    pub fn get(&self, role: Role) -> &ColumnRef {
        match role {
            Role::Date => &self.date,
            Role::Location => &self.location,
            Role::Label => &self.label,
            Role::Quantity => &self.quantity,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
