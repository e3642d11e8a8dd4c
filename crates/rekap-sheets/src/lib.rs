//! rekap-sheets — workbook sources for rekap.
//!
//! A [`Workbook`] is opened once (from a path or from the bytes of an uploaded
//! document), every sheet is read into an in-memory [`rekap_core::Sheet`], and
//! the engine can then read any of them as many times as it likes. Each
//! workbook is owned by whoever opened it; nothing is shared between callers.

pub mod cell;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Reader, Sheets};
use rekap_core::Sheet;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("failed to open workbook {name}")]
    Open {
        name: String,
        #[source]
        source: calamine::Error,
    },

    #[error("workbook {0} has no readable sheets")]
    NoSheets(String),

    #[error("no sheet named {0:?}")]
    UnknownSheet(String),

    #[error("invalid sheet choice {choice:?}, expected 1..={count} or a sheet name")]
    InvalidChoice { choice: String, count: usize },
}

/// All sheets of one workbook, in workbook order.
#[derive(Debug, Clone)]
pub struct Workbook {
    name: String,
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Open a workbook file. The format (xlsx, xlsm, xlsb, xls, ods) is picked
    /// from the extension.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WorkbookError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let reader = open_workbook_auto(path).map_err(|source| WorkbookError::Open {
            name: name.clone(),
            source,
        })?;
        Self::load(name, reader)
    }

    /// Open a workbook from the raw bytes of an uploaded document.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, WorkbookError> {
        let name = name.into();
        let reader =
            open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|source| WorkbookError::Open {
                name: name.clone(),
                source,
            })?;
        Self::load(name, reader)
    }

    /// Build a workbook from already-read sheets.
    pub fn from_sheets(name: impl Into<String>, sheets: Vec<Sheet>) -> Self {
        Self {
            name: name.into(),
            sheets,
        }
    }

    fn load<RS: Read + Seek>(name: String, mut reader: Sheets<RS>) -> Result<Self, WorkbookError> {
        let mut sheets = Vec::new();
        for sheet_name in reader.sheet_names() {
            let range = match reader.worksheet_range(&sheet_name) {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!(workbook = %name, sheet = %sheet_name, error = %e, "skipping unreadable sheet");
                    continue;
                }
            };
            let rows = range
                .rows()
                .map(|row| row.iter().map(cell::to_cell).collect())
                .collect();
            sheets.push(Sheet::new(sheet_name, rows));
        }

        if sheets.is_empty() {
            return Err(WorkbookError::NoSheets(name));
        }
        tracing::debug!(workbook = %name, sheets = sheets.len(), "workbook loaded");
        Ok(Self { name, sheets })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn sheet(&self, name: &str) -> Result<&Sheet, WorkbookError> {
        self.sheets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| WorkbookError::UnknownSheet(name.to_string()))
    }

    /// Sheet at 1-based position `number`, as shown in a numbered menu.
    pub fn nth(&self, number: usize) -> Result<&Sheet, WorkbookError> {
        number
            .checked_sub(1)
            .and_then(|idx| self.sheets.get(idx))
            .ok_or_else(|| WorkbookError::InvalidChoice {
                choice: number.to_string(),
                count: self.sheets.len(),
            })
    }

    /// Resolve a user choice: an exact sheet name first, then a 1-based number.
    pub fn select(&self, choice: &str) -> Result<&Sheet, WorkbookError> {
        let choice = choice.trim();
        if let Ok(sheet) = self.sheet(choice) {
            return Ok(sheet);
        }
        match choice.parse::<usize>() {
            Ok(number) => self.nth(number),
            Err(_) => Err(WorkbookError::UnknownSheet(choice.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
