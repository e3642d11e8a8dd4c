//! One report request end to end: header → mapping → rows → totals → text.

use crate::aggregate::{aggregate, Summary};
use crate::error::ReportError;
use crate::extract::extract;
use crate::header::{self, ColumnMapping, HeadedSheet};
use crate::render::render;
use crate::types::Sheet;

/// A finished report for one sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recap {
    pub sheet: String,
    pub header_row: usize,
    pub mapping: ColumnMapping,
    pub summary: Summary,
    pub text: String,
}

impl Recap {
    pub fn is_empty(&self) -> bool {
        self.summary == Summary::NoData
    }
}

/// Run the whole engine over `sheet`, scanning `scan_rows` rows for a header.
#[tracing::instrument(skip(sheet), fields(sheet = %sheet.name, rows = sheet.len()))]
pub fn recap(sheet: &Sheet, scan_rows: usize) -> Result<Recap, ReportError> {
    let header_row = header::locate(sheet, scan_rows)?;
    let headed = HeadedSheet::new(sheet, header_row);
    let mapping = ColumnMapping::resolve(&headed.columns)?;
    tracing::debug!(header_row, columns = ?headed.columns, "header resolved");

    let summary = aggregate(extract(&headed, &mapping));
    let text = render(&summary);

    Ok(Recap {
        sheet: sheet.name.clone(),
        header_row,
        mapping,
        summary,
        text,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{Role, DEFAULT_SCAN_ROWS};
    use crate::render::NO_DATA;
    use crate::types::Cell;

    fn text_row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|c| Cell::from(*c)).collect()
    }

    #[test]
    fn banner_sheet_end_to_end() {
        let sheet = Sheet::new(
            "Maret",
            vec![
                text_row(&["Rekap Maret"]),
                vec![],
                text_row(&["Tanggal", "Lokasi", "Paket", "Jumlah"]),
                text_row(&["2024-03-05", "X", "2 JAM", "3"]),
            ],
        );
        let recap = recap(&sheet, DEFAULT_SCAN_ROWS).unwrap();
        assert_eq!(recap.header_row, 2);
        assert_eq!(recap.mapping.get(Role::Quantity).name, "jumlah");
        assert_eq!(recap.text, "5 mar\n- 2 jam : 3\n\n");
    }

    #[test]
    fn unrecognised_labels_yield_empty_recap_not_error() {
        let sheet = Sheet::new(
            "s",
            vec![
                text_row(&["Tanggal", "Lokasi", "Paket", "Jumlah"]),
                text_row(&["2024-03-05", "X", "entah", "3"]),
            ],
        );
        let recap = recap(&sheet, DEFAULT_SCAN_ROWS).unwrap();
        assert!(recap.is_empty());
        assert_eq!(recap.text, NO_DATA);
    }

    #[test]
    fn structural_errors_propagate() {
        let sheet = Sheet::new("s", vec![text_row(&["Tanggal", "Lokasi", "Paket"])]);
        assert_eq!(
            recap(&sheet, DEFAULT_SCAN_ROWS).unwrap_err(),
            ReportError::HeaderNotFound { scanned: 1 }
        );
    }
}
