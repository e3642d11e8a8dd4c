//! Workbook fixtures written as real `.xlsx` bytes.

use rust_xlsxwriter::{ExcelDateTime, Format};
use std::path::{Path, PathBuf};

/// One cell of a fixture worksheet.
#[derive(Debug, Clone, Copy)]
pub enum X {
    Text(&'static str),
    Num(f64),
    /// A date cell with a `yyyy-mm-dd` number format.
    Date(u16, u8, u8),
    Blank,
}

pub type FixtureSheet = (&'static str, Vec<Vec<X>>);

/// Serialise `sheets` into an in-memory `.xlsx` workbook.
pub fn xlsx_bytes(sheets: &[FixtureSheet]) -> Vec<u8> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (name, rows) in sheets {
        let ws = workbook.add_worksheet();
        ws.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32, c as u16);
                match *cell {
                    X::Text(s) => {
                        ws.write_string(r, c, s).unwrap();
                    }
                    X::Num(n) => {
                        ws.write_number(r, c, n).unwrap();
                    }
                    X::Date(y, m, d) => {
                        let date = ExcelDateTime::from_ymd(y, m, d).unwrap();
                        ws.write_datetime_with_format(r, c, &date, &date_format)
                            .unwrap();
                    }
                    X::Blank => {}
                }
            }
        }
    }

    workbook.save_to_buffer().unwrap()
}

/// Write `sheets` to `dir/name` and return the path.
pub fn xlsx_file(dir: &Path, name: &str, sheets: &[FixtureSheet]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, xlsx_bytes(sheets)).unwrap();
    path
}

// ---------------------------------------------------------------------------
// Canned sheets
// ---------------------------------------------------------------------------

/// Banner, blank line, header on row 2, then a mix of date cells, text dates
/// and rows the engine must drop.
pub fn march_sheet() -> FixtureSheet {
    use X::*;
    (
        "Maret",
        vec![
            vec![Text("LAPORAN PENJUALAN MARET 2024")],
            vec![],
            vec![Text("Tanggal"), Text("Lokasi"), Text("Paket"), Text("Jumlah (pcs)")],
            vec![Date(2024, 3, 5), Text("Kios A"), Text("2 JAM"), Num(3.0)],
            vec![Text("2024-03-05 09:15:00"), Text("Kios B"), Text("B2G3 2 JAM"), Num(2.0)],
            vec![Date(2024, 3, 5), Text("Kios A"), Text("garbage"), Num(9.0)],
            vec![Date(2024, 3, 6), Blank, Text("paket 1 jam"), Text("4")],
            vec![Blank, Text("Kios A"), Text("3 JAM"), Num(5.0)],
            vec![Date(2024, 3, 6), Text("Kios C"), Text("3 JAM"), Text("lima")],
        ],
    )
}

/// Header without any quantity column, so the scan never matches.
pub fn notes_sheet() -> FixtureSheet {
    use X::*;
    (
        "Catatan",
        vec![
            vec![Text("Tanggal"), Text("Lokasi"), Text("Paket"), Text("Keterangan")],
            vec![Date(2024, 3, 5), Text("Kios A"), Text("2 JAM"), Text("ok")],
        ],
    )
}

/// Header spread over rows that are each missing a keyword.
pub fn headerless_sheet() -> FixtureSheet {
    use X::*;
    (
        "Draft",
        vec![
            vec![Text("Tanggal"), Text("Lokasi")],
            vec![Text("Paket"), Text("Jumlah")],
            vec![Date(2024, 3, 5), Text("2 JAM"), Num(1.0)],
        ],
    )
}

/// December and January days, deliberately out of order.
pub fn year_end_sheet() -> FixtureSheet {
    use X::*;
    (
        "Akhir Tahun",
        vec![
            vec![Text("Tanggal"), Text("Lokasi"), Text("Paket"), Text("Jumlah")],
            vec![Date(2025, 1, 2), Text("Kios A"), Text("1 JAM"), Num(1.0)],
            vec![Date(2024, 12, 31), Text("Kios A"), Text("1 JAM"), Num(2.0)],
            vec![Text("2025-02-01"), Text("Kios A"), Text("1 JAM"), Num(3.0)],
        ],
    )
}
