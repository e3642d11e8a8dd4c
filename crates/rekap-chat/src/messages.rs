//! User-facing message texts. Markdown-flavoured where the chat renders it.

use rekap_core::ReportError;

pub const INVALID_CHOICE: &str = "❌ Pilihan bulan tidak valid.";
pub const HEADER_NOT_FOUND: &str = "❌ Header tabel tidak ditemukan.";
pub const CONTINUE_PROMPT: &str = "📅 Mau rekap bulan lain?\nKetik: *ya* / *tidak*";
pub const YES_OR_NO: &str = "Ketik *ya* atau *tidak*.";
pub const DONE: &str = "✅ Selesai. Terima kasih.";

/// Numbered sheet menu.
pub fn sheet_menu(sheets: &[&str]) -> String {
    let mut msg = String::from("📅 *Pilih bulan laporan:*\n\n");
    for (i, sheet) in sheets.iter().enumerate() {
        msg.push_str(&format!("{}. {}\n", i + 1, sheet));
    }
    msg.push_str("\nKetik nomor bulan (contoh: 1)");
    msg
}

pub fn report(sheet: &str, body: &str) -> String {
    format!("📊 *Rekap {sheet}*\n\n{body}")
}

pub fn report_error(sheet: &str, err: &ReportError) -> String {
    match err {
        ReportError::HeaderNotFound { .. } => HEADER_NOT_FOUND.to_string(),
        ReportError::IncompleteColumns { columns, .. } => {
            let listed: Vec<String> = columns.iter().map(|c| format!("'{c}'")).collect();
            format!(
                "❌ Kolom tidak lengkap di sheet {sheet}.\nKolom terbaca: [{}]",
                listed.join(", ")
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
