//! Structural failures of a report request.
//!
//! Row-level defects never appear here; they are dropped during extraction
//! and aggregation. An empty result is [`Summary::NoData`](crate::Summary),
//! not an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// None of the first `scanned` rows mentions tanggal, paket and jumlah.
    #[error("header row not found in the first {scanned} rows")]
    HeaderNotFound { scanned: usize },

    /// The header row was found but not every role resolved to a column.
    #[error("incomplete columns, missing {missing:?}; columns read: {columns:?}")]
    IncompleteColumns {
        columns: Vec<String>,
        missing: Vec<&'static str>,
    },
}
