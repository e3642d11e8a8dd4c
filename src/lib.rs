//! rekap — daily package totals from messy transaction spreadsheets.
//!
//! This crate is the binary's shell: the CLI commands and the liveness
//! server. It re-exports the workspace crates so that integration tests can
//! reach every layer from one import.
//!
//! # Architecture
//!
//! ```text
//! Workbook (rekap-sheets) ──► engine (rekap-core) ──► text
//!        ▲                                              │
//!        └────────── Conversation (rekap-chat) ◄────────┘
//! ```

pub mod cli;
pub mod server;

pub use rekap_chat as chat;
pub use rekap_core as engine;
pub use rekap_sheets as sheets;
