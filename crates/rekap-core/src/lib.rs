//! rekap-core — report aggregation engine.
//!
//! Turns an unheadered grid of spreadsheet cells into a per-day report of
//! package totals. Each stage is a public module so that the workbook adapter,
//! the chat front-end and integration tests can drive them individually.
//!
//! # Architecture
//!
//! ```text
//! Sheet ──► header ──► extract ──► aggregate ──► render
//!                                    │
//!                             label ─┴─ date
//! ```
//!
//! Everything here is synchronous and owns its per-request state, so one
//! [`pipeline::recap`] call never observes another.

pub mod aggregate;
pub mod config;
pub mod date;
pub mod error;
pub mod extract;
pub mod header;
pub mod label;
pub mod pipeline;
pub mod render;
pub mod types;

pub use aggregate::{aggregate, AggregationTable, Summary};
pub use error::ReportError;
pub use pipeline::{recap, Recap};
pub use render::{render, NO_DATA};
pub use types::{CanonicalLabel, Cell, DateKey, RawRow, Sheet};
