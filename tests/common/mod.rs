//! Shared test utilities for rekap integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Workbook fixtures are written with `rust_xlsxwriter`
//! so the calamine reader sees the same bytes a real upload would carry.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
