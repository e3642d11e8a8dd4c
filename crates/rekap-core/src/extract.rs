//! Row extraction — pulls the four mapped cells out of each body row.
//!
//! [`Rows`] is a plain iterator over borrowed sheet data, so it is lazy and
//! can be restarted by cloning it or calling [`extract`] again.

use crate::header::{ColumnMapping, HeadedSheet, Role};
use crate::types::{Cell, RawRow};

/// Iterate the body of `sheet` as [`RawRow`]s, skipping rows with no date or
/// no label.
pub fn extract<'a>(sheet: &HeadedSheet<'a>, mapping: &'a ColumnMapping) -> Rows<'a> {
    Rows {
        body: sheet.body.iter(),
        mapping,
    }
}

#[derive(Debug, Clone)]
pub struct Rows<'a> {
    body: std::slice::Iter<'a, Vec<Cell>>,
    mapping: &'a ColumnMapping,
}

impl Rows<'_> {
    fn read(&self, row: &[Cell], role: Role) -> Cell {
        row.get(self.mapping.get(role).index)
            .cloned()
            .unwrap_or(Cell::Empty)
    }
}

impl Iterator for Rows<'_> {
    type Item = RawRow;

    fn next(&mut self) -> Option<RawRow> {
        loop {
            let row = self.body.next()?;
            let date = self.read(row, Role::Date);
            let label = self.read(row, Role::Label);
            if date.is_empty() || label.is_empty() {
                continue;
            }
            return Some(RawRow {
                date,
                location: self.read(row, Role::Location),
                label,
                quantity: self.read(row, Role::Quantity),
            });
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.body.size_hint().1)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
