//! Conversion of raw source rows into [`Event`] records.
//!
//! This is the only place where `original_index` is assigned. Callers must
//! feed it rows in raw source order, never a sorted or filtered view.

use super::types::{Event, RawRow};

/// Number of columns that make up a record (`A` through `H`).
pub const COLUMN_COUNT: usize = 8;

/// Number of header rows above the first data row.
pub const HEADER_ROWS: usize = 1;

/// Maps a raw row to an [`Event`] with the given identity.
///
/// Short rows are padded with empty strings and cells past the eighth column
/// are dropped. Cell contents are never validated here.
pub fn normalize(row: RawRow, raw_index: usize) -> Event {
    let mut cells = row.into_iter().take(COLUMN_COUNT);
    let mut next = || cells.next().unwrap_or_default();

    Event {
        timestamp: next(),
        participation_date: next(),
        title: next(),
        organization: next(),
        format: next(),
        story: next(),
        memorable_things: next(),
        final_mystery: next(),
        original_index: raw_index,
    }
}

/// Normalizes a full raw row set, using each row's position as its identity.
pub fn normalize_rows(rows: Vec<RawRow>) -> Vec<Event> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| normalize(row, index))
        .collect()
}

/// Returns the 1-based spreadsheet row number holding the record with the given
/// identity, or `None` if it would overflow.
pub fn raw_row_number(original_index: usize) -> Option<usize> {
    original_index.checked_add(HEADER_ROWS + 1)
}
