//! Range trimming: narrow the longer table to the date span covered by the
//! window-source table before events are compared.

use crate::errors::{AppError, AppResult};
use crate::models::table::EventTable;
use chrono::NaiveDate;

/// Index of the first record whose date is on or after `start`.
/// Linear scan from the front; `None` when the table ends first.
pub fn first_index_on_or_after(table: &EventTable, start: NaiveDate) -> AppResult<Option<usize>> {
    for (i, record) in table.records.iter().enumerate() {
        if record.date_checked()? >= start {
            return Ok(Some(i));
        }
    }
    Ok(None)
}

/// Index of the last record whose date is on or before `end`.
///
/// Scan order matters: an exact match returns immediately, and the first
/// date past `end` returns the index before it. A table that ends without
/// ever exceeding `end` reports `None` even if every row is inside the
/// window, so the caller's window end must coincide with or precede some
/// row of this table.
pub fn last_index_on_or_before(table: &EventTable, end: NaiveDate) -> AppResult<Option<usize>> {
    for (i, record) in table.records.iter().enumerate() {
        let date = record.date_checked()?;
        if date == end {
            return Ok(Some(i));
        }
        if date > end {
            return Ok(if i == 0 { None } else { Some(i - 1) });
        }
    }
    Ok(None)
}

/// Restrict `table` to the rows dated inside `[start, end]`.
///
/// Both boundary indices are computed against the untrimmed table, then the
/// tail is cut first and the head second, so the head index stays valid.
/// A boundary search that comes back empty-handed means the two schedules
/// do not overlap at all; that must fail loudly rather than quietly
/// producing an unbounded slice.
pub fn trim_to_window(table: &mut EventTable, start: NaiveDate, end: NaiveDate) -> AppResult<()> {
    let first = first_index_on_or_after(table, start)?;
    let last = last_index_on_or_before(table, end)?;

    let (Some(first), Some(last)) = (first, last) else {
        return Err(AppError::WindowNotFound {
            role: table.role.label(),
            start,
            end,
        });
    };

    table.records.truncate(last + 1);
    // first > last means the window falls between two rows: trim to empty.
    let head = first.min(table.records.len());
    table.records.drain(..head);
    Ok(())
}
