//! Table loading boundary: turns a file on disk into an in-memory
//! EventTable. The reconciliation core never touches the filesystem.

mod csv;
mod sheet;

use crate::errors::AppResult;
use crate::models::table::{EventTable, TableRole};
use std::path::Path;

/// Load one of the two input tables. CSV is picked by extension; anything
/// else goes through the workbook reader, which sniffs the actual format
/// (xlsx, xls, xlsb, ods). `sheet` is ignored for CSV.
pub fn load_table(path: &Path, sheet: &str, role: TableRole) -> AppResult<EventTable> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        csv::load_csv_table(path, role)
    } else {
        sheet::load_workbook_table(path, sheet, role)
    }
}
