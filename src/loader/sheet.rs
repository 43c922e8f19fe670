//! Workbook import (xlsx, xls, xlsb, ods) via calamine.
//!
//! One-way conversion: the named sheet becomes an EventTable. Row 1 is the
//! header row and maps column headers to record keys; columns with a blank
//! header are dropped. Nothing is written back.

use crate::errors::{AppError, AppResult};
use crate::models::record::{CellValue, EventRecord};
use crate::models::table::{EventTable, TableRole};
use crate::utils::date::parse_cell_date;
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

pub fn load_workbook_table(path: &Path, sheet: &str, role: TableRole) -> AppResult<EventTable> {
    let source_err = |reason: String| AppError::SourceRead {
        role: role.label(),
        path: path.display().to_string(),
        reason,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| source_err(e.to_string()))?;

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| source_err(format!("sheet '{}': {}", sheet, e)))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(data_to_header).collect(),
        None => return Err(source_err(format!("sheet '{}' is empty", sheet))),
    };

    let mut records = Vec::new();
    for (i, row) in rows.enumerate() {
        let columns: Vec<(String, CellValue)> = headers
            .iter()
            .zip(row.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, cell)| (header.clone(), convert_cell(cell)))
            .collect();

        // Row 1 is the header, so data rows start at 2 in sheet terms;
        // records keep a 1-based data position for error context.
        records.push(EventRecord::new(i + 1, columns));
    }

    Ok(EventTable::new(role, records))
}

fn data_to_header(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(n) => CellValue::Number(*n as f64),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => CellValue::Date(ndt.date()),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => text_cell(s),
        Data::String(s) => text_cell(s),
        Data::Error(e) => CellValue::Text(format!("{:?}", e)),
    }
}

fn text_cell(s: &str) -> CellValue {
    match parse_cell_date(s) {
        Some(date) => CellValue::Date(date),
        None => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(trimmed.to_string())
            }
        }
    }
}
