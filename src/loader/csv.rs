//! CSV import. Same table shape as the workbook path: row 1 is the header,
//! blank headers are dropped, cells are typed from their text.

use crate::errors::{AppError, AppResult};
use crate::models::record::{CellValue, EventRecord};
use crate::models::table::{EventTable, TableRole};
use crate::utils::date::parse_cell_date;
use std::path::Path;

pub fn load_csv_table(path: &Path, role: TableRole) -> AppResult<EventTable> {
    let source_err = |reason: String| AppError::SourceRead {
        role: role.label(),
        path: path.display().to_string(),
        reason,
    };

    let mut reader = csv::Reader::from_path(path).map_err(|e| source_err(e.to_string()))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| source_err(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row.map_err(|e| source_err(e.to_string()))?;

        let columns: Vec<(String, CellValue)> = headers
            .iter()
            .zip(row.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, field)| (header.clone(), convert_field(field)))
            .collect();

        records.push(EventRecord::new(i + 1, columns));
    }

    Ok(EventTable::new(role, records))
}

fn convert_field(field: &str) -> CellValue {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    if let Some(date) = parse_cell_date(trimmed) {
        return CellValue::Date(date);
    }
    if let Ok(n) = trimmed.parse::<f64>() {
        return CellValue::Number(n);
    }
    CellValue::Text(trimmed.to_string())
}
