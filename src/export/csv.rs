use super::model::{DiscrepancyExport, get_headers};
use crate::errors::{AppError, AppResult};
use csv::Writer;
use std::path::Path;

/// Write the report rows as CSV.
pub(crate) fn write_csv(path: &Path, rows: &[DiscrepancyExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(get_headers())
        .map_err(|e| AppError::Export(e.to_string()))?;

    for row in rows {
        wtr.write_record(&[
            row.classification.clone(),
            row.date.clone(),
            row.event.clone(),
            row.location.clone(),
            row.row.to_string(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
