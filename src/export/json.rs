use super::model::DiscrepancyExport;
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Write the report rows as pretty-printed JSON.
pub(crate) fn write_json(path: &Path, rows: &[DiscrepancyExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
