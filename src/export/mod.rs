// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
mod model;

pub use model::DiscrepancyExport;

use crate::errors::AppResult;
use crate::models::discrepancy::DiscrepancyReport;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}

/// Write the discrepancy report to `path` in the requested format.
pub fn write_report(
    report: &DiscrepancyReport,
    format: &ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    let rows: Vec<DiscrepancyExport> = report.iter().map(DiscrepancyExport::from).collect();

    match format {
        ExportFormat::Csv => csv::write_csv(path, &rows)?,
        ExportFormat::Json => json::write_json(path, &rows)?,
    }

    success(format!(
        "{} export completed: {}",
        format.as_str(),
        path.display()
    ));
    Ok(())
}
