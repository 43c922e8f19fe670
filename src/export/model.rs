use crate::models::discrepancy::Discrepancy;
use serde::Serialize;

/// Flat row shape for report export. Dates go out in ISO form regardless
/// of the display pattern used on screen.
#[derive(Serialize, Clone, Debug)]
pub struct DiscrepancyExport {
    pub classification: String,
    pub date: String,
    pub event: String,
    pub location: String,
    pub row: usize,
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["classification", "date", "event", "location", "row"]
}

impl From<&Discrepancy> for DiscrepancyExport {
    fn from(entry: &Discrepancy) -> Self {
        let record = entry.record();
        Self {
            classification: entry.label().to_string(),
            date: record
                .date()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            event: record.name(),
            location: record.location(),
            row: record.row,
        }
    }
}
