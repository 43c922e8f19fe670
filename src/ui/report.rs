//! Human-readable rendering of a discrepancy report.

use crate::models::discrepancy::DiscrepancyReport;
use crate::models::record::EventRecord;
use crate::utils::date::format_date;

/// Widest classification label, for column alignment.
const LABEL_WIDTH: usize = 22;

/// `<date>\t<event name>`. A record whose date cannot be rendered (no date
/// cell, junk text, or a broken display pattern) prints "UNKNOWN DATE";
/// display formatting is the one failure this tool swallows.
pub fn event_line(record: &EventRecord, date_pattern: &str) -> String {
    let date = record
        .date()
        .and_then(|d| format_date(d, date_pattern))
        .unwrap_or_else(|| "UNKNOWN DATE".to_string());
    format!("{}\t{}", date, record.name())
}

/// Print the report, one classified line per discrepancy.
pub fn print_report(report: &DiscrepancyReport, date_pattern: &str) {
    for entry in report.iter() {
        println!(
            "{:<width$}: {}",
            entry.label(),
            event_line(entry.record(), date_pattern),
            width = LABEL_WIDTH
        );
    }
}
