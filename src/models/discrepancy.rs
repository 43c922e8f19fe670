use super::record::EventRecord;
use serde::Serialize;

/// One reconciliation finding. "Missing from primary" means the event is
/// on the second-party schedule but not in the booking export (cancelled
/// or never booked); "missing from secondary" is the reverse (added).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "classification", content = "event")]
pub enum Discrepancy {
    MissingFromPrimary(EventRecord),
    MissingFromSecondary(EventRecord),
}

impl Discrepancy {
    pub fn label(&self) -> &'static str {
        match self {
            Discrepancy::MissingFromPrimary(_) => "Missing from Primary",
            Discrepancy::MissingFromSecondary(_) => "Missing from Secondary",
        }
    }

    pub fn record(&self) -> &EventRecord {
        match self {
            Discrepancy::MissingFromPrimary(r) => r,
            Discrepancy::MissingFromSecondary(r) => r,
        }
    }
}

/// Ordered sequence of findings: secondary-only events first (in secondary
/// table order), then primary-only events (in primary table order).
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiscrepancyReport {
    pub entries: Vec<Discrepancy>,
}

impl DiscrepancyReport {
    pub fn push(&mut self, entry: Discrepancy) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Discrepancy> {
        self.entries.iter()
    }

    pub fn missing_from_primary(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, Discrepancy::MissingFromPrimary(_)))
            .count()
    }

    pub fn missing_from_secondary(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, Discrepancy::MissingFromSecondary(_)))
            .count()
    }
}
