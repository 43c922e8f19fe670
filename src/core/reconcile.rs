//! Symmetric set difference over row identities.
//!
//! Both tables are expected to be trimmed to the same comparison window
//! already. Every record is tagged once through the identity scheme, then
//! the two identity indexes are compared both ways, yielding genuine
//! one-sided differences.

use super::identity::{Identity, IdentityScheme, tag_table};
use crate::errors::AppResult;
use crate::models::discrepancy::{Discrepancy, DiscrepancyReport};
use crate::models::record::EventRecord;
use crate::models::table::EventTable;
use std::collections::HashSet;

/// Result of one reconciliation run: the inner join representatives plus
/// the classified discrepancy report.
#[derive(Debug, Clone, Default)]
pub struct ReconcileOutcome {
    /// Events present in both tables, one representative per identity,
    /// first occurrence in primary-table order.
    pub matched: Vec<EventRecord>,
    pub report: DiscrepancyReport,
}

pub fn reconcile(
    scheme: &dyn IdentityScheme,
    primary: &EventTable,
    secondary: &EventTable,
) -> AppResult<ReconcileOutcome> {
    let primary_ids = tag_table(scheme, primary)?;
    let secondary_ids = tag_table(scheme, secondary)?;

    let primary_index: HashSet<Identity> = primary_ids.iter().copied().collect();
    let secondary_index: HashSet<Identity> = secondary_ids.iter().copied().collect();

    let mut outcome = ReconcileOutcome::default();

    // Inner join: first occurrence wins when an identity repeats within a
    // table, so the representative choice is deterministic.
    let mut joined: HashSet<Identity> = HashSet::new();
    for (record, id) in primary.records.iter().zip(&primary_ids) {
        if secondary_index.contains(id) && joined.insert(*id) {
            outcome.matched.push(record.clone());
        }
    }

    // Events on the second-party schedule with no booking: cancelled (or
    // never entered) on the primary side.
    let mut reported: HashSet<Identity> = HashSet::new();
    for (record, id) in secondary.records.iter().zip(&secondary_ids) {
        if !primary_index.contains(id) && reported.insert(*id) {
            outcome
                .report
                .push(Discrepancy::MissingFromPrimary(record.clone()));
        }
    }

    // Booked events the second-party schedule never picked up: added.
    let mut reported: HashSet<Identity> = HashSet::new();
    for (record, id) in primary.records.iter().zip(&primary_ids) {
        if !secondary_index.contains(id) && reported.insert(*id) {
            outcome
                .report
                .push(Discrepancy::MissingFromSecondary(record.clone()));
        }
    }

    Ok(outcome)
}
