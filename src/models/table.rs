use super::record::EventRecord;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use clap::ValueEnum;

/// Which of the two input tables a record came from. "Primary" is the
/// venue-booking export, "secondary" the second-party schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableRole {
    Primary,
    Secondary,
}

impl TableRole {
    pub fn label(&self) -> &'static str {
        match self {
            TableRole::Primary => "primary",
            TableRole::Secondary => "secondary",
        }
    }

    pub fn other(&self) -> TableRole {
        match self {
            TableRole::Primary => TableRole::Secondary,
            TableRole::Secondary => TableRole::Primary,
        }
    }
}

/// An ordered event table, ascending by date as produced by the source.
/// The reconciliation pipeline assumes but does not re-sort this order.
#[derive(Debug, Clone)]
pub struct EventTable {
    pub role: TableRole,
    pub records: Vec<EventRecord>,
}

impl EventTable {
    pub fn new(role: TableRole, records: Vec<EventRecord>) -> Self {
        Self { role, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The date span covered by this table, taken from its first and last
    /// rows. Used when this table is the window source for trimming.
    pub fn date_window(&self) -> AppResult<(NaiveDate, NaiveDate)> {
        let first = self.records.first().ok_or(AppError::EmptyTable {
            role: self.role.label(),
        })?;
        let last = self.records.last().ok_or(AppError::EmptyTable {
            role: self.role.label(),
        })?;

        Ok((first.date_checked()?, last.date_checked()?))
    }
}
