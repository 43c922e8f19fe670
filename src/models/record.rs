use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Column names recognized by the semantic accessors. The booking export
/// writes "Booking Date"; the second-party sheet writes plain "Date".
pub const BOOKING_DATE_COL: &str = "Booking Date";
pub const DATE_COL: &str = "Date";
pub const NAME_COL: &str = "Booking Event Name";
pub const ROOM_COL: &str = "Room Description";

/// A single spreadsheet cell, typed as far as the source allows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Date(NaiveDate),
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Stable string form used for identity hashing. Dates render as
    /// YYYY-MM-DD so both sources stringify the same calendar day the
    /// same way; numbers drop a trailing ".0".
    pub fn to_field_string(&self) -> String {
        match self {
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            CellValue::Text(s) => s.clone(),
            CellValue::Empty => String::new(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_field_string())
    }
}

/// One row of a schedule table: the source row position (1-based, header
/// excluded) plus the cells keyed by column header, in sheet order.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    pub row: usize,
    columns: Vec<(String, CellValue)>,
}

impl EventRecord {
    pub fn new(row: usize, columns: Vec<(String, CellValue)>) -> Self {
        Self { row, columns }
    }

    /// Convenience constructor for the three semantic fields.
    pub fn from_parts(row: usize, date: NaiveDate, name: &str, location: &str) -> Self {
        Self::new(
            row,
            vec![
                (BOOKING_DATE_COL.to_string(), CellValue::Date(date)),
                (NAME_COL.to_string(), CellValue::Text(name.to_string())),
                (ROOM_COL.to_string(), CellValue::Text(location.to_string())),
            ],
        )
    }

    /// First cell stored under `column`, if any.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, cell)| cell)
    }

    /// The date cell, resolved by fallback: a non-empty "Booking Date"
    /// wins, otherwise "Date". An empty booking cell falls through, the
    /// same way the upstream export leaves blanks on continuation rows.
    pub fn date_cell(&self) -> Option<&CellValue> {
        self.get(BOOKING_DATE_COL)
            .filter(|cell| !cell.is_empty())
            .or_else(|| self.get(DATE_COL))
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date_cell().and_then(CellValue::as_date)
    }

    /// Like [`date`](Self::date) but distinguishes the two failure modes:
    /// no recognized date column at all versus a cell that is not a date.
    pub fn date_checked(&self) -> AppResult<NaiveDate> {
        let cell = self
            .date_cell()
            .ok_or(AppError::MissingDateColumn { row: self.row })?;
        cell.as_date()
            .ok_or_else(|| AppError::InvalidDate(cell.to_string()))
    }

    pub fn name(&self) -> String {
        self.get(NAME_COL)
            .map(CellValue::to_field_string)
            .unwrap_or_default()
    }

    pub fn location(&self) -> String {
        self.get(ROOM_COL)
            .map(CellValue::to_field_string)
            .unwrap_or_default()
    }
}
