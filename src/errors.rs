//! Unified application error type.
//! All modules (core, loader, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Table loading
    // ---------------------------
    #[error(
        "Unable to read the {role} table from '{path}': {reason}. \
         Check that you provided the correct path."
    )]
    SourceRead {
        role: &'static str,
        path: String,
        reason: String,
    },

    #[error("The {role} table contains no event rows")]
    EmptyTable { role: &'static str },

    // ---------------------------
    // Record structure
    // ---------------------------
    #[error("Record at row {row} has neither a 'Booking Date' nor a 'Date' column")]
    MissingDateColumn { row: usize },

    #[error("Invalid date value: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Range trimming
    // ---------------------------
    #[error(
        "The {role} table has no rows bounding the comparison window \
         {start} to {end}: the two schedules do not overlap"
    )]
    WindowNotFound {
        role: &'static str,
        start: NaiveDate,
        end: NaiveDate,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
