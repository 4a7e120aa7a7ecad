//! Structured error types for a single evaluation run.

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

use crate::data::DataError;

/// Which canonical field could not be identified in a raw table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Date,
    Close,
    Volume,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Date => write!(f, "date"),
            FieldKind::Close => write!(f, "close"),
            FieldKind::Volume => write!(f, "volume"),
        }
    }
}

/// Failures that terminate an evaluation run without partial output.
///
/// Everything here is detected synchronously and nothing is retried at this
/// layer: a malformed request cannot change its outcome, and "no data" is a
/// property of the requested ticker/range. An empty signal list is NOT an
/// error and is not represented here — the host surfaces it as an
/// informational result.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("invalid date range: end {end} must be strictly after start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("holding period must be at least 1 bar (got {days})")]
    InvalidHoldingPeriod { days: usize },

    #[error("no data found for '{ticker}' in the given date range")]
    EmptyData { ticker: String },

    #[error("no {kind} column found; available columns: {available:?}")]
    MissingField {
        kind: FieldKind,
        available: Vec<String>,
    },

    #[error(transparent)]
    Data(#[from] DataError),
}
