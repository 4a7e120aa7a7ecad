//! Data provider trait and structured transport errors.
//!
//! The `DataProvider` trait abstracts over bar sources (Yahoo Finance, local
//! CSV, in-memory frames in tests) so the pipeline can be driven without a
//! network. Providers return the raw tabular form native to their source;
//! column identification and ordering are owned by the normalizer downstream.

use chrono::NaiveDate;
use polars::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

/// Transport-level failures from a data source.
///
/// Distinct from the evaluation errors in [`crate::error::CoreError`]: these
/// describe why a table could not be obtained at all, not why an obtained
/// table was unusable.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("ticker not found: {ticker}")]
    TickerNotFound { ticker: String },

    #[error("table operation failed: {0}")]
    Table(#[from] PolarsError),

    #[error("csv import failed for {path}: {message}")]
    CsvImport { path: PathBuf, message: String },

    #[error("data error: {0}")]
    Other(String),
}

/// Trait for daily-bar sources.
///
/// `fetch` covers the half-open range `[start, end)` for a single ticker.
/// Sources that cannot range-filter natively (a whole CSV file) may return
/// extra rows; the caller clamps after normalization.
pub trait DataProvider {
    /// Human-readable name of this provider, for diagnostics.
    fn name(&self) -> &str;

    /// Fetch daily bars for a ticker over a date range.
    fn fetch(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DataFrame, DataError>;
}

/// Reads bars from a local CSV file (offline runs, fixtures).
///
/// The file must have a header row; column naming tolerance is the
/// normalizer's concern, so `Date,Close,Volume` and `Date,Adj Close,Volume`
/// exports both work.
pub struct CsvProvider {
    path: PathBuf,
}

impl CsvProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataProvider for CsvProvider {
    fn name(&self) -> &str {
        "csv"
    }

    fn fetch(
        &self,
        _ticker: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<DataFrame, DataError> {
        CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(self.path.clone()))
            .map_err(|e| DataError::CsvImport {
                path: self.path.clone(),
                message: e.to_string(),
            })?
            .finish()
            .map_err(|e| DataError::CsvImport {
                path: self.path.clone(),
                message: e.to_string(),
            })
    }
}
