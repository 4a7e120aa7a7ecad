//! Time series normalization — raw tabular bars to a canonical ordered series.
//!
//! Retrieval sources label their columns inconsistently: a plain feed says
//! `Date`/`Close`/`Volume`, the Yahoo provider ticker-qualifies them
//! (`Close_AAPL`), and broker CSV exports may carry `Adj Close`. Columns are
//! therefore identified by case-sensitive substring match, taking the FIRST
//! match in the frame's native column order.
//!
//! That first-match rule is part of the observed external behavior and is
//! kept deliberately: note that a frame listing `Adj Close` ahead of `Close`
//! selects the adjusted series. Rename columns upstream when a specific one
//! must win.

use chrono::NaiveDate;
use polars::prelude::*;

use crate::data::DataError;
use crate::domain::Bar;
use crate::error::{CoreError, FieldKind};

/// Normalize a raw daily-bar table into an ordered `Bar` series.
///
/// Guarantees the output is sorted ascending by date with duplicate dates
/// collapsed to their first occurrence, regardless of input order. Rows with
/// a null close/volume or an unparsable date (non-trading placeholders) are
/// skipped, as are rows failing [`Bar::is_sane`] (non-positive close,
/// non-finite values).
///
/// Errors:
/// - [`CoreError::EmptyData`] when the table has zero usable rows.
/// - [`CoreError::MissingField`] when no date, close, or volume column can be
///   identified, carrying the available column names for diagnosis.
pub fn normalize(df: &DataFrame, ticker: &str) -> Result<Vec<Bar>, CoreError> {
    if df.height() == 0 {
        return Err(CoreError::EmptyData {
            ticker: ticker.to_string(),
        });
    }

    let date_col = find_column(df, "Date")
        .ok_or_else(|| missing_field(df, FieldKind::Date))?;
    let close_col = find_column(df, "Close")
        .ok_or_else(|| missing_field(df, FieldKind::Close))?;
    let volume_col = find_column(df, "Volume")
        .ok_or_else(|| missing_field(df, FieldKind::Volume))?;

    let dates = extract_dates(df, &date_col)?;
    let closes = extract_f64(df, &close_col)?;
    let volumes = extract_f64(df, &volume_col)?;

    let mut bars = Vec::with_capacity(df.height());
    for ((date, close), volume) in dates.into_iter().zip(closes).zip(volumes) {
        let (Some(date), Some(close), Some(volume)) = (date, close, volume) else {
            continue;
        };
        let bar = Bar {
            date,
            close,
            volume,
        };
        // A non-positive or non-finite value poisons the percent-change
        // series downstream (division by zero, inf comparisons); treat the
        // row as unusable, like a null.
        if !bar.is_sane() {
            continue;
        }
        bars.push(bar);
    }

    if bars.is_empty() {
        return Err(CoreError::EmptyData {
            ticker: ticker.to_string(),
        });
    }

    bars.sort_by_key(|bar| bar.date);
    bars.dedup_by_key(|bar| bar.date);

    Ok(bars)
}

/// First column whose name contains `needle`, in native column order.
fn find_column(df: &DataFrame, needle: &str) -> Option<String> {
    df.get_column_names()
        .iter()
        .find(|name| name.as_str().contains(needle))
        .map(|name| name.to_string())
}

fn missing_field(df: &DataFrame, kind: FieldKind) -> CoreError {
    CoreError::MissingField {
        kind,
        available: df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect(),
    }
}

/// Read a date column as `Option<NaiveDate>` per row.
///
/// Accepts a polars `Date` column (typed feeds) or a string column in ISO
/// `YYYY-MM-DD` form (CSV imports). Unparsable entries become `None`.
fn extract_dates(df: &DataFrame, name: &str) -> Result<Vec<Option<NaiveDate>>, CoreError> {
    let column = df.column(name).map_err(DataError::from)?;
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();

    match column.dtype() {
        DataType::Date => {
            let ca = column.date().map_err(DataError::from)?;
            Ok(ca
                .into_iter()
                .map(|days| days.map(|d| epoch + chrono::Duration::days(d as i64)))
                .collect())
        }
        DataType::String => {
            let ca = column.str().map_err(DataError::from)?;
            Ok(ca
                .into_iter()
                .map(|value| {
                    value.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
                })
                .collect())
        }
        other => Err(CoreError::Data(DataError::ResponseFormatChanged(format!(
            "date column '{name}' has unsupported dtype {other:?}"
        )))),
    }
}

/// Read a numeric column as `Option<f64>` per row, casting integer feeds.
fn extract_f64(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, CoreError> {
    let column = df
        .column(name)
        .map_err(DataError::from)?
        .cast(&DataType::Float64)
        .map_err(DataError::from)?;
    let ca = column.f64().map_err(DataError::from)?;
    Ok(ca.into_iter().collect())
}
