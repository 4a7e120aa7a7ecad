//! Run parameters — scalar inputs fixed for the duration of one evaluation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Volume threshold as a percentage of the trailing average (200 = 2x).
pub const DEFAULT_VOLUME_THRESHOLD_PCT: f64 = 200.0;

/// Minimum day-over-day close change, in percent.
pub const DEFAULT_DAILY_CHANGE_THRESHOLD_PCT: f64 = 2.0;

/// Bars held after a breakout before the forced exit.
pub const DEFAULT_HOLDING_PERIOD_DAYS: usize = 10;

/// Validated inputs for a single evaluation run.
///
/// Construct through [`RunParams::parse`], which rejects malformed dates,
/// inverted ranges, and a zero holding period before any data retrieval
/// happens. The range is half-open: `[start, end)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunParams {
    pub ticker: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub volume_threshold_pct: f64,
    pub daily_change_threshold_pct: f64,
    pub holding_period_days: usize,
}

impl RunParams {
    /// Parse and validate plain scalar inputs.
    ///
    /// Dates must be ISO `YYYY-MM-DD` and `end` must be strictly after
    /// `start`. A malformed request cannot succeed on retry, so rejection is
    /// final for the run.
    pub fn parse(
        ticker: &str,
        start: &str,
        end: &str,
        volume_threshold_pct: f64,
        daily_change_threshold_pct: f64,
        holding_period_days: usize,
    ) -> Result<Self, CoreError> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        if end <= start {
            return Err(CoreError::InvalidDateRange { start, end });
        }
        if holding_period_days == 0 {
            return Err(CoreError::InvalidHoldingPeriod {
                days: holding_period_days,
            });
        }
        Ok(Self {
            ticker: ticker.trim().to_string(),
            start,
            end,
            volume_threshold_pct,
            daily_change_threshold_pct,
            holding_period_days,
        })
    }
}

fn parse_date(input: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| CoreError::InvalidDate {
        input: input.trim().to_string(),
    })
}
