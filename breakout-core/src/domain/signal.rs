//! TradeSignal — one realized breakout trade outcome.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Entry/exit record for a single flagged bar.
///
/// Entry is the breakout bar's close; exit is the close `holding_period_days`
/// bars later. Signals are independent — overlapping holding windows across
/// signals are permitted and never deduplicated. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSignal {
    pub entry_date: NaiveDate,
    pub entry_price: f64,
    pub exit_date: NaiveDate,
    pub exit_price: f64,
    pub holding_period_days: usize,
    /// `(exit_price / entry_price - 1) * 100`.
    pub return_pct: f64,
}
