//! Run outcome and report model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use breakout_core::domain::{RunParams, TradeSignal};

/// Terminal outcome of a successful evaluation.
///
/// Zero signals is not a failure: the computation ran to completion and
/// found nothing. It gets its own variant so the boundary can say "no
/// breakout signals found" instead of propagating an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunOutcome {
    Signals(Vec<TradeSignal>),
    NoSignals,
}

impl RunOutcome {
    pub fn from_signals(signals: Vec<TradeSignal>) -> Self {
        if signals.is_empty() {
            RunOutcome::NoSignals
        } else {
            RunOutcome::Signals(signals)
        }
    }

    pub fn signals(&self) -> &[TradeSignal] {
        match self {
            RunOutcome::Signals(signals) => signals,
            RunOutcome::NoSignals => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RunOutcome::NoSignals)
    }
}

/// Everything the host needs to present one completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub ticker: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub volume_threshold_pct: f64,
    pub daily_change_threshold_pct: f64,
    pub holding_period_days: usize,
    pub bar_count: usize,
    pub signal_count: usize,
    pub outcome: RunOutcome,
}

impl RunReport {
    pub fn new(params: &RunParams, bar_count: usize, signals: Vec<TradeSignal>) -> Self {
        Self {
            ticker: params.ticker.clone(),
            start_date: params.start,
            end_date: params.end,
            volume_threshold_pct: params.volume_threshold_pct,
            daily_change_threshold_pct: params.daily_change_threshold_pct,
            holding_period_days: params.holding_period_days,
            bar_count,
            signal_count: signals.len(),
            outcome: RunOutcome::from_signals(signals),
        }
    }
}
