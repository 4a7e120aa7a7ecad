//! Evaluation pipeline — fetch, normalize, evaluate, summarize.
//!
//! The single entry point used by the CLI (and any embedding host). Each
//! call owns its inputs and outputs end to end; nothing is shared between
//! runs, so hosts may invoke this concurrently without coordination.

use tracing::{debug, info};

use breakout_core::data::{normalize, DataError, DataProvider};
use breakout_core::domain::RunParams;
use breakout_core::{evaluate, CoreError};

use crate::result::RunReport;

/// Run one evaluation end to end.
///
/// Errors are terminal for the run and never retried here: the provider owns
/// transport-level retries, and a rejected request cannot succeed on replay.
/// A provider-reported unknown ticker is folded into [`CoreError::EmptyData`]
/// — from the caller's point of view both mean "no rows for this request".
pub fn run_evaluation(
    provider: &dyn DataProvider,
    params: &RunParams,
) -> Result<RunReport, CoreError> {
    info!(
        ticker = %params.ticker,
        start = %params.start,
        end = %params.end,
        provider = provider.name(),
        "fetching daily bars"
    );

    let frame = match provider.fetch(&params.ticker, params.start, params.end) {
        Ok(frame) => frame,
        Err(DataError::TickerNotFound { ticker }) => {
            return Err(CoreError::EmptyData { ticker });
        }
        Err(e) => return Err(CoreError::Data(e)),
    };
    debug!(rows = frame.height(), "raw table received");

    let mut bars = normalize(&frame, &params.ticker)?;

    // Sources that cannot range-filter natively (whole CSV files) may return
    // extra rows; clamp to the requested half-open range here.
    bars.retain(|bar| bar.date >= params.start && bar.date < params.end);
    if bars.is_empty() {
        return Err(CoreError::EmptyData {
            ticker: params.ticker.clone(),
        });
    }
    debug!(bars = bars.len(), "series normalized");

    let signals = evaluate(&bars, params)?;
    info!(
        bars = bars.len(),
        signals = signals.len(),
        "evaluation complete"
    );

    Ok(RunReport::new(params, bars.len(), signals))
}
