//! Signal table export (CSV/JSON).

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use breakout_core::domain::TradeSignal;

/// Header of the exported report. The column names and their order are the
/// external contract and are kept verbatim.
pub const CSV_HEADER: &str =
    "Breakout_Date,Buy_Price,Exit_Date,Sell_Price,Holding_Period_Days,Return_%";

/// Write the signal table to any writer in the exported CSV shape.
///
/// Dates are ISO `YYYY-MM-DD`; prices and returns at four decimal places.
pub fn write_csv<W: Write>(out: &mut W, signals: &[TradeSignal]) -> Result<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for signal in signals {
        writeln!(
            out,
            "{},{:.4},{},{:.4},{},{:.4}",
            signal.entry_date,
            signal.entry_price,
            signal.exit_date,
            signal.exit_price,
            signal.holding_period_days,
            signal.return_pct
        )?;
    }
    Ok(())
}

pub fn write_signals_csv(path: &Path, signals: &[TradeSignal]) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("failed to create report CSV {}", path.display()))?;
    write_csv(&mut file, signals)
}

pub fn write_signals_json(path: &Path, signals: &[TradeSignal]) -> Result<()> {
    let json = serde_json::to_string_pretty(signals).context("failed to serialize signals")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write signals JSON {}", path.display()))?;
    Ok(())
}
