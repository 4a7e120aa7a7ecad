//! Breakout CLI — evaluate the volume-breakout heuristic over daily bars.
//!
//! Commands:
//! - `run` — fetch (or read) a daily series, evaluate it, write the CSV report
//! - `fetch` — download a ticker's range to a local CSV for offline runs

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use breakout_core::data::{normalize, CsvProvider, DataProvider, YahooProvider};
use breakout_core::domain::{
    RunParams, DEFAULT_DAILY_CHANGE_THRESHOLD_PCT, DEFAULT_HOLDING_PERIOD_DAYS,
    DEFAULT_VOLUME_THRESHOLD_PCT,
};
use breakout_core::CoreError;
use breakout_runner::{
    run_evaluation, write_signals_csv, write_signals_json, RunConfig, RunOutcome,
};

#[derive(Parser)]
#[command(
    name = "breakout",
    about = "Volume breakout evaluator — flags volume/price surges and backtests fixed-horizon exits"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the breakout heuristic over a ticker's date range.
    Run {
        /// Path to a TOML config file. Flags below override its values.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Ticker symbol (e.g. AAPL).
        #[arg(long)]
        ticker: Option<String>,

        /// Start date (YYYY-MM-DD), inclusive.
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD), exclusive. Must be after the start date.
        #[arg(long)]
        end: Option<String>,

        /// Volume threshold as percent of the trailing 20-bar average.
        #[arg(long)]
        volume_threshold: Option<f64>,

        /// Daily close-to-close change threshold, in percent.
        #[arg(long)]
        change_threshold: Option<f64>,

        /// Bars held after a breakout before the forced exit.
        #[arg(long)]
        holding_period: Option<usize>,

        /// Read bars from a local CSV instead of Yahoo Finance.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Report output path.
        #[arg(long, default_value = "breakout_results.csv")]
        output: PathBuf,

        /// Also write the signal table as a JSON artifact.
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Download daily bars to a local CSV for later offline runs.
    Fetch {
        /// Ticker symbol.
        ticker: String,

        /// Start date (YYYY-MM-DD), inclusive.
        #[arg(long)]
        start: String,

        /// End date (YYYY-MM-DD), exclusive.
        #[arg(long)]
        end: String,

        /// Output CSV path.
        #[arg(long, default_value = "bars.csv")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            ticker,
            start,
            end,
            volume_threshold,
            change_threshold,
            holding_period,
            csv,
            output,
            json,
        } => run_cmd(
            config,
            ticker,
            start,
            end,
            volume_threshold,
            change_threshold,
            holding_period,
            csv,
            output,
            json,
        ),
        Commands::Fetch {
            ticker,
            start,
            end,
            output,
        } => fetch_cmd(&ticker, &start, &end, &output),
    }
}

/// Merge config file and flags into validated run parameters.
///
/// Flags win over the config file; thresholds missing from both fall back to
/// the documented defaults.
fn resolve_params(
    config: Option<PathBuf>,
    ticker: Option<String>,
    start: Option<String>,
    end: Option<String>,
    volume_threshold: Option<f64>,
    change_threshold: Option<f64>,
    holding_period: Option<usize>,
) -> Result<RunParams> {
    let file = config
        .map(|path| RunConfig::from_toml_file(&path))
        .transpose()?;

    let ticker = ticker
        .or_else(|| file.as_ref().map(|c| c.ticker.clone()))
        .context("--ticker is required (or provide it via --config)")?;
    let start = start
        .or_else(|| file.as_ref().map(|c| c.start_date.clone()))
        .context("--start is required (or provide it via --config)")?;
    let end = end
        .or_else(|| file.as_ref().map(|c| c.end_date.clone()))
        .context("--end is required (or provide it via --config)")?;

    let volume_threshold = volume_threshold
        .or_else(|| file.as_ref().map(|c| c.volume_threshold_pct))
        .unwrap_or(DEFAULT_VOLUME_THRESHOLD_PCT);
    let change_threshold = change_threshold
        .or_else(|| file.as_ref().map(|c| c.daily_change_threshold_pct))
        .unwrap_or(DEFAULT_DAILY_CHANGE_THRESHOLD_PCT);
    let holding_period = holding_period
        .or_else(|| file.as_ref().map(|c| c.holding_period_days))
        .unwrap_or(DEFAULT_HOLDING_PERIOD_DAYS);

    Ok(RunParams::parse(
        &ticker,
        &start,
        &end,
        volume_threshold,
        change_threshold,
        holding_period,
    )?)
}

#[allow(clippy::too_many_arguments)]
fn run_cmd(
    config: Option<PathBuf>,
    ticker: Option<String>,
    start: Option<String>,
    end: Option<String>,
    volume_threshold: Option<f64>,
    change_threshold: Option<f64>,
    holding_period: Option<usize>,
    csv: Option<PathBuf>,
    output: PathBuf,
    json: Option<PathBuf>,
) -> Result<()> {
    let params = resolve_params(
        config,
        ticker,
        start,
        end,
        volume_threshold,
        change_threshold,
        holding_period,
    )?;

    let report = if let Some(path) = csv {
        run_evaluation(&CsvProvider::new(path), &params)
    } else {
        run_evaluation(&YahooProvider::new(), &params)
    };

    let report = match report {
        Ok(report) => report,
        // "No data" is an answer, not a failure.
        Err(CoreError::EmptyData { ticker }) => {
            println!("No data found for {ticker} in the given date range.");
            return Ok(());
        }
        Err(e) => bail!(e),
    };

    match &report.outcome {
        RunOutcome::NoSignals => {
            println!(
                "No breakout signals found for {} over {} bars.",
                report.ticker, report.bar_count
            );
        }
        RunOutcome::Signals(signals) => {
            write_signals_csv(&output, signals)?;
            if let Some(path) = &json {
                write_signals_json(path, signals)?;
            }
            println!(
                "{} signal(s) for {} over {} bars -> {}",
                signals.len(),
                report.ticker,
                report.bar_count,
                output.display()
            );
        }
    }

    Ok(())
}

fn fetch_cmd(ticker: &str, start: &str, end: &str, output: &PathBuf) -> Result<()> {
    // Reuse run-parameter validation for the date checks; thresholds are
    // irrelevant to a plain download.
    let params = RunParams::parse(
        ticker,
        start,
        end,
        DEFAULT_VOLUME_THRESHOLD_PCT,
        DEFAULT_DAILY_CHANGE_THRESHOLD_PCT,
        DEFAULT_HOLDING_PERIOD_DAYS,
    )?;

    let provider = YahooProvider::new();
    let frame = provider.fetch(&params.ticker, params.start, params.end)?;
    let bars = normalize(&frame, &params.ticker)?;

    let mut file = std::fs::File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    writeln!(file, "Date,Close,Volume")?;
    for bar in &bars {
        writeln!(file, "{},{},{}", bar.date, bar.close, bar.volume)?;
    }

    info!(bars = bars.len(), path = %output.display(), "bars written");
    println!("{} bars for {} -> {}", bars.len(), params.ticker, output.display());
    Ok(())
}
