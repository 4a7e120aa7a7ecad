//! Breakout Runner — orchestration and reporting around `breakout-core`.
//!
//! This crate wires the pure evaluation pipeline to the outside world:
//! - TOML-loadable run configuration with defaulted thresholds
//! - The fetch → normalize → evaluate pipeline with tracing diagnostics
//! - The run outcome model (signals vs. the informational "no signals")
//! - Report assembly: the exported CSV column shape and a JSON artifact

pub mod config;
pub mod report;
pub mod result;
pub mod runner;

pub use config::{ConfigError, RunConfig};
pub use report::{write_csv, write_signals_csv, write_signals_json, CSV_HEADER};
pub use result::{RunOutcome, RunReport};
pub use runner::run_evaluation;
