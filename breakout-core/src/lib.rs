//! Breakout Core — volume-breakout evaluation over a daily close/volume series.
//!
//! This crate contains the heart of the evaluator:
//! - Domain types (bars, run parameters, trade signals)
//! - Time series normalization from raw tabular data
//! - Trailing-volume and price-change indicators
//! - The per-bar breakout predicate
//! - Fixed-horizon backtest simulation
//!
//! The whole pipeline is pure and synchronous: a host embedding it in a
//! concurrent server runs each request on its own copy of inputs and outputs.
//! Data retrieval lives in `data` behind the `DataProvider` trait; everything
//! else is in-memory computation.

pub mod backtest;
pub mod data;
pub mod detector;
pub mod domain;
pub mod error;
pub mod indicators;

pub use backtest::{evaluate, simulate};
pub use detector::{detect, BreakoutFlags};
pub use domain::{Bar, RunParams, TradeSignal};
pub use error::CoreError;
pub use indicators::IndicatorSeries;
