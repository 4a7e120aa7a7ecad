//! Domain types: bars, run parameters, trade signals.

pub mod bar;
pub mod params;
pub mod signal;

pub use bar::Bar;
pub use params::{
    RunParams, DEFAULT_DAILY_CHANGE_THRESHOLD_PCT, DEFAULT_HOLDING_PERIOD_DAYS,
    DEFAULT_VOLUME_THRESHOLD_PCT,
};
pub use signal::TradeSignal;
