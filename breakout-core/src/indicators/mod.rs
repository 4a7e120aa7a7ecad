//! Derived per-bar series feeding the breakout predicate.
//!
//! Every vector here is parallel to the input bar series and uses NaN as the
//! "undefined" sentinel: warmup bars carry NaN and can never qualify as
//! breakouts downstream. Computed once per run, immutable afterward.

pub mod pct_change;
pub mod trailing_volume;

pub use pct_change::{pct_change, prev_close};
pub use trailing_volume::trailing_avg_volume;

use crate::domain::Bar;

/// Number of prior bars in the trailing volume baseline.
pub const VOLUME_LOOKBACK: usize = 20;

/// Per-bar derived values for a normalized series.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSeries {
    /// Mean volume of the [`VOLUME_LOOKBACK`] bars strictly before each index.
    pub avg_volume: Vec<f64>,
    /// Close of the immediately preceding bar; NaN at index 0.
    pub prev_close: Vec<f64>,
    /// Day-over-day close change in percent; NaN wherever `prev_close` is NaN.
    pub pct_change: Vec<f64>,
}

impl IndicatorSeries {
    pub fn compute(bars: &[Bar]) -> Self {
        let prev_close = prev_close(bars);
        let pct_change = pct_change(bars, &prev_close);
        Self {
            avg_volume: trailing_avg_volume(bars, VOLUME_LOOKBACK),
            prev_close,
            pct_change,
        }
    }

    pub fn len(&self) -> usize {
        self.avg_volume.len()
    }

    pub fn is_empty(&self) -> bool {
        self.avg_volume.is_empty()
    }
}

/// Create synthetic bars from (close, volume) pairs for testing.
#[cfg(test)]
pub fn make_bars(closes: &[f64], volumes: &[f64]) -> Vec<Bar> {
    assert_eq!(closes.len(), volumes.len(), "parallel slices required");
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .zip(volumes)
        .enumerate()
        .map(|(i, (&close, &volume))| Bar {
            date: base_date + chrono::Duration::days(i as i64),
            close,
            volume,
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
