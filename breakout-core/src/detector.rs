//! Breakout detection — a pure per-bar predicate over the derived series.

use crate::domain::{Bar, RunParams};
use crate::indicators::IndicatorSeries;

/// Per-bar breakout flags, parallel to the input series.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakoutFlags {
    /// `volume[i] > (volume_threshold_pct / 100) * avg_volume[i]`.
    pub volume: Vec<bool>,
    /// `pct_change[i] > daily_change_threshold_pct`.
    pub price: Vec<bool>,
    /// Both conditions at once.
    pub combined: Vec<bool>,
}

impl BreakoutFlags {
    /// Number of combined breakout bars.
    pub fn count(&self) -> usize {
        self.combined.iter().filter(|&&b| b).count()
    }
}

/// Flag bars where volume and price both break their thresholds.
///
/// Both comparisons are strict: a bar sitting exactly at a threshold does not
/// qualify. A NaN indicator (warmup bar) never qualifies. Stateless and
/// order-independent given the derived series.
pub fn detect(bars: &[Bar], indicators: &IndicatorSeries, params: &RunParams) -> BreakoutFlags {
    debug_assert_eq!(bars.len(), indicators.len());

    let volume_multiple = params.volume_threshold_pct / 100.0;
    let volume: Vec<bool> = bars
        .iter()
        .zip(&indicators.avg_volume)
        .map(|(bar, &avg)| !avg.is_nan() && bar.volume > volume_multiple * avg)
        .collect();

    let price: Vec<bool> = indicators
        .pct_change
        .iter()
        .map(|&change| !change.is_nan() && change > params.daily_change_threshold_pct)
        .collect();

    let combined = volume
        .iter()
        .zip(&price)
        .map(|(&v, &p)| v && p)
        .collect();

    BreakoutFlags {
        volume,
        price,
        combined,
    }
}
