//! Backtest simulation — fixed-horizon exits for flagged bars.

use crate::detector::{detect, BreakoutFlags};
use crate::domain::{Bar, RunParams, TradeSignal};
use crate::error::CoreError;
use crate::indicators::IndicatorSeries;

/// Project each flagged bar forward by the holding period.
///
/// Walks indices in order and emits one [`TradeSignal`] per flagged index
/// with enough forward data. Flags within `holding_period_days` bars of the
/// end of the series are dropped silently: there is no exit bar to price
/// them, and that is expected near the range boundary, not an error.
///
/// Signals come out in series order (ascending entry date). Overlapping
/// holding windows are permitted.
pub fn simulate(
    bars: &[Bar],
    flags: &BreakoutFlags,
    holding_period_days: usize,
) -> Vec<TradeSignal> {
    debug_assert_eq!(bars.len(), flags.combined.len());

    let n = bars.len();
    let mut signals = Vec::new();

    for (i, &flagged) in flags.combined.iter().enumerate() {
        if !flagged {
            continue;
        }
        // Overflow means the exit lies past any representable index, which
        // is the same "not enough forward data" case as exit >= n.
        let Some(exit) = i.checked_add(holding_period_days) else {
            continue;
        };
        if exit >= n {
            continue;
        }

        let entry_price = bars[i].close;
        let exit_price = bars[exit].close;
        signals.push(TradeSignal {
            entry_date: bars[i].date,
            entry_price,
            exit_date: bars[exit].date,
            exit_price,
            holding_period_days,
            return_pct: (exit_price / entry_price - 1.0) * 100.0,
        });
    }

    signals
}

/// Evaluate one run end to end: indicators, detection, simulation.
///
/// Pure and stateless — identical inputs produce identical output, and
/// independent runs share nothing, so a host may evaluate requests in
/// parallel on owned copies without locking. An empty signal list is a valid
/// result (`Ok(vec![])`); the host decides how to present it.
pub fn evaluate(bars: &[Bar], params: &RunParams) -> Result<Vec<TradeSignal>, CoreError> {
    if bars.is_empty() {
        return Err(CoreError::EmptyData {
            ticker: params.ticker.clone(),
        });
    }

    let indicators = IndicatorSeries::compute(bars);
    let flags = detect(bars, &indicators, params);
    Ok(simulate(bars, &flags, params.holding_period_days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars};

    fn params(holding: usize) -> RunParams {
        RunParams::parse("TEST", "2024-01-01", "2025-01-01", 200.0, 2.0, holding).unwrap()
    }

    /// 25 bars: flat close=100/volume=1000 for bars 0-19; bar 20 surges to
    /// close=103 on volume=2200; bar 23 closes at 106.
    fn worked_example() -> Vec<Bar> {
        let mut closes = vec![100.0; 20];
        let mut volumes = vec![1000.0; 20];
        closes.extend([103.0, 104.0, 105.0, 106.0, 105.0]);
        volumes.extend([2200.0, 1100.0, 1000.0, 900.0, 1000.0]);
        make_bars(&closes, &volumes)
    }

    #[test]
    fn worked_example_three_day_hold() {
        let bars = worked_example();
        let signals = evaluate(&bars, &params(3)).unwrap();

        assert_eq!(signals.len(), 1);
        let s = &signals[0];
        assert_eq!(s.entry_date, bars[20].date);
        assert_eq!(s.exit_date, bars[23].date);
        assert_approx(s.entry_price, 103.0, 1e-10);
        assert_approx(s.exit_price, 106.0, 1e-10);
        assert_eq!(s.holding_period_days, 3);
        assert_approx(s.return_pct, (106.0 / 103.0 - 1.0) * 100.0, 1e-10);
        // ~2.913%
        assert!((s.return_pct - 2.913).abs() < 0.001);
    }

    #[test]
    fn window_truncation_drops_late_flags() {
        // Same series, 10-day hold: 20 + 10 = 30 > 24 = last index.
        let bars = worked_example();
        let signals = evaluate(&bars, &params(10)).unwrap();
        assert!(signals.is_empty());
    }

    #[test]
    fn exit_at_last_bar_is_emitted() {
        let bars = worked_example();
        // 20 + 4 = 24 = last index: still valid.
        let signals = evaluate(&bars, &params(4)).unwrap();
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].exit_date, bars[24].date);
    }

    #[test]
    fn overlapping_windows_both_emitted() {
        let mut closes = vec![100.0; 20];
        let mut volumes = vec![1000.0; 20];
        // Two consecutive surge bars; their 3-bar windows overlap.
        closes.extend([103.0, 106.5, 107.0, 108.0, 109.0, 110.0]);
        volumes.extend([2200.0, 2500.0, 1000.0, 1000.0, 1000.0, 1000.0]);
        let bars = make_bars(&closes, &volumes);

        let signals = evaluate(&bars, &params(3)).unwrap();
        assert_eq!(signals.len(), 2);
        assert!(signals[0].entry_date < signals[1].entry_date);
    }

    #[test]
    fn huge_holding_period_emits_nothing() {
        // Large enough to overflow the exit index; treated as insufficient
        // forward data, same as any flag too close to the end.
        let bars = worked_example();
        let signals = evaluate(&bars, &params(usize::MAX)).unwrap();
        assert!(signals.is_empty());
    }

    #[test]
    fn evaluate_rejects_empty_series() {
        let err = evaluate(&[], &params(3)).unwrap_err();
        assert!(matches!(err, CoreError::EmptyData { .. }));
    }

    #[test]
    fn evaluate_is_deterministic() {
        let bars = worked_example();
        let p = params(3);
        let first = evaluate(&bars, &p).unwrap();
        let second = evaluate(&bars, &p).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn losing_trade_has_negative_return() {
        let mut closes = vec![100.0; 20];
        let mut volumes = vec![1000.0; 20];
        closes.extend([103.0, 98.0, 95.0, 90.0]);
        volumes.extend([2200.0, 1000.0, 1000.0, 1000.0]);
        let bars = make_bars(&closes, &volumes);

        let signals = evaluate(&bars, &params(3)).unwrap();
        assert_eq!(signals.len(), 1);
        assert!(signals[0].return_pct < 0.0);
        assert_approx(
            signals[0].return_pct,
            (90.0 / 103.0 - 1.0) * 100.0,
            1e-10,
        );
    }
}
