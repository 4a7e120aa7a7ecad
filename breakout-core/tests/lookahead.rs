//! Look-ahead contamination tests for the derived series.
//!
//! Invariant: no derived value at bar t may depend on data from bar t+1 or
//! later, and the trailing volume baseline at bar t may not include bar t
//! itself.
//!
//! Method: compute on a truncated series (bars 0..100) and the full series
//! (bars 0..200) and assert bars 0..100 are identical between both runs.

use chrono::NaiveDate;
use breakout_core::domain::Bar;
use breakout_core::indicators::{trailing_avg_volume, IndicatorSeries, VOLUME_LOOKBACK};

/// Generate N bars of deterministic pseudo-random close/volume data.
fn make_test_bars(n: usize) -> Vec<Bar> {
    let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let mut bars = Vec::with_capacity(n);
    let mut price = 100.0;

    for i in 0..n {
        // Simple LCG walk, no external RNG needed
        let seed = (i as u64).wrapping_mul(6364136223846793005).wrapping_add(1);
        let change = ((seed % 200) as f64 - 100.0) * 0.05; // -5.0 to +5.0
        price += change;
        price = price.max(10.0);

        let volume = 1000.0 + ((seed >> 8) % 5000) as f64;

        bars.push(Bar {
            date: base_date + chrono::Duration::days(i as i64),
            close: price,
            volume,
        });
    }

    bars
}

fn assert_series_prefix_equal(name: &str, truncated: &[f64], full: &[f64]) {
    for (i, (&t, &f)) in truncated.iter().zip(full).enumerate() {
        if t.is_nan() && f.is_nan() {
            continue;
        }
        assert!(
            !t.is_nan() && !f.is_nan(),
            "{name}: NaN mismatch at bar {i} (truncated={t}, full={f})"
        );
        assert_eq!(t, f, "{name}: value mismatch at bar {i}");
    }
}

#[test]
fn derived_series_have_no_lookahead() {
    let full_bars = make_test_bars(200);
    let truncated = &full_bars[..100];

    let full = IndicatorSeries::compute(&full_bars);
    let part = IndicatorSeries::compute(truncated);

    assert_eq!(part.avg_volume.len(), 100);
    assert_eq!(full.avg_volume.len(), 200);

    assert_series_prefix_equal("avg_volume", &part.avg_volume, &full.avg_volume);
    assert_series_prefix_equal("prev_close", &part.prev_close, &full.prev_close);
    assert_series_prefix_equal("pct_change", &part.pct_change, &full.pct_change);
}

#[test]
fn trailing_volume_matches_naive_lagged_mean() {
    let bars = make_test_bars(120);
    let fast = trailing_avg_volume(&bars, VOLUME_LOOKBACK);

    for (i, &value) in fast.iter().enumerate() {
        if i < VOLUME_LOOKBACK {
            assert!(value.is_nan(), "expected NaN during warmup at bar {i}");
            continue;
        }
        let window = &bars[i - VOLUME_LOOKBACK..i];
        let naive: f64 =
            window.iter().map(|b| b.volume).sum::<f64>() / VOLUME_LOOKBACK as f64;
        assert!(
            (value - naive).abs() < 1e-9,
            "rolling mean drifted from naive mean at bar {i}: {value} vs {naive}"
        );
    }
}

#[test]
fn trailing_volume_never_includes_current_bar() {
    let mut bars = make_test_bars(60);
    let before = trailing_avg_volume(&bars, VOLUME_LOOKBACK);

    // Distorting bar 40's volume must not move its own baseline.
    bars[40].volume *= 1000.0;
    let after = trailing_avg_volume(&bars, VOLUME_LOOKBACK);

    assert_eq!(before[40], after[40]);
    // But it must move the next bar's baseline.
    assert_ne!(before[41], after[41]);
}
