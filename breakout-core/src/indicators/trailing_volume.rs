//! Trailing average volume — the breakout baseline.
//!
//! Rolling mean of `volume` over the `lookback` bars strictly BEFORE each
//! index. The window is lagged by one bar so a volume surge never feeds its
//! own baseline; without the lag a large-enough spike could mask itself.
//! Indices without a full prior window carry NaN.

use crate::domain::Bar;

/// Lagged rolling mean of volume.
///
/// `result[i]` = mean of `volume[i-lookback..i]`; NaN for `i < lookback`.
pub fn trailing_avg_volume(bars: &[Bar], lookback: usize) -> Vec<f64> {
    assert!(lookback >= 1, "volume lookback must be >= 1");

    let n = bars.len();
    let mut result = vec![f64::NAN; n];
    if n <= lookback {
        return result;
    }

    // Rolling sum: volume[i-lookback..i] feeds result[i].
    let mut sum: f64 = bars[..lookback].iter().map(|b| b.volume).sum();
    result[lookback] = sum / lookback as f64;

    for i in lookback + 1..n {
        sum += bars[i - 1].volume - bars[i - 1 - lookback].volume;
        result[i] = sum / lookback as f64;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars, DEFAULT_EPSILON};

    #[test]
    fn trailing_mean_lookback_3() {
        let closes = [100.0; 6];
        let volumes = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0];
        let bars = make_bars(&closes, &volumes);
        let result = trailing_avg_volume(&bars, 3);

        for i in 0..3 {
            assert!(result[i].is_nan(), "expected NaN at index {i}");
        }
        // result[3] = mean(10,20,30) = 20
        assert_approx(result[3], 20.0, DEFAULT_EPSILON);
        // result[4] = mean(20,30,40) = 30
        assert_approx(result[4], 30.0, DEFAULT_EPSILON);
        // result[5] = mean(30,40,50) = 40
        assert_approx(result[5], 40.0, DEFAULT_EPSILON);
    }

    #[test]
    fn window_excludes_current_bar() {
        let closes = [100.0; 5];
        // Huge spike at index 4 must not appear in its own baseline.
        let volumes = [10.0, 10.0, 10.0, 10.0, 1_000_000.0];
        let bars = make_bars(&closes, &volumes);
        let result = trailing_avg_volume(&bars, 4);
        assert_approx(result[4], 10.0, DEFAULT_EPSILON);
    }

    #[test]
    fn full_warmup_is_nan() {
        let bars = make_bars(&[100.0; 20], &[1000.0; 20]);
        let result = trailing_avg_volume(&bars, 20);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn twenty_bar_warmup_boundary() {
        let bars = make_bars(&[100.0; 22], &[1000.0; 22]);
        let result = trailing_avg_volume(&bars, 20);
        assert!(result[19].is_nan());
        assert_approx(result[20], 1000.0, DEFAULT_EPSILON);
        assert_approx(result[21], 1000.0, DEFAULT_EPSILON);
    }

    #[test]
    fn empty_series() {
        let result = trailing_avg_volume(&[], 20);
        assert!(result.is_empty());
    }
}
