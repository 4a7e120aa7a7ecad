//! Previous close and day-over-day percentage change.

use crate::domain::Bar;

/// `result[i] = close[i-1]`; NaN at index 0.
pub fn prev_close(bars: &[Bar]) -> Vec<f64> {
    let mut result = vec![f64::NAN; bars.len()];
    for i in 1..bars.len() {
        result[i] = bars[i - 1].close;
    }
    result
}

/// `result[i] = (close[i] / prev_close[i] - 1) * 100`; NaN wherever
/// `prev_close` is NaN.
pub fn pct_change(bars: &[Bar], prev_close: &[f64]) -> Vec<f64> {
    debug_assert_eq!(bars.len(), prev_close.len());
    bars.iter()
        .zip(prev_close)
        .map(|(bar, &prev)| {
            if prev.is_nan() {
                f64::NAN
            } else {
                (bar.close / prev - 1.0) * 100.0
            }
        })
        .collect()
}
