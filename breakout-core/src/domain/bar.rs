//! Bar — the fundamental market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Close and traded volume for a single ticker on a single trading day.
///
/// A normalized series is strictly increasing in `date` with no duplicates.
/// Calendar gaps (weekends, holidays) are expected and carry no meaning;
/// indicator windows count bars, not days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub close: f64,
    /// Traded volume. Kept as f64: feeds report it as integer or real, and
    /// every downstream use is float arithmetic against a trailing mean.
    pub volume: f64,
}

impl Bar {
    /// Basic sanity check: positive finite close, non-negative finite volume.
    pub fn is_sane(&self) -> bool {
        self.close.is_finite()
            && self.close > 0.0
            && self.volume.is_finite()
            && self.volume >= 0.0
    }
}
