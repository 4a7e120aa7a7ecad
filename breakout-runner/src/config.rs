//! Serializable run configuration.
//!
//! A `RunConfig` is the TOML-facing shape of one evaluation request. Dates
//! stay strings here; validation into typed [`RunParams`] happens in
//! `into_params`, so a config file with a bad date fails the same way a bad
//! CLI flag does.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use breakout_core::domain::{
    RunParams, DEFAULT_DAILY_CHANGE_THRESHOLD_PCT, DEFAULT_HOLDING_PERIOD_DAYS,
    DEFAULT_VOLUME_THRESHOLD_PCT,
};
use breakout_core::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub ticker: String,
    pub start_date: String,
    pub end_date: String,

    #[serde(default = "default_volume_threshold")]
    pub volume_threshold_pct: f64,

    #[serde(default = "default_change_threshold")]
    pub daily_change_threshold_pct: f64,

    #[serde(default = "default_holding_period")]
    pub holding_period_days: usize,
}

fn default_volume_threshold() -> f64 {
    DEFAULT_VOLUME_THRESHOLD_PCT
}

fn default_change_threshold() -> f64 {
    DEFAULT_DAILY_CHANGE_THRESHOLD_PCT
}

fn default_holding_period() -> usize {
    DEFAULT_HOLDING_PERIOD_DAYS
}

impl RunConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Validate into typed run parameters (date parsing, range and holding
    /// period checks — everything rejected before retrieval).
    pub fn into_params(self) -> Result<RunParams, CoreError> {
        RunParams::parse(
            &self.ticker,
            &self.start_date,
            &self.end_date,
            self.volume_threshold_pct,
            self.daily_change_threshold_pct,
            self.holding_period_days,
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config = RunConfig::from_toml_str(
            r#"
            ticker = "AAPL"
            start_date = "2020-01-01"
            end_date = "2021-01-01"
            "#,
        )
        .unwrap();
        assert_eq!(config.volume_threshold_pct, 200.0);
        assert_eq!(config.daily_change_threshold_pct, 2.0);
        assert_eq!(config.holding_period_days, 10);

        let params = config.into_params().unwrap();
        assert_eq!(params.ticker, "AAPL");
    }

    #[test]
    fn explicit_thresholds_override_defaults() {
        let config = RunConfig::from_toml_str(
            r#"
            ticker = "SPY"
            start_date = "2020-01-01"
            end_date = "2021-01-01"
            volume_threshold_pct = 300.0
            daily_change_threshold_pct = 1.5
            holding_period_days = 5
            "#,
        )
        .unwrap();
        let params = config.into_params().unwrap();
        assert_eq!(params.volume_threshold_pct, 300.0);
        assert_eq!(params.daily_change_threshold_pct, 1.5);
        assert_eq!(params.holding_period_days, 5);
    }

    #[test]
    fn bad_date_in_config_is_rejected_at_validation() {
        let config = RunConfig::from_toml_str(
            r#"
            ticker = "SPY"
            start_date = "not-a-date"
            end_date = "2021-01-01"
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.into_params().unwrap_err(),
            CoreError::InvalidDate { .. }
        ));
    }

    #[test]
    fn missing_ticker_is_a_parse_error() {
        let err = RunConfig::from_toml_str(
            r#"
            start_date = "2020-01-01"
            end_date = "2021-01-01"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
