//! Analyzer configuration

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEFRAME: &str = "1d";
pub const DEFAULT_LOOKBACK_PERIOD: usize = 30;
pub const DEFAULT_VOLUME_THRESHOLD: f64 = 1.5;

const TIMEFRAME_VAR: &str = "STOCKSIGNALS_TIMEFRAME";
const LOOKBACK_PERIOD_VAR: &str = "STOCKSIGNALS_LOOKBACK_PERIOD";
const VOLUME_THRESHOLD_VAR: &str = "STOCKSIGNALS_VOLUME_THRESHOLD";

/// Deployment environment name, read from `ENVIRONMENT` (defaults to `sandbox`)
pub fn get_environment() -> String {
    std::env::var("ENVIRONMENT")
        .map(|env| env.trim().to_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}

/// Fixed configuration held by a [`crate::StockAnalyzer`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Data timeframe label (1d, 1h, 5m, ...)
    pub timeframe: String,
    /// Number of most recent periods to request
    pub lookback_period: usize,
    /// Volume multiplier handed to the signal engine
    pub volume_threshold: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            timeframe: DEFAULT_TIMEFRAME.to_string(),
            lookback_period: DEFAULT_LOOKBACK_PERIOD,
            volume_threshold: DEFAULT_VOLUME_THRESHOLD,
        }
    }
}

impl AnalyzerConfig {
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }

    /// Load configuration from the process environment, after reading `.env`
    /// if one is present. Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(timeframe) = lookup(TIMEFRAME_VAR) {
            builder = builder.timeframe(timeframe.trim());
        }

        if let Some(raw) = lookup(LOOKBACK_PERIOD_VAR) {
            let periods = raw.trim().parse::<usize>().map_err(|e| {
                AnalysisError::Config(format!("{LOOKBACK_PERIOD_VAR}={raw:?}: {e}"))
            })?;
            builder = builder.lookback_period(periods);
        }

        if let Some(raw) = lookup(VOLUME_THRESHOLD_VAR) {
            let threshold = raw.trim().parse::<f64>().map_err(|e| {
                AnalysisError::Config(format!("{VOLUME_THRESHOLD_VAR}={raw:?}: {e}"))
            })?;
            builder = builder.volume_threshold(threshold);
        }

        builder.build()
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeframe.trim().is_empty() {
            return Err(AnalysisError::Config(
                "timeframe must not be empty".to_string(),
            ));
        }

        if self.lookback_period == 0 {
            return Err(AnalysisError::Config(
                "lookback_period must be greater than 0".to_string(),
            ));
        }

        if !self.volume_threshold.is_finite() || self.volume_threshold <= 0.0 {
            return Err(AnalysisError::Config(format!(
                "volume_threshold must be a positive number, got {}",
                self.volume_threshold
            )));
        }

        Ok(())
    }
}

/// Builder for [`AnalyzerConfig`]
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    timeframe: Option<String>,
    lookback_period: Option<usize>,
    volume_threshold: Option<f64>,
}

impl AnalyzerConfigBuilder {
    pub fn timeframe(mut self, timeframe: impl Into<String>) -> Self {
        self.timeframe = Some(timeframe.into());
        self
    }

    pub fn lookback_period(mut self, periods: usize) -> Self {
        self.lookback_period = Some(periods);
        self
    }

    pub fn volume_threshold(mut self, threshold: f64) -> Self {
        self.volume_threshold = Some(threshold);
        self
    }

    pub fn build(self) -> Result<AnalyzerConfig> {
        let defaults = AnalyzerConfig::default();

        let config = AnalyzerConfig {
            timeframe: self.timeframe.unwrap_or(defaults.timeframe),
            lookback_period: self.lookback_period.unwrap_or(defaults.lookback_period),
            volume_threshold: self.volume_threshold.unwrap_or(defaults.volume_threshold),
        };

        config.validate()?;
        Ok(config)
    }
}
