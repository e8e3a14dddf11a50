//! Shared data models spanning the analysis layers.

pub mod analysis;
pub mod indicators;
pub mod market_data;
pub mod signal;

pub use analysis::{AnalysisResult, BatchResults, MarketSummary};
pub use indicators::{IndicatorSet, IndicatorValue};
pub use market_data::{Candle, MarketData};
pub use signal::{SignalAction, SignalRecord};

use chrono::{DateTime, SecondsFormat, Utc};

/// Same text serde produces for the timestamp
pub(crate) fn iso_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
