//! Aggregated analysis records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::indicators::{IndicatorSet, IndicatorValue};
use super::iso_timestamp;
use super::signal::SignalRecord;

/// Per-symbol signals from a batch run
pub type BatchResults = BTreeMap<String, Vec<SignalRecord>>;

/// Signals, indicators and chart patterns from one analysis.
///
/// Patterns are free-form objects; no pattern detector populates them yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub signals: Vec<SignalRecord>,
    pub indicators: IndicatorSet,
    pub patterns: Vec<Map<String, Value>>,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn new(
        signals: Vec<SignalRecord>,
        indicators: IndicatorSet,
        patterns: Vec<Map<String, Value>>,
    ) -> Self {
        Self {
            signals,
            indicators,
            patterns,
            timestamp: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), IndicatorSet::new(), Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty() && self.indicators.is_empty() && self.patterns.is_empty()
    }

    pub fn to_map(&self) -> Map<String, Value> {
        let signals = self
            .signals
            .iter()
            .map(|signal| Value::Object(signal.to_map()))
            .collect();
        let indicators = self
            .indicators
            .iter()
            .map(|(name, value)| (name.to_string(), indicator_to_value(value)))
            .collect();
        let patterns = self.patterns.iter().cloned().map(Value::Object).collect();

        let mut map = Map::new();
        map.insert("signals".into(), Value::Array(signals));
        map.insert("indicators".into(), Value::Object(indicators));
        map.insert("patterns".into(), Value::Array(patterns));
        map.insert("timestamp".into(), Value::from(iso_timestamp(&self.timestamp)));
        map
    }
}

fn indicator_to_value(value: &IndicatorValue) -> Value {
    match value {
        IndicatorValue::Scalar(v) => Value::from(*v),
        IndicatorValue::Series(values) => Value::from(values.clone()),
    }
}

/// Market-wide signal counts for a set of symbols
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub total_symbols: usize,
    pub bullish_signals: usize,
    pub bearish_signals: usize,
    pub neutral_signals: usize,
    pub timestamp: DateTime<Utc>,
}

impl MarketSummary {
    pub fn new(total_symbols: usize) -> Self {
        Self {
            total_symbols,
            bullish_signals: 0,
            bearish_signals: 0,
            neutral_signals: 0,
            timestamp: Utc::now(),
        }
    }

    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("total_symbols".into(), Value::from(self.total_symbols));
        map.insert("bullish_signals".into(), Value::from(self.bullish_signals));
        map.insert("bearish_signals".into(), Value::from(self.bearish_signals));
        map.insert("neutral_signals".into(), Value::from(self.neutral_signals));
        map.insert("timestamp".into(), Value::from(iso_timestamp(&self.timestamp)));
        map
    }
}
