//! Actionable buy/sell signals

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::iso_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAction {
    Buy,
    Sell,
}

impl SignalAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalAction::Buy => "BUY",
            SignalAction::Sell => "SELL",
        }
    }
}

/// One buy or sell signal.
///
/// Values are stored as given: confidence is nominally in `[0, 1]` and the
/// price levels are not checked against each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRecord {
    pub action: SignalAction,
    pub confidence: f64,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub target: f64,
    #[serde(default)]
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}

impl SignalRecord {
    pub fn new(
        action: SignalAction,
        confidence: f64,
        entry_price: f64,
        stop_loss: f64,
        target: f64,
    ) -> Self {
        Self {
            action,
            confidence,
            entry_price,
            stop_loss,
            target,
            reason: String::new(),
            timestamp: Utc::now(),
        }
    }

    /// Buy signal
    pub fn buy(confidence: f64, entry_price: f64, stop_loss: f64, target: f64) -> Self {
        Self::new(SignalAction::Buy, confidence, entry_price, stop_loss, target)
    }

    /// Sell signal
    pub fn sell(confidence: f64, entry_price: f64, stop_loss: f64, target: f64) -> Self {
        Self::new(SignalAction::Sell, confidence, entry_price, stop_loss, target)
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn is_buy(&self) -> bool {
        self.action == SignalAction::Buy
    }

    pub fn is_sell(&self) -> bool {
        self.action == SignalAction::Sell
    }

    /// Plain key/value form with an ISO-8601 timestamp
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("action".into(), Value::from(self.action.as_str()));
        map.insert("confidence".into(), Value::from(self.confidence));
        map.insert("entry_price".into(), Value::from(self.entry_price));
        map.insert("stop_loss".into(), Value::from(self.stop_loss));
        map.insert("target".into(), Value::from(self.target));
        map.insert("reason".into(), Value::from(self.reason.as_str()));
        map.insert("timestamp".into(), Value::from(iso_timestamp(&self.timestamp)));
        map
    }
}
