//! OHLCV market data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Time-indexed table of candles for one symbol, ascending by timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub symbol: String,
    pub timeframe: String,
    candles: Vec<Candle>,
}

impl MarketData {
    pub fn new(
        symbol: impl Into<String>,
        timeframe: impl Into<String>,
        mut candles: Vec<Candle>,
    ) -> Self {
        candles.sort_by_key(|c| c.timestamp);
        Self {
            symbol: symbol.into(),
            timeframe: timeframe.into(),
            candles,
        }
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }

    /// Keep only the most recent `periods` rows
    pub fn tail(mut self, periods: usize) -> Self {
        let skip = self.candles.len().saturating_sub(periods);
        self.candles.drain(..skip);
        self
    }
}
