//! Signal engine contract

use crate::error::Result;
use crate::models::indicators::IndicatorSet;
use crate::models::market_data::MarketData;
use crate::models::signal::SignalRecord;

/// Turns market data and its indicators into an ordered list of signals.
///
/// Engines are built by the analyzer with its volume threshold, see
/// [`crate::StockAnalyzerBuilder::signal_engine`].
pub trait SignalEngine {
    fn generate_signals(
        &self,
        data: &MarketData,
        indicators: &IndicatorSet,
    ) -> Result<Vec<SignalRecord>>;
}

impl<E: SignalEngine + ?Sized> SignalEngine for Box<E> {
    fn generate_signals(
        &self,
        data: &MarketData,
        indicators: &IndicatorSet,
    ) -> Result<Vec<SignalRecord>> {
        (**self).generate_signals(data, indicators)
    }
}

/// Engine without signal rules; never emits a signal
#[derive(Debug, Clone)]
pub struct PlaceholderSignalEngine {
    volume_threshold: f64,
}

impl PlaceholderSignalEngine {
    pub fn new(volume_threshold: f64) -> Self {
        Self { volume_threshold }
    }

    pub fn volume_threshold(&self) -> f64 {
        self.volume_threshold
    }
}

impl SignalEngine for PlaceholderSignalEngine {
    fn generate_signals(
        &self,
        _data: &MarketData,
        _indicators: &IndicatorSet,
    ) -> Result<Vec<SignalRecord>> {
        Ok(Vec::new())
    }
}
