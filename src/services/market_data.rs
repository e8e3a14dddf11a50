//! Market data provider interface and data-only providers.

use std::collections::HashMap;

use crate::error::Result;
use crate::models::market_data::{Candle, MarketData};

pub trait MarketDataProvider {
    /// Fetch up to `periods` of the most recent candles for `symbol`.
    ///
    /// `Ok(None)` means the provider has nothing for the symbol.
    fn get_stock_data(
        &self,
        symbol: &str,
        timeframe: &str,
        periods: usize,
    ) -> Result<Option<MarketData>>;
}

impl<P: MarketDataProvider + ?Sized> MarketDataProvider for Box<P> {
    fn get_stock_data(
        &self,
        symbol: &str,
        timeframe: &str,
        periods: usize,
    ) -> Result<Option<MarketData>> {
        (**self).get_stock_data(symbol, timeframe, periods)
    }
}

/// Provider with no data source attached
pub struct PlaceholderMarketDataProvider;

impl MarketDataProvider for PlaceholderMarketDataProvider {
    fn get_stock_data(
        &self,
        _symbol: &str,
        _timeframe: &str,
        _periods: usize,
    ) -> Result<Option<MarketData>> {
        Ok(None)
    }
}

/// Serves candles registered up front, keyed by symbol
#[derive(Debug, Default)]
pub struct InMemoryMarketDataProvider {
    candles: HashMap<String, Vec<Candle>>,
}

impl InMemoryMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candles(mut self, symbol: impl Into<String>, candles: Vec<Candle>) -> Self {
        self.insert(symbol, candles);
        self
    }

    pub fn insert(&mut self, symbol: impl Into<String>, candles: Vec<Candle>) {
        self.candles.insert(symbol.into(), candles);
    }
}

impl MarketDataProvider for InMemoryMarketDataProvider {
    fn get_stock_data(
        &self,
        symbol: &str,
        timeframe: &str,
        periods: usize,
    ) -> Result<Option<MarketData>> {
        Ok(self.candles.get(symbol).map(|candles| {
            MarketData::new(symbol, timeframe, candles.clone()).tail(periods)
        }))
    }
}
