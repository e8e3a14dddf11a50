//! Indicator engine contract

use crate::error::Result;
use crate::models::indicators::IndicatorSet;
use crate::models::market_data::MarketData;

/// Computes every configured indicator over a market data table
pub trait IndicatorEngine {
    fn calculate_all(&self, data: &MarketData) -> Result<IndicatorSet>;
}

impl<E: IndicatorEngine + ?Sized> IndicatorEngine for Box<E> {
    fn calculate_all(&self, data: &MarketData) -> Result<IndicatorSet> {
        (**self).calculate_all(data)
    }
}

/// Engine with no indicators configured
pub struct PlaceholderIndicatorEngine;

impl IndicatorEngine for PlaceholderIndicatorEngine {
    fn calculate_all(&self, _data: &MarketData) -> Result<IndicatorSet> {
        Ok(IndicatorSet::new())
    }
}
