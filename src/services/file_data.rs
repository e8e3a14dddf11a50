//! Market data read from per-symbol JSON files

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::models::market_data::{Candle, MarketData};
use crate::services::market_data::MarketDataProvider;

/// Reads `<dir>/<SYMBOL>.json`, a JSON array of candles.
///
/// A missing file means no data for the symbol. The timeframe is recorded on
/// the returned table but does not select a file.
#[derive(Debug, Clone)]
pub struct JsonFileMarketDataProvider {
    dir: PathBuf,
}

impl JsonFileMarketDataProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{symbol}.json"))
    }
}

impl MarketDataProvider for JsonFileMarketDataProvider {
    fn get_stock_data(
        &self,
        symbol: &str,
        timeframe: &str,
        periods: usize,
    ) -> Result<Option<MarketData>> {
        if symbol.is_empty() || symbol.contains(['/', '\\']) || symbol.starts_with('.') {
            return Err(AnalysisError::data_fetch(symbol, "invalid symbol"));
        }

        let path = self.path_for(symbol);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No data file");
                return Ok(None);
            }
            Err(e) => {
                return Err(AnalysisError::data_fetch(
                    symbol,
                    format!("{}: {}", path.display(), e),
                ))
            }
        };

        let candles: Vec<Candle> = serde_json::from_str(&raw).map_err(|e| {
            AnalysisError::data_fetch(symbol, format!("{}: {}", path.display(), e))
        })?;

        Ok(Some(
            MarketData::new(symbol, timeframe, candles).tail(periods),
        ))
    }
}
