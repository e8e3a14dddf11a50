//! Stock technical-analysis signals
//!
//! [`StockAnalyzer`] wires four collaborators together for each request:
//!
//! - [`MarketDataProvider`] supplies OHLCV candles for a symbol
//! - [`IndicatorEngine`] computes named indicators over those candles
//! - [`SignalEngine`] turns data and indicators into buy/sell signals
//! - [`ReportRenderer`] writes a report for a set of results
//!
//! Analysis is fail-soft: missing data and collaborator errors are logged
//! and come back as an empty signal list.
//!
//! ```
//! use chrono::{Duration, Utc};
//! use stocksignals::{AnalyzerConfig, Candle, InMemoryMarketDataProvider, StockAnalyzer};
//!
//! let start = Utc::now();
//! let candles = (0..5)
//!     .map(|i| Candle::new(10.0, 11.0, 9.5, 10.5, 1_000.0, start + Duration::days(i)))
//!     .collect();
//!
//! let analyzer = StockAnalyzer::builder()
//!     .config(AnalyzerConfig::default())
//!     .data_provider(InMemoryMarketDataProvider::new().with_candles("AAPL", candles))
//!     .build()
//!     .unwrap();
//!
//! let results = analyzer.batch_analyze(&["AAPL", "ZZZZ"]);
//! assert_eq!(results.len(), 2);
//! assert!(results["ZZZZ"].is_empty());
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
pub mod visualization;

pub use crate::config::AnalyzerConfig;
pub use crate::core::{StockAnalyzer, StockAnalyzerBuilder};
pub use crate::error::{AnalysisError, Result};
pub use crate::indicators::{IndicatorEngine, PlaceholderIndicatorEngine};
pub use crate::models::{
    AnalysisResult, BatchResults, Candle, IndicatorSet, IndicatorValue, MarketData,
    MarketSummary, SignalAction, SignalRecord,
};
pub use crate::services::{
    InMemoryMarketDataProvider, JsonFileMarketDataProvider, MarketDataProvider,
    PlaceholderMarketDataProvider,
};
pub use crate::signals::{PlaceholderSignalEngine, SignalEngine};
pub use crate::visualization::{PlaceholderReportRenderer, ReportFormat, ReportRenderer};
