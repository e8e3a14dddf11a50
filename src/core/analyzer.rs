//! Stock analyzer: sequences data fetch, indicators and signal generation
//!
//! Every collaborator failure is absorbed at [`StockAnalyzer::analyze_stock`]:
//! callers always get a (possibly empty) list of signals back.

use tracing::{debug, error, info, warn, Dispatch};

use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::indicators::{IndicatorEngine, PlaceholderIndicatorEngine};
use crate::models::analysis::{AnalysisResult, BatchResults, MarketSummary};
use crate::models::indicators::IndicatorSet;
use crate::models::signal::SignalRecord;
use crate::services::market_data::{MarketDataProvider, PlaceholderMarketDataProvider};
use crate::signals::{PlaceholderSignalEngine, SignalEngine};
use crate::visualization::{PlaceholderReportRenderer, ReportFormat, ReportRenderer};

type SignalEngineFactory = Box<dyn FnOnce(f64) -> Box<dyn SignalEngine>>;

/// Outcome of one pass through the pipeline for a symbol
enum Pipeline {
    NoData,
    Complete {
        indicators: IndicatorSet,
        signals: Vec<SignalRecord>,
    },
}

pub struct StockAnalyzer {
    config: AnalyzerConfig,
    data_provider: Box<dyn MarketDataProvider>,
    indicators: Box<dyn IndicatorEngine>,
    signal_engine: Box<dyn SignalEngine>,
    renderer: Box<dyn ReportRenderer>,
    dispatch: Dispatch,
}

impl StockAnalyzer {
    /// Analyzer with placeholder collaborators and no log output
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    pub fn builder() -> StockAnalyzerBuilder {
        StockAnalyzerBuilder::default()
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Signals for one symbol; empty when there is no data or any stage fails
    pub fn analyze_stock(&self, symbol: &str) -> Vec<SignalRecord> {
        self.in_scope(|| match self.run_pipeline(symbol) {
            Ok(Pipeline::Complete { signals, .. }) => signals,
            Ok(Pipeline::NoData) => Vec::new(),
            Err(e) => {
                error!(symbol = %symbol, error = %e, "Error analyzing {}: {}", symbol, e);
                Vec::new()
            }
        })
    }

    /// Like [`Self::analyze_stock`], keeping the indicators alongside the signals
    pub fn analyze_stock_detailed(&self, symbol: &str) -> AnalysisResult {
        self.in_scope(|| match self.run_pipeline(symbol) {
            Ok(Pipeline::Complete {
                indicators,
                signals,
            }) => AnalysisResult::new(signals, indicators, Vec::new()),
            Ok(Pipeline::NoData) => AnalysisResult::empty(),
            Err(e) => {
                error!(symbol = %symbol, error = %e, "Error analyzing {}: {}", symbol, e);
                AnalysisResult::empty()
            }
        })
    }

    /// Analyze each symbol in turn
    pub fn batch_analyze<S: AsRef<str>>(&self, symbols: &[S]) -> BatchResults {
        let mut results = BatchResults::new();

        for symbol in symbols {
            let symbol = symbol.as_ref();
            self.in_scope(|| info!(symbol = %symbol, "Processing {} in batch analysis", symbol));
            results.insert(symbol.to_string(), self.analyze_stock(symbol));
        }

        results
    }

    /// Render a report and return its destination
    pub fn generate_report(&self, results: &BatchResults, format: ReportFormat) -> Result<String> {
        self.in_scope(|| {
            info!(report_format = %format, symbols = results.len(), "Generating {} report", format);
            self.renderer.render(results, format)
        })
    }

    pub fn get_market_summary<S: AsRef<str>>(&self, symbols: &[S]) -> MarketSummary {
        MarketSummary::new(symbols.len())
    }

    fn run_pipeline(&self, symbol: &str) -> Result<Pipeline> {
        info!(symbol = %symbol, "Starting analysis for {}", symbol);

        let data = self.data_provider.get_stock_data(
            symbol,
            &self.config.timeframe,
            self.config.lookback_period,
        )?;

        let data = match data {
            Some(data) if !data.is_empty() => data,
            _ => {
                warn!(symbol = %symbol, "No data available for {}", symbol);
                return Ok(Pipeline::NoData);
            }
        };

        debug!(symbol = %symbol, rows = data.len(), "Fetched {} rows for {}", data.len(), symbol);

        let indicators = self.indicators.calculate_all(&data)?;
        let signals = self.signal_engine.generate_signals(&data, &indicators)?;

        info!(
            symbol = %symbol,
            count = signals.len(),
            "Analysis complete for {}. Generated {} signals",
            symbol,
            signals.len()
        );

        Ok(Pipeline::Complete {
            indicators,
            signals,
        })
    }

    fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

impl Default for StockAnalyzer {
    fn default() -> Self {
        Self::builder().assemble(AnalyzerConfig::default())
    }
}

/// Builder for [`StockAnalyzer`]; unset collaborators fall back to placeholders
#[derive(Default)]
pub struct StockAnalyzerBuilder {
    config: Option<AnalyzerConfig>,
    data_provider: Option<Box<dyn MarketDataProvider>>,
    indicators: Option<Box<dyn IndicatorEngine>>,
    signal_engine: Option<SignalEngineFactory>,
    renderer: Option<Box<dyn ReportRenderer>>,
    dispatch: Option<Dispatch>,
}

impl StockAnalyzerBuilder {
    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn data_provider(mut self, provider: impl MarketDataProvider + 'static) -> Self {
        self.data_provider = Some(Box::new(provider));
        self
    }

    pub fn indicator_engine(mut self, engine: impl IndicatorEngine + 'static) -> Self {
        self.indicators = Some(Box::new(engine));
        self
    }

    /// Signal engine constructor, called with the configured volume threshold
    pub fn signal_engine<F, E>(mut self, make: F) -> Self
    where
        F: FnOnce(f64) -> E + 'static,
        E: SignalEngine + 'static,
    {
        self.signal_engine = Some(Box::new(move |threshold| {
            Box::new(make(threshold)) as Box<dyn SignalEngine>
        }));
        self
    }

    pub fn report_renderer(mut self, renderer: impl ReportRenderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Log sink for the analyzer; silent when unset
    pub fn dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    pub fn build(mut self) -> Result<StockAnalyzer> {
        let config = self.config.take().unwrap_or_default();
        config.validate()?;
        Ok(self.assemble(config))
    }

    fn assemble(self, config: AnalyzerConfig) -> StockAnalyzer {
        let signal_engine = match self.signal_engine {
            Some(make) => make(config.volume_threshold),
            None => Box::new(PlaceholderSignalEngine::new(config.volume_threshold)),
        };

        StockAnalyzer {
            data_provider: self
                .data_provider
                .unwrap_or_else(|| Box::new(PlaceholderMarketDataProvider)),
            indicators: self
                .indicators
                .unwrap_or_else(|| Box::new(PlaceholderIndicatorEngine)),
            signal_engine,
            renderer: self
                .renderer
                .unwrap_or_else(|| Box::new(PlaceholderReportRenderer)),
            dispatch: self.dispatch.unwrap_or_else(Dispatch::none),
            config,
        }
    }
}
