//! Unit tests for the stock analyzer pipeline

use chrono::DateTime;
use mockall::mock;
use stocksignals::{
    AnalysisError, AnalyzerConfig, BatchResults, InMemoryMarketDataProvider, MarketData,
    MarketDataProvider, ReportFormat, Result, StockAnalyzer,
};

use crate::common::{
    daily_candles, FailingIndicators, FailingProvider, FailingSignals, LastCloseSignals,
    LogBuffer, RecordingProvider, RowCountIndicators,
};

mock! {
    pub Provider {}

    impl MarketDataProvider for Provider {
        fn get_stock_data(
            &self,
            symbol: &str,
            timeframe: &str,
            periods: usize,
        ) -> Result<Option<MarketData>>;
    }
}

fn analyzer_with(provider: impl MarketDataProvider + 'static, logs: &LogBuffer) -> StockAnalyzer {
    StockAnalyzer::builder()
        .data_provider(provider)
        .indicator_engine(RowCountIndicators)
        .signal_engine(|volume_threshold| LastCloseSignals { volume_threshold })
        .dispatch(logs.dispatch())
        .build()
        .unwrap()
}

#[test]
fn test_empty_table_returns_no_signals_and_warns() {
    let logs = LogBuffer::new();
    let mut provider = InMemoryMarketDataProvider::new();
    provider.insert("ZZZZ", Vec::new());

    let analyzer = analyzer_with(provider, &logs);

    assert!(analyzer.analyze_stock("ZZZZ").is_empty());
    let output = logs.contents();
    assert!(output.contains("WARN"));
    assert!(output.contains("No data available for ZZZZ"));
}

#[test]
fn test_absent_data_returns_no_signals_and_warns() {
    let logs = LogBuffer::new();
    let analyzer = analyzer_with(InMemoryMarketDataProvider::new(), &logs);

    assert!(analyzer.analyze_stock("NOPE").is_empty());
    assert!(logs.contents().contains("No data available for NOPE"));
}

#[test]
fn test_provider_error_returns_no_signals_and_logs_error() {
    let logs = LogBuffer::new();
    let analyzer = analyzer_with(FailingProvider::new("BADSYM", daily_candles(30, 10.0)), &logs);

    assert!(analyzer.analyze_stock("BADSYM").is_empty());
    let output = logs.contents();
    assert!(output.contains("ERROR"));
    assert!(output.contains("Error analyzing BADSYM"));
    assert!(output.contains("upstream unavailable"));
}

#[test]
fn test_indicator_error_is_absorbed() {
    let logs = LogBuffer::new();
    let analyzer = StockAnalyzer::builder()
        .data_provider(InMemoryMarketDataProvider::new().with_candles("AAPL", daily_candles(30, 10.0)))
        .indicator_engine(FailingIndicators)
        .signal_engine(|volume_threshold| LastCloseSignals { volume_threshold })
        .dispatch(logs.dispatch())
        .build()
        .unwrap();

    assert!(analyzer.analyze_stock("AAPL").is_empty());
    assert!(logs.contents().contains("division by zero"));
}

#[test]
fn test_signal_error_is_absorbed() {
    let logs = LogBuffer::new();
    let analyzer = StockAnalyzer::builder()
        .data_provider(InMemoryMarketDataProvider::new().with_candles("AAPL", daily_candles(30, 10.0)))
        .signal_engine(|_| FailingSignals)
        .dispatch(logs.dispatch())
        .build()
        .unwrap();

    assert!(analyzer.analyze_stock("AAPL").is_empty());
    assert!(logs.contents().contains("threshold table missing"));
}

#[test]
fn test_signals_returned_unchanged() {
    let logs = LogBuffer::new();
    let candles = daily_candles(40, 100.0);
    let last_close = candles.last().unwrap().close;
    let analyzer = analyzer_with(
        InMemoryMarketDataProvider::new().with_candles("AAPL", candles),
        &logs,
    );

    let signals = analyzer.analyze_stock("AAPL");
    assert_eq!(signals.len(), 1);
    assert!(signals[0].is_buy());
    assert_eq!(signals[0].entry_price, last_close);
    assert_eq!(signals[0].reason, "AAPL volume x1.5");
    assert!(logs
        .contents()
        .contains("Analysis complete for AAPL. Generated 1 signals"));
}

#[test]
fn test_request_uses_configured_timeframe_and_lookback() {
    let provider = RecordingProvider::default();
    let requests = provider.requests.clone();
    let config = AnalyzerConfig::builder()
        .timeframe("1h")
        .lookback_period(60)
        .build()
        .unwrap();

    let analyzer = StockAnalyzer::builder()
        .config(config)
        .data_provider(provider)
        .build()
        .unwrap();
    analyzer.analyze_stock("MSFT");

    assert_eq!(
        requests.borrow().as_slice(),
        &[("MSFT".to_string(), "1h".to_string(), 60)]
    );
}

#[test]
fn test_mock_provider_error() {
    let mut provider = MockProvider::new();
    provider
        .expect_get_stock_data()
        .withf(|symbol, timeframe, periods| symbol == "BADSYM" && timeframe == "1d" && *periods == 30)
        .times(1)
        .returning(|symbol, _, _| Err(AnalysisError::data_fetch(symbol, "timeout")));

    let analyzer = StockAnalyzer::builder().data_provider(provider).build().unwrap();
    assert!(analyzer.analyze_stock("BADSYM").is_empty());
}

#[test]
fn test_detailed_analysis_keeps_indicators() {
    let logs = LogBuffer::new();
    let analyzer = analyzer_with(
        InMemoryMarketDataProvider::new().with_candles("AAPL", daily_candles(50, 100.0)),
        &logs,
    );

    let result = analyzer.analyze_stock_detailed("AAPL");
    assert_eq!(result.signals.len(), 1);
    assert!(result.patterns.is_empty());
    assert_eq!(
        result.indicators.get("rows"),
        Some(&stocksignals::IndicatorValue::Scalar(30.0))
    );

    assert!(analyzer.analyze_stock_detailed("ZZZZ").is_empty());
}

#[test]
fn test_batch_has_one_entry_per_symbol() {
    let logs = LogBuffer::new();
    let analyzer = analyzer_with(FailingProvider::new("BADSYM", daily_candles(30, 10.0)), &logs);
    let symbols = ["AAPL", "BADSYM", "MSFT"];

    let results = analyzer.batch_analyze(&symbols);
    assert_eq!(results.len(), 3);
    assert!(results["BADSYM"].is_empty());

    for symbol in symbols {
        let independent = analyzer.analyze_stock(symbol);
        let batched = &results[symbol];
        assert_eq!(batched.len(), independent.len());
        for (a, b) in batched.iter().zip(&independent) {
            assert_eq!(a.action, b.action);
            assert_eq!(a.entry_price, b.entry_price);
            assert_eq!(a.reason, b.reason);
        }
    }
    assert!(logs.contents().contains("Processing MSFT in batch analysis"));
}

#[test]
fn test_generate_report_destination() {
    let analyzer = StockAnalyzer::default();
    let results = BatchResults::new();

    assert!(analyzer
        .generate_report(&results, ReportFormat::Json)
        .unwrap()
        .ends_with("json"));
    assert!(analyzer
        .generate_report(&results, ReportFormat::Html)
        .unwrap()
        .ends_with("html"));
    assert!(analyzer
        .generate_report(&results, ReportFormat::Csv)
        .unwrap()
        .ends_with("csv"));
}

#[test]
fn test_market_summary() {
    let analyzer = StockAnalyzer::default();
    let summary = analyzer.get_market_summary(&["AAPL", "MSFT"]);

    assert_eq!(summary.total_symbols, 2);
    assert_eq!(summary.bullish_signals, 0);
    assert_eq!(summary.bearish_signals, 0);
    assert_eq!(summary.neutral_signals, 0);

    let map = summary.to_map();
    assert!(DateTime::parse_from_rfc3339(map["timestamp"].as_str().unwrap()).is_ok());
}

#[test]
fn test_silent_without_dispatch() {
    let logs = LogBuffer::new();
    let analyzer = StockAnalyzer::builder()
        .data_provider(InMemoryMarketDataProvider::new())
        .build()
        .unwrap();

    tracing::dispatcher::with_default(&logs.dispatch(), || {
        analyzer.analyze_stock("ZZZZ");
    });
    assert!(logs.contents().is_empty());
}
