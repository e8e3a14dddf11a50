//! Unit tests for the JSON file market data provider

use std::fs;

use stocksignals::{AnalysisError, JsonFileMarketDataProvider, MarketDataProvider};

use crate::common::daily_candles;

#[test]
fn test_reads_symbol_file() {
    let dir = tempfile::tempdir().unwrap();
    let candles = daily_candles(45, 50.0);
    fs::write(
        dir.path().join("AAPL.json"),
        serde_json::to_string(&candles).unwrap(),
    )
    .unwrap();

    let provider = JsonFileMarketDataProvider::new(dir.path());
    let data = provider.get_stock_data("AAPL", "1d", 30).unwrap().unwrap();

    assert_eq!(data.len(), 30);
    assert_eq!(data.last(), candles.last());
}

#[test]
fn test_missing_file_is_no_data() {
    let dir = tempfile::tempdir().unwrap();
    let provider = JsonFileMarketDataProvider::new(dir.path());
    assert!(provider.get_stock_data("ZZZZ", "1d", 30).unwrap().is_none());
}

#[test]
fn test_malformed_file_is_fetch_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("BADSYM.json"), "{ not candles").unwrap();

    let provider = JsonFileMarketDataProvider::new(dir.path());
    let err = provider.get_stock_data("BADSYM", "1d", 30).unwrap_err();
    assert!(matches!(err, AnalysisError::DataFetch { ref symbol, .. } if symbol == "BADSYM"));
}

#[test]
fn test_rejects_path_like_symbols() {
    let dir = tempfile::tempdir().unwrap();
    let provider = JsonFileMarketDataProvider::new(dir.path());
    assert!(provider.get_stock_data("../etc/passwd", "1d", 30).is_err());
    assert!(provider.get_stock_data("", "1d", 30).is_err());
}
