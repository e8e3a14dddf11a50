//! Unit tests for buy/sell signal records

use chrono::DateTime;
use serde_json::Value;
use stocksignals::{SignalAction, SignalRecord};

#[test]
fn test_buy_signal_to_map() {
    let signal = SignalRecord::buy(0.75, 150.0, 145.0, 165.0).with_reason("Volume breakout");
    let map = signal.to_map();

    assert_eq!(map["action"], "BUY");
    assert_eq!(map["confidence"], 0.75);
    assert_eq!(map["entry_price"], 150.0);
    assert_eq!(map["stop_loss"], 145.0);
    assert_eq!(map["target"], 165.0);
    assert_eq!(map["reason"], "Volume breakout");
    assert_eq!(map.len(), 7);

    let timestamp = map["timestamp"].as_str().unwrap();
    let parsed = DateTime::parse_from_rfc3339(timestamp).unwrap();
    assert_eq!(parsed, signal.timestamp);
}

#[test]
fn test_sell_signal_to_map() {
    let signal = SignalRecord::sell(0.6, 98.5, 102.0, 90.0);
    let map = signal.to_map();

    assert_eq!(signal.action, SignalAction::Sell);
    assert!(signal.is_sell());
    assert_eq!(map["action"], "SELL");
    assert_eq!(map["reason"], "");
    assert!(DateTime::parse_from_rfc3339(map["timestamp"].as_str().unwrap()).is_ok());
}

#[test]
fn test_values_are_not_validated() {
    // stop above entry on a buy, confidence outside [0, 1]
    let signal = SignalRecord::buy(1.7, 100.0, 120.0, 80.0);
    assert_eq!(signal.confidence, 1.7);
    assert_eq!(signal.stop_loss, 120.0);
    assert_eq!(signal.target, 80.0);
}

#[test]
fn test_serde_matches_map() {
    let signal = SignalRecord::buy(0.9, 10.0, 9.0, 12.0).with_reason("gap up");
    let value = serde_json::to_value(&signal).unwrap();
    let Value::Object(serialized) = value else {
        panic!("expected object");
    };

    let map = signal.to_map();
    let mut serialized_keys: Vec<_> = serialized.keys().collect();
    let mut map_keys: Vec<_> = map.keys().collect();
    serialized_keys.sort();
    map_keys.sort();
    assert_eq!(serialized_keys, map_keys);
    assert_eq!(serialized["action"], map["action"]);

    let back: SignalRecord = serde_json::from_value(Value::Object(serialized)).unwrap();
    assert_eq!(back, signal);
}
