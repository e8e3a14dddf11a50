//! Core application primitives (orchestrators)

pub mod analyzer;

pub use analyzer::{StockAnalyzer, StockAnalyzerBuilder};
