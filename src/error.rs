//! Error types shared by the analyzer and its collaborators

use thiserror::Error;

/// Failures raised by a collaborator or by configuration.
///
/// The analyzer absorbs these at the single-symbol boundary; they only reach
/// callers through construction and report generation.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Market data could not be retrieved for a symbol
    #[error("Data fetch failed for {symbol}: {message}")]
    DataFetch { symbol: String, message: String },

    /// Indicator computation failed
    #[error("Indicator error: {0}")]
    Indicator(String),

    /// Signal generation failed
    #[error("Signal error: {0}")]
    Signal(String),

    /// Report rendering failed
    #[error("Report error: {0}")]
    Report(String),

    /// Report format outside html/json/csv
    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    /// Invalid analyzer configuration
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn data_fetch(symbol: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataFetch {
            symbol: symbol.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
