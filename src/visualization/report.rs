//! Report formats and renderer contract

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::models::analysis::BatchResults;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(ReportFormat::Html),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(AnalysisError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Produces a report artifact and returns where it was written
pub trait ReportRenderer {
    fn render(&self, results: &BatchResults, format: ReportFormat) -> Result<String>;
}

impl<R: ReportRenderer + ?Sized> ReportRenderer for Box<R> {
    fn render(&self, results: &BatchResults, format: ReportFormat) -> Result<String> {
        (**self).render(results, format)
    }
}

/// Names the destination `report.<ext>` without writing anything
pub struct PlaceholderReportRenderer;

impl ReportRenderer for PlaceholderReportRenderer {
    fn render(&self, _results: &BatchResults, format: ReportFormat) -> Result<String> {
        Ok(format!("report.{}", format.extension()))
    }
}
