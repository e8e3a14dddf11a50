//! Report rendering.

pub mod report;

pub use report::{PlaceholderReportRenderer, ReportFormat, ReportRenderer};
