//! Unit tests for report formats and the placeholder renderer

use stocksignals::{
    AnalysisError, BatchResults, PlaceholderReportRenderer, ReportFormat, ReportRenderer,
};

#[test]
fn test_parse_formats() {
    assert_eq!("html".parse::<ReportFormat>().unwrap(), ReportFormat::Html);
    assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
    assert_eq!(" csv ".parse::<ReportFormat>().unwrap(), ReportFormat::Csv);
    assert_eq!(ReportFormat::default(), ReportFormat::Html);
}

#[test]
fn test_parse_unsupported_format() {
    let err = "pdf".parse::<ReportFormat>().unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedFormat(ref f) if f == "pdf"));
}

#[test]
fn test_placeholder_destination_names() {
    let renderer = PlaceholderReportRenderer;
    let results = BatchResults::new();

    for format in [ReportFormat::Html, ReportFormat::Json, ReportFormat::Csv] {
        let destination = renderer.render(&results, format).unwrap();
        assert_eq!(destination, format!("report.{format}"));
        assert!(destination.ends_with(format.extension()));
    }
}
