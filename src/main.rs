use std::path::PathBuf;

use clap::Parser;
use serde_json::json;
use stocksignals::config::AnalyzerConfig;
use stocksignals::logging::{current_dispatch, init_logging};
use stocksignals::{JsonFileMarketDataProvider, ReportFormat, StockAnalyzer};

/// Analyze stock symbols and print their technical signals
#[derive(Debug, Parser)]
#[command(name = "stocksignals", version)]
struct Args {
    /// Symbols to analyze
    #[arg(required = true)]
    symbols: Vec<String>,

    /// Directory holding <SYMBOL>.json candle files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Report format (html, json, csv)
    #[arg(long, default_value = "html")]
    format: ReportFormat,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging();

    let config = AnalyzerConfig::from_env()?;
    let mut builder = StockAnalyzer::builder()
        .config(config)
        .dispatch(current_dispatch());

    if let Some(dir) = args.data_dir {
        builder = builder.data_provider(JsonFileMarketDataProvider::new(dir));
    }

    let analyzer = builder.build()?;
    let results = analyzer.batch_analyze(&args.symbols);
    let summary = analyzer.get_market_summary(&args.symbols);
    let report = analyzer.generate_report(&results, args.format)?;

    let output = json!({
        "results": results,
        "summary": summary.to_map(),
        "report": report,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
