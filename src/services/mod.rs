//! Market data sources.

pub mod file_data;
pub mod market_data;

pub use file_data::JsonFileMarketDataProvider;
pub use market_data::{
    InMemoryMarketDataProvider, MarketDataProvider, PlaceholderMarketDataProvider,
};
