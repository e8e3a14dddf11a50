pub mod engine;

pub use engine::{IndicatorEngine, PlaceholderIndicatorEngine};
