//! Signal generation interfaces.

pub mod engine;

pub use engine::{PlaceholderSignalEngine, SignalEngine};
