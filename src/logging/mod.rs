//! Logging setup for host applications
//!
//! The library itself never installs a subscriber: a [`crate::StockAnalyzer`]
//! emits into the `Dispatch` it was built with and is silent by default.
//! Binaries call [`init_logging`] and hand the resulting global dispatcher
//! to the analyzer with [`current_dispatch`].
//!
//! - Production: Structured JSON logs
//! - Sandbox: Colorful, human-readable logs

use crate::config::get_environment;
use tracing::Dispatch;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber based on the environment
pub fn init_logging() {
    let env = get_environment();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let is_production = matches!(env.as_str(), "production" | "prod");

    if is_production {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Dispatcher currently in effect for this thread
pub fn current_dispatch() -> Dispatch {
    tracing::dispatcher::get_default(|dispatch| dispatch.clone())
}
