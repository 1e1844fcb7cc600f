//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quill=info"))
}

/// Initialize tracing subscriber with human-readable output
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(default_filter())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize tracing subscriber with JSON output, for hosts that ship logs
pub fn init_tracing_json() {
    tracing_subscriber::registry()
        .with(default_filter())
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}
