/*!
 * Structured Tracing
 * Subscriber setup for the tracing events emitted by the containers
 *
 * Containers never install a subscriber themselves; binaries and tests call
 * one of the initializers below.
 */

use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Environment variable switching output to JSON
pub const TRACE_JSON_ENV: &str = "SYNC_CONTAINERS_TRACE_JSON";

fn json_requested() -> bool {
    std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SYNC_CONTAINERS_TRACE_JSON: Enable JSON output (default: false)
///
/// # Panics
///
/// Panics if a global subscriber is already installed; use
/// [`try_init_tracing`] where that can happen.
pub fn init_tracing() {
    if !try_init_tracing() {
        panic!("global tracing subscriber already installed");
    }
}

/// Install the global subscriber unless one is already present
///
/// Returns `true` if this call installed it.
pub fn try_init_tracing() -> bool {
    let registry = tracing_subscriber::registry().with(env_filter());

    let installed = if json_requested() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
            .is_ok()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_line_number(true)
                    .with_file(true)
                    .compact(),
            )
            .try_init()
            .is_ok()
    };

    if installed {
        info!(json = json_requested(), "Container tracing initialized");
    }
    installed
}
