//! CryptoSentinel landing service.
//!
//! Serves the landing page, a constant API documentation page, a mock sentiment analysis
//! endpoint and a newsletter subscription endpoint backed by Postgres.

pub mod app;
pub mod config;
pub mod database;
mod error;
pub mod templ_manager;
pub mod web;

// re-exports
pub use app::{serve, App, AppState};
pub use error::{Error, Result};

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Human friendly tracing used in debug builds.
/// Verbosity is controlled with `RUST_LOG`, defaults to `debug` for this crate.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .without_time()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sentinel=debug,tower_http=debug,info")),
        )
        .compact()
        .init();
}

/// Tracing used in release builds, plain text without colors and with event targets.
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
