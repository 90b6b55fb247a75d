//! Debug tracing infrastructure for development diagnostics
//!
//! State transitions log at debug level, individual drag moves at
//! trace level.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=offslide::update::gesture=trace` - drag-by-drag detail

use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize a console-only tracing subscriber
///
/// Console output respects the RUST_LOG env var for filtering and
/// defaults to `warn`.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_filter(console_filter),
        )
        .init();
}

/// Initialize tracing with console and file logging
///
/// The file layer writes `offslide.log` into `logs_dir` with daily
/// rotation, always at debug level for troubleshooting.
pub fn init_with_file(logs_dir: impl AsRef<Path>) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_filter(console_filter);

    let file_appender = tracing_appender::rolling::daily(logs_dir.as_ref(), "offslide.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
