//! Logging setup for the command-line tool
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=duplicator::update=debug` - module-level filtering
//! - `RUST_LOG=duplicator::util::params=trace` - parameter splitting detail
//!
//! # Log Files
//!
//! Logs are written to `~/.config/duplicator/logs/duplicator.log` with daily
//! rotation, always at debug level.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::{ensure_logs_dir, LOG_FILE_NAME};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so stdout stays free for the edited text.
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole run.
pub fn init() -> Option<WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let (file_layer, guard) = match ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}
