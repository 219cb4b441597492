//! Logging utilities for the Solar Detailing backend.
//!
//! Every crate logs through the `tracing` macros; this module owns the one
//! place where a subscriber is installed.

use solarops_config::LoggingConfig;
use std::str::FromStr;
use tracing::{error, info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging from the `[logging]` configuration section.
///
/// When `directory` is set, a daily rolling file is written next to the
/// console output. The returned guard flushes the file writer on drop and
/// must be held for the lifetime of the process.
///
/// Uses `try_init`, so calling this after a subscriber is installed only
/// returns the guard.
///
/// # Examples
///
/// ```
/// use solarops_common::logging;
/// use solarops_config::LoggingConfig;
///
/// let config = LoggingConfig {
///     level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// let _guard = logging::init_from_config(Some(&config));
/// // A second call is a no-op.
/// let _ = logging::init_from_config(None);
/// ```
pub fn init_from_config(config: Option<&LoggingConfig>) -> Option<WorkerGuard> {
    let level = config
        .and_then(|c| c.level.as_deref())
        .and_then(|l| Level::from_str(l).ok())
        .unwrap_or(Level::INFO);

    let (file_layer, guard) = match config.and_then(|c| c.directory.as_deref()) {
        Some(directory) => {
            let prefix = config
                .and_then(|c| c.file_prefix.as_deref())
                .unwrap_or("solarops.log");
            let appender = tracing_appender::rolling::daily(directory, prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let result = tracing_subscriber::registry()
        .with(console_layer())
        .with(file_layer)
        .with(build_filter(level))
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
    guard
}

fn console_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
}

fn build_filter(level: Level) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match format!("solarops={}", level).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Log an error with context at the ERROR level.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}
