//! Diagnostic logging.
//!
//! stdout carries the page output; every log line goes to stderr.

use crate::types::LogLevel;
use is_terminal::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable that overrides `--log-level` with a full filter directive
pub const LOG_ENV: &str = "QSHOWCASE_LOG";

pub fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "qshowcase_cli={level},qshowcase_content={level}",
                level = level
            ))
        })
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(level: LogLevel) {
    let use_ansi = std::io::stderr().is_terminal();
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(use_ansi)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(fmt_layer)
        .try_init();
}
