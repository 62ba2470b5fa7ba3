//! Logging Infrastructure
//!
//! `RUST_LOG` wins over the configured level when set. Permission denials
//! are logged under the `security` target (see [`crate::security_log`]).

use std::path::Path;

use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;

/// Initialize the logger: plain text on stdout, `info` level
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

fn daily_appender(log_dir: Option<&str>) -> Option<RollingFileAppender> {
    let dir = Path::new(log_dir?);
    if !dir.is_dir() {
        return None;
    }
    Some(tracing_appender::rolling::daily(dir, "printfarm"))
}

/// Initialize the logger
///
/// - `json`: one JSON object per line instead of plain text
/// - `log_dir`: daily-rolling file output when the directory exists
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    let file = daily_appender(log_dir);
    let result = match (json, file) {
        (true, Some(file)) => builder.json().with_writer(file).try_init(),
        (true, None) => builder.json().try_init(),
        (false, Some(file)) => builder.with_ansi(false).with_writer(file).try_init(),
        (false, None) => builder.try_init(),
    };

    if result.is_err() {
        tracing::debug!("Logger already initialized");
    }
}
