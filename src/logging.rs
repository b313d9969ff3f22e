//! Tracing subscriber setup

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::{self, LOG_ENV, LogConfig, LogFormat};

/// Install the global subscriber.
///
/// The returned guard flushes the log file on drop and must be held for
/// the lifetime of the program when file logging is enabled.
pub fn init(log: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = env_filter(&log.level, std::env::var(LOG_ENV).ok())?;

    let (writer, guard) = if log.file {
        let dir = config::data_dir();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::never(&dir, format!("{}.log", config::APP_NAME));
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        (BoxMakeWriter::new(non_blocking), Some(guard))
    } else {
        (BoxMakeWriter::new(std::io::stderr), None)
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(!log.file);

    match log.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(guard)
}

/// Build the filter, letting a non-empty environment value win over the config
fn env_filter(level: &str, env_override: Option<String>) -> anyhow::Result<EnvFilter> {
    let directives = env_override
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| level.to_string());

    EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log filter: {directives:?}"))
}
