use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use spdlog::sink::{RotatingFileSink, RotationPolicy, StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger, LoggerBuilder};

use crate::config::{Log, LogLevel};

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        }
    }
}

fn add_console_sink(builder: &mut LoggerBuilder) -> spdlog::Result<()> {
    // stdout carries command output
    let stderr = Arc::new(StdStreamSink::builder()
        .std_stream(StdStream::Stderr)
        .build()?);

    builder.sink(stderr);

    Ok(())
}

fn add_file_sink(builder: &mut LoggerBuilder, location: &Path) -> spdlog::Result<()> {
    let daily_sink = Arc::new(RotatingFileSink::builder()
        .base_path(location)
        .rotation_policy(RotationPolicy::Daily { hour: 0, minute: 0 })
        .max_files(30)
        .rotate_on_open(false)
        .build()?);

    builder.sink(daily_sink);
    Ok(())
}

/// Without a `[log]` section everything from info up goes to stderr.
pub fn configure_logger(log: Option<&Log>) -> spdlog::Result<()> {
    let mut builder = Logger::builder();
    let level = match log {
        Some(log) => {
            if let Some(ref location) = log.location {
                add_file_sink(&mut builder, location)?;
            }
            if log.log_to_console || log.location.is_none() {
                add_console_sink(&mut builder)?;
            }
            log.level.into()
        }
        None => {
            add_console_sink(&mut builder)?;
            Level::Info
        }
    };

    let logger = Arc::new(builder.build()?);
    logger.set_flush_level_filter(LevelFilter::MoreSevereEqual(Level::Info));
    logger.set_flush_period(Some(Duration::from_secs(2)));
    logger.set_level_filter(LevelFilter::MoreSevereEqual(level));

    spdlog::set_default_logger(logger);

    Ok(())
}

/// Used when the configured sinks cannot be built. Falls back to a stderr-only logger; if even
/// that fails, the built-in logger is kept to warnings and errors, which it sends to stderr.
pub fn use_stderr_logger() {
    if let Err(err) = configure_logger(None) {
        spdlog::default_logger().set_level_filter(LevelFilter::MoreSevereEqual(Level::Warn));
        spdlog::warn!("Error creating console logger. Only warnings will be logged. Desc={}", err);
    }
}
