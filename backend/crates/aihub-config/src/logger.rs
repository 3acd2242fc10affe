//! Shared fern setup for the `aihub` binaries.
//!
//! Every line is `[<rfc3339> - <LEVEL>] <message> [<file>:<line>]`. A log file
//! always gets plain levels; terminal sinks color the level when asked to.

use crate::{ConfigError, ConfigErrorResult, LogLevel};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};

/// Terminal stream used when no log file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Long-running services
    Stdout,
    /// Commands whose stdout carries their result
    Stderr,
}

impl fmt::Display for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSink::Stdout => f.write_str("stdout"),
            LogSink::Stderr => f.write_str("stderr"),
        }
    }
}

/// Install the global logger. Fails if a logger is already installed or the
/// log file cannot be opened.
pub fn initialize(
    level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
    sink: LogSink,
) -> ConfigErrorResult<()> {
    build_dispatch(level, log_file.as_deref(), colored, sink)?
        .apply()
        .map_err(|e| ConfigError::logger(format!("cannot install logger: {e}")))?;

    match log_file {
        Some(path) => log::debug!("Logger initialized: level={}, file={}", level, path.display()),
        None => log::debug!("Logger initialized: level={}, {}", level, sink),
    }

    Ok(())
}

pub(crate) fn build_dispatch(
    level: LogLevel,
    log_file: Option<&Path>,
    colored: bool,
    sink: LogSink,
) -> ConfigErrorResult<Dispatch> {
    let colors = (colored && log_file.is_none()).then(level_colors);

    let dispatch = Dispatch::new()
        .level(level.0)
        .format(move |out, message, record| {
            let date = humantime::format_rfc3339(SystemTime::now());
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            match &colors {
                Some(colors) => out.finish(format_args!(
                    "[{date} - {}] {message} [{file}:{line}]",
                    colors.color(record.level())
                )),
                None => out.finish(format_args!(
                    "[{date} - {}] {message} [{file}:{line}]",
                    record.level()
                )),
            }
        });

    let dispatch = match (log_file, sink) {
        (Some(path), _) => {
            let file = fern::log_file(path).map_err(|e| {
                ConfigError::logger(format!("cannot open {}: {e}", path.display()))
            })?;
            dispatch.chain(file)
        }
        (None, LogSink::Stdout) => dispatch.chain(std::io::stdout()),
        (None, LogSink::Stderr) => dispatch.chain(std::io::stderr()),
    };

    Ok(dispatch)
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}
