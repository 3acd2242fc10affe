use crate::logger::build_dispatch;
use crate::{ConfigError, LogLevel, LogSink};

use googletest::assert_that;
use googletest::prelude::{anything, ok};
use tempfile::TempDir;

#[test]
fn given_log_file_in_existing_dir_when_build_then_file_created() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("aihub.log");

    let result = build_dispatch(
        LogLevel(log::LevelFilter::Info),
        Some(&path),
        true,
        LogSink::Stderr,
    );

    assert_that!(result, ok(anything()));
    assert!(path.exists());
}

#[test]
fn given_log_file_is_directory_when_build_then_logger_error() {
    let temp = TempDir::new().unwrap();

    let result = build_dispatch(
        LogLevel(log::LevelFilter::Info),
        Some(temp.path()),
        false,
        LogSink::Stdout,
    );

    assert!(matches!(result, Err(ConfigError::Logger { .. })));
}

#[test]
fn given_no_log_file_when_build_for_either_sink_then_ok() {
    for sink in [LogSink::Stdout, LogSink::Stderr] {
        let result = build_dispatch(LogLevel(log::LevelFilter::Debug), None, true, sink);

        assert!(result.is_ok(), "{sink}");
    }
}

#[test]
fn given_sink_when_display_then_stream_name() {
    assert_eq!(LogSink::Stdout.to_string(), "stdout");
    assert_eq!(LogSink::Stderr.to_string(), "stderr");
}
