//! Logger setup for the generator binary.

use std::env;

use file_rotate::{compression::Compression, suffix::AppendCount, ContentLimit, FileRotate};

const MAX_LOG_FILE_SIZE: usize = 64 * 1024 * 1024;
const MAX_ROTATED_LOG_FILES: usize = 3;

#[cfg(unix)]
fn rotating_log_file(logs_filepath: &str) -> FileRotate<AppendCount> {
    FileRotate::new(
        logs_filepath,
        AppendCount::new(MAX_ROTATED_LOG_FILES),
        ContentLimit::Bytes(MAX_LOG_FILE_SIZE),
        Compression::None,
        None,
    )
}

#[cfg(not(unix))]
fn rotating_log_file(logs_filepath: &str) -> FileRotate<AppendCount> {
    FileRotate::new(
        logs_filepath,
        AppendCount::new(MAX_ROTATED_LOG_FILES),
        ContentLimit::Bytes(MAX_LOG_FILE_SIZE),
        Compression::None,
    )
}

/// Log level INFO by default, stdout/stderr unless `logs_filepath` is set.
pub fn init_logger(logs_filepath: Option<&str>) {
    let mut env_logger_builder = env_logger::builder();
    if env::var("RUST_LOG").is_err() {
        env_logger_builder.filter_level(log::LevelFilter::Info);
    }
    if let Some(logs_filepath) = logs_filepath {
        env_logger_builder.target(env_logger::Target::Pipe(Box::new(rotating_log_file(
            logs_filepath,
        ))));
    }
    env_logger_builder.init();
}
