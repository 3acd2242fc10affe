mod client_config;
mod config;
mod error;
mod log_level;
pub mod logger;
mod logging_config;
mod server_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use client_config::ClientConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logger::LogSink;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "AIHUB_CONFIG_DIR";
const DEFAULT_CONFIG_DIRNAME: &str = ".aihub";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 0;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 3600;

const DEFAULT_STORAGE_FILENAME: &str = "storage.json";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_USERS_FILENAME: &str = "users.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
