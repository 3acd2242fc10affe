use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ClientConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIRNAME, LogSink, LoggingConfig, ServerConfig, StorageConfig,
};
use crate::logger;

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
    pub storage: StorageConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for AIHUB_CONFIG_DIR env var, else use ./.aihub/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply AIHUB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::io(&config_dir, e))?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

        toml::from_str(&contents).map_err(|e| ConfigError::toml(path, e))
    }

    /// Get the config directory.
    /// Priority: AIHUB_CONFIG_DIR env var > ./.aihub/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(ConfigError::config_dir)?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRNAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.client.validate()?;
        self.storage.validate()?;
        self.server.validate()?;

        if let Some(file) = &self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::invalid(
                "logging",
                "file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path to the identity storage file.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.path))
    }

    /// Absolute path to the server's user registry.
    pub fn users_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.server.users_file))
    }

    /// Absolute path to the log file, if one is configured.
    pub fn log_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(file))),
            None => Ok(None),
        }
    }

    /// Install the global logger from the `[logging]` section.
    pub fn init_logger(&self, sink: LogSink) -> ConfigErrorResult<()> {
        logger::initialize(
            self.logging.level,
            self.log_path()?,
            self.logging.colored,
            sink,
        )
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  client: {} (timeout: {})",
            self.client.base_url,
            match self.client.request_timeout_secs {
                0 => String::from("none"),
                secs => format!("{secs}s"),
            }
        );
        info!("  storage: {}", self.storage.path);
        info!(
            "  server: {}:{} (users: {})",
            self.server.host, self.server.port, self.server.users_file
        );
        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Client
        Self::apply_env_string("AIHUB_BASE_URL", &mut self.client.base_url);
        Self::apply_env_parse(
            "AIHUB_REQUEST_TIMEOUT_SECS",
            &mut self.client.request_timeout_secs,
        );

        // Storage
        Self::apply_env_string("AIHUB_STORAGE_PATH", &mut self.storage.path);

        // Server
        Self::apply_env_string("AIHUB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("AIHUB_SERVER_PORT", &mut self.server.port);
        Self::apply_env_string("AIHUB_USERS_FILE", &mut self.server.users_file);

        // Logging
        Self::apply_env_parse("AIHUB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AIHUB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("AIHUB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
