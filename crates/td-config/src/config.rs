use crate::{
    ApiConfig, ConfigError, ConfigErrorResult, LoggingConfig, MetricsConfig, ValidatorConfig,
};

use std::path::PathBuf;

use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub validator: ValidatorConfig,
    pub metrics: MetricsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for TD_CONFIG_DIR env var, else use ./.td/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TD_CONFIG_DIR env var > ./.td/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("TD_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".td"))
    }

    /// Path of the persisted session file. This is the only client-local
    /// state besides config.toml itself.
    pub fn session_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("session.json"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.validator.validate()?;
        self.metrics.validate()?;

        Ok(())
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        debug!("Configuration loaded:");
        debug!(
            "  api: {} (timeout {}s)",
            self.api.base_url, self.api.timeout_secs
        );
        debug!("  validator: every {}s", self.validator.interval_secs);
        debug!(
            "  metrics poll: every {}s, max {} attempts",
            self.metrics.poll_interval_secs, self.metrics.max_attempts
        );
        debug!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("TD_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("TD_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Validator
        Self::apply_env_parse(
            "TD_VALIDATOR_INTERVAL_SECS",
            &mut self.validator.interval_secs,
        );

        // Metrics poll
        Self::apply_env_parse(
            "TD_METRICS_POLL_INTERVAL_SECS",
            &mut self.metrics.poll_interval_secs,
        );
        Self::apply_env_parse("TD_METRICS_MAX_ATTEMPTS", &mut self.metrics.max_attempts);

        // Logging
        Self::apply_env_parse("TD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TD_LOG_FILE", &mut self.logging.file);
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
