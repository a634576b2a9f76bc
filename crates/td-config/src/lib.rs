mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod metrics_config;
mod validator_config;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use metrics_config::MetricsConfig;
pub use validator_config::ValidatorConfig;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_VALIDATOR_INTERVAL_SECS: u64 = 5;
const DEFAULT_METRICS_POLL_INTERVAL_SECS: u64 = 2;
const DEFAULT_METRICS_MAX_ATTEMPTS: u32 = 15;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;
const MIN_VALIDATOR_INTERVAL_SECS: u64 = 1;
const MAX_METRICS_MAX_ATTEMPTS: u32 = 100;

#[cfg(test)]
mod tests;
