use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_METRICS_MAX_ATTEMPTS,
    DEFAULT_METRICS_POLL_INTERVAL_SECS, MAX_METRICS_MAX_ATTEMPTS,
};

use serde::Deserialize;

/// Settings for the dashboard-aggregation poll.
///
/// When a triggered aggregation reports "pending", the client re-reads the
/// metrics endpoint on a fixed interval until `last_updated` changes or
/// `max_attempts` is exhausted, then gives up silently. This is the only
/// automatic retry anywhere in the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub poll_interval_secs: u64,
    pub max_attempts: u32,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: DEFAULT_METRICS_POLL_INTERVAL_SECS,
            max_attempts: DEFAULT_METRICS_MAX_ATTEMPTS,
        }
    }
}

impl MetricsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.poll_interval_secs == 0 {
            return Err(ConfigError::config(format!(
                "metrics.poll_interval_secs must be >= 1, got {}",
                self.poll_interval_secs
            )));
        }

        if self.max_attempts == 0 || self.max_attempts > MAX_METRICS_MAX_ATTEMPTS {
            return Err(ConfigError::config(format!(
                "metrics.max_attempts must be 1-{}, got {}",
                MAX_METRICS_MAX_ATTEMPTS, self.max_attempts
            )));
        }

        Ok(())
    }
}
