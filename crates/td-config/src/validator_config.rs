use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_VALIDATOR_INTERVAL_SECS, MIN_VALIDATOR_INTERVAL_SECS,
};

use serde::Deserialize;

/// Settings for the background session validator.
///
/// The default interval suits high-sensitivity views (team management); less
/// sensitive commands simply don't start the validator at all.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub interval_secs: u64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_VALIDATOR_INTERVAL_SECS,
        }
    }
}

impl ValidatorConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.interval_secs < MIN_VALIDATOR_INTERVAL_SECS {
            return Err(ConfigError::config(format!(
                "validator.interval_secs must be >= {}, got {}",
                MIN_VALIDATOR_INTERVAL_SECS, self.interval_secs
            )));
        }

        Ok(())
    }
}
