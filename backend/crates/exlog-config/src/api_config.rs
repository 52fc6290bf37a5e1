use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_LIMIT, MAX_LOG_LIMIT, MIN_LOG_LIMIT};

use serde::Deserialize;

/// Configuration for the REST API layer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Entries returned by a log query that sends no `limit`
    pub default_log_limit: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_log_limit: DEFAULT_LOG_LIMIT,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_LOG_LIMIT..=MAX_LOG_LIMIT).contains(&self.default_log_limit) {
            return Err(ConfigError::api(format!(
                "api.default_log_limit must be {}-{}, got {}",
                MIN_LOG_LIMIT, MAX_LOG_LIMIT, self.default_log_limit
            )));
        }

        Ok(())
    }
}
