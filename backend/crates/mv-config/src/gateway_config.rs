use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_GATEWAY_API_KEY_ENV, DEFAULT_GATEWAY_BASE_URL,
    DEFAULT_GATEWAY_ENABLED, DEFAULT_GATEWAY_MODEL, DEFAULT_GATEWAY_TEMPERATURE,
    DEFAULT_GATEWAY_TIMEOUT_SECS, MAX_GATEWAY_TEMPERATURE, MAX_GATEWAY_TIMEOUT_SECS,
    MIN_GATEWAY_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// AI gateway used for real image analysis. When disabled the canned
/// offline analyzer answers instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub enabled: bool,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    /// Name of the environment variable holding the API key (never the key itself)
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_GATEWAY_ENABLED,
            base_url: String::from(DEFAULT_GATEWAY_BASE_URL),
            model: String::from(DEFAULT_GATEWAY_MODEL),
            temperature: DEFAULT_GATEWAY_TEMPERATURE,
            api_key_env: String::from(DEFAULT_GATEWAY_API_KEY_ENV),
            timeout_secs: DEFAULT_GATEWAY_TIMEOUT_SECS,
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::gateway(format!(
                "gateway.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::gateway("gateway.model cannot be empty"));
        }

        if !(0.0..=MAX_GATEWAY_TEMPERATURE).contains(&self.temperature) {
            return Err(ConfigError::gateway(format!(
                "gateway.temperature must be 0.0-{}, got {}",
                MAX_GATEWAY_TEMPERATURE, self.temperature
            )));
        }

        if self.api_key_env.trim().is_empty() {
            return Err(ConfigError::gateway("gateway.api_key_env cannot be empty"));
        }

        if !(MIN_GATEWAY_TIMEOUT_SECS..=MAX_GATEWAY_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::gateway(format!(
                "gateway.timeout_secs must be {}-{}, got {}",
                MIN_GATEWAY_TIMEOUT_SECS, MAX_GATEWAY_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
    }
}
