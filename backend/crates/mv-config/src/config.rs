use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    GatewayConfig, LatencyConfig, LoggingConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub latency: LatencyConfig,
    pub gateway: GatewayConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for MV_CONFIG_DIR env var, else use ./.medvision/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply MV_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: MV_CONFIG_DIR env var > ./.medvision/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.latency.validate()?;
        self.gateway.validate()?;

        Ok(())
    }

    /// Get absolute path to the storage directory.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.dir))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  storage: dir={}, namespace={}",
            self.storage.dir, self.storage.namespace
        );
        info!(
            "  latency: auth={}ms, query={}ms, insert={}ms, upload={}ms, invoke={}ms",
            self.latency.auth_ms,
            self.latency.query_ms,
            self.latency.insert_ms,
            self.latency.upload_ms,
            self.latency.invoke_ms
        );
        info!(
            "  gateway: {} ({}, key from ${})",
            if self.gateway.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.gateway.model,
            self.gateway.api_key_env
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_string("MV_STORAGE_DIR", &mut self.storage.dir);
        Self::apply_env_string("MV_STORAGE_NAMESPACE", &mut self.storage.namespace);
        Self::apply_env_string("MV_STORAGE_SESSION_KEY", &mut self.storage.session_key);
        Self::apply_env_string("MV_STORAGE_USERS_KEY", &mut self.storage.users_key);

        // Latency
        Self::apply_env_parse("MV_LATENCY_AUTH_MS", &mut self.latency.auth_ms);
        Self::apply_env_parse("MV_LATENCY_SIGN_OUT_MS", &mut self.latency.sign_out_ms);
        Self::apply_env_parse("MV_LATENCY_QUERY_MS", &mut self.latency.query_ms);
        Self::apply_env_parse("MV_LATENCY_INSERT_MS", &mut self.latency.insert_ms);
        Self::apply_env_parse("MV_LATENCY_UPLOAD_MS", &mut self.latency.upload_ms);
        Self::apply_env_parse("MV_LATENCY_INVOKE_MS", &mut self.latency.invoke_ms);

        // Gateway
        Self::apply_env_bool("MV_GATEWAY_ENABLED", &mut self.gateway.enabled);
        Self::apply_env_string("MV_GATEWAY_BASE_URL", &mut self.gateway.base_url);
        Self::apply_env_string("MV_GATEWAY_MODEL", &mut self.gateway.model);
        Self::apply_env_parse("MV_GATEWAY_TEMPERATURE", &mut self.gateway.temperature);
        Self::apply_env_string("MV_GATEWAY_API_KEY_ENV", &mut self.gateway.api_key_env);
        Self::apply_env_parse("MV_GATEWAY_TIMEOUT_SECS", &mut self.gateway.timeout_secs);

        // Logging
        Self::apply_env_parse("MV_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("MV_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("MV_LOG_FILE", &mut self.logging.file);
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
        if let Ok(val) = std::env::var(var_name) {
            if let Ok(parsed) = val.parse() {
                *target = parsed;
            }
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
