mod config;
mod error;
mod gateway_config;
mod latency_config;
mod log_level;
mod logging_config;
mod storage_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use gateway_config::GatewayConfig;
pub use latency_config::LatencyConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

#[cfg(test)]
mod tests;

// Config location
const CONFIG_DIR_ENV: &str = "MV_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".medvision";
const CONFIG_FILE_NAME: &str = "config.toml";

// Storage
const DEFAULT_STORAGE_DIR: &str = "data";
const DEFAULT_NAMESPACE: &str = "medvision_db";
const DEFAULT_SESSION_KEY: &str = "medvision_session";
const DEFAULT_USERS_KEY: &str = "medvision_users";

// Latency (simulated network round-trips)
const DEFAULT_AUTH_LATENCY_MS: u64 = 500;
const DEFAULT_SIGN_OUT_LATENCY_MS: u64 = 200;
const DEFAULT_QUERY_LATENCY_MS: u64 = 100;
const DEFAULT_INSERT_LATENCY_MS: u64 = 200;
const DEFAULT_UPLOAD_LATENCY_MS: u64 = 500;
const DEFAULT_INVOKE_LATENCY_MS: u64 = 1500;
const MAX_LATENCY_MS: u64 = 60_000;

// Gateway
const DEFAULT_GATEWAY_ENABLED: bool = false;
const DEFAULT_GATEWAY_BASE_URL: &str = "https://ai.gateway.lovable.dev";
const DEFAULT_GATEWAY_MODEL: &str = "google/gemini-2.5-pro";
const DEFAULT_GATEWAY_TEMPERATURE: f32 = 0.3;
const DEFAULT_GATEWAY_API_KEY_ENV: &str = "LOVABLE_API_KEY";
const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 120;
const MIN_GATEWAY_TIMEOUT_SECS: u64 = 1;
const MAX_GATEWAY_TIMEOUT_SECS: u64 = 600;
const MAX_GATEWAY_TEMPERATURE: f32 = 2.0;

// Logging
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
