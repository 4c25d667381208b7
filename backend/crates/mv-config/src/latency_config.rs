use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_LATENCY_MS, DEFAULT_INSERT_LATENCY_MS,
    DEFAULT_INVOKE_LATENCY_MS, DEFAULT_QUERY_LATENCY_MS, DEFAULT_SIGN_OUT_LATENCY_MS,
    DEFAULT_UPLOAD_LATENCY_MS, MAX_LATENCY_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// Artificial delays applied before emulated operations resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    /// Sign-up and sign-in
    pub auth_ms: u64,
    pub sign_out_ms: u64,
    /// Query resolution (`single` and fetch-all)
    pub query_ms: u64,
    pub insert_ms: u64,
    pub upload_ms: u64,
    /// Remote function invocation (simulated inference)
    pub invoke_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            auth_ms: DEFAULT_AUTH_LATENCY_MS,
            sign_out_ms: DEFAULT_SIGN_OUT_LATENCY_MS,
            query_ms: DEFAULT_QUERY_LATENCY_MS,
            insert_ms: DEFAULT_INSERT_LATENCY_MS,
            upload_ms: DEFAULT_UPLOAD_LATENCY_MS,
            invoke_ms: DEFAULT_INVOKE_LATENCY_MS,
        }
    }
}

impl LatencyConfig {
    /// No delays at all, for tests and scripted use.
    pub fn none() -> Self {
        Self {
            auth_ms: 0,
            sign_out_ms: 0,
            query_ms: 0,
            insert_ms: 0,
            upload_ms: 0,
            invoke_ms: 0,
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("latency.auth_ms", self.auth_ms),
            ("latency.sign_out_ms", self.sign_out_ms),
            ("latency.query_ms", self.query_ms),
            ("latency.insert_ms", self.insert_ms),
            ("latency.upload_ms", self.upload_ms),
            ("latency.invoke_ms", self.invoke_ms),
        ] {
            if value > MAX_LATENCY_MS {
                return Err(ConfigError::latency(format!(
                    "{name} must be <= {MAX_LATENCY_MS}, got {value}"
                )));
            }
        }

        Ok(())
    }

    pub fn auth(&self) -> Duration {
        Duration::from_millis(self.auth_ms)
    }

    pub fn sign_out(&self) -> Duration {
        Duration::from_millis(self.sign_out_ms)
    }

    pub fn query(&self) -> Duration {
        Duration::from_millis(self.query_ms)
    }

    pub fn insert(&self) -> Duration {
        Duration::from_millis(self.insert_ms)
    }

    pub fn upload(&self) -> Duration {
        Duration::from_millis(self.upload_ms)
    }

    pub fn invoke(&self) -> Duration {
        Duration::from_millis(self.invoke_ms)
    }
}
