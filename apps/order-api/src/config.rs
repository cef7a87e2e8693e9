//! Order API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;

/// Default listening port when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 9000;

/// Default bind address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Default request body limit (1MB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "order_api=info,order_pricing_core=info,tower_http=info";

/// Order API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// HTTP server port
    pub port: u16,

    /// Bind address (default: 0.0.0.0)
    pub bind_addr: String,

    /// Max request body size in bytes
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            port: DEFAULT_PORT,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// - `PORT` - listening port (default: 9000)
    /// - `BIND_ADDR` - bind address (default: 0.0.0.0)
    /// - `MAX_BODY_BYTES` - request body limit (default: 1048576)
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = ApiConfig::default();

        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,
            None => defaults.port,
        };

        let max_body_bytes = match var("MAX_BODY_BYTES") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MAX_BODY_BYTES".to_string()))?,
            None => defaults.max_body_bytes,
        };

        Ok(ApiConfig {
            port,
            bind_addr: var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            max_body_bytes,
        })
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_empty_port_uses_default() {
        let config = ApiConfig::from_lookup(lookup(&[("PORT", "")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("BIND_ADDR", "127.0.0.1"),
            ("MAX_BODY_BYTES", "2048"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.max_body_bytes, 2048);
    }

    #[test]
    fn test_invalid_port() {
        let err = ApiConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PORT");

        assert!(ApiConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
    }

    #[test]
    fn test_default_log_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        assert!(DEFAULT_LOG_FILTER.starts_with("order_api=info"));
        assert!(DEFAULT_LOG_FILTER.contains("order_pricing_core=info"));
    }
}
