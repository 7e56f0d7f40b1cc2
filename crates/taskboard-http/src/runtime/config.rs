//! # Environment-Based Configuration
//!
//! Loads [`RuntimeConfig`] from environment variables so a deployment can be
//! reconfigured without a rebuild.
//!
//! ## Environment Variables
//!
//! - `TASKBOARD_HOST` - Interface to bind (default: 127.0.0.1)
//! - `TASKBOARD_PORT` - Port to bind (default: 3000)
//! - `TASKBOARD_GRAPHQL_PATH` - Path of the GraphQL endpoint (default: /api/graphql)
//! - `TASKBOARD_ENABLE_CORS` - Enable permissive CORS (default: true)
//! - `TASKBOARD_ENABLE_PLAYGROUND` - Serve GraphiQL on bare GET (default: true with the `playground` feature)
//! - `TASKBOARD_STATUS_MODE` - `lenient` or `strict` handling of unknown statuses (default: lenient)
//! - `TASKBOARD_REQUEST_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
//! - `TASKBOARD_MAX_BODY_SIZE` - Maximum request body size in bytes (default: 1048576 / 1MB)

use crate::runtime::http::RuntimeConfig;
use std::env;
use taskboard_core::StatusPolicy;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment variable '{key}': {message}")]
    InvalidEnvVar { key: String, message: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Builder for [`RuntimeConfig`] with environment variable support
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfigBuilder {
    config: RuntimeConfig,
}

impl RuntimeConfigBuilder {
    /// Create a new builder with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any environment variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::default();

        if let Some(host) = get_env_string("TASKBOARD_HOST") {
            builder = builder.host(host);
        }
        if let Some(port) = get_env_u16("TASKBOARD_PORT")? {
            builder = builder.port(port);
        }
        if let Some(path) = get_env_string("TASKBOARD_GRAPHQL_PATH") {
            builder = builder.graphql_path(path);
        }
        if let Some(cors) = get_env_bool("TASKBOARD_ENABLE_CORS")? {
            builder = builder.enable_cors(cors);
        }
        if let Some(playground) = get_env_bool("TASKBOARD_ENABLE_PLAYGROUND")? {
            builder = builder.enable_playground(playground);
        }
        if let Some(mode) = get_env_string("TASKBOARD_STATUS_MODE") {
            let policy = mode
                .parse::<StatusPolicy>()
                .map_err(|message| ConfigError::InvalidEnvVar {
                    key: "TASKBOARD_STATUS_MODE".to_string(),
                    message,
                })?;
            builder = builder.status_policy(policy);
        }
        if let Some(timeout) = get_env_u64("TASKBOARD_REQUEST_TIMEOUT_SECS")? {
            builder = builder.request_timeout_secs(timeout);
        }
        if let Some(max_size) = get_env_usize("TASKBOARD_MAX_BODY_SIZE")? {
            builder = builder.max_body_size(max_size);
        }

        Ok(builder)
    }

    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the GraphQL endpoint path
    #[must_use]
    pub fn graphql_path(mut self, path: impl Into<String>) -> Self {
        self.config.graphql_path = path.into();
        self
    }

    /// Enable or disable CORS
    #[must_use]
    pub fn enable_cors(mut self, enable: bool) -> Self {
        self.config.enable_cors = enable;
        self
    }

    /// Enable or disable the GraphiQL playground
    #[must_use]
    pub fn enable_playground(mut self, enable: bool) -> Self {
        self.config.enable_playground = enable;
        self
    }

    /// Set how unknown status strings are treated
    #[must_use]
    pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.config.status_policy = policy;
        self
    }

    /// Set request timeout in seconds
    #[must_use]
    pub fn request_timeout_secs(mut self, timeout: u64) -> Self {
        self.config.request_timeout_secs = timeout;
        self
    }

    /// Set maximum request body size in bytes
    #[must_use]
    pub fn max_body_size(mut self, size: usize) -> Self {
        self.config.max_body_size = size;
        self
    }

    /// Validate configuration and build [`RuntimeConfig`]
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if the configuration is invalid.
    pub fn build(self) -> Result<RuntimeConfig, ConfigError> {
        self.validate()?;
        Ok(self.config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let config = &self.config;

        if config.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "host cannot be empty".to_string(),
            ));
        }

        if !config.graphql_path.starts_with('/') {
            return Err(ConfigError::ValidationError(format!(
                "graphql_path must start with '/', got '{}'",
                config.graphql_path
            )));
        }
        if config
            .graphql_path
            .split('/')
            .any(|segment| segment.starts_with([':', '*']) || segment.contains(['{', '}']))
        {
            return Err(ConfigError::ValidationError(format!(
                "graphql_path '{}' must be a literal path without captures or wildcards",
                config.graphql_path
            )));
        }
        if config.graphql_path == "/health" || config.graphql_path.starts_with("/tasks/") {
            return Err(ConfigError::ValidationError(format!(
                "graphql_path '{}' collides with a built-in route",
                config.graphql_path
            )));
        }

        if config.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if config.request_timeout_secs > 300 {
            return Err(ConfigError::ValidationError(
                "request_timeout_secs must be <= 300 (5 minutes)".to_string(),
            ));
        }

        if config.max_body_size == 0 {
            return Err(ConfigError::ValidationError(
                "max_body_size must be greater than 0".to_string(),
            ));
        }
        if config.max_body_size > 16 * 1024 * 1024 {
            return Err(ConfigError::ValidationError(
                "max_body_size must be <= 16MB".to_string(),
            ));
        }

        Ok(())
    }
}

impl RuntimeConfig {
    /// Load and validate configuration from `TASKBOARD_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        RuntimeConfigBuilder::from_env()?.build()
    }
}

// Environment variable helper functions

fn get_env_string(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn get_env_bool(key: &str) -> Result<Option<bool>, ConfigError> {
    match env::var(key) {
        Ok(val) => match val.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidEnvVar {
                key: key.to_string(),
                message: format!(
                    "invalid boolean value '{val}', expected true/false/1/0/yes/no/on/off"
                ),
            }),
        },
        Err(_) => Ok(None),
    }
}

fn get_env_u16(key: &str) -> Result<Option<u16>, ConfigError> {
    match env::var(key) {
        Ok(val) => val
            .parse::<u16>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar {
                key: key.to_string(),
                message: format!("invalid port '{val}': {e}"),
            }),
        Err(_) => Ok(None),
    }
}

fn get_env_u64(key: &str) -> Result<Option<u64>, ConfigError> {
    match env::var(key) {
        Ok(val) => val
            .parse::<u64>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar {
                key: key.to_string(),
                message: format!("invalid u64 value '{val}': {e}"),
            }),
        Err(_) => Ok(None),
    }
}

fn get_env_usize(key: &str) -> Result<Option<usize>, ConfigError> {
    match env::var(key) {
        Ok(val) => val
            .parse::<usize>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar {
                key: key.to_string(),
                message: format!("invalid usize value '{val}': {e}"),
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::http::DEFAULT_GRAPHQL_PATH;
    use rstest::rstest;

    #[test]
    fn test_default_builder() {
        let config = RuntimeConfigBuilder::new().build().unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.graphql_path, DEFAULT_GRAPHQL_PATH);
        assert_eq!(config.status_policy, StatusPolicy::Lenient);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.max_body_size, 1024 * 1024);
        assert!(config.enable_cors);
    }

    #[test]
    fn test_builder_validation_timeout() {
        let err = RuntimeConfigBuilder::new()
            .request_timeout_secs(0)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("request_timeout_secs must be greater than 0"));

        let err = RuntimeConfigBuilder::new()
            .request_timeout_secs(301)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("request_timeout_secs must be <= 300"));
    }

    #[test]
    fn test_builder_validation_max_body_size() {
        let err = RuntimeConfigBuilder::new().max_body_size(0).build().unwrap_err();
        assert!(err.to_string().contains("max_body_size must be greater than 0"));
    }

    #[test]
    fn test_builder_validation_graphql_path() {
        let err = RuntimeConfigBuilder::new()
            .graphql_path("graphql")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("must start with '/'"));

        let err = RuntimeConfigBuilder::new()
            .graphql_path("/health")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("collides"));
    }

    #[rstest]
    #[case("/api/:x")]
    #[case("/*rest")]
    #[case("/api/{name}")]
    fn test_builder_rejects_route_patterns(#[case] path: &str) {
        let err = RuntimeConfigBuilder::new()
            .graphql_path(path)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("literal path"));
    }

    #[test]
    fn test_builder_custom_values() {
        let config = RuntimeConfigBuilder::new()
            .host("0.0.0.0")
            .port(8080)
            .graphql_path("/graphql")
            .enable_cors(false)
            .enable_playground(false)
            .status_policy(StatusPolicy::Strict)
            .build()
            .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.graphql_path, "/graphql");
        assert!(!config.enable_cors);
        assert!(!config.enable_playground);
        assert_eq!(config.status_policy, StatusPolicy::Strict);
    }

    #[test]
    fn test_env_bool_parsing() {
        assert_eq!(get_env_bool("TASKBOARD_NONEXISTENT_FLAG").unwrap(), None);
    }
}
