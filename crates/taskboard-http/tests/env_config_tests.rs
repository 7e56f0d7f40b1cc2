//! Integration tests for environment-based configuration

use serial_test::serial;
use std::env;
use taskboard_core::StatusPolicy;
use taskboard_http::runtime::{ConfigError, RuntimeConfig, RuntimeConfigBuilder};

const ALL_VARS: &[&str] = &[
    "TASKBOARD_HOST",
    "TASKBOARD_PORT",
    "TASKBOARD_GRAPHQL_PATH",
    "TASKBOARD_ENABLE_CORS",
    "TASKBOARD_ENABLE_PLAYGROUND",
    "TASKBOARD_STATUS_MODE",
    "TASKBOARD_REQUEST_TIMEOUT_SECS",
    "TASKBOARD_MAX_BODY_SIZE",
];

/// Helper to set environment variable for test
fn set_env(key: &str, value: &str) {
    unsafe {
        env::set_var(key, value);
    }
}

fn clear_all_taskboard_env_vars() {
    for key in ALL_VARS {
        unsafe {
            env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn test_env_config_default_when_no_vars_set() {
    clear_all_taskboard_env_vars();

    let config = RuntimeConfig::from_env().expect("should load defaults when no env vars set");

    assert_eq!(config, RuntimeConfig::default());
}

#[test]
#[serial]
fn test_env_config_listen_address_and_path() {
    clear_all_taskboard_env_vars();
    set_env("TASKBOARD_HOST", "0.0.0.0");
    set_env("TASKBOARD_PORT", "8088");
    set_env("TASKBOARD_GRAPHQL_PATH", "/graphql");

    let config = RuntimeConfig::from_env().expect("should load config");

    assert_eq!(config.bind_address(), "0.0.0.0:8088");
    assert_eq!(config.graphql_path, "/graphql");

    clear_all_taskboard_env_vars();
}

#[test]
#[serial]
fn test_env_config_status_mode() {
    clear_all_taskboard_env_vars();
    set_env("TASKBOARD_STATUS_MODE", "STRICT");

    let config = RuntimeConfig::from_env().expect("should load config");
    assert_eq!(config.status_policy, StatusPolicy::Strict);

    set_env("TASKBOARD_STATUS_MODE", "sometimes");
    let result = RuntimeConfigBuilder::from_env();
    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnvVar { ref key, .. }) if key == "TASKBOARD_STATUS_MODE"
    ));

    clear_all_taskboard_env_vars();
}

#[test]
#[serial]
fn test_env_config_boolean_flags() {
    clear_all_taskboard_env_vars();
    set_env("TASKBOARD_ENABLE_CORS", "off");
    set_env("TASKBOARD_ENABLE_PLAYGROUND", "0");

    let config = RuntimeConfig::from_env().expect("should load config");

    assert!(!config.enable_cors);
    assert!(!config.enable_playground);

    clear_all_taskboard_env_vars();
}

#[test]
#[serial]
fn test_env_config_invalid_port() {
    clear_all_taskboard_env_vars();
    set_env("TASKBOARD_PORT", "70000");

    let err = RuntimeConfigBuilder::from_env().unwrap_err();
    assert!(err.to_string().contains("TASKBOARD_PORT"));

    clear_all_taskboard_env_vars();
}

#[test]
#[serial]
fn test_env_config_invalid_bool() {
    clear_all_taskboard_env_vars();
    set_env("TASKBOARD_ENABLE_CORS", "maybe");

    let err = RuntimeConfigBuilder::from_env().unwrap_err();
    assert!(err.to_string().contains("invalid boolean value 'maybe'"));

    clear_all_taskboard_env_vars();
}

#[test]
#[serial]
fn test_env_config_validation_runs_on_build() {
    clear_all_taskboard_env_vars();
    set_env("TASKBOARD_REQUEST_TIMEOUT_SECS", "0");

    let builder = RuntimeConfigBuilder::from_env().expect("value parses");
    let err = builder.build().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));

    clear_all_taskboard_env_vars();
}
