//! Unit tests for loading ServerConfig from the environment
//!
//! Kept to a single test: the process environment is shared between tests
//! in the same binary.

use std::time::Duration;

use sentinel_server::config::{ConfigError, ServerConfig};

#[test]
fn test_environment_overrides() {
    std::env::remove_var("SENTINEL__BACKEND__BASE_URL");
    std::env::remove_var("SENTINEL__BACKEND__ADMIN_KEY");

    // Required backend settings missing
    let err = ServerConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));

    std::env::set_var("SENTINEL__BACKEND__BASE_URL", "http://backend.test:8080/api/v1");
    std::env::set_var("SENTINEL__BACKEND__ADMIN_KEY", "env-key");
    std::env::set_var("SENTINEL__BACKEND__TIMEOUT_MS", "1500");
    std::env::set_var("SENTINEL__PORT", "4100");

    let config = ServerConfig::load().expect("Failed to load config from environment");

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 4100);
    assert_eq!(config.backend.base_url, "http://backend.test:8080/api/v1");
    assert_eq!(config.backend.admin_key, "env-key");
    assert_eq!(config.gateway_config().request_timeout, Duration::from_millis(1500));
}
