//! Server configuration
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults for optional settings
//! 2. `config/server.{toml,yaml,json}` if present
//! 3. `SENTINEL__*` environment variables, nested with `__`
//!    (e.g. `SENTINEL__BACKEND__ADMIN_KEY`)
//!
//! `.env` is loaded into the environment first.

use std::fmt;
use std::time::Duration;

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use sentinel_gateway::GatewayConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SENTINEL";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Sources could not be read or a required key is missing
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// Settings were read but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Transaction backend connection settings
#[derive(Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend API, e.g. "http://localhost:8080/api/v1"
    pub base_url: String,

    /// Admin credential sent as `X-Admin-Key`
    pub admin_key: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url)
            .field("admin_key", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Transaction backend the dashboard reads from
    pub backend: BackendConfig,
}

impl ServerConfig {
    /// Load configuration from `.env`, the optional config file and the environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let builder = Self::defaults()?
            .add_source(File::with_name("config/server").required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        Self::from_builder(builder)
    }

    /// Load configuration from a TOML document, defaults applied
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?.add_source(File::from_str(contents, FileFormat::Toml));
        Self::from_builder(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", DEFAULT_PORT as i64)?
            .set_default("backend.timeout_ms", DEFAULT_TIMEOUT_MS as i64)?)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".to_string()));
        }

        self.gateway_config()
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Gateway settings derived from the backend section
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig::new(&self.backend.base_url, &self.backend.admin_key)
            .with_timeout(Duration::from_millis(self.backend.timeout_ms))
    }

    /// Address to bind, e.g. "127.0.0.1:3000"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
