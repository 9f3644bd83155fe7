//! Gateway configuration
//!
//! Passed explicitly to [`MetricsGateway::new`](crate::MetricsGateway::new);
//! the gateway never reads process-wide settings on its own.

use std::fmt;
use std::time::Duration;

use reqwest::Url;

use crate::error::{GatewayError, GatewayResult};

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the transaction backend
#[derive(Clone)]
pub struct GatewayConfig {
    /// Base URL the endpoint paths are appended to (e.g. "http://localhost:8080/api/v1")
    pub base_url: String,

    /// Static admin credential sent with every request
    pub admin_key: String,

    /// Upper bound for each individual request
    pub request_timeout: Duration,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>, admin_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            admin_key: admin_key.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Check the settings before any request is made
    pub fn validate(&self) -> GatewayResult<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            GatewayError::InvalidConfig(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(GatewayError::InvalidConfig(format!(
                "Unsupported base URL scheme '{}'",
                url.scheme()
            )));
        }

        if self.admin_key.trim().is_empty() {
            return Err(GatewayError::InvalidConfig(
                "Admin key must not be empty".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(GatewayError::InvalidConfig(
                "Request timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL without trailing slashes
    pub(crate) fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url)
            .field("admin_key", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
