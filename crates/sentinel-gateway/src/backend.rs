//! Backend access
//!
//! [`MetricsBackend`] is the seam between the gateway's fallback policy and
//! the wire. [`HttpMetricsBackend`] talks to the real backend over HTTP;
//! tests substitute their own implementations.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;

use sentinel_core::{ApiResponse, BlockedTransaction, DashboardStats, FraudLogEntry, RevenueMetrics};

use crate::config::GatewayConfig;
use crate::endpoint::Endpoint;
use crate::error::{GatewayError, GatewayResult};

/// Header carrying the admin credential (`X-Admin-Key`)
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Source of raw metric payloads
///
/// Each method performs a single attempt; retries and fallbacks are the
/// caller's business.
#[async_trait]
pub trait MetricsBackend: Send + Sync {
    /// `GET /admin/stats`
    async fn dashboard_stats(&self) -> GatewayResult<DashboardStats>;

    /// `GET /admin/transactions/blocked`, most-recent-first
    async fn blocked_transactions(&self) -> GatewayResult<Vec<BlockedTransaction>>;

    /// `GET /admin/revenue`
    async fn revenue_metrics(&self) -> GatewayResult<RevenueMetrics>;

    /// `GET /admin/fraud-logs`
    async fn fraud_logs(&self) -> GatewayResult<Vec<FraudLogEntry>>;
}

/// HTTP implementation of [`MetricsBackend`]
pub struct HttpMetricsBackend {
    /// HTTP client with the admin header and timeout preconfigured
    client: Client,

    /// Base URL without trailing slash
    base_url: String,
}

impl HttpMetricsBackend {
    /// Create a backend client
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidConfig`] if the configuration does not
    /// validate or the admin key is not a legal header value.
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        config.validate()?;

        let admin_key = HeaderValue::from_str(&config.admin_key).map_err(|e| {
            GatewayError::InvalidConfig(format!("Admin key is not a valid header value: {}", e))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ADMIN_KEY_HEADER, admin_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| GatewayError::InvalidConfig(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    /// Full URL for an endpoint
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Fetch an endpoint and unwrap its envelope
    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> GatewayResult<Option<T>> {
        let url = self.url_for(endpoint);
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| GatewayError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| GatewayError::Transport { endpoint, source })?;

        let envelope: ApiResponse<T> = serde_json::from_slice(&body)
            .map_err(|source| GatewayError::Decode { endpoint, source })?;

        if !envelope.success {
            return Err(GatewayError::Rejected {
                endpoint,
                reason: envelope.failure_reason(),
            });
        }

        Ok(envelope.data)
    }

    async fn fetch_required<T: DeserializeOwned>(&self, endpoint: Endpoint) -> GatewayResult<T> {
        self.fetch(endpoint)
            .await?
            .ok_or(GatewayError::MissingData { endpoint })
    }

    /// List endpoints serialize an empty result as `null`
    async fn fetch_list<T: DeserializeOwned>(&self, endpoint: Endpoint) -> GatewayResult<Vec<T>> {
        Ok(self.fetch(endpoint).await?.unwrap_or_default())
    }
}

#[async_trait]
impl MetricsBackend for HttpMetricsBackend {
    async fn dashboard_stats(&self) -> GatewayResult<DashboardStats> {
        self.fetch_required(Endpoint::DashboardStats).await
    }

    async fn blocked_transactions(&self) -> GatewayResult<Vec<BlockedTransaction>> {
        self.fetch_list(Endpoint::BlockedTransactions).await
    }

    async fn revenue_metrics(&self) -> GatewayResult<RevenueMetrics> {
        self.fetch_required(Endpoint::RevenueMetrics).await
    }

    async fn fraud_logs(&self) -> GatewayResult<Vec<FraudLogEntry>> {
        self.fetch_list(Endpoint::FraudLogs).await
    }
}
