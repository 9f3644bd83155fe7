//! Error types for the gateway layer
//!
//! These errors never reach callers of `fetch_snapshot`; they are logged
//! and replaced by fallback values. They are public so the backend trait
//! can be implemented and tested on its own.

use thiserror::Error;

use crate::endpoint::Endpoint;

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors that can occur while fetching from the backend
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Network failure, timeout, or unreadable body
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status (including authorization rejections)
    #[error("Backend returned status {status} for {endpoint}")]
    Status { endpoint: Endpoint, status: u16 },

    /// Envelope reported `success: false`
    #[error("Backend rejected {endpoint}: {reason}")]
    Rejected { endpoint: Endpoint, reason: String },

    /// Body was not the expected JSON shape
    #[error("Malformed payload from {endpoint}: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    /// Envelope carried no data where data is required
    #[error("Missing data in response from {endpoint}")]
    MissingData { endpoint: Endpoint },

    /// Gateway could not be constructed from its configuration
    #[error("Invalid gateway configuration: {0}")]
    InvalidConfig(String),
}
