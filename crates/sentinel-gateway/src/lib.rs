//! Metrics gateway for the SentinelPay dashboard
//!
//! Pulls the three independent metric sources of the transaction backend
//! (dashboard stats, blocked transactions, revenue breakdown) and assembles
//! them into a [`MetricsSnapshot`](sentinel_core::MetricsSnapshot).
//!
//! # Degraded mode
//!
//! Each endpoint is fetched once, concurrently with the others. When one
//! fails (network error, non-2xx status, rejected or malformed payload) its
//! group is replaced by a fixed fallback and the failure is logged. The
//! snapshot records which groups fell back, and
//! [`MetricsGateway::fetch_snapshot`] itself never returns an error.
//!
//! # Usage
//!
//! ```no_run
//! use sentinel_gateway::{GatewayConfig, MetricsGateway};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = GatewayConfig::new("http://localhost:8080/api/v1", "admin-key");
//!     let gateway = MetricsGateway::new(config)?;
//!
//!     let snapshot = gateway.fetch_snapshot().await;
//!     if snapshot.is_degraded() {
//!         println!("fallback groups: {:?}", snapshot.degraded_groups());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod gateway;

pub use backend::{HttpMetricsBackend, MetricsBackend, ADMIN_KEY_HEADER};
pub use config::GatewayConfig;
pub use endpoint::Endpoint;
pub use error::{GatewayError, GatewayResult};
pub use gateway::MetricsGateway;
