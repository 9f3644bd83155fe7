//! SentinelPay Core - Data model shared across the dashboard crates
//!
//! This crate provides the types every other crate speaks:
//! - Metric payloads as served by the transaction backend (stats, revenue, blocked transactions)
//! - The backend's JSON response envelope
//! - `MetricsSnapshot`, the per-load aggregate with per-group provenance
//! - Literal fallback values substituted when an endpoint is unavailable

pub mod envelope;
pub mod fallback;
pub mod revenue;
pub mod snapshot;
pub mod stats;
pub mod transaction;

// Re-export commonly used types
pub use envelope::ApiResponse;
pub use revenue::{ProviderRevenue, RevenueMetrics};
pub use snapshot::{DataOrigin, MetricGroup, MetricsSnapshot, Sourced};
pub use stats::DashboardStats;
pub use transaction::{BlockedTransaction, FraudLogEntry};
