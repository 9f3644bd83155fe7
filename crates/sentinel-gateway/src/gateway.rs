//! Snapshot assembly with per-endpoint fallback

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use sentinel_core::{fallback, FraudLogEntry, MetricsSnapshot, Sourced};
use tracing::{debug, warn};

use crate::backend::{HttpMetricsBackend, MetricsBackend};
use crate::config::GatewayConfig;
use crate::endpoint::Endpoint;
use crate::error::{GatewayError, GatewayResult};

/// Fetches metric snapshots, degrading per endpoint instead of failing
///
/// Holds no state between calls: every [`fetch_snapshot`](Self::fetch_snapshot)
/// issues fresh requests and builds a new snapshot.
#[derive(Clone)]
pub struct MetricsGateway {
    backend: Arc<dyn MetricsBackend>,
}

impl MetricsGateway {
    /// Create a gateway talking HTTP to the configured backend
    pub fn new(config: GatewayConfig) -> GatewayResult<Self> {
        let backend = HttpMetricsBackend::new(&config)?;
        debug!("Metrics gateway configured: {:?}", config);
        Ok(Self::with_backend(Arc::new(backend)))
    }

    /// Create a gateway over any backend implementation
    pub fn with_backend(backend: Arc<dyn MetricsBackend>) -> Self {
        Self { backend }
    }

    /// Fetch stats, blocked transactions and revenue concurrently
    ///
    /// Completes once all three requests have settled. A failed request is
    /// logged and its group replaced with the fallback value. Dropping the
    /// returned future abandons any request still in flight.
    pub async fn fetch_snapshot(&self) -> MetricsSnapshot {
        let (dashboard_stats, blocked_transactions, revenue_metrics) = futures::join!(
            settle(
                Endpoint::DashboardStats,
                self.backend.dashboard_stats(),
                fallback::dashboard_stats,
            ),
            settle(
                Endpoint::BlockedTransactions,
                self.backend.blocked_transactions(),
                || fallback::blocked_transactions(Utc::now()),
            ),
            settle(
                Endpoint::RevenueMetrics,
                self.backend.revenue_metrics(),
                fallback::revenue_metrics,
            ),
        );

        let snapshot = MetricsSnapshot {
            dashboard_stats,
            blocked_transactions,
            revenue_metrics,
        };

        if snapshot.is_fully_degraded() {
            warn!("All metric endpoints failed, snapshot consists of fallback data only");
        }

        snapshot
    }

    /// Fetch recent fraud detection events
    ///
    /// Falls back to an empty list on failure.
    pub async fn fetch_fraud_logs(&self) -> Sourced<Vec<FraudLogEntry>> {
        settle(
            Endpoint::FraudLogs,
            self.backend.fraud_logs(),
            fallback::fraud_logs,
        )
        .await
    }
}

/// Await one request, substituting the fallback on error
async fn settle<T, Fut, F>(endpoint: Endpoint, request: Fut, substitute: F) -> Sourced<T>
where
    Fut: Future<Output = Result<T, GatewayError>>,
    F: FnOnce() -> T,
{
    match request.await {
        Ok(data) => {
            debug!("Fetched live data from {}", endpoint);
            Sourced::live(data)
        }
        Err(e) => {
            warn!("Error fetching {}, using fallback: {}", endpoint, e);
            Sourced::fallback(substitute())
        }
    }
}
