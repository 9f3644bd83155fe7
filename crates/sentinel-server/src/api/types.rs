//! API type definitions

use chrono::{DateTime, Utc};
use sentinel_core::{MetricGroup, MetricsSnapshot};
use sentinel_gateway::MetricsGateway;
use serde::{Deserialize, Serialize};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub gateway: MetricsGateway,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Raw snapshot with provenance
#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotResponse {
    #[serde(flatten)]
    pub snapshot: MetricsSnapshot,

    /// Groups served from fallback data, empty when fully live
    pub degraded_groups: Vec<MetricGroup>,

    pub fetched_at: DateTime<Utc>,
}

impl From<MetricsSnapshot> for SnapshotResponse {
    fn from(snapshot: MetricsSnapshot) -> Self {
        Self {
            degraded_groups: snapshot.degraded_groups(),
            snapshot,
            fetched_at: Utc::now(),
        }
    }
}
