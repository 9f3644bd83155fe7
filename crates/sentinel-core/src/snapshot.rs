//! Metrics snapshot produced by one gateway call
//!
//! Each field group carries its own [`DataOrigin`], so a consumer can tell
//! a live value from a substituted one without comparing against the
//! fallback literals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fallback;
use crate::revenue::RevenueMetrics;
use crate::stats::DashboardStats;
use crate::transaction::BlockedTransaction;

/// Where a field group's value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    /// Fetched from the backend
    Live,
    /// Static substitute after a failed fetch
    Fallback,
}

/// A value tagged with its origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sourced<T> {
    pub data: T,
    pub origin: DataOrigin,
}

impl<T> Sourced<T> {
    pub fn live(data: T) -> Self {
        Self {
            data,
            origin: DataOrigin::Live,
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            data,
            origin: DataOrigin::Fallback,
        }
    }
}

/// The independently fetched field groups of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricGroup {
    DashboardStats,
    BlockedTransactions,
    RevenueMetrics,
}

impl MetricGroup {
    pub const ALL: [MetricGroup; 3] = [
        MetricGroup::DashboardStats,
        MetricGroup::BlockedTransactions,
        MetricGroup::RevenueMetrics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricGroup::DashboardStats => "dashboard_stats",
            MetricGroup::BlockedTransactions => "blocked_transactions",
            MetricGroup::RevenueMetrics => "revenue_metrics",
        }
    }
}

/// One complete, immutable set of dashboard metrics
///
/// `blocked_transactions` is most-recent-first as returned by the backend
/// and is never absent: no data is an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub dashboard_stats: Sourced<DashboardStats>,
    pub blocked_transactions: Sourced<Vec<BlockedTransaction>>,
    pub revenue_metrics: Sourced<RevenueMetrics>,
}

impl MetricsSnapshot {
    /// Snapshot made entirely of fallback values
    pub fn fallback(now: DateTime<Utc>) -> Self {
        Self {
            dashboard_stats: Sourced::fallback(fallback::dashboard_stats()),
            blocked_transactions: Sourced::fallback(fallback::blocked_transactions(now)),
            revenue_metrics: Sourced::fallback(fallback::revenue_metrics()),
        }
    }

    pub fn origin_of(&self, group: MetricGroup) -> DataOrigin {
        match group {
            MetricGroup::DashboardStats => self.dashboard_stats.origin,
            MetricGroup::BlockedTransactions => self.blocked_transactions.origin,
            MetricGroup::RevenueMetrics => self.revenue_metrics.origin,
        }
    }

    /// Groups that were served from fallback values
    pub fn degraded_groups(&self) -> Vec<MetricGroup> {
        MetricGroup::ALL
            .into_iter()
            .filter(|group| self.origin_of(*group) == DataOrigin::Fallback)
            .collect()
    }

    /// At least one group fell back
    pub fn is_degraded(&self) -> bool {
        !self.degraded_groups().is_empty()
    }

    /// Every group fell back, i.e. the backend looked unreachable
    pub fn is_fully_degraded(&self) -> bool {
        self.degraded_groups().len() == MetricGroup::ALL.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_snapshot_is_fully_degraded() {
        let snapshot = MetricsSnapshot::fallback(Utc::now());
        assert!(snapshot.is_degraded());
        assert!(snapshot.is_fully_degraded());
        assert_eq!(snapshot.degraded_groups(), MetricGroup::ALL.to_vec());
    }

    #[test]
    fn test_partially_degraded_snapshot() {
        let mut snapshot = MetricsSnapshot::fallback(Utc::now());
        snapshot.revenue_metrics.origin = DataOrigin::Live;
        snapshot.blocked_transactions = Sourced::live(Vec::new());

        assert!(snapshot.is_degraded());
        assert!(!snapshot.is_fully_degraded());
        assert_eq!(snapshot.degraded_groups(), vec![MetricGroup::DashboardStats]);
    }

    #[test]
    fn test_live_snapshot_is_not_degraded() {
        let now = Utc::now();
        let snapshot = MetricsSnapshot {
            dashboard_stats: Sourced::live(fallback::dashboard_stats()),
            blocked_transactions: Sourced::live(fallback::blocked_transactions(now)),
            revenue_metrics: Sourced::live(fallback::revenue_metrics()),
        };

        // Same values as the fallbacks, but fetched live
        assert!(!snapshot.is_degraded());
        assert!(snapshot.degraded_groups().is_empty());
    }

    #[test]
    fn test_origin_serializes_lowercase() {
        let json = serde_json::to_value(Sourced::fallback(1)).unwrap();
        assert_eq!(json["origin"], "fallback");
        assert_eq!(json["data"], 1);
    }

    #[test]
    fn test_metric_group_names() {
        assert_eq!(MetricGroup::DashboardStats.as_str(), "dashboard_stats");
        assert_eq!(
            serde_json::to_value(MetricGroup::BlockedTransactions).unwrap(),
            "blocked_transactions"
        );
    }
}
