//! Dashboard view model
//!
//! [`build_dashboard`] is the single entry point used by the server: it maps
//! a [`MetricsSnapshot`] to everything the page shows, so the renderer never
//! touches raw backend values.

use serde::{Deserialize, Serialize};

use sentinel_core::{BlockedTransaction, DataOrigin, MetricsSnapshot};

use crate::format::{capitalize, format_count, format_money, StatField};
use crate::revenue::{build_revenue_series, RevenuePoint};
use crate::risk::{classify_risk, RiskClassification};

/// Message shown in place of the table when nothing was blocked
pub const EMPTY_BLOCKED_MESSAGE: &str = "No blocked transactions found";

const TITLE: &str = "SentinelPay Dashboard";
const SUBTITLE: &str = "AI-Powered Fraud Detection & Payment Orchestration";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    pub text: String,
    pub direction: TrendDirection,
}

impl Trend {
    /// Direction is up when the text carries a leading '+'
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let direction = if text.starts_with('+') {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        };
        Self { text, direction }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub trend: Trend,
}

impl StatCard {
    fn new(title: &str, value: String, trend: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            value,
            trend: Trend::new(trend),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub label: String,
    pub value: String,
}

/// One row of the blocked transactions table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedRow {
    pub id: String,
    pub user_id: String,
    /// e.g. "$8,500.00 USD"
    pub amount: String,
    pub risk: RiskClassification,
    /// Score as a whole percentage, e.g. "89%"
    pub risk_percent: String,
    pub badge: String,
    pub provider: String,
    pub timestamp: String,
}

impl From<&BlockedTransaction> for BlockedRow {
    fn from(txn: &BlockedTransaction) -> Self {
        let risk = classify_risk(txn.risk_score);
        Self {
            id: txn.id.clone(),
            user_id: txn.user_id.clone(),
            amount: format!("{} {}", format_money(txn.amount), txn.currency),
            badge: risk.tier.badge().to_string(),
            risk,
            risk_percent: format!("{:.0}%", txn.risk_score * 100.0),
            provider: capitalize(&txn.provider),
            timestamp: txn.created_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Blocked transactions section: rows or an explicit empty state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum BlockedTable {
    Empty { message: String },
    Rows { rows: Vec<BlockedRow> },
}

impl BlockedTable {
    /// Rows keep the order the backend returned
    pub fn from_transactions(txns: &[BlockedTransaction]) -> Self {
        if txns.is_empty() {
            return BlockedTable::Empty {
                message: EMPTY_BLOCKED_MESSAGE.to_string(),
            };
        }
        BlockedTable::Rows {
            rows: txns.iter().map(BlockedRow::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BlockedTable::Empty { .. })
    }
}

/// Provenance of each field group shown on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSources {
    pub dashboard_stats: DataOrigin,
    pub blocked_transactions: DataOrigin,
    pub revenue_metrics: DataOrigin,
    /// Any group is on fallback data
    pub degraded: bool,
}

impl From<&MetricsSnapshot> for DataSources {
    fn from(snapshot: &MetricsSnapshot) -> Self {
        Self {
            dashboard_stats: snapshot.dashboard_stats.origin,
            blocked_transactions: snapshot.blocked_transactions.origin,
            revenue_metrics: snapshot.revenue_metrics.origin,
            degraded: snapshot.is_degraded(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<StatCard>,
    pub revenue_chart: Vec<RevenuePoint>,
    pub insights: Vec<Insight>,
    pub blocked: BlockedTable,
    pub data_sources: DataSources,
}

/// Map a snapshot to the dashboard view model
pub fn build_dashboard(snapshot: &MetricsSnapshot) -> DashboardView {
    let stats = &snapshot.dashboard_stats.data;
    let revenue = &snapshot.revenue_metrics.data;

    let cards = vec![
        StatCard::new(
            "Total Transactions",
            format_count(stats.total_transactions),
            "+12.5%",
        ),
        StatCard::new(
            "Blocked Transactions",
            format_count(stats.blocked_transactions),
            StatField::FraudPreventionRate.format(stats),
        ),
        StatCard::new("Total Revenue", format_money(revenue.total_revenue), "+8.2%"),
        StatCard::new(
            "Success Rate",
            StatField::TransactionSuccessRate.format(stats),
            "+2.1%",
        ),
    ];

    let insights = vec![
        Insight {
            label: "Average Risk Score".to_string(),
            value: StatField::AverageRiskScore.format(stats),
        },
        Insight {
            label: "Fraud Prevention Rate".to_string(),
            value: StatField::FraudPreventionRate.format(stats),
        },
        Insight {
            label: "Average Transaction".to_string(),
            value: format_money(revenue.average_per_transaction),
        },
    ];

    DashboardView {
        title: TITLE.to_string(),
        subtitle: SUBTITLE.to_string(),
        cards,
        revenue_chart: build_revenue_series(revenue),
        insights,
        blocked: BlockedTable::from_transactions(&snapshot.blocked_transactions.data),
        data_sources: DataSources::from(snapshot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::RiskTier;
    use chrono::{TimeZone, Utc};
    use sentinel_core::Sourced;

    fn fixed_time() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_trend_direction() {
        assert_eq!(Trend::new("+12.5%").direction, TrendDirection::Up);
        assert_eq!(Trend::new("7.1%").direction, TrendDirection::Down);
        assert_eq!(Trend::new("-3.0%").direction, TrendDirection::Down);
    }

    #[test]
    fn test_cards_from_fallback_snapshot() {
        let view = build_dashboard(&MetricsSnapshot::fallback(fixed_time()));

        let values: Vec<(&str, &str, &str)> = view
            .cards
            .iter()
            .map(|c| (c.title.as_str(), c.value.as_str(), c.trend.text.as_str()))
            .collect();
        assert_eq!(
            values,
            vec![
                ("Total Transactions", "1,247", "+12.5%"),
                ("Blocked Transactions", "89", "7.1%"),
                ("Total Revenue", "$125,840.50", "+8.2%"),
                ("Success Rate", "92.9%", "+2.1%"),
            ]
        );
        assert_eq!(view.cards[1].trend.direction, TrendDirection::Down);
    }

    #[test]
    fn test_insights_respect_scales() {
        let view = build_dashboard(&MetricsSnapshot::fallback(fixed_time()));
        let values: Vec<&str> = view.insights.iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, vec!["23.0%", "7.1%", "$108.68"]);
    }

    #[test]
    fn test_blocked_rows() {
        let view = build_dashboard(&MetricsSnapshot::fallback(fixed_time()));
        let rows = match view.blocked {
            BlockedTable::Rows { rows } => rows,
            other => panic!("Expected rows, got {:?}", other),
        };

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "txn_001");
        assert_eq!(rows[0].amount, "$8,500.00 USD");
        assert_eq!(rows[0].risk.tier, RiskTier::High);
        assert_eq!(rows[0].risk_percent, "89%");
        assert_eq!(rows[0].badge, "danger");
        assert_eq!(rows[0].provider, "Stripe");
        assert_eq!(rows[1].provider, "Paypal");
        assert_eq!(rows[1].risk_percent, "95%");
    }

    #[test]
    fn test_empty_blocked_list_renders_empty_state() {
        let mut snapshot = MetricsSnapshot::fallback(fixed_time());
        snapshot.blocked_transactions = Sourced::live(Vec::new());

        let view = build_dashboard(&snapshot);
        assert!(view.blocked.is_empty());
        assert_eq!(
            view.blocked,
            BlockedTable::Empty {
                message: EMPTY_BLOCKED_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_row_timestamp() {
        let txn = BlockedTransaction {
            id: "txn_x".to_string(),
            user_id: "user_x".to_string(),
            amount: 42.5,
            currency: "EUR".to_string(),
            risk_score: 0.5,
            provider: "adyen".to_string(),
            created_at: fixed_time(),
        };
        let row = BlockedRow::from(&txn);
        assert_eq!(row.timestamp, "2024-03-01 12:30:00 UTC");
        assert_eq!(row.amount, "$42.50 EUR");
        assert_eq!(row.risk.label, "Medium");
        assert_eq!(row.badge, "warning");
    }

    #[test]
    fn test_data_sources() {
        let mut snapshot = MetricsSnapshot::fallback(fixed_time());
        assert!(DataSources::from(&snapshot).degraded);

        snapshot.dashboard_stats.origin = DataOrigin::Live;
        snapshot.blocked_transactions.origin = DataOrigin::Live;
        snapshot.revenue_metrics.origin = DataOrigin::Live;
        let sources = DataSources::from(&snapshot);
        assert!(!sources.degraded);
        assert_eq!(sources.revenue_metrics, DataOrigin::Live);
    }
}
