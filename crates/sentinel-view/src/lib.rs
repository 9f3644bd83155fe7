//! Presentation mapper for the SentinelPay dashboard
//!
//! Pure functions from a [`MetricsSnapshot`](sentinel_core::MetricsSnapshot)
//! to display-ready values:
//! - risk tiers for raw [0, 1] scores
//! - percentage rendering that knows which fields are ratios
//! - a provider revenue series in a stable order
//! - the cards / insights / table view model consumed by the page

pub mod dashboard;
pub mod format;
pub mod revenue;
pub mod risk;

pub use dashboard::{
    build_dashboard, BlockedRow, BlockedTable, DashboardView, DataSources, Insight, StatCard,
    Trend, TrendDirection, EMPTY_BLOCKED_MESSAGE,
};
pub use format::{format_count, format_money, format_percentage, to_percent, MetricScale, StatField};
pub use revenue::{build_revenue_series, RevenuePoint, KNOWN_PROVIDERS};
pub use risk::{classify_risk, RiskClassification, RiskTier};
