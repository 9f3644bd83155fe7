//! Dashboard statistics served by `/admin/stats`

use serde::{Deserialize, Serialize};

/// Aggregate transaction statistics
///
/// `average_risk_score` is a ratio in [0, 1]. `fraud_prevention_rate` and
/// `transaction_success_rate` are already percentages (0.0 - 100.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Number of transactions seen by the backend
    pub total_transactions: u64,

    /// Number of transactions blocked by fraud detection
    pub blocked_transactions: u64,

    /// Revenue of completed transactions
    pub total_revenue: f64,

    /// Mean risk score over all transactions (ratio)
    pub average_risk_score: f64,

    /// Share of transactions blocked (percentage)
    pub fraud_prevention_rate: f64,

    /// Share of transactions not blocked (percentage)
    pub transaction_success_rate: f64,
}
