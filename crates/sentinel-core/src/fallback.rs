//! Static substitutes used when a backend endpoint is unavailable
//!
//! Values are fixed so a dashboard rendered entirely from fallbacks is
//! reproducible. Blocked transactions are stamped with the evaluation time.

use chrono::{DateTime, Utc};

use crate::revenue::{ProviderRevenue, RevenueMetrics};
use crate::stats::DashboardStats;
use crate::transaction::{BlockedTransaction, FraudLogEntry};

/// Substitute for `/admin/stats`
pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_transactions: 1247,
        blocked_transactions: 89,
        total_revenue: 125840.50,
        average_risk_score: 0.23,
        fraud_prevention_rate: 7.14,
        transaction_success_rate: 92.86,
    }
}

/// Substitute for `/admin/transactions/blocked`
pub fn blocked_transactions(now: DateTime<Utc>) -> Vec<BlockedTransaction> {
    vec![
        BlockedTransaction {
            id: "txn_001".to_string(),
            user_id: "user_001".to_string(),
            amount: 8500.00,
            currency: "USD".to_string(),
            risk_score: 0.89,
            provider: "stripe".to_string(),
            created_at: now,
        },
        BlockedTransaction {
            id: "txn_002".to_string(),
            user_id: "user_002".to_string(),
            amount: 12000.00,
            currency: "USD".to_string(),
            risk_score: 0.95,
            provider: "paypal".to_string(),
            created_at: now,
        },
    ]
}

/// Substitute for `/admin/revenue`
pub fn revenue_metrics() -> RevenueMetrics {
    let mut provider_revenue = ProviderRevenue::new();
    provider_revenue.insert("stripe", 68420.30);
    provider_revenue.insert("paypal", 57420.20);

    RevenueMetrics {
        provider_revenue,
        total_revenue: 125840.50,
        transaction_count: 1158,
        average_per_transaction: 108.68,
    }
}

/// Substitute for `/admin/fraud-logs`
pub fn fraud_logs() -> Vec<FraudLogEntry> {
    Vec::new()
}
