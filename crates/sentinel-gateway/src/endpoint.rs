//! Backend endpoints consumed by the gateway

use std::fmt;

/// Admin endpoint, relative to the configured base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    DashboardStats,
    BlockedTransactions,
    RevenueMetrics,
    FraudLogs,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::DashboardStats => "/admin/stats",
            Endpoint::BlockedTransactions => "/admin/transactions/blocked",
            Endpoint::RevenueMetrics => "/admin/revenue",
            Endpoint::FraudLogs => "/admin/fraud-logs",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
