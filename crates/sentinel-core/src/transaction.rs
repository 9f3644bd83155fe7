//! Transaction records listed by the admin endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A transaction declined or flagged by fraud detection
///
/// The backend sends the full transaction row; fields not listed here
/// (status, metadata, ...) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedTransaction {
    /// Opaque transaction identifier
    pub id: String,

    /// Opaque user identifier
    pub user_id: String,

    /// Transaction amount in `currency`
    pub amount: f64,

    /// ISO-4217-like currency code
    pub currency: String,

    /// Risk score in [0, 1]
    pub risk_score: f64,

    /// Payment provider name (e.g. "stripe")
    pub provider: String,

    pub created_at: DateTime<Utc>,
}

/// A fraud detection event served by `/admin/fraud-logs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudLogEntry {
    pub id: String,
    pub transaction_id: String,
    pub user_id: String,

    /// Risk score in [0, 1]
    pub risk_score: f64,

    /// Action taken: "approved", "blocked" or "manual_review"
    pub action: String,

    pub detected_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_backend_row_ignores_extra_fields() {
        let json = r#"{
            "id": "txn_42",
            "user_id": "user_7",
            "amount": 999.99,
            "currency": "EUR",
            "status": "blocked",
            "risk_score": 0.82,
            "fraud_detected": true,
            "provider": "paypal",
            "provider_txn_id": "",
            "description": "",
            "metadata": null,
            "created_at": "2024-03-01T12:30:00Z",
            "updated_at": "0001-01-01T00:00:00Z"
        }"#;

        let txn: BlockedTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.id, "txn_42");
        assert_eq!(txn.user_id, "user_7");
        assert_eq!(txn.amount, 999.99);
        assert_eq!(txn.currency, "EUR");
        assert_eq!(txn.risk_score, 0.82);
        assert_eq!(txn.provider, "paypal");
        assert_eq!(
            txn.created_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_timestamp_with_offset_is_normalized_to_utc() {
        let json = r#"{
            "id": "txn_1",
            "user_id": "user_1",
            "amount": 10.0,
            "currency": "USD",
            "risk_score": 0.5,
            "provider": "stripe",
            "created_at": "2024-03-01T14:30:00.123456+02:00"
        }"#;

        let txn: BlockedTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.created_at.format("%H:%M").to_string(), "12:30");
    }

    #[test]
    fn test_deserialize_fraud_log_entry() {
        let json = r#"{
            "id": "log_1",
            "transaction_id": "txn_1",
            "user_id": "user_1",
            "risk_score": 0.91,
            "action": "blocked",
            "detected_at": "2024-03-01T00:00:00Z"
        }"#;

        let entry: FraudLogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.transaction_id, "txn_1");
        assert_eq!(entry.action, "blocked");
    }
}
