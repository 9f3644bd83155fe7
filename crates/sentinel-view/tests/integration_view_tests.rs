//! Integration tests for the dashboard view model
//!
//! Snapshots are decoded from backend-shaped JSON, then mapped and
//! serialized the way the server hands them to the page.

use chrono::Utc;
use sentinel_core::{ApiResponse, BlockedTransaction, MetricsSnapshot, RevenueMetrics, Sourced};
use sentinel_view::{build_dashboard, BlockedTable, RiskTier};

// =============================================================================
// Revenue
// =============================================================================

#[test]
fn test_revenue_chart_from_flat_backend_payload() {
    let body = r#"{
        "success": true,
        "data": {
            "paypal_revenue": 250.0,
            "adyen_revenue": 75.0,
            "stripe_revenue": 900.0,
            "total_revenue": 1225.0,
            "transaction_count": 9,
            "average_per_txn": 136.11
        }
    }"#;
    let envelope: ApiResponse<RevenueMetrics> = serde_json::from_str(body).unwrap();

    let mut snapshot = MetricsSnapshot::fallback(Utc::now());
    snapshot.revenue_metrics = Sourced::live(envelope.data.unwrap());

    let view = build_dashboard(&snapshot);
    let chart: Vec<(&str, f64)> = view
        .revenue_chart
        .iter()
        .map(|p| (p.name.as_str(), p.revenue))
        .collect();
    assert_eq!(chart, vec![("Stripe", 900.0), ("PayPal", 250.0), ("Adyen", 75.0)]);

    assert_eq!(view.cards[2].value, "$1,225.00");
    assert_eq!(view.insights[2].value, "$136.11");
}

// =============================================================================
// Blocked transactions
// =============================================================================

#[test]
fn test_table_keeps_backend_order_and_tiers() {
    let body = r#"{
        "success": true,
        "data": [
            {"id": "t3", "user_id": "u3", "amount": 30.0, "currency": "USD",
             "risk_score": 0.4, "provider": "stripe", "created_at": "2024-03-03T00:00:00Z"},
            {"id": "t1", "user_id": "u1", "amount": 10.0, "currency": "USD",
             "risk_score": 0.7, "provider": "stripe", "created_at": "2024-03-01T00:00:00Z"},
            {"id": "t2", "user_id": "u2", "amount": 20.0, "currency": "USD",
             "risk_score": 0.71, "provider": "paypal", "created_at": "2024-03-02T00:00:00Z"}
        ]
    }"#;
    let envelope: ApiResponse<Vec<BlockedTransaction>> = serde_json::from_str(body).unwrap();

    let mut snapshot = MetricsSnapshot::fallback(Utc::now());
    snapshot.blocked_transactions = Sourced::live(envelope.data.unwrap_or_default());

    let view = build_dashboard(&snapshot);
    let rows = match view.blocked {
        BlockedTable::Rows { rows } => rows,
        other => panic!("Expected rows, got {:?}", other),
    };

    let summary: Vec<(&str, RiskTier)> = rows.iter().map(|r| (r.id.as_str(), r.risk.tier)).collect();
    assert_eq!(
        summary,
        vec![
            ("t3", RiskTier::Low),
            ("t1", RiskTier::Medium),
            ("t2", RiskTier::High),
        ]
    );
}

// =============================================================================
// JSON shape
// =============================================================================

#[test]
fn test_view_json_shape() {
    let mut snapshot = MetricsSnapshot::fallback(Utc::now());
    snapshot.blocked_transactions = Sourced::live(Vec::new());

    let json = serde_json::to_value(build_dashboard(&snapshot)).unwrap();

    assert_eq!(json["title"], "SentinelPay Dashboard");
    assert_eq!(json["blocked"]["state"], "empty");
    assert_eq!(json["blocked"]["message"], "No blocked transactions found");
    assert_eq!(json["data_sources"]["dashboard_stats"], "fallback");
    assert_eq!(json["data_sources"]["blocked_transactions"], "live");
    assert_eq!(json["data_sources"]["degraded"], true);
    assert_eq!(json["cards"][0]["trend"]["direction"], "up");
    assert_eq!(json["revenue_chart"][0]["name"], "Stripe");
}

#[test]
fn test_rows_state_tag() {
    let json = serde_json::to_value(build_dashboard(&MetricsSnapshot::fallback(Utc::now()))).unwrap();
    assert_eq!(json["blocked"]["state"], "rows");
    assert_eq!(json["blocked"]["rows"][0]["risk"]["tier"], "high");
    assert_eq!(json["blocked"]["rows"][0]["badge"], "danger");
}
