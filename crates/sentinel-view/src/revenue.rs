//! Revenue-by-provider chart series

use serde::{Deserialize, Serialize};

use sentinel_core::RevenueMetrics;

use crate::format::capitalize;

/// Providers with a fixed chart position: (key, display name)
pub const KNOWN_PROVIDERS: [(&str, &str); 2] = [("stripe", "Stripe"), ("paypal", "PayPal")];

/// One bar of the revenue chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub name: String,
    pub revenue: f64,
}

/// Build the chart series for a revenue breakdown
///
/// Known providers come first in their fixed order and are always present
/// (0 when the backend omitted them). Other providers follow sorted by key.
/// The result does not depend on the order the backend listed providers in.
pub fn build_revenue_series(metrics: &RevenueMetrics) -> Vec<RevenuePoint> {
    let mut series: Vec<RevenuePoint> = KNOWN_PROVIDERS
        .iter()
        .map(|(key, name)| RevenuePoint {
            name: name.to_string(),
            revenue: metrics.provider_revenue.get(key).unwrap_or(0.0),
        })
        .collect();

    let mut others: Vec<(&str, f64)> = metrics
        .provider_revenue
        .iter()
        .filter(|(provider, _)| !KNOWN_PROVIDERS.iter().any(|(key, _)| key == provider))
        .collect();
    others.sort_by(|a, b| a.0.cmp(b.0));

    series.extend(others.into_iter().map(|(provider, revenue)| RevenuePoint {
        name: capitalize(provider),
        revenue,
    }));

    series
}
