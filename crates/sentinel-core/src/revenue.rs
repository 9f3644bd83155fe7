//! Revenue breakdown served by `/admin/revenue`
//!
//! The backend reports one flat `<provider>_revenue` key per payment provider
//! next to the totals:
//!
//! ```json
//! {
//!   "stripe_revenue": 68420.30,
//!   "paypal_revenue": 57420.20,
//!   "total_revenue": 125840.50,
//!   "transaction_count": 1158,
//!   "average_per_txn": 108.68
//! }
//! ```
//!
//! Decoding folds the per-provider keys into [`ProviderRevenue`], keeping
//! document order. A nested `provider_revenue` object is accepted as well.

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const REVENUE_SUFFIX: &str = "_revenue";
const TOTAL_REVENUE: &str = "total_revenue";
const TRANSACTION_COUNT: &str = "transaction_count";
const AVERAGE_PER_TXN: &str = "average_per_txn";
const AVERAGE_PER_TRANSACTION: &str = "average_per_transaction";
const PROVIDER_REVENUE: &str = "provider_revenue";

/// Revenue per payment provider
///
/// Keys are unique; iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderRevenue {
    entries: Vec<(String, f64)>,
}

impl ProviderRevenue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a provider's amount
    ///
    /// A replaced provider keeps its original position. Returns the previous amount.
    pub fn insert(&mut self, provider: impl Into<String>, amount: f64) -> Option<f64> {
        let provider = provider.into();
        match self.entries.iter_mut().find(|(name, _)| *name == provider) {
            Some((_, existing)) => Some(std::mem::replace(existing, amount)),
            None => {
                self.entries.push((provider, amount));
                None
            }
        }
    }

    pub fn get(&self, provider: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == provider)
            .map(|(_, amount)| *amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> Extend<(K, f64)> for ProviderRevenue {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        for (provider, amount) in iter {
            self.insert(provider, amount);
        }
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ProviderRevenue {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut revenue = Self::new();
        revenue.extend(iter);
        revenue
    }
}

impl IntoIterator for ProviderRevenue {
    type Item = (String, f64);
    type IntoIter = std::vec::IntoIter<(String, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for ProviderRevenue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (provider, amount) in &self.entries {
            map.serialize_entry(provider, amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ProviderRevenue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ProviderRevenueVisitor;

        impl<'de> Visitor<'de> for ProviderRevenueVisitor {
            type Value = ProviderRevenue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of provider name to revenue")
            }

            fn visit_map<M>(self, mut map: M) -> Result<ProviderRevenue, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut revenue = ProviderRevenue::new();
                while let Some((provider, amount)) = map.next_entry::<String, f64>()? {
                    revenue.insert(provider, amount);
                }
                Ok(revenue)
            }
        }

        deserializer.deserialize_map(ProviderRevenueVisitor)
    }
}

/// Revenue metrics for completed transactions
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueMetrics {
    /// Revenue per provider, in the order the backend reported it
    pub provider_revenue: ProviderRevenue,

    /// Revenue across all providers
    pub total_revenue: f64,

    /// Number of completed transactions
    pub transaction_count: u64,

    /// Mean revenue per completed transaction
    pub average_per_transaction: f64,
}

/// Provider names that cannot be written as a flat `<provider>_revenue` key:
/// they would collide with `total_revenue` / `provider_revenue` or decode
/// as an unknown key.
fn needs_nesting(provider: &str) -> bool {
    provider.is_empty() || provider == "total" || provider == "provider"
}

impl Serialize for RevenueMetrics {
    /// Flat keys where possible; providers that cannot be flattened go into
    /// a nested `provider_revenue` object, which the decoder merges back.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (nested, flat): (ProviderRevenue, ProviderRevenue) = self
            .provider_revenue
            .iter()
            .partition(|(provider, _)| needs_nesting(provider));

        let len = flat.len() + 3 + usize::from(!nested.is_empty());
        let mut map = serializer.serialize_map(Some(len))?;
        for (provider, amount) in flat.iter() {
            map.serialize_entry(&format!("{}{}", provider, REVENUE_SUFFIX), &amount)?;
        }
        if !nested.is_empty() {
            map.serialize_entry(PROVIDER_REVENUE, &nested)?;
        }
        map.serialize_entry(TOTAL_REVENUE, &self.total_revenue)?;
        map.serialize_entry(TRANSACTION_COUNT, &self.transaction_count)?;
        map.serialize_entry(AVERAGE_PER_TXN, &self.average_per_transaction)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for RevenueMetrics {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RevenueMetricsVisitor;

        impl<'de> Visitor<'de> for RevenueMetricsVisitor {
            type Value = RevenueMetrics;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a revenue metrics object")
            }

            fn visit_map<M>(self, mut map: M) -> Result<RevenueMetrics, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut provider_revenue = ProviderRevenue::new();
                let mut total_revenue = None;
                let mut transaction_count = None;
                let mut average_per_transaction = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        TOTAL_REVENUE => total_revenue = Some(map.next_value::<f64>()?),
                        TRANSACTION_COUNT => transaction_count = Some(map.next_value::<u64>()?),
                        AVERAGE_PER_TXN | AVERAGE_PER_TRANSACTION => {
                            average_per_transaction = Some(map.next_value::<f64>()?)
                        }
                        PROVIDER_REVENUE => {
                            for (provider, amount) in map.next_value::<ProviderRevenue>()? {
                                provider_revenue.insert(provider, amount);
                            }
                        }
                        other => match other.strip_suffix(REVENUE_SUFFIX) {
                            Some(provider) if !provider.is_empty() => {
                                let amount = map.next_value::<f64>()?;
                                provider_revenue.insert(provider, amount);
                            }
                            _ => {
                                map.next_value::<IgnoredAny>()?;
                            }
                        },
                    }
                }

                Ok(RevenueMetrics {
                    provider_revenue,
                    total_revenue: total_revenue
                        .ok_or_else(|| de::Error::missing_field(TOTAL_REVENUE))?,
                    transaction_count: transaction_count
                        .ok_or_else(|| de::Error::missing_field(TRANSACTION_COUNT))?,
                    average_per_transaction: average_per_transaction
                        .ok_or_else(|| de::Error::missing_field(AVERAGE_PER_TXN))?,
                })
            }
        }

        deserializer.deserialize_map(RevenueMetricsVisitor)
    }
}
