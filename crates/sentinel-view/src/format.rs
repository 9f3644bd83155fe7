//! Display formatting for metric values
//!
//! The backend mixes two scales: risk scores are ratios in [0, 1] while the
//! prevention and success rates already arrive as percentages. [`StatField`]
//! pins the scale of every percentage field so a value is never multiplied
//! twice or not at all.

use serde::{Deserialize, Serialize};

use sentinel_core::DashboardStats;

/// Scale a raw value is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricScale {
    /// Fraction in [0, 1]; multiplied by 100 for display
    Ratio,
    /// Already a percentage; displayed as is
    Percent,
}

/// Percentage-valued fields of [`DashboardStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    AverageRiskScore,
    FraudPreventionRate,
    TransactionSuccessRate,
}

impl StatField {
    pub fn scale(&self) -> MetricScale {
        match self {
            StatField::AverageRiskScore => MetricScale::Ratio,
            StatField::FraudPreventionRate => MetricScale::Percent,
            StatField::TransactionSuccessRate => MetricScale::Percent,
        }
    }

    pub fn value(&self, stats: &DashboardStats) -> f64 {
        match self {
            StatField::AverageRiskScore => stats.average_risk_score,
            StatField::FraudPreventionRate => stats.fraud_prevention_rate,
            StatField::TransactionSuccessRate => stats.transaction_success_rate,
        }
    }

    /// Field value rendered as a percentage string
    pub fn format(&self, stats: &DashboardStats) -> String {
        format_percentage(self.value(stats), self.scale())
    }
}

/// Convert a value on the given scale to a percentage number
pub fn to_percent(value: f64, scale: MetricScale) -> f64 {
    match scale {
        MetricScale::Ratio => value * 100.0,
        MetricScale::Percent => value,
    }
}

/// Render a value as a percentage string, e.g. "23.0%"
///
/// The string is rounded to one decimal, so 7.14 on the percent scale
/// renders as "7.1%". [`to_percent`] gives the unrounded number.
pub fn format_percentage(value: f64, scale: MetricScale) -> String {
    format!("{:.1}%", to_percent(value, scale))
}

/// Render a count with thousands separators, e.g. "1,247"
pub fn format_count(count: u64) -> String {
    group_thousands(&count.to_string())
}

/// Render a currency amount, e.g. "$125,840.50"
pub fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

/// Capitalize the first character, e.g. "stripe" -> "Stripe"
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_core::fallback;

    #[test]
    fn test_ratio_is_multiplied() {
        let pct = to_percent(0.23, MetricScale::Ratio);
        assert!((pct - 23.0).abs() < 1e-9);
        assert_eq!(format_percentage(0.23, MetricScale::Ratio), "23.0%");
    }

    #[test]
    fn test_percent_passes_through() {
        assert_eq!(to_percent(7.14, MetricScale::Percent), 7.14);
        assert_eq!(format_percentage(7.14, MetricScale::Percent), "7.1%");
    }

    #[test]
    fn test_string_form_rounds_number_does_not() {
        assert_eq!(format_percentage(7.14, MetricScale::Percent), "7.1%");
        assert_eq!(format_percentage(92.86, MetricScale::Percent), "92.9%");
        assert_eq!(to_percent(92.86, MetricScale::Percent), 92.86);
        assert_eq!(format_percentage(0.0, MetricScale::Ratio), "0.0%");
    }

    #[test]
    fn test_field_scales() {
        assert_eq!(StatField::AverageRiskScore.scale(), MetricScale::Ratio);
        assert_eq!(StatField::FraudPreventionRate.scale(), MetricScale::Percent);
        assert_eq!(StatField::TransactionSuccessRate.scale(), MetricScale::Percent);
    }

    #[test]
    fn test_fields_on_fallback_stats() {
        let stats = fallback::dashboard_stats();

        let percent = |field: StatField| to_percent(field.value(&stats), field.scale());
        assert!((percent(StatField::AverageRiskScore) - 23.0).abs() < 1e-9);
        assert_eq!(percent(StatField::FraudPreventionRate), 7.14);
        assert_eq!(percent(StatField::TransactionSuccessRate), 92.86);

        assert_eq!(StatField::AverageRiskScore.format(&stats), "23.0%");
        assert_eq!(StatField::FraudPreventionRate.format(&stats), "7.1%");
        assert_eq!(StatField::TransactionSuccessRate.format(&stats), "92.9%");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1247), "1,247");
        assert_eq!(format_count(1_000_000), "1,000,000");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(108.68), "$108.68");
        assert_eq!(format_money(8500.0), "$8,500.00");
        assert_eq!(format_money(125840.5), "$125,840.50");
        assert_eq!(format_money(-1234.5), "-$1,234.50");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("stripe"), "Stripe");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("é"), "É");
    }
}
