//! Risk tier classification

use serde::{Deserialize, Serialize};

/// Scores strictly above this are high risk
pub const HIGH_RISK_THRESHOLD: f64 = 0.7;

/// Scores strictly above this (and not high) are medium risk
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.4;

/// Risk tier derived from a normalized score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }

    /// Badge style used by the blocked transactions table
    pub fn badge(&self) -> &'static str {
        match self {
            RiskTier::Low => "success",
            RiskTier::Medium => "warning",
            RiskTier::High => "danger",
        }
    }
}

/// Tier plus its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskClassification {
    pub tier: RiskTier,
    pub label: String,
}

/// Classify a risk score in [0, 1]
///
/// `> 0.7` is High, `> 0.4` is Medium, anything else is Low. Both bounds
/// are strict, so exactly 0.7 is Medium and exactly 0.4 is Low.
pub fn classify_risk(score: f64) -> RiskClassification {
    let tier = if score > HIGH_RISK_THRESHOLD {
        RiskTier::High
    } else if score > MEDIUM_RISK_THRESHOLD {
        RiskTier::Medium
    } else {
        RiskTier::Low
    };

    RiskClassification {
        tier,
        label: tier.label().to_string(),
    }
}
