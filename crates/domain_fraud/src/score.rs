//! Risk score value objects

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::TierBreakpoints;

/// Which scorer produced an indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorSource {
    FraudPattern,
    MedicalBilling,
}

/// One detected fraud signal
///
/// Indicators are accumulated and never removed within a run; they are the
/// audit trail for the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudIndicator {
    pub source: IndicatorSource,
    pub description: String,
    /// Score contribution before sub-check caps
    pub weight: u32,
}

/// Ordered risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskTier {
    /// Tier for a clamped score under the given breakpoints
    ///
    /// A pure, monotonic function of the score: raising the score can never
    /// lower the tier.
    pub fn for_score(score: u32, breakpoints: &TierBreakpoints) -> Self {
        if score >= breakpoints.critical {
            RiskTier::Critical
        } else if score >= breakpoints.high {
            RiskTier::High
        } else if score >= breakpoints.medium {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
            RiskTier::Critical => "CRITICAL",
        };
        write!(f, "{}", name)
    }
}

/// Raw output of one scorer before composition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerOutput {
    /// Pre-clamp score; sub-checks are capped but the sum is not
    pub score: u32,
    pub indicators: Vec<FraudIndicator>,
}

/// The composite risk score for one decision cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskScore {
    /// Clamped to 0..=100
    pub score: u32,
    pub tier: RiskTier,
    pub indicators: Vec<FraudIndicator>,
}

impl RiskScore {
    /// Builds a score from a raw sum, clamping to the 0..=100 range
    pub fn from_raw(raw: u32, indicators: Vec<FraudIndicator>, breakpoints: &TierBreakpoints) -> Self {
        let score = raw.min(100);
        Self {
            score,
            tier: RiskTier::for_score(score, breakpoints),
            indicators,
        }
    }
}
