//! Coverage analysis result types

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Money;
use domain_claim::CoverageType;

use crate::exclusions::ExclusionCode;

/// Applicability verdict for one coverage type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageVerdict {
    pub coverage_type: CoverageType,
    pub applies: bool,
    pub reason: String,
    /// Per-occurrence limit, when the coverage is on the policy
    pub limit: Option<Money>,
    /// Deductible before any waiver, when the coverage is on the policy
    pub deductible: Option<Money>,
}

impl CoverageVerdict {
    pub fn not_applicable(coverage_type: CoverageType, reason: impl Into<String>) -> Self {
        Self {
            coverage_type,
            applies: false,
            reason: reason.into(),
            limit: None,
            deductible: None,
        }
    }
}

/// One evaluated exclusion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionFinding {
    pub code: ExclusionCode,
    pub description: String,
    pub applies: bool,
}

/// Narrow deductible-waiver rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaiverRule {
    /// Hit-and-run loss with a police report on file
    HitAndRunPoliceReport,
    /// Glass damage repairable without replacement
    GlassRepairOnly,
    /// Subrogation recovery against the at-fault party completed
    SubrogationRecovery,
}

/// A deductible-waiver determination for one applicable coverage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductibleWaiver {
    pub coverage_type: CoverageType,
    pub rule: WaiverRule,
    pub reason: String,
}

/// A coverage expected to respond to this loss type but not applicable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageGap {
    pub coverage_type: CoverageType,
    pub reason: String,
}

/// Deterministic overall recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageRecommendation {
    /// No coverage responds; recommend denial
    DenyNoCoverage,
    /// Some expected coverages do not respond
    PartialCoverageOnly,
    /// An exclusion applies against otherwise-applicable coverage
    EscalateToCoverageCounsel,
}

impl fmt::Display for CoverageRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CoverageRecommendation::DenyNoCoverage => {
                "Recommend denial: no applicable coverage for this loss"
            }
            CoverageRecommendation::PartialCoverageOnly => {
                "Partial coverage only: one or more expected coverages do not respond"
            }
            CoverageRecommendation::EscalateToCoverageCounsel => {
                "Escalate to coverage counsel: exclusion applies against applicable coverage"
            }
        };
        write!(f, "{}", text)
    }
}

/// Full output of the coverage analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageResult {
    /// One verdict per candidate coverage type for the claim's loss type
    pub verdicts: Vec<CoverageVerdict>,
    /// Every exclusion, evaluated independently
    pub exclusions: Vec<ExclusionFinding>,
    /// Deductible waivers granted
    pub waivers: Vec<DeductibleWaiver>,
    /// Expected coverages that did not respond
    pub gaps: Vec<CoverageGap>,
    /// Advisory warnings (degraded data, missing reference information)
    pub warnings: Vec<String>,
    /// Deterministic recommendations
    pub recommendations: Vec<CoverageRecommendation>,
}

impl CoverageResult {
    /// Coverage applies overall iff any verdict applies
    pub fn coverage_applies(&self) -> bool {
        self.verdicts.iter().any(|v| v.applies)
    }

    /// An exclusion applying against otherwise-applicable coverage is a
    /// coverage dispute
    pub fn has_dispute(&self) -> bool {
        self.coverage_applies() && self.exclusions.iter().any(|e| e.applies)
    }

    /// Exclusions that apply to this claim
    pub fn applied_exclusions(&self) -> Vec<&ExclusionFinding> {
        self.exclusions.iter().filter(|e| e.applies).collect()
    }
}
