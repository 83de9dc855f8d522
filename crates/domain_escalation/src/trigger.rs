//! Escalation triggers
//!
//! A trigger is an input fact about the claim, not a decision. The trigger
//! set is a closed enum; generic triggers carry a label and rely on their
//! declared severity for prioritization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared severity of a trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// The closed set of trigger types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerType {
    HighValueClaim,
    FraudSuspected,
    CoverageDispute,
    TotalLoss,
    ComplianceIssue,
    InjuryClaim,
    /// A generic trigger outside the named set, carrying its own label
    Other(String),
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerType::HighValueClaim => write!(f, "HIGH_VALUE_CLAIM"),
            TriggerType::FraudSuspected => write!(f, "FRAUD_SUSPECTED"),
            TriggerType::CoverageDispute => write!(f, "COVERAGE_DISPUTE"),
            TriggerType::TotalLoss => write!(f, "TOTAL_LOSS"),
            TriggerType::ComplianceIssue => write!(f, "COMPLIANCE_ISSUE"),
            TriggerType::InjuryClaim => write!(f, "INJURY_CLAIM"),
            TriggerType::Other(label) => write!(f, "OTHER({})", label),
        }
    }
}

/// An escalation trigger: an input fact handed to the decision handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationTrigger {
    pub trigger_type: TriggerType,
    pub severity: Severity,
    pub reason: String,
}

impl EscalationTrigger {
    pub fn new(trigger_type: TriggerType, severity: Severity, reason: impl Into<String>) -> Self {
        Self {
            trigger_type,
            severity,
            reason: reason.into(),
        }
    }

    pub fn high_value(reason: impl Into<String>) -> Self {
        Self::new(TriggerType::HighValueClaim, Severity::High, reason)
    }

    pub fn fraud_suspected(reason: impl Into<String>) -> Self {
        Self::new(TriggerType::FraudSuspected, Severity::High, reason)
    }

    pub fn coverage_dispute(reason: impl Into<String>) -> Self {
        Self::new(TriggerType::CoverageDispute, Severity::High, reason)
    }

    pub fn total_loss(reason: impl Into<String>) -> Self {
        Self::new(TriggerType::TotalLoss, Severity::Medium, reason)
    }

    pub fn compliance_issue(reason: impl Into<String>) -> Self {
        Self::new(TriggerType::ComplianceIssue, Severity::Critical, reason)
    }

    pub fn injury_claim(reason: impl Into<String>) -> Self {
        Self::new(TriggerType::InjuryClaim, Severity::High, reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_trigger_type_display() {
        assert_eq!(TriggerType::HighValueClaim.to_string(), "HIGH_VALUE_CLAIM");
        assert_eq!(
            TriggerType::Other("vendor hold".to_string()).to_string(),
            "OTHER(vendor hold)"
        );
    }
}
