//! Custom Test Assertions
//!
//! Assertion helpers for domain types that give more meaningful error
//! messages than standard assertions.

use domain_coverage::CoverageResult;
use domain_escalation::{EscalationAction, EscalationOutcome, TriggerType};
use domain_fraud::{RiskScore, RiskTier};

/// Asserts that a risk score has the expected value and tier
pub fn assert_risk(score: &RiskScore, expected_score: u32, expected_tier: RiskTier) {
    assert_eq!(
        score.score, expected_score,
        "Expected score {}, got {} (indicators: {:?})",
        expected_score, score.score, score.indicators
    );
    assert_eq!(
        score.tier, expected_tier,
        "Expected tier {}, got {}",
        expected_tier, score.tier
    );
}

/// Asserts that a coverage verdict for the given type applies
pub fn assert_coverage_applies(result: &CoverageResult, coverage_type: domain_claim::CoverageType) {
    let verdict = result
        .verdicts
        .iter()
        .find(|v| v.coverage_type == coverage_type)
        .unwrap_or_else(|| panic!("No verdict for {:?}", coverage_type));
    assert!(
        verdict.applies,
        "Expected {:?} to apply, got '{}'",
        coverage_type, verdict.reason
    );
}

/// Asserts that exactly one decision exists for the trigger type and returns it
pub fn assert_single_decision<'a>(
    outcome: &'a EscalationOutcome,
    trigger_type: &TriggerType,
) -> &'a domain_escalation::EscalationDecision {
    let matching: Vec<_> = outcome
        .decisions
        .iter()
        .filter(|d| d.trigger_type == *trigger_type)
        .collect();
    assert_eq!(
        matching.len(),
        1,
        "Expected exactly one decision for {}, got {}",
        trigger_type,
        matching.len()
    );
    matching[0]
}

/// Asserts that a decision has the expected action
pub fn assert_action(decision: &domain_escalation::EscalationDecision, action: EscalationAction) {
    assert_eq!(
        decision.action, action,
        "Expected action {:?} for {}, got {:?} ({})",
        action, decision.trigger_type, decision.action, decision.reasoning
    );
}
