//! Escalation decision handler
//!
//! One decision per trigger, dispatched by trigger type with independent
//! thresholded logic, then aggregated into an overall recommendation and a
//! requires-human-review flag. Deadlines are calendar days from the
//! snapshot's as-of instant.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::calendar_deadline;
use domain_claim::ClaimSnapshot;
use domain_coverage::CoverageResult;
use domain_fraud::RiskScore;

use crate::config::EscalationConfig;
use crate::decision::{AssigneeRole, EscalationAction, EscalationDecision, Priority};
use crate::trigger::{EscalationTrigger, Severity, TriggerType};

/// Aggregate recommendation, by precedence: Deny > Investigate > Refer > Proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallRecommendation {
    Deny,
    Investigate,
    Refer,
    Proceed,
}

impl fmt::Display for OverallRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverallRecommendation::Deny => "DENY",
            OverallRecommendation::Investigate => "INVESTIGATE",
            OverallRecommendation::Refer => "REFER",
            OverallRecommendation::Proceed => "PROCEED",
        };
        write!(f, "{}", name)
    }
}

/// Output of the escalation decision handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationOutcome {
    pub decisions: Vec<EscalationDecision>,
    pub overall_recommendation: OverallRecommendation,
    pub requires_human_review: bool,
}

fn severity_priority(severity: Severity) -> Priority {
    match severity {
        Severity::Low => Priority::Low,
        Severity::Medium => Priority::Medium,
        Severity::High => Priority::High,
        Severity::Critical => Priority::Critical,
    }
}

fn dispatch(
    claim: &ClaimSnapshot,
    risk: &RiskScore,
    coverage: &CoverageResult,
    trigger: &EscalationTrigger,
    config: &EscalationConfig,
) -> EscalationDecision {
    let deadline = |days| calendar_deadline(claim.as_of, days);
    let amount = claim.estimated_amount.amount();

    match &trigger.trigger_type {
        TriggerType::HighValueClaim => {
            if amount <= config.high_value_approve_limit {
                EscalationDecision::new(
                    TriggerType::HighValueClaim,
                    Priority::Medium,
                    EscalationAction::Approve,
                    AssigneeRole::ClaimsAdjuster,
                    format!(
                        "Estimated amount {} within adjuster approval authority",
                        claim.estimated_amount
                    ),
                    deadline(5),
                )
            } else if amount <= config.supervisor_referral_limit {
                EscalationDecision::new(
                    TriggerType::HighValueClaim,
                    Priority::High,
                    EscalationAction::ReferSupervisor,
                    AssigneeRole::ClaimsSupervisor,
                    format!(
                        "Estimated amount {} requires supervisor sign-off",
                        claim.estimated_amount
                    ),
                    deadline(2),
                )
            } else {
                EscalationDecision::new(
                    TriggerType::HighValueClaim,
                    Priority::High,
                    EscalationAction::ReferSupervisor,
                    AssigneeRole::ClaimsManager,
                    format!(
                        "Estimated amount {} exceeds supervisor tier; manager review required",
                        claim.estimated_amount
                    ),
                    deadline(1),
                )
            }
        }

        TriggerType::FraudSuspected => {
            if risk.score >= config.auto_deny_score {
                EscalationDecision::new(
                    TriggerType::FraudSuspected,
                    Priority::Critical,
                    EscalationAction::Reject,
                    AssigneeRole::SiuInvestigator,
                    format!(
                        "Fraud score {} at or above auto-deny threshold {}",
                        risk.score, config.auto_deny_score
                    ),
                    deadline(1),
                )
                .with_documents(&["SIU case file", "Evidence preservation log"])
                .with_next_steps(&[
                    "Open SIU case",
                    "Preserve all claim evidence",
                    "Issue denial letter pending SIU confirmation",
                ])
            } else if risk.score >= config.investigate_score {
                EscalationDecision::new(
                    TriggerType::FraudSuspected,
                    Priority::High,
                    EscalationAction::Investigate,
                    AssigneeRole::SiuInvestigator,
                    format!(
                        "Fraud score {} warrants investigation ({} indicators)",
                        risk.score,
                        risk.indicators.len()
                    ),
                    deadline(5),
                )
                .with_documents(&["Recorded claimant statement", "Proof-of-loss affidavit"])
                .with_next_steps(&["Assign SIU investigator", "Request supporting documentation"])
            } else {
                EscalationDecision::new(
                    TriggerType::FraudSuspected,
                    Priority::Low,
                    EscalationAction::Approve,
                    AssigneeRole::ClaimsAdjuster,
                    format!(
                        "Fraud score {} below investigation threshold; {} indicators logged, no hold",
                        risk.score,
                        risk.indicators.len()
                    ),
                    deadline(5),
                )
            }
        }

        TriggerType::CoverageDispute => {
            let applied = coverage.applied_exclusions();
            let reasoning = if applied.is_empty() {
                trigger.reason.clone()
            } else {
                format!(
                    "{} ({} exclusion(s) on record)",
                    trigger.reason,
                    applied.len()
                )
            };
            EscalationDecision::new(
                TriggerType::CoverageDispute,
                Priority::High,
                EscalationAction::Investigate,
                AssigneeRole::CoverageCounsel,
                reasoning,
                deadline(3),
            )
            .with_documents(&["Reservation-of-rights letter"])
            .with_next_steps(&["Issue reservation of rights", "Obtain coverage opinion"])
        }

        TriggerType::TotalLoss => EscalationDecision::new(
            TriggerType::TotalLoss,
            Priority::Medium,
            EscalationAction::Approve,
            AssigneeRole::SeniorAdjuster,
            trigger.reason.clone(),
            deadline(3),
        )
        .with_documents(&["Lienholder payoff statement", "Fair market valuation report"])
        .with_next_steps(&[
            "Order independent valuation",
            "Confirm lienholder payoff",
            "Prepare settlement offer at ACV",
        ]),

        TriggerType::ComplianceIssue => EscalationDecision::new(
            TriggerType::ComplianceIssue,
            Priority::Critical,
            EscalationAction::Investigate,
            AssigneeRole::ComplianceOfficer,
            trigger.reason.clone(),
            deadline(1),
        )
        .with_next_steps(&["Notify compliance officer", "Document remediation plan"]),

        TriggerType::InjuryClaim => EscalationDecision::new(
            TriggerType::InjuryClaim,
            Priority::High,
            EscalationAction::ReferSupervisor,
            AssigneeRole::BodilyInjurySpecialist,
            trigger.reason.clone(),
            deadline(2),
        )
        .with_next_steps(&["Assign bodily-injury specialist", "Request medical records"]),

        TriggerType::Other(label) => {
            let priority = severity_priority(trigger.severity);
            let days = match priority {
                Priority::Critical => 1,
                Priority::High => 2,
                Priority::Medium => 3,
                Priority::Low => 5,
            };
            EscalationDecision::new(
                TriggerType::Other(label.clone()),
                priority,
                EscalationAction::Investigate,
                AssigneeRole::SeniorAdjuster,
                trigger.reason.clone(),
                deadline(days),
            )
        }
    }
}

/// Emits one routing decision per trigger plus the aggregate recommendation
pub fn decide_escalations(
    claim: &ClaimSnapshot,
    risk: &RiskScore,
    coverage: &CoverageResult,
    triggers: &[EscalationTrigger],
    config: &EscalationConfig,
) -> EscalationOutcome {
    let decisions: Vec<EscalationDecision> = triggers
        .iter()
        .map(|trigger| dispatch(claim, risk, coverage, trigger, config))
        .collect();

    let overall_recommendation = if decisions.iter().any(|d| d.action == EscalationAction::Reject)
    {
        OverallRecommendation::Deny
    } else if decisions
        .iter()
        .any(|d| d.action == EscalationAction::Investigate)
    {
        OverallRecommendation::Investigate
    } else if decisions.iter().any(|d| {
        matches!(
            d.action,
            EscalationAction::ReferSupervisor | EscalationAction::ReferLegal
        )
    }) {
        OverallRecommendation::Refer
    } else {
        OverallRecommendation::Proceed
    };

    let approved_above_authority = decisions
        .iter()
        .any(|d| d.action == EscalationAction::Approve)
        && claim.estimated_amount.amount() > config.supervisor_authority_limit;

    let requires_human_review = decisions.iter().any(|d| d.priority == Priority::Critical)
        || decisions
            .iter()
            .any(|d| d.action == EscalationAction::ReferLegal)
        || decisions
            .iter()
            .any(|d| d.action == EscalationAction::ReferSupervisor && d.priority >= Priority::High)
        || claim.in_litigation
        || approved_above_authority;

    EscalationOutcome {
        decisions,
        overall_recommendation,
        requires_human_review,
    }
}
