//! The decision engine facade

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use domain_claim::{ClaimSnapshot, ClaimStatus, JurisdictionTable};
use domain_coverage::{analyze_coverage, CoverageResult};
use domain_escalation::{
    decide_escalations, EscalationOutcome, EscalationTrigger, OverallRecommendation,
};
use domain_fraud::{compose_risk, score_patterns, screen_medical_billing, RiskAssessment, RiskScore};

use crate::audit::{AuditRecord, AuditSink};
use crate::config::{EngineConfig, EngineConfigError};
use crate::error::EngineError;

/// A status transition the engine asks the orchestrator to apply
///
/// The orchestrator persists the transition transactionally alongside the
/// decision artifacts; the engine itself never mutates claim state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTransitionRequest {
    pub to: ClaimStatus,
    pub reason: String,
    /// Routing tag, e.g. "SIU_ESCALATION" for suspensions
    pub routing: Option<String>,
}

/// Everything produced by one decision cycle over one snapshot
#[derive(Debug, Clone, Serialize)]
pub struct DecisionCycle {
    pub coverage: CoverageResult,
    pub risk: RiskAssessment,
    pub escalation: EscalationOutcome,
    pub requested_transition: Option<StatusTransitionRequest>,
    /// Degradation warnings from this cycle (missing reference data)
    pub warnings: Vec<String>,
}

/// The claim decision engine
///
/// Holds validated configuration and jurisdiction reference data. All methods
/// are synchronous and pure over the snapshot; the only side effect is audit
/// emission to the injected sink.
pub struct Engine {
    config: EngineConfig,
    jurisdictions: JurisdictionTable,
    audit: Arc<dyn AuditSink>,
}

impl Engine {
    /// Builds an engine, validating configuration up front
    pub fn new(
        config: EngineConfig,
        jurisdictions: JurisdictionTable,
        audit: Arc<dyn AuditSink>,
    ) -> Result<Self, EngineConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            jurisdictions,
            audit,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluates which coverages respond to the claim
    pub fn evaluate_coverage(&self, claim: &ClaimSnapshot) -> Result<CoverageResult, EngineError> {
        claim.validate()?;
        let result = analyze_coverage(claim);
        self.emit_coverage_audit(claim, &result);
        Ok(result)
    }

    /// Scores fraud risk, fanning out to the pattern and medical scorers
    pub fn score_risk(&self, claim: &ClaimSnapshot) -> Result<RiskAssessment, EngineError> {
        claim.validate()?;
        let assessment = self.assess_risk(claim);
        self.emit_risk_audit(claim, &assessment);
        Ok(assessment)
    }

    /// Emits per-trigger routing decisions and the overall recommendation
    pub fn decide_escalations(
        &self,
        claim: &ClaimSnapshot,
        risk: &RiskScore,
        coverage: &CoverageResult,
        triggers: &[EscalationTrigger],
    ) -> Result<EscalationOutcome, EngineError> {
        claim.validate()?;
        let outcome = decide_escalations(claim, risk, coverage, triggers, &self.config.escalation);
        self.emit_escalation_audit(claim, &outcome);
        Ok(outcome)
    }

    /// Runs the full decision cycle: fan-out, join, trigger derivation,
    /// escalation, and the requested status transition
    ///
    /// `extra_triggers` carries ad-hoc triggers raised by the orchestrator
    /// (e.g. a compliance flag); derived triggers are appended to them.
    pub fn run_decision_cycle(
        &self,
        claim: &ClaimSnapshot,
        extra_triggers: &[EscalationTrigger],
    ) -> Result<DecisionCycle, EngineError> {
        claim.validate()?;

        tracing::info!(
            claim_id = %claim.id,
            claim_number = %claim.claim_number,
            "starting decision cycle"
        );

        // Coverage and both fraud scorers are independent over the snapshot;
        // the composer and escalation handler join their outputs.
        let coverage = analyze_coverage(claim);
        let assessment = self.assess_risk(claim);

        let mut warnings = coverage.warnings.clone();
        let mut triggers = extra_triggers.to_vec();
        triggers.extend(self.derive_triggers(claim, &assessment, &coverage, &mut warnings));

        let escalation =
            decide_escalations(claim, &assessment.score, &coverage, &triggers, &self.config.escalation);

        let requested_transition = self.requested_transition(claim, &assessment, &escalation);

        self.emit_coverage_audit(claim, &coverage);
        self.emit_risk_audit(claim, &assessment);
        self.emit_escalation_audit(claim, &escalation);
        if let Some(request) = &requested_transition {
            self.audit.record(
                AuditRecord::new("status_transition_requested", "claim", claim.id.to_string(), claim.as_of)
                    .with_before(json!(claim.status))
                    .with_after(json!({ "to": request.to, "routing": request.routing })),
            );
        }

        tracing::info!(
            claim_id = %claim.id,
            score = assessment.score.score,
            tier = %assessment.score.tier,
            recommendation = %escalation.overall_recommendation,
            human_review = escalation.requires_human_review,
            "decision cycle complete"
        );

        Ok(DecisionCycle {
            coverage,
            risk: assessment,
            escalation,
            requested_transition,
            warnings,
        })
    }

    fn assess_risk(&self, claim: &ClaimSnapshot) -> RiskAssessment {
        let pattern = score_patterns(claim, &self.config.fraud);
        let medical = screen_medical_billing(claim, &self.config.fraud);
        compose_risk(pattern, medical, &self.config.fraud)
    }

    /// Derives escalation triggers from the cycle's own findings
    fn derive_triggers(
        &self,
        claim: &ClaimSnapshot,
        assessment: &RiskAssessment,
        coverage: &CoverageResult,
        warnings: &mut Vec<String>,
    ) -> Vec<EscalationTrigger> {
        let mut triggers = Vec::new();

        if let Some(referral) = &assessment.siu_referral {
            triggers.push(EscalationTrigger::fraud_suspected(referral.reason.clone()));
        }

        if claim.estimated_amount.amount() > self.config.high_value_threshold {
            triggers.push(EscalationTrigger::high_value(format!(
                "Estimated amount {} exceeds the high-value threshold",
                claim.estimated_amount
            )));
        }

        if let Some(acv) = claim.vehicle.as_ref().and_then(|v| v.actual_cash_value) {
            let resolved = self
                .jurisdictions
                .resolve(&claim.jurisdiction, claim.as_of.date_naive());
            if resolved.defaulted {
                warnings.push(format!(
                    "No jurisdiction rule on file for '{}'; conservative defaults applied",
                    claim.jurisdiction
                ));
                tracing::warn!(
                    claim_id = %claim.id,
                    jurisdiction = %claim.jurisdiction,
                    "jurisdiction rule missing; using conservative defaults"
                );
            }
            let threshold = resolved.rule.total_loss_threshold.apply(&acv);
            if claim.estimated_amount >= threshold {
                triggers.push(EscalationTrigger::total_loss(format!(
                    "Estimated repair cost {} meets the {} total-loss threshold against ACV {}",
                    claim.estimated_amount, resolved.rule.total_loss_threshold, acv
                )));
            }
        }

        if claim.has_injured_participant() {
            triggers.push(EscalationTrigger::injury_claim(
                "One or more participants reported an injury",
            ));
        }

        if coverage.has_dispute() {
            let codes: Vec<&str> = coverage
                .applied_exclusions()
                .iter()
                .map(|e| e.code.code())
                .collect();
            triggers.push(EscalationTrigger::coverage_dispute(format!(
                "Exclusions {} apply against otherwise-applicable coverage",
                codes.join(", ")
            )));
        }

        triggers
    }

    /// Maps the cycle outcome to a requested lifecycle transition
    ///
    /// An SIU referral takes precedence over the recommendation mapping.
    /// No request is produced when the claim is terminal or already in the
    /// target status.
    fn requested_transition(
        &self,
        claim: &ClaimSnapshot,
        assessment: &RiskAssessment,
        escalation: &EscalationOutcome,
    ) -> Option<StatusTransitionRequest> {
        if claim.status.is_terminal() {
            return None;
        }

        let request = if let Some(referral) = &assessment.siu_referral {
            StatusTransitionRequest {
                to: referral.requested_status,
                reason: referral.reason.clone(),
                routing: Some("SIU_ESCALATION".to_string()),
            }
        } else {
            let to = match escalation.overall_recommendation {
                OverallRecommendation::Deny => ClaimStatus::Denied,
                OverallRecommendation::Investigate => ClaimStatus::Investigation,
                OverallRecommendation::Refer => ClaimStatus::PendingApproval,
                OverallRecommendation::Proceed => ClaimStatus::Evaluation,
            };
            StatusTransitionRequest {
                to,
                reason: format!(
                    "Escalation recommendation {}",
                    escalation.overall_recommendation
                ),
                routing: None,
            }
        };

        if request.to == claim.status {
            return None;
        }
        Some(request)
    }

    fn emit_coverage_audit(&self, claim: &ClaimSnapshot, result: &CoverageResult) {
        self.audit.record(
            AuditRecord::new("coverage_evaluated", "claim", claim.id.to_string(), claim.as_of)
                .with_after(json!({
                    "coverage_applies": result.coverage_applies(),
                    "verdicts": result.verdicts.len(),
                    "exclusions_applied": result.applied_exclusions().len(),
                    "recommendations": result.recommendations,
                })),
        );
    }

    fn emit_risk_audit(&self, claim: &ClaimSnapshot, assessment: &RiskAssessment) {
        self.audit.record(
            AuditRecord::new("risk_scored", "claim", claim.id.to_string(), claim.as_of)
                .with_after(json!({
                    "score": assessment.score.score,
                    "tier": assessment.score.tier,
                    "indicators": assessment.score.indicators.len(),
                    "siu_referral": assessment.siu_referral.is_some(),
                    "config_version": self.config.fraud.version,
                })),
        );
    }

    fn emit_escalation_audit(&self, claim: &ClaimSnapshot, outcome: &EscalationOutcome) {
        self.audit.record(
            AuditRecord::new("escalations_decided", "claim", claim.id.to_string(), claim.as_of)
                .with_after(json!({
                    "decisions": outcome.decisions.len(),
                    "recommendation": outcome.overall_recommendation,
                    "requires_human_review": outcome.requires_human_review,
                })),
        );
    }
}
