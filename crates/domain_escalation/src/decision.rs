//! Escalation decisions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::DecisionId;

use crate::trigger::TriggerType;

/// Routing action for one trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscalationAction {
    Approve,
    Reject,
    Investigate,
    ReferSupervisor,
    ReferLegal,
}

/// Decision priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// Role the decision is assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssigneeRole {
    ClaimsAdjuster,
    SeniorAdjuster,
    ClaimsSupervisor,
    ClaimsManager,
    SiuInvestigator,
    ComplianceOfficer,
    BodilyInjurySpecialist,
    CoverageCounsel,
}

impl fmt::Display for AssigneeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssigneeRole::ClaimsAdjuster => "CLAIMS_ADJUSTER",
            AssigneeRole::SeniorAdjuster => "SENIOR_ADJUSTER",
            AssigneeRole::ClaimsSupervisor => "CLAIMS_SUPERVISOR",
            AssigneeRole::ClaimsManager => "CLAIMS_MANAGER",
            AssigneeRole::SiuInvestigator => "SIU_INVESTIGATOR",
            AssigneeRole::ComplianceOfficer => "COMPLIANCE_OFFICER",
            AssigneeRole::BodilyInjurySpecialist => "BODILY_INJURY_SPECIALIST",
            AssigneeRole::CoverageCounsel => "COVERAGE_COUNSEL",
        };
        write!(f, "{}", name)
    }
}

/// One routing decision for one trigger
///
/// Decisions are never merged; each trigger gets its own, and the handler
/// aggregates them into an overall recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationDecision {
    pub id: DecisionId,
    pub trigger_type: TriggerType,
    pub priority: Priority,
    pub action: EscalationAction,
    pub assignee: AssigneeRole,
    pub reasoning: String,
    /// Calendar-day deadline from the snapshot's as-of instant
    pub deadline: DateTime<Utc>,
    pub required_documents: Vec<String>,
    pub next_steps: Vec<String>,
}

impl EscalationDecision {
    pub fn new(
        trigger_type: TriggerType,
        priority: Priority,
        action: EscalationAction,
        assignee: AssigneeRole,
        reasoning: impl Into<String>,
        deadline: DateTime<Utc>,
    ) -> Self {
        Self {
            id: DecisionId::new_v7(),
            trigger_type,
            priority,
            action,
            assignee,
            reasoning: reasoning.into(),
            deadline,
            required_documents: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    pub fn with_documents(mut self, documents: &[&str]) -> Self {
        self.required_documents = documents.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn with_next_steps(mut self, steps: &[&str]) -> Self {
        self.next_steps = steps.iter().map(|s| s.to_string()).collect();
        self
    }
}
