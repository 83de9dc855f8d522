//! Claim lifecycle state machine
//!
//! Owns claim status, enforces the legal transition table, stamps milestone
//! timestamps, and derives statutory deadline obligations from jurisdiction
//! rules. Deadlines never block a transition: claims can legally remain open
//! past due, but overdue status must be queryable for compliance escalation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{calendar_deadline, ClaimId};

use crate::error::LifecycleError;
use crate::jurisdiction::JurisdictionRule;

/// Claim lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// FNOL received, claim being set up
    Intake,
    /// Under active investigation
    Investigation,
    /// Damages and coverage being evaluated
    Evaluation,
    /// Awaiting approval authority
    PendingApproval,
    /// Approved for payment
    Approved,
    /// Payment being issued
    PaymentProcessing,
    /// Paid and closed
    Closed,
    /// Denied
    Denied,
    /// Suspended pending SIU review
    Suspended,
}

impl ClaimStatus {
    /// Closed and Denied accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Closed | ClaimStatus::Denied)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClaimStatus::Intake => "INTAKE",
            ClaimStatus::Investigation => "INVESTIGATION",
            ClaimStatus::Evaluation => "EVALUATION",
            ClaimStatus::PendingApproval => "PENDING_APPROVAL",
            ClaimStatus::Approved => "APPROVED",
            ClaimStatus::PaymentProcessing => "PAYMENT_PROCESSING",
            ClaimStatus::Closed => "CLOSED",
            ClaimStatus::Denied => "DENIED",
            ClaimStatus::Suspended => "SUSPENDED",
        };
        write!(f, "{}", name)
    }
}

/// One applied transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from: ClaimStatus,
    pub to: ClaimStatus,
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
}

/// Statutory obligation kinds tracked per claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObligationKind {
    Acknowledgment,
    InvestigationCompletion,
    Payment,
}

/// A single deadline obligation, derived on demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obligation {
    pub kind: ObligationKind,
    pub due: DateTime<Utc>,
    pub satisfied_at: Option<DateTime<Utc>>,
}

impl Obligation {
    /// Overdue means unsatisfied and past due at the given instant
    pub fn is_overdue(&self, as_of: DateTime<Utc>) -> bool {
        self.satisfied_at.is_none() && as_of > self.due
    }

    /// Whole days until due (negative once past due)
    pub fn days_remaining(&self, as_of: DateTime<Utc>) -> i64 {
        (self.due - as_of).num_days()
    }
}

/// The lifecycle state of one claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimLifecycle {
    pub claim_id: ClaimId,
    pub status: ClaimStatus,
    /// When the claim was reported
    pub report_date: DateTime<Utc>,
    /// Stamped once on first entry to Investigation
    pub acknowledged_at: Option<DateTime<Utc>>,
    /// Stamped on the Investigation -> Evaluation transition
    pub investigation_completed_at: Option<DateTime<Utc>>,
    /// Stamped on entry to Approved
    pub settled_at: Option<DateTime<Utc>>,
    /// Stamped on entry to Closed
    pub closed_at: Option<DateTime<Utc>>,
    /// Every applied transition, oldest first
    pub transitions: Vec<TransitionRecord>,
}

impl ClaimLifecycle {
    /// Opens a new lifecycle in Intake
    pub fn open(claim_id: ClaimId, report_date: DateTime<Utc>) -> Self {
        Self {
            claim_id,
            status: ClaimStatus::Intake,
            report_date,
            acknowledged_at: None,
            investigation_completed_at: None,
            settled_at: None,
            closed_at: None,
            transitions: Vec::new(),
        }
    }

    /// Applies a transition, stamping milestone timestamps
    ///
    /// Acknowledgment stamps only on the first entry to Investigation; a
    /// claim returning from Suspended keeps its original acknowledgment.
    pub fn transition(
        &mut self,
        to: ClaimStatus,
        reason: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Result<&TransitionRecord, LifecycleError> {
        let from = self.status;

        if from.is_terminal() {
            return Err(LifecycleError::TerminalStatus(from.to_string()));
        }
        if !Self::is_legal(from, to) {
            return Err(LifecycleError::InvalidTransition {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        match (from, to) {
            (_, ClaimStatus::Investigation) => {
                if self.acknowledged_at.is_none() {
                    self.acknowledged_at = Some(at);
                }
            }
            (ClaimStatus::Investigation, ClaimStatus::Evaluation) => {
                self.investigation_completed_at = Some(at);
            }
            (_, ClaimStatus::Approved) => {
                self.settled_at = Some(at);
            }
            (_, ClaimStatus::Closed) => {
                self.closed_at = Some(at);
            }
            _ => {}
        }

        self.status = to;
        let reason = reason.into();
        tracing::info!(
            claim_id = %self.claim_id,
            %from,
            %to,
            %reason,
            "claim status transition"
        );
        self.transitions.push(TransitionRecord {
            from,
            to,
            reason,
            occurred_at: at,
        });
        Ok(self.transitions.last().expect("just pushed"))
    }

    /// The legal transition table
    fn is_legal(from: ClaimStatus, to: ClaimStatus) -> bool {
        use ClaimStatus::*;
        match (from, to) {
            (Intake, Investigation) => true,
            (Investigation, Evaluation) => true,
            (Evaluation, PendingApproval) => true,
            (PendingApproval, Approved) => true,
            (Approved, PaymentProcessing) => true,
            (PaymentProcessing, Closed) => true,
            (Suspended, Investigation) => true,
            // Side branches: reachable from any non-terminal state
            (s, Denied) => !s.is_terminal(),
            (s, Suspended) => !s.is_terminal() && s != Suspended,
            _ => false,
        }
    }

    /// Derives the deadline obligations under the given jurisdiction rule
    ///
    /// The payment obligation exists only once the claim has been approved.
    pub fn obligations(&self, rule: &JurisdictionRule) -> Vec<Obligation> {
        let mut obligations = vec![
            Obligation {
                kind: ObligationKind::Acknowledgment,
                due: calendar_deadline(self.report_date, rule.acknowledgment_days),
                satisfied_at: self.acknowledged_at,
            },
            Obligation {
                kind: ObligationKind::InvestigationCompletion,
                due: calendar_deadline(self.report_date, rule.investigation_days),
                satisfied_at: self.investigation_completed_at,
            },
        ];

        if let Some(settled) = self.settled_at {
            obligations.push(Obligation {
                kind: ObligationKind::Payment,
                due: calendar_deadline(settled, rule.payment_days),
                satisfied_at: self.closed_at,
            });
        }

        obligations
    }

    /// Obligations that are overdue at the given instant
    pub fn overdue_obligations(
        &self,
        rule: &JurisdictionRule,
        as_of: DateTime<Utc>,
    ) -> Vec<Obligation> {
        self.obligations(rule)
            .into_iter()
            .filter(|o| o.is_overdue(as_of))
            .collect()
    }

    /// Whether any statutory deadline is overdue at the given instant
    pub fn is_overdue(&self, rule: &JurisdictionRule, as_of: DateTime<Utc>) -> bool {
        !self.overdue_obligations(rule, as_of).is_empty()
    }
}
