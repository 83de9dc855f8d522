//! Claim snapshot
//!
//! The snapshot is the single input to every scoring component. It is
//! assembled once per decision cycle by the orchestrator and never mutated
//! mid-computation, which removes scoring-order bugs by construction. All
//! day-count arithmetic inside the engine uses the embedded `as_of` instant
//! so that re-running a cycle over the same snapshot is reproducible.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{days_between, ClaimId, Money};

use crate::document::{DocumentKind, DocumentSnapshot};
use crate::error::SnapshotError;
use crate::lifecycle::ClaimStatus;
use crate::medical::MedicalBillSnapshot;
use crate::participant::ParticipantSnapshot;
use crate::policy::PolicySnapshot;
use crate::vehicle::VehicleSnapshot;

/// Type of loss reported at FNOL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossType {
    Collision,
    Theft,
    Vandalism,
    Weather,
    Flood,
    Fire,
    HitAndRun,
    GlassOnly,
    AnimalCollision,
    Liability,
}

/// How the vehicle was being used at the time of loss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleUsage {
    Personal,
    Commute,
    Commercial,
    Rideshare,
    Racing,
}

/// The driver at the time of loss, when one was involved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverAtLoss {
    /// Driver name as reported
    pub name: String,
    /// Driver held a valid license
    pub licensed: bool,
    /// Driver is listed as excluded on the policy
    pub listed_excluded: bool,
    /// Driver was cited for driving under the influence
    pub dui_involved: bool,
}

/// Immutable, read-only claim view assembled per decision cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSnapshot {
    /// Unique identifier
    pub id: ClaimId,
    /// Claim number
    pub claim_number: String,
    /// Linked policy
    pub policy: PolicySnapshot,
    /// Two-letter state code of the loss jurisdiction
    pub jurisdiction: String,
    /// Current lifecycle status
    pub status: ClaimStatus,
    /// Date of loss
    pub loss_date: NaiveDate,
    /// Type of loss
    pub loss_type: LossType,
    /// Loss location as reported
    pub loss_location: String,
    /// Loss narrative as reported
    pub loss_description: String,
    /// Vehicle damage narrative as reported
    pub damage_description: String,
    /// Canonical estimated claim amount
    pub estimated_amount: Money,
    /// When the claim was reported (FNOL)
    pub report_date: DateTime<Utc>,
    /// Evaluation instant this snapshot was assembled at
    pub as_of: DateTime<Utc>,
    /// Vehicle usage at loss
    pub usage_at_loss: VehicleUsage,
    /// Driver at loss, when a driver was involved
    pub driver: Option<DriverAtLoss>,
    /// Insured vehicle, when on file
    pub vehicle: Option<VehicleSnapshot>,
    /// Claim participants
    pub participants: Vec<ParticipantSnapshot>,
    /// Uploaded documents with any upstream analysis
    pub documents: Vec<DocumentSnapshot>,
    /// Medical bills submitted against the claim
    pub medical_bills: Vec<MedicalBillSnapshot>,
    /// The glass damage is repairable without replacement
    pub glass_repair_only: bool,
    /// Subrogation recovery against a third party has completed
    pub subrogation_recovered: bool,
    /// The claim is in active litigation
    pub in_litigation: bool,
}

impl ClaimSnapshot {
    /// Structural validation, run once at the start of a decision cycle
    ///
    /// Failures here are fatal to the run. Missing optional data (no vehicle,
    /// no bills) is not an error: absent signal sources contribute zero.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.claim_number.trim().is_empty() {
            return Err(SnapshotError::EmptyClaimNumber);
        }
        if self.estimated_amount.is_negative() {
            return Err(SnapshotError::NegativeEstimatedAmount);
        }
        if self.loss_date > self.report_date.date_naive() {
            return Err(SnapshotError::LossAfterReport {
                loss_date: self.loss_date.to_string(),
                report_date: self.report_date.to_string(),
            });
        }
        if self.loss_date > self.as_of.date_naive() {
            return Err(SnapshotError::LossAfterAsOf {
                loss_date: self.loss_date.to_string(),
                as_of: self.as_of.to_string(),
            });
        }
        if self.jurisdiction.len() != 2
            || !self.jurisdiction.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(SnapshotError::InvalidJurisdiction(self.jurisdiction.clone()));
        }
        for bill in &self.medical_bills {
            if !self.participants.iter().any(|p| p.id == bill.participant_id) {
                return Err(SnapshotError::BillForUnknownParticipant {
                    bill_id: bill.id.to_string(),
                    participant_id: bill.participant_id.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Days from policy inception to the loss
    pub fn days_since_inception(&self) -> i64 {
        days_between(self.policy.period.start, self.loss_date)
    }

    /// Days from the loss to the report
    pub fn days_to_report(&self) -> i64 {
        days_between(self.loss_date, self.report_date.date_naive())
    }

    /// Whether any participant reported an injury
    pub fn has_injured_participant(&self) -> bool {
        self.participants.iter().any(|p| p.has_injury())
    }

    /// Whether a document of the given kind is on file
    pub fn has_document(&self, kind: DocumentKind) -> bool {
        self.documents.iter().any(|d| d.kind == kind)
    }
}
