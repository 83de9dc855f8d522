//! Claim domain errors

use thiserror::Error;

/// Structural problems with a claim snapshot
///
/// These are fatal to a decision cycle: a malformed snapshot must be surfaced
/// to the caller, never silently scored as zero-risk.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Claim number is empty")]
    EmptyClaimNumber,

    #[error("Estimated amount is negative")]
    NegativeEstimatedAmount,

    #[error("Loss date {loss_date} is after the report date {report_date}")]
    LossAfterReport {
        loss_date: String,
        report_date: String,
    },

    #[error("Loss date {loss_date} is after the as-of instant {as_of}")]
    LossAfterAsOf { loss_date: String, as_of: String },

    #[error("Medical bill {bill_id} references unknown participant {participant_id}")]
    BillForUnknownParticipant {
        bill_id: String,
        participant_id: String,
    },

    #[error("Jurisdiction code '{0}' is not a two-letter state code")]
    InvalidJurisdiction(String),
}

/// Errors from the claim lifecycle state machine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Claim is in terminal status {0}")]
    TerminalStatus(String),
}
