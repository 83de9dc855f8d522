//! Claim Domain
//!
//! This crate defines the immutable claim snapshot assembled once per decision
//! cycle, the jurisdiction reference data the engine reads, and the claim
//! lifecycle state machine with its statutory deadline obligations.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Intake -> Investigation -> Evaluation -> PendingApproval -> Approved
//!        -> PaymentProcessing -> Closed
//! ```
//!
//! Denied and Suspended are reachable from any non-terminal state; Suspended
//! claims return to Investigation on SIU clearance.

pub mod snapshot;
pub mod policy;
pub mod vehicle;
pub mod participant;
pub mod document;
pub mod medical;
pub mod jurisdiction;
pub mod lifecycle;
pub mod error;

pub use snapshot::{ClaimSnapshot, LossType, VehicleUsage, DriverAtLoss};
pub use policy::{PolicySnapshot, PolicyStatus, PolicyCoverage, CoverageType, CoverageStatus};
pub use vehicle::{VehicleSnapshot, TitleBrand};
pub use participant::{ParticipantSnapshot, ParticipantRole};
pub use document::{DocumentSnapshot, DocumentKind, DocumentAnalysis};
pub use medical::{MedicalBillSnapshot, ProcedureCategory, DocumentationLevel};
pub use jurisdiction::{JurisdictionRule, JurisdictionTable, ResolvedRule};
pub use lifecycle::{ClaimLifecycle, ClaimStatus, TransitionRecord, Obligation, ObligationKind};
pub use error::{SnapshotError, LifecycleError};
