//! Medical bill snapshot

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{MedicalBillId, Money, ParticipantId};

/// Broad procedure category, used by the unbundling heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProcedureCategory {
    Evaluation,
    Laboratory,
    Imaging,
    Procedure,
    Therapy,
    Other,
}

/// How thoroughly the billed service was documented
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocumentationLevel {
    Minimal,
    Moderate,
    Extensive,
}

/// Read-only medical bill view for one decision cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalBillSnapshot {
    /// Unique identifier
    pub id: MedicalBillId,
    /// Treated participant
    pub participant_id: ParticipantId,
    /// Billing provider name
    pub provider_name: String,
    /// Provider's state of practice (two-letter code)
    pub provider_state: String,
    /// Date of service
    pub service_date: NaiveDate,
    /// Procedure code as billed (CPT)
    pub procedure_code: String,
    /// Procedure category
    pub category: ProcedureCategory,
    /// Billed description
    pub description: String,
    /// Billed amount
    pub amount: Money,
    /// Documentation level accompanying the bill
    pub documentation: DocumentationLevel,
}

impl MedicalBillSnapshot {
    /// Key identifying exact-duplicate bills: same date, amount, and code
    pub fn duplicate_key(&self) -> (NaiveDate, String, String) {
        (
            self.service_date,
            self.amount.amount().to_string(),
            self.procedure_code.clone(),
        )
    }
}
