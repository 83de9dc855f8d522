//! Document snapshot
//!
//! Documents arrive from the upload pipeline with optional AI/OCR analysis
//! already attached. The engine treats that analysis as an opaque scored
//! input; it never performs document analysis itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::DocumentId;

/// Kind of claim document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    PoliceReport,
    RepairEstimate,
    Photos,
    MedicalRecord,
    ProofOfLoss,
    Correspondence,
    Other,
}

/// Upstream AI/OCR analysis attached to a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    /// Free-text summary produced upstream
    pub summary: String,
    /// Damage severity score 0-100, when the analyzer produced one
    pub damage_severity: Option<u32>,
}

/// Read-only document view for one decision cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// Unique identifier
    pub id: DocumentId,
    /// Document kind
    pub kind: DocumentKind,
    /// Original file name
    pub file_name: String,
    /// Upload timestamp
    pub uploaded_at: DateTime<Utc>,
    /// Upstream analysis, when available
    pub analysis: Option<DocumentAnalysis>,
}

impl DocumentSnapshot {
    pub fn new(kind: DocumentKind, file_name: impl Into<String>, uploaded_at: DateTime<Utc>) -> Self {
        Self {
            id: DocumentId::new_v7(),
            kind,
            file_name: file_name.into(),
            uploaded_at,
            analysis: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_creation() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        let doc = DocumentSnapshot::new(DocumentKind::PoliceReport, "report.pdf", at);

        assert_eq!(doc.kind, DocumentKind::PoliceReport);
        assert!(doc.analysis.is_none());
    }
}
