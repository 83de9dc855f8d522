//! Audit event emission
//!
//! Every scoring run and every requested status transition emits one
//! structured record to the injected sink. Durability and the query surface
//! belong to the external audit collaborator; the engine only emits.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_kernel::AuditEventId;

/// One structured audit record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: AuditEventId,
    /// What happened, e.g. "risk_scored", "status_transition_requested"
    pub action: String,
    /// Entity kind, e.g. "claim"
    pub entity_type: String,
    /// Entity identifier
    pub entity_id: String,
    /// State before the action, when meaningful
    pub before: Option<Value>,
    /// State after the action
    pub after: Option<Value>,
    /// Acting principal
    pub actor: String,
    pub occurred_at: DateTime<Utc>,
}

impl AuditRecord {
    pub fn new(
        action: impl Into<String>,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AuditEventId::new_v7(),
            action: action.into(),
            entity_type: entity_type.into(),
            entity_id: entity_id.into(),
            before: None,
            after: None,
            actor: "decision-engine".to_string(),
            occurred_at,
        }
    }

    pub fn with_before(mut self, before: Value) -> Self {
        self.before = Some(before);
        self
    }

    pub fn with_after(mut self, after: Value) -> Self {
        self.after = Some(after);
        self
    }
}

/// Port for the external audit collaborator
pub trait AuditSink: Send + Sync {
    fn record(&self, record: AuditRecord);
}

/// Sink that drops every record, for callers that handle auditing elsewhere
#[derive(Debug, Default)]
pub struct NullSink;

impl AuditSink for NullSink {
    fn record(&self, _record: AuditRecord) {}
}

/// In-memory sink for tests and local inspection
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().expect("audit sink poisoned").clone()
    }
}

impl AuditSink for RecordingSink {
    fn record(&self, record: AuditRecord) {
        self.records.lock().expect("audit sink poisoned").push(record);
    }
}
