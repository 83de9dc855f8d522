//! Decision Engine
//!
//! The orchestrator-facing facade over the claim decision components. It
//! exposes three synchronous entry points (coverage evaluation, risk scoring,
//! escalation decisions) plus a full decision-cycle runner that fans out to
//! the scorers, joins their outputs, derives escalation triggers, and emits
//! one audit record per scoring run and per requested status transition.
//!
//! The engine performs no I/O: fetching snapshots and persisting artifacts
//! belong to the calling orchestrator. Components are pure functions over an
//! immutable snapshot, so concurrent invocation across claims needs no
//! coordination.

pub mod engine;
pub mod audit;
pub mod config;
pub mod telemetry;
pub mod error;

pub use engine::{DecisionCycle, Engine, StatusTransitionRequest};
pub use audit::{AuditRecord, AuditSink, NullSink, RecordingSink};
pub use config::{EngineConfig, EngineConfigError};
pub use telemetry::init_telemetry;
pub use error::EngineError;
