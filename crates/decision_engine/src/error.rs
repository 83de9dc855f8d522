//! Engine errors

use thiserror::Error;

use domain_claim::SnapshotError;

/// Runtime errors surfaced to the orchestrator
///
/// A malformed snapshot fails the whole run: it must never be conflated with
/// a low-risk score. Missing optional data is not an error anywhere in the
/// engine; absent signal sources contribute zero.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid claim snapshot: {0}")]
    InvalidSnapshot(#[from] SnapshotError),
}
